use glam::Vec2;

/// Pointer tracking for a mounted grid.
///
/// A single instance lives on the engine. Only pointer-move events
/// update it; clicks read it but never mutate it.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    /// Current position, relative to the container's top-left.
    pub position: Vec2,
    /// Position at the previous move event.
    pub previous: Vec2,
}

impl PointerState {
    /// Record a new container-relative pointer position.
    pub fn advance(&mut self, to: Vec2) {
        self.previous = self.position;
        self.position = to;
    }

    /// Per-event displacement magnitude. Deliberately not
    /// time-normalized: the effect is tuned against event cadence.
    pub fn speed(&self) -> f32 {
        self.position.distance(self.previous)
    }

    /// Displacement vector of the last move event.
    pub fn delta(&self) -> Vec2 {
        self.position - self.previous
    }
}
