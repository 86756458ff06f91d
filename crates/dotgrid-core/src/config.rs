use glam::Vec4;

/// Engine tunables, fixed for the lifetime of a built grid.
///
/// Every field is an independent knob; no invariant couples them. Sizes
/// and radii are in container units, durations in time units (the host
/// decides what a time unit is, typically seconds).
#[derive(Clone, Copy, Debug)]
pub struct GridConfig {
    /// Rendered dot diameter.
    pub dot_size: f32,
    /// Lattice spacing between dot centers.
    pub gap: f32,
    /// RGBA color of a dot at rest.
    pub base_color: Vec4,
    /// RGBA color a displaced dot tends toward.
    pub active_color: Vec4,
    /// Radius of the continuous pointer proximity field.
    pub proximity: f32,
    /// Per-event pointer speed above which the inertia path engages.
    pub speed_trigger: f32,
    /// Radius of the one-shot click shock.
    pub shock_radius: f32,
    /// Strength multiplier for the click shock.
    pub shock_strength: f32,
    /// Normalization constant for the inertia factor (speed / max_speed).
    pub max_speed: f32,
    /// Duration of the relaxation back to rest.
    pub return_duration: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dot_size: 4.0,
            gap: 20.0,
            base_color: Vec4::new(1.0, 1.0, 1.0, 0.3),
            active_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            proximity: 80.0,
            speed_trigger: 100.0,
            shock_radius: 150.0,
            shock_strength: 8.0,
            max_speed: 5000.0,
            return_duration: 1.5,
        }
    }
}

impl GridConfig {
    /// Quiet backdrop: small field, soft shock, slow settle.
    pub const CALM: Self = Self {
        dot_size: 3.0,
        gap: 24.0,
        base_color: Vec4::new(1.0, 1.0, 1.0, 0.2),
        active_color: Vec4::new(1.0, 1.0, 1.0, 0.7),
        proximity: 60.0,
        speed_trigger: 160.0,
        shock_radius: 100.0,
        shock_strength: 4.0,
        max_speed: 5000.0,
        return_duration: 2.2,
    };

    /// Reactive foreground effect: wide field, hard shock, quick settle.
    pub const PUNCHY: Self = Self {
        dot_size: 5.0,
        gap: 16.0,
        base_color: Vec4::new(1.0, 1.0, 1.0, 0.35),
        active_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
        proximity: 110.0,
        speed_trigger: 70.0,
        shock_radius: 200.0,
        shock_strength: 12.0,
        max_speed: 4000.0,
        return_duration: 0.9,
    };
}
