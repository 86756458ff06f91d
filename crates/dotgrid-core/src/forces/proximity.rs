use glam::Vec2;

use crate::pointer::PointerState;

/// Displacement in container units at full proximity force.
const PUSH_SCALE: f32 = 15.0;
/// Multiplier on the pointer delta for the inertia overshoot target.
const INERTIA_SCALE: f32 = 2.0;

/// Tunables for the continuous proximity field.
pub struct ProximityParams {
    /// Field radius; dots at or beyond it are untouched.
    pub radius: f32,
    /// Per-event pointer speed that engages the inertia path.
    pub speed_trigger: f32,
    /// Normalization constant for the inertia factor.
    pub max_speed: f32,
}

/// Result of the proximity field acting on one particle.
pub struct ProximityPush {
    /// Falloff force in (0, 1]: 1 under the pointer, ->0 at the radius.
    pub force: f32,
    /// The particle's new current position after the push.
    pub displaced: Vec2,
    /// Overshoot target for the inertia extension; `Some` only when the
    /// pointer moved faster than the trigger.
    pub inertia: Option<Vec2>,
}

/// Compute the proximity push for a single particle.
///
/// Distance is measured against the particle's *current* position, so a
/// pointer lingering in the field keeps herding the same dot outward.
/// Returns `None` when the particle sits at or beyond the field radius.
///
/// The push direction is the away-angle `atan2(p.y - m.y, p.x - m.x)`.
/// At zero distance that is `atan2(0, 0)`, which IEEE defines as 0, so a
/// dot exactly under the pointer is pushed along +X instead of going NaN.
pub fn compute_proximity_push(
    pos: Vec2,
    pointer: &PointerState,
    params: &ProximityParams,
) -> Option<ProximityPush> {
    let distance = pointer.position.distance(pos);
    if distance >= params.radius {
        return None;
    }

    let force = (params.radius - distance) / params.radius;
    let angle = (pos.y - pointer.position.y).atan2(pos.x - pointer.position.x);
    let displaced = pos + Vec2::new(angle.cos(), angle.sin()) * (force * PUSH_SCALE);

    let speed = pointer.speed();
    let inertia = if speed > params.speed_trigger {
        let factor = (speed / params.max_speed).min(1.0);
        Some(displaced + pointer.delta() * (factor * INERTIA_SCALE))
    } else {
        None
    };

    Some(ProximityPush {
        force,
        displaced,
        inertia,
    })
}
