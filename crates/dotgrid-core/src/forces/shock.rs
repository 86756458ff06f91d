use glam::Vec2;

/// Base displacement multiplier for the shock impulse.
const IMPULSE_SCALE: f32 = 8.0;

/// Tunables for the one-shot click shock.
pub struct ShockParams {
    pub radius: f32,
    pub strength: f32,
}

/// Result of a shock impulse acting on one particle.
pub struct ShockImpulse {
    /// Falloff force in (0, 1].
    pub force: f32,
    /// Absolute visual offset from rest, not relative to whatever offset
    /// is currently applied.
    pub offset: Vec2,
}

/// Compute the radial click impulse for a single particle.
///
/// Distance is measured from the *rest* position, so a click lands the
/// same regardless of what the proximity field is doing to the dot.
/// Returns `None` at or beyond the shock radius.
pub fn compute_shock_impulse(
    original: Vec2,
    click: Vec2,
    params: &ShockParams,
) -> Option<ShockImpulse> {
    let distance = click.distance(original);
    if distance >= params.radius {
        return None;
    }

    let force = (params.radius - distance) / params.radius;
    let angle = (original.y - click.y).atan2(original.x - click.x);
    let magnitude = force * params.strength * IMPULSE_SCALE;

    Some(ShockImpulse {
        force,
        offset: Vec2::new(angle.cos(), angle.sin()) * magnitude,
    })
}
