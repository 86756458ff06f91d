/// GLSL-style `mix(a, b, t)` for scalars.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Cubic ease-out: fast start, smooth deceleration into the target.
///
/// Port of the `power2.out` curve the original effect was tuned against.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

/// Elastic ease-out with amplitude 1 and period 0.5.
///
/// Overshoots past 1.0 and rings down, used for the shock recoil. Port
/// of `elastic.out(1, 0.5)`. Exact 0/1 at the endpoints so a finished
/// tween lands precisely on its target.
pub fn ease_out_elastic(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    const PERIOD: f32 = 0.5;
    (2.0_f32).powf(-10.0 * t) * ((t - PERIOD / 4.0) * std::f32::consts::TAU / PERIOD).sin() + 1.0
}
