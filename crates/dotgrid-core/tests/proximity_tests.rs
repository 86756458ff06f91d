use dotgrid_core::forces::proximity::{compute_proximity_push, ProximityParams};
use dotgrid_core::pointer::PointerState;
use glam::Vec2;

fn make_params() -> ProximityParams {
    ProximityParams {
        radius: 80.0,
        speed_trigger: 100.0,
        max_speed: 5000.0,
    }
}

/// Pointer resting at a position (zero speed).
fn pointer_at(x: f32, y: f32) -> PointerState {
    PointerState {
        position: Vec2::new(x, y),
        previous: Vec2::new(x, y),
    }
}

/// Pointer that just moved from `from` to `to` in one event.
fn pointer_moved(from: Vec2, to: Vec2) -> PointerState {
    PointerState {
        position: to,
        previous: from,
    }
}

#[test]
fn test_outside_radius_is_untouched() {
    let params = make_params();
    let pointer = pointer_at(0.0, 0.0);

    // Exactly at the radius counts as outside.
    assert!(compute_proximity_push(Vec2::new(80.0, 0.0), &pointer, &params).is_none());
    assert!(compute_proximity_push(Vec2::new(0.0, 120.0), &pointer, &params).is_none());
}

#[test]
fn test_force_monotonically_decreasing_in_distance() {
    let params = make_params();
    let pointer = pointer_at(0.0, 0.0);

    let mut prev_force = f32::INFINITY;
    for d in 0..80 {
        let push = compute_proximity_push(Vec2::new(d as f32, 0.0), &pointer, &params)
            .expect("inside the field");
        assert!(
            push.force < prev_force,
            "force not decreasing at distance {}: {} >= {}",
            d,
            push.force,
            prev_force,
        );
        prev_force = push.force;
    }
}

#[test]
fn test_zero_distance_pushes_along_positive_x() {
    // Pointer exactly on the dot: force 1, atan2(0,0) resolves to angle 0,
    // so the dot moves +15 along X rather than producing NaN.
    let params = make_params();
    let pointer = pointer_at(10.0, 10.0);

    let push = compute_proximity_push(Vec2::new(10.0, 10.0), &pointer, &params)
        .expect("dot under the pointer is inside the field");

    assert!((push.force - 1.0).abs() < 1e-6, "force = {}", push.force);
    assert!(push.displaced.x.is_finite() && push.displaced.y.is_finite());
    assert!((push.displaced.x - 25.0).abs() < 1e-4, "x = {}", push.displaced.x);
    assert!((push.displaced.y - 10.0).abs() < 1e-4, "y = {}", push.displaced.y);
}

#[test]
fn test_push_points_away_from_pointer() {
    let params = make_params();
    let pointer = pointer_at(0.0, 0.0);

    let push = compute_proximity_push(Vec2::new(30.0, 0.0), &pointer, &params).unwrap();
    assert!(
        push.displaced.x > 30.0,
        "dot should move away along +X, got {}",
        push.displaced.x,
    );
    assert!(push.displaced.y.abs() < 1e-4);

    let push = compute_proximity_push(Vec2::new(0.0, -20.0), &pointer, &params).unwrap();
    assert!(
        push.displaced.y < -20.0,
        "dot should move away along -Y, got {}",
        push.displaced.y,
    );
}

#[test]
fn test_slow_pointer_has_no_inertia() {
    let params = make_params();
    // Speed 50, below the 100 trigger.
    let pointer = pointer_moved(Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0));

    let push = compute_proximity_push(Vec2::new(60.0, 0.0), &pointer, &params).unwrap();
    assert!(push.inertia.is_none());
}

#[test]
fn test_inertia_factor_from_speed() {
    // Speed 150 > trigger 100; factor = 150/5000 = 0.03, so the
    // overshoot adds delta * 0.06 = (9, 0) on top of the push.
    let params = make_params();
    let pointer = pointer_moved(Vec2::new(0.0, 0.0), Vec2::new(150.0, 0.0));

    let push = compute_proximity_push(Vec2::new(160.0, 0.0), &pointer, &params).unwrap();
    let overshoot = push.inertia.expect("fast pointer should engage inertia");

    let extra = overshoot - push.displaced;
    assert!((extra.x - 9.0).abs() < 1e-3, "extra.x = {}", extra.x);
    assert!(extra.y.abs() < 1e-4);
}

#[test]
fn test_inertia_factor_caps_at_one() {
    let params = ProximityParams {
        radius: 80.0,
        speed_trigger: 100.0,
        max_speed: 50.0, // everything above 50 clamps to factor 1
    };
    let pointer = pointer_moved(Vec2::new(0.0, 0.0), Vec2::new(150.0, 0.0));

    let push = compute_proximity_push(Vec2::new(160.0, 0.0), &pointer, &params).unwrap();
    let overshoot = push.inertia.unwrap();

    // factor clamped to 1 -> extra = delta * 2 = (300, 0)
    let extra = overshoot - push.displaced;
    assert!((extra.x - 300.0).abs() < 1e-3, "extra.x = {}", extra.x);
}

#[test]
fn test_force_vanishes_toward_the_edge() {
    let params = make_params();
    let pointer = pointer_at(0.0, 0.0);

    let push = compute_proximity_push(Vec2::new(79.9, 0.0), &pointer, &params).unwrap();
    assert!(push.force < 0.01, "edge force should be tiny, got {}", push.force);
    assert!(push.displaced.distance(Vec2::new(79.9, 0.0)) < 0.15);
}
