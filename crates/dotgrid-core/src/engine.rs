use glam::Vec2;

use crate::config::GridConfig;
use crate::forces::proximity::{compute_proximity_push, ProximityParams};
use crate::forces::shock::{compute_shock_impulse, ShockParams};
use crate::lattice;
use crate::particle::ParticleSet;
use crate::pointer::PointerState;
use crate::tween::{Ease, Follow, Visual};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Duration of the fast snap toward a displaced target.
const SNAP_DURATION: f32 = 0.1;
/// Duration of the inertia overshoot leg, and of the short relax used
/// when the pointer leaves the field.
const SETTLE_DURATION: f32 = 0.3;

/// The dot-grid engine: one lattice of dots, one pointer, one clock.
///
/// Everything runs on the caller's thread. Event entry points
/// (`pointer_move`, `click`, `resize`) only retarget per-particle
/// tweens and return immediately; `step` is the single per-frame pass
/// that advances them and publishes rendered state into the set's
/// offset/scale/color arrays. A later event always supersedes an
/// earlier one's in-flight target on the same particle.
pub struct DotGridEngine {
    pub particles: ParticleSet,
    pub config: GridConfig,
    pub pointer: PointerState,
    time: f32,
}

impl DotGridEngine {
    /// Create an engine with no particles; call `resize` once the
    /// container has a size.
    pub fn new(config: GridConfig) -> Self {
        Self {
            particles: ParticleSet::empty(),
            config,
            pointer: PointerState::default(),
            time: 0.0,
        }
    }

    /// Accumulated engine time.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Rebuild the lattice for a new container size.
    ///
    /// The previous particle set is discarded wholesale, which also
    /// cancels every in-flight tween: nothing can fire against stale
    /// particles after a rebuild.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.particles = lattice::build(width, height, &self.config);
    }

    /// Drop all particles and reset pointer tracking.
    ///
    /// Idempotent teardown: safe to call repeatedly, and safe before
    /// any `resize` ever happened.
    pub fn clear(&mut self) {
        self.particles = ParticleSet::empty();
        self.pointer = PointerState::default();
    }

    /// Handle a container-relative pointer-move event.
    ///
    /// Dots inside the proximity field snap away from the pointer (with
    /// an overshoot-then-return chain when the pointer is fast); dots
    /// outside it relax back to rest.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.advance(Vec2::new(x, y));

        let params = ProximityParams {
            radius: self.config.proximity,
            speed_trigger: self.config.speed_trigger,
            max_speed: self.config.max_speed,
        };
        let rest = Visual::rest(self.config.base_color);
        let now = self.time;

        for i in 0..self.particles.count {
            match compute_proximity_push(self.particles.current[i], &self.pointer, &params) {
                Some(push) => {
                    self.particles.current[i] = push.displaced;
                    let from = self.particles.visual(i);
                    let pushed = Visual {
                        offset: push.displaced - self.particles.original[i],
                        color: self.config.active_color,
                        scale: 1.0 + push.force * 0.5,
                    };
                    match push.inertia {
                        // Fast pointer: overshoot first, then ease home.
                        Some(overshoot) => {
                            let target = Visual {
                                offset: overshoot - self.particles.original[i],
                                ..pushed
                            };
                            self.particles.tween[i].retarget(
                                from,
                                target,
                                now,
                                SETTLE_DURATION,
                                Ease::OutCubic,
                                Follow::Return {
                                    duration: self.config.return_duration,
                                    ease: Ease::OutCubic,
                                },
                            );
                        }
                        None => {
                            self.particles.tween[i].retarget(
                                from,
                                pushed,
                                now,
                                SNAP_DURATION,
                                Ease::OutCubic,
                                Follow::None,
                            );
                        }
                    }
                }
                None => {
                    // Outside the field: relax home, unless already resting.
                    if self.particles.tween[i].active || self.particles.visual(i) != rest {
                        self.particles.current[i] = self.particles.original[i];
                        let from = self.particles.visual(i);
                        self.particles.tween[i].retarget(
                            from,
                            rest,
                            now,
                            SETTLE_DURATION,
                            Ease::OutCubic,
                            Follow::None,
                        );
                    }
                }
            }
        }
    }

    /// Handle a container-relative click/tap: a one-shot radial impulse
    /// measured from each dot's rest position, snapping outward and then
    /// recoiling home on an elastic curve.
    pub fn click(&mut self, x: f32, y: f32) {
        let click = Vec2::new(x, y);
        let params = ShockParams {
            radius: self.config.shock_radius,
            strength: self.config.shock_strength,
        };
        let now = self.time;

        for i in 0..self.particles.count {
            if let Some(impulse) = compute_shock_impulse(self.particles.original[i], click, &params)
            {
                let from = self.particles.visual(i);
                let target = Visual {
                    offset: impulse.offset,
                    color: self.config.active_color,
                    scale: 1.0 + impulse.force,
                };
                self.particles.tween[i].retarget(
                    from,
                    target,
                    now,
                    SNAP_DURATION,
                    Ease::OutCubic,
                    Follow::Return {
                        duration: self.config.return_duration,
                        ease: Ease::OutElastic,
                    },
                );
            }
        }
    }

    /// Advance the clock by `dt` and every active tween with it.
    ///
    /// Samples each record, publishes the rendered visual, and resolves
    /// completed tweens into their follow-up return leg (resetting the
    /// proximity position to the lattice rest point at the seam).
    pub fn step(&mut self, dt: f32) {
        self.time += dt;
        let now = self.time;

        #[cfg(feature = "parallel")]
        {
            // Sample in parallel, then apply serially (the apply half
            // mutates several arrays and chains follow-up tweens).
            let sampled: Vec<Option<(Visual, bool)>> = self
                .particles
                .tween
                .par_iter()
                .map(|tw| if tw.active { Some(tw.sample(now)) } else { None })
                .collect();
            for (i, s) in sampled.into_iter().enumerate() {
                if let Some((visual, finished)) = s {
                    self.apply_sample(i, visual, finished, now);
                }
            }
        }

        #[cfg(not(feature = "parallel"))]
        {
            for i in 0..self.particles.count {
                if !self.particles.tween[i].active {
                    continue;
                }
                let (visual, finished) = self.particles.tween[i].sample(now);
                self.apply_sample(i, visual, finished, now);
            }
        }
    }

    fn apply_sample(&mut self, i: usize, visual: Visual, finished: bool, now: f32) {
        self.particles.offset[i] = visual.offset;
        self.particles.color[i] = visual.color;
        self.particles.scale[i] = visual.scale;

        if finished {
            match self.particles.tween[i].follow {
                Follow::Return { duration, ease } => {
                    self.particles.current[i] = self.particles.original[i];
                    let rest = Visual::rest(self.config.base_color);
                    self.particles.tween[i]
                        .retarget(visual, rest, now, duration, ease, Follow::None);
                }
                Follow::None => {
                    self.particles.tween[i].active = false;
                }
            }
        }
    }
}
