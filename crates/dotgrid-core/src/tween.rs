use glam::{Vec2, Vec4};

use crate::math::{ease_out_cubic, ease_out_elastic, mix};

/// Easing curve selector for a tween.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Ease {
    OutCubic,
    OutElastic,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Ease::OutCubic => ease_out_cubic(t),
            Ease::OutElastic => ease_out_elastic(t),
        }
    }
}

/// Snapshot of a particle's animated visual attributes.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Visual {
    /// Offset from the rest position.
    pub offset: Vec2,
    /// RGBA color.
    pub color: Vec4,
    /// Uniform scale (1.0 at rest).
    pub scale: f32,
}

impl Visual {
    /// The rest pose: no offset, unit scale, the given rest color.
    pub fn rest(color: Vec4) -> Self {
        Self {
            offset: Vec2::ZERO,
            color,
            scale: 1.0,
        }
    }

    /// Interpolate between two snapshots. `t` may exceed 1.0 while an
    /// elastic curve overshoots; extrapolation past the target is what
    /// produces the recoil ring.
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self {
            offset: a.offset.lerp(b.offset, t),
            color: a.color.lerp(b.color, t),
            scale: mix(a.scale, b.scale, t),
        }
    }
}

/// What happens when a tween's progress reaches 1.0.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Follow {
    /// Stop; the particle holds the target values.
    None,
    /// Chain into a return-to-rest tween with the given duration/easing.
    Return { duration: f32, ease: Ease },
}

/// Per-particle interpolation record, advanced once per frame.
///
/// This replaces callback-driven animation: "on complete" is simply
/// progress reaching 1.0 during the frame pass, at which point `follow`
/// says whether a return-to-rest leg starts. Restarting a tween always
/// samples from the live rendered values (the caller passes them as
/// `from`), so a superseding event never snaps the visual state.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub active: bool,
    pub start: Visual,
    pub target: Visual,
    pub start_time: f32,
    pub duration: f32,
    pub ease: Ease,
    pub follow: Follow,
}

impl Tween {
    /// An inactive record holding the rest pose.
    pub fn idle(rest: Visual) -> Self {
        Self {
            active: false,
            start: rest,
            target: rest,
            start_time: 0.0,
            duration: 0.0,
            ease: Ease::OutCubic,
            follow: Follow::None,
        }
    }

    /// (Re)start the tween. Discards any in-flight target; last writer
    /// wins.
    pub fn retarget(
        &mut self,
        from: Visual,
        to: Visual,
        now: f32,
        duration: f32,
        ease: Ease,
        follow: Follow,
    ) {
        self.active = true;
        self.start = from;
        self.target = to;
        self.start_time = now;
        self.duration = duration;
        self.ease = ease;
        self.follow = follow;
    }

    /// Sample the tween at engine time `now`. Returns the visual to
    /// render and whether the tween just finished.
    pub fn sample(&self, now: f32) -> (Visual, bool) {
        if self.duration <= 0.0 {
            return (self.target, true);
        }
        let progress = (now - self.start_time) / self.duration;
        if progress >= 1.0 {
            (self.target, true)
        } else {
            let eased = self.ease.apply(progress.max(0.0));
            (Visual::lerp(self.start, self.target, eased), false)
        }
    }
}
