use glam::Vec2;

use crate::config::GridConfig;
use crate::particle::ParticleSet;
use crate::tween::{Tween, Visual};

/// Build the dot lattice for a container size.
///
/// `cols = floor(width / gap)`, `rows = floor(height / gap)`; each dot
/// rests at its cell center `(col * gap + gap / 2, row * gap + gap / 2)`.
/// A degenerate container (zero or negative size, or smaller than one
/// cell) yields an empty set rather than an error; a later resize
/// repopulates it.
pub fn build(width: f32, height: f32, config: &GridConfig) -> ParticleSet {
    if !(width > 0.0) || !(height > 0.0) || !(config.gap > 0.0) {
        return ParticleSet::empty();
    }

    let gap = config.gap;
    let cols = (width / gap).floor() as usize;
    let rows = (height / gap).floor() as usize;
    let count = cols * rows;
    let rest = Visual::rest(config.base_color);

    let mut set = ParticleSet {
        count,
        cols,
        rows,
        original: Vec::with_capacity(count),
        current: Vec::with_capacity(count),
        offset: Vec::with_capacity(count),
        scale: Vec::with_capacity(count),
        color: Vec::with_capacity(count),
        tween: Vec::with_capacity(count),
    };

    for row in 0..rows {
        for col in 0..cols {
            let center = Vec2::new(
                col as f32 * gap + gap / 2.0,
                row as f32 * gap + gap / 2.0,
            );
            set.original.push(center);
            set.current.push(center);
            set.offset.push(Vec2::ZERO);
            set.scale.push(1.0);
            set.color.push(config.base_color);
            set.tween.push(Tween::idle(rest));
        }
    }

    set
}
