use glam::{Vec2, Vec4};

use crate::tween::{Tween, Visual};

/// SoA storage for one built lattice of dots.
///
/// The whole set is discarded and rebuilt on resize; nothing is reused
/// across rebuilds, so no tween can outlive its particle. Identity is
/// the row-major index (`row * cols + col`).
pub struct ParticleSet {
    pub count: usize,
    pub cols: usize,
    pub rows: usize,
    /// Fixed lattice rest positions, never mutated after build.
    pub original: Vec<Vec2>,
    /// Position used for proximity distance checks.
    pub current: Vec<Vec2>,
    /// Rendered offset from the rest position.
    pub offset: Vec<Vec2>,
    /// Rendered uniform scale.
    pub scale: Vec<f32>,
    /// Rendered RGBA color.
    pub color: Vec<Vec4>,
    /// Per-particle interpolation record.
    pub tween: Vec<Tween>,
}

impl ParticleSet {
    /// A set with no particles (container not laid out yet).
    pub fn empty() -> Self {
        Self {
            count: 0,
            cols: 0,
            rows: 0,
            original: Vec::new(),
            current: Vec::new(),
            offset: Vec::new(),
            scale: Vec::new(),
            color: Vec::new(),
            tween: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Live rendered visual for particle `i`; the start of any
    /// retargeted tween.
    pub fn visual(&self, i: usize) -> Visual {
        Visual {
            offset: self.offset[i],
            color: self.color[i],
            scale: self.scale[i],
        }
    }
}
