//! Interactive dot-grid animation engine.
//!
//! A lattice of dots reacts to pointer movement with a distance-falloff
//! push (plus an inertia overshoot when the pointer is fast) and to
//! clicks with a radial shock, then eases back to rest. The crate is
//! platform-free: the host feeds container-relative events and a frame
//! tick, and reads the rendered offset/scale/color arrays back out.
//! See the companion `dotgrid-wasm` crate for the web binding.

pub mod config;
pub mod engine;
pub mod forces;
pub mod lattice;
pub mod math;
pub mod particle;
pub mod pointer;
pub mod tween;

pub use config::GridConfig;
pub use engine::DotGridEngine;
