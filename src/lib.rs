//! # cursorflow
//!
//! Cursor-following visual effects driven over a line protocol.
//!
//! A host streams cursor positions as JSON lines. For every position the
//! [`EffectEngine`] advances the active effect one tick and produces a
//! [`RenderInstruction`] that the host draws. Three effects exist:
//!
//! | Kind | State | Output |
//! |------|-------|--------|
//! | `particle` | bounded particle pool with gravity, wind and fade | `particle` |
//! | `snake_line` | ring buffer of the last cursor positions | `snake_line` |
//! | `sprite` | none, sampled fresh every tick | `sprite` |
//!
//! ## Quick Start
//!
//! ```ignore
//! use cursorflow::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = EffectConfig::load("demos/fireworks.json")?;
//!     let engine = EffectEngine::builder(config).with_seed(7).build()?;
//!
//!     let stdin = std::io::stdin().lock();
//!     let stdout = std::io::stdout().lock();
//!     FrameLoop::new(stdin, stdout, engine).run()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Particle variants
//!
//! Spawn geometry and alpha fade are configuration switches on one algorithm:
//!
//! ```ignore
//! let params = ParticleParams {
//!     spawn: Emitter::AxisJitter,
//!     fade: FadeCurve::Linear,
//!     motion: Some("drag".into()),
//!     ..ParticleParams::default()
//! };
//! ```

pub mod config;
pub mod emitter;
pub mod engine;
pub mod error;
pub mod frame_loop;
pub mod lifecycle;
pub mod motion;
pub mod particle;
pub mod pool;
pub mod render;
mod spawn;
pub mod sprite;
pub mod trail;

pub use config::{ColorSpec, EffectConfig, EffectKind, EffectParams, ParticleParams, SpriteParams, TrailParams};
pub use emitter::Emitter;
pub use engine::{EffectEngine, EffectState, EngineBuilder};
pub use error::{ConfigError, FrameError};
pub use frame_loop::{CursorEvent, FrameLoop, LoopStats};
pub use glam::DVec2;
pub use lifecycle::FadeCurve;
pub use motion::{Motion, MotionRegistry};
pub use particle::{Particle, ParticleState};
pub use pool::RingBuffer;
pub use render::{ParticleSprite, RenderInstruction, TrailPoint};
pub use spawn::SpawnContext;
pub use sprite::SpriteState;
pub use trail::TrailState;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use cursorflow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ColorSpec, EffectConfig, EffectKind, EffectParams, ParticleParams, SpriteParams, TrailParams};
    pub use crate::emitter::Emitter;
    pub use crate::engine::{EffectEngine, EngineBuilder};
    pub use crate::error::ConfigError;
    pub use crate::frame_loop::{FrameLoop, LoopStats};
    pub use crate::lifecycle::FadeCurve;
    pub use crate::motion::{Motion, MotionRegistry};
    pub use crate::particle::Particle;
    pub use crate::render::RenderInstruction;
    pub use crate::DVec2;
}
