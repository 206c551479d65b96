//! The effect engine: one configured effect advanced once per cursor sample.
//!
//! The effect kind is fixed at construction, so dispatch is a plain match on
//! [`EffectState`]. Nothing inside [`EffectEngine::advance`] can fail; bad
//! input is substituted and per-particle faults are dropped with a warning.

use crate::config::{EffectConfig, EffectKind, EffectParams};
use crate::error::ConfigError;
use crate::motion::{Motion, MotionRegistry};
use crate::particle::ParticleState;
use crate::render::RenderInstruction;
use crate::spawn::SpawnContext;
use crate::sprite::SpriteState;
use crate::trail::TrailState;
use glam::DVec2;
use tracing::{debug, warn};

/// Mutable state for the active effect.
pub enum EffectState {
    Particle(ParticleState),
    Trail(TrailState),
    Sprite(SpriteState),
}

impl EffectState {
    pub fn kind(&self) -> EffectKind {
        match self {
            EffectState::Particle(_) => EffectKind::Particle,
            EffectState::Trail(_) => EffectKind::Trail,
            EffectState::Sprite(_) => EffectKind::Sprite,
        }
    }
}

/// Builder for [`EffectEngine`].
///
/// # Example
///
/// ```ignore
/// let engine = EffectEngine::builder(config)
///     .with_seed(42)
///     .with_motion("sink", |mut p: Particle, _cursor: DVec2| {
///         p.velocity.y += 0.1;
///         p
///     })
///     .build()?;
/// ```
pub struct EngineBuilder {
    config: EffectConfig,
    seed: Option<u64>,
    registry: MotionRegistry,
}

impl EngineBuilder {
    /// Seed the random source. Overrides the config's `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Register a named motion strategy, replacing any built-in of that name.
    pub fn with_motion(mut self, name: impl Into<String>, motion: impl Motion + 'static) -> Self {
        self.registry.register(name, motion);
        self
    }

    /// Replace the whole motion registry.
    pub fn with_registry(mut self, registry: MotionRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Validate the configuration and create the engine.
    pub fn build(self) -> Result<EffectEngine, ConfigError> {
        let config = self.config;
        config.validate()?;

        let seed = self.seed.or(config.seed);
        let ctx = match seed {
            Some(seed) => SpawnContext::seeded(seed),
            None => SpawnContext::from_entropy(),
        };

        let state = match &config.params {
            EffectParams::Particle(params) => {
                let motion = match params.motion.as_deref() {
                    Some(name) => Some(
                        self.registry
                            .get(name)
                            .ok_or_else(|| ConfigError::UnknownMotion(name.to_string()))?,
                    ),
                    None => None,
                };
                EffectState::Particle(ParticleState::new(params.clone(), config.max_length, motion))
            }
            EffectParams::Trail(params) => EffectState::Trail(TrailState::new(params.clone(), config.max_length)),
            EffectParams::Sprite(params) => EffectState::Sprite(SpriteState::new(params.clone())),
        };

        debug!(
            kind = %config.kind(),
            enabled = config.enabled,
            max_length = config.max_length,
            opacity = config.opacity,
            seed = ?seed,
            "effect engine ready"
        );

        Ok(EffectEngine {
            config,
            state,
            ctx,
            last_cursor: DVec2::ZERO,
        })
    }
}

/// Owns the configuration and the state of the single active effect.
pub struct EffectEngine {
    config: EffectConfig,
    state: EffectState,
    ctx: SpawnContext,
    last_cursor: DVec2,
}

impl EffectEngine {
    /// Engine with the built-in motion strategies and the config's seed.
    pub fn new(config: EffectConfig) -> Result<Self, ConfigError> {
        Self::builder(config).build()
    }

    pub fn builder(config: EffectConfig) -> EngineBuilder {
        EngineBuilder {
            config,
            seed: None,
            registry: MotionRegistry::with_builtins(),
        }
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn kind(&self) -> EffectKind {
        self.state.kind()
    }

    pub fn state(&self) -> &EffectState {
        &self.state
    }

    /// Last cursor position the engine accepted.
    pub fn last_cursor(&self) -> DVec2 {
        self.last_cursor
    }

    /// Advance the effect one tick with the cursor at `(x, y)`.
    pub fn advance(&mut self, x: f64, y: f64) -> RenderInstruction {
        if !self.config.enabled {
            return RenderInstruction::Empty;
        }

        let cursor = self.sanitize(x, y);
        let opacity = self.config.opacity;

        match &mut self.state {
            EffectState::Particle(state) => state.update(cursor, opacity, &mut self.ctx),
            EffectState::Trail(state) => state.update(cursor, opacity),
            EffectState::Sprite(state) => state.update(cursor, opacity, &mut self.ctx),
        }
    }

    /// Substitute non-finite coordinates with the last good ones.
    fn sanitize(&mut self, x: f64, y: f64) -> DVec2 {
        let cursor = DVec2::new(
            if x.is_finite() { x } else { self.last_cursor.x },
            if y.is_finite() { y } else { self.last_cursor.y },
        );
        if cursor.x != x || cursor.y != y {
            warn!(x, y, substitute = ?cursor, "non-finite cursor position");
        }
        self.last_cursor = cursor;
        cursor
    }
}
