//! Particle effect parameters

use super::check_range;
use crate::emitter::Emitter;
use crate::error::ConfigError;
use crate::lifecycle::FadeCurve;
use crate::spawn::SpawnContext;
use serde::{Deserialize, Serialize};

/// A single color or a palette to pick from.
///
/// Colors are passed through to the host untouched (`#RRGGBB`, `rgba(...)`,
/// named colors, whatever the host understands).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    Palette(Vec<String>),
}

impl Default for ColorSpec {
    fn default() -> Self {
        ColorSpec::Single("#FF9800".into())
    }
}

impl ColorSpec {
    /// Choose a color. Palettes pick uniformly, single colors never touch the RNG.
    pub fn pick(&self, ctx: &mut SpawnContext) -> &str {
        match self {
            ColorSpec::Single(color) => color.as_str(),
            ColorSpec::Palette(colors) => colors[ctx.random_index(colors.len())].as_str(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let colors: &[String] = match self {
            ColorSpec::Single(color) => std::slice::from_ref(color),
            ColorSpec::Palette(colors) if colors.is_empty() => {
                return Err(ConfigError::invalid("particle.color", "palette must not be empty"));
            }
            ColorSpec::Palette(colors) => colors,
        };
        if colors.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::invalid("particle.color", "colors must not be blank"));
        }
        Ok(())
    }
}

/// Configuration for the particle effect.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleParams {
    /// Particles spawned per tick.
    pub count: u32,
    pub color: ColorSpec,
    pub size_range: [f64; 2],
    /// Initial speed in units per tick.
    pub speed_range: [f64; 2],
    /// Lifetime in ticks.
    pub life_range: [u32; 2],
    /// Added to vertical velocity each tick (positive is down).
    pub gravity: f64,
    /// Added to horizontal velocity each tick (positive is right).
    pub wind: f64,
    pub spawn: Emitter,
    pub fade: FadeCurve,
    /// Name of a registered motion strategy.
    pub motion: Option<String>,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: 15,
            color: ColorSpec::default(),
            size_range: [1.0, 4.0],
            speed_range: [1.0, 3.0],
            life_range: [30, 90],
            gravity: 0.0,
            wind: 0.0,
            spawn: Emitter::default(),
            fade: FadeCurve::default(),
            motion: None,
        }
    }
}

impl ParticleParams {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::invalid("particle.count", "must be at least 1"));
        }
        self.color.validate()?;
        check_range("particle.size_range", self.size_range, 0.0)?;
        check_range("particle.speed_range", self.speed_range, 0.0)?;
        let [life_min, life_max] = self.life_range;
        if life_min > life_max {
            return Err(ConfigError::invalid(
                "particle.life_range",
                format!("min {life_min} is greater than max {life_max}"),
            ));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::invalid("particle.gravity", "must be finite"));
        }
        if !self.wind.is_finite() {
            return Err(ConfigError::invalid("particle.wind", "must be finite"));
        }
        Ok(())
    }
}
