//! Effect configuration.
//!
//! A configuration describes exactly one active effect: its kind, the base
//! settings shared by every kind, and the parameter block for that kind.
//! It is loaded and validated once at startup and never changes afterwards.
//!
//! # File format
//!
//! JSON (or TOML when the file ends in `.toml`). Every field except `kind`
//! has a default, and only the section matching `kind` is read:
//!
//! ```json
//! {
//!   "kind": "particle",
//!   "enabled": true,
//!   "max_length": 50,
//!   "opacity": 1.0,
//!   "particle": {
//!     "count": 12,
//!     "color": ["#FF0000", "#FFD700", "#00FFFF"],
//!     "size_range": [2, 7],
//!     "speed_range": [3, 9],
//!     "life_range": [20, 45],
//!     "gravity": 0.6
//!   }
//! }
//! ```

mod particle;
mod sprite;
mod trail;

use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

pub use particle::{ColorSpec, ParticleParams};
pub use sprite::SpriteParams;
pub use trail::TrailParams;

fn default_enabled() -> bool {
    true
}

fn default_max_length() -> u32 {
    30
}

fn default_opacity() -> f64 {
    0.8
}

/// The three supported effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Particle,
    Trail,
    Sprite,
}

impl EffectKind {
    /// Parse a kind name as written in config files.
    ///
    /// `trail` is accepted as an alias of `snake_line`.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name.trim() {
            "particle" => Ok(EffectKind::Particle),
            "snake_line" | "trail" => Ok(EffectKind::Trail),
            "sprite" => Ok(EffectKind::Sprite),
            other => Err(ConfigError::UnsupportedKind(other.to_string())),
        }
    }

    /// Name used in the `type` field of render instructions.
    pub fn wire_name(&self) -> &'static str {
        match self {
            EffectKind::Particle => "particle",
            EffectKind::Trail => "snake_line",
            EffectKind::Sprite => "sprite",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Kind-specific parameter block. Exactly one is ever populated.
#[derive(Clone, Debug, PartialEq)]
pub enum EffectParams {
    Particle(ParticleParams),
    Trail(TrailParams),
    Sprite(SpriteParams),
}

impl EffectParams {
    pub fn kind(&self) -> EffectKind {
        match self {
            EffectParams::Particle(_) => EffectKind::Particle,
            EffectParams::Trail(_) => EffectKind::Trail,
            EffectParams::Sprite(_) => EffectKind::Sprite,
        }
    }

    /// Default parameters for a kind.
    pub fn defaults_for(kind: EffectKind) -> Self {
        match kind {
            EffectKind::Particle => EffectParams::Particle(ParticleParams::default()),
            EffectKind::Trail => EffectParams::Trail(TrailParams::default()),
            EffectKind::Sprite => EffectParams::Sprite(SpriteParams::default()),
        }
    }
}

/// Validated description of the active effect.
///
/// # Example
///
/// ```ignore
/// let config = EffectConfig::new(EffectParams::Trail(TrailParams::default()))
///     .with_max_length(3)
///     .with_opacity(1.0);
/// config.validate()?;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EffectConfig {
    /// When false the engine always returns an empty instruction.
    pub enabled: bool,
    /// Trail point cap, and particle cap factor (`max_length * count`).
    pub max_length: u32,
    /// Global alpha multiplier in `[0, 1]`.
    pub opacity: f64,
    /// Seed for reproducible effects. Entropy when absent.
    pub seed: Option<u64>,
    pub params: EffectParams,
}

/// On-disk layout. Mirrors the base + per-kind sections of the file.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(alias = "type")]
    kind: String,
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default = "default_max_length")]
    max_length: u32,
    #[serde(default = "default_opacity")]
    opacity: f64,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    particle: Option<ParticleParams>,
    #[serde(default, alias = "trail")]
    snake_line: Option<TrailParams>,
    #[serde(default)]
    sprite: Option<SpriteParams>,
}

impl ConfigFile {
    fn into_config(self) -> Result<EffectConfig, ConfigError> {
        let kind = EffectKind::parse(&self.kind)?;
        let params = match kind {
            EffectKind::Particle => EffectParams::Particle(self.particle.unwrap_or_default()),
            EffectKind::Trail => EffectParams::Trail(self.snake_line.unwrap_or_default()),
            EffectKind::Sprite => EffectParams::Sprite(self.sprite.unwrap_or_default()),
        };
        let config = EffectConfig {
            enabled: self.enabled,
            max_length: self.max_length,
            opacity: self.opacity,
            seed: self.seed,
            params,
        };
        config.validate()?;
        Ok(config)
    }
}

impl EffectConfig {
    /// Configuration with default base settings for the given parameters.
    pub fn new(params: EffectParams) -> Self {
        Self {
            enabled: default_enabled(),
            max_length: default_max_length(),
            opacity: default_opacity(),
            seed: None,
            params,
        }
    }

    /// Default configuration for a kind.
    pub fn for_kind(kind: EffectKind) -> Self {
        Self::new(EffectParams::defaults_for(kind))
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn kind(&self) -> EffectKind {
        self.params.kind()
    }

    /// Load a configuration file. `.toml` files are parsed as TOML,
    /// everything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config = if is_toml {
            Self::from_toml_str(&text)?
        } else {
            Self::from_json_str(&text)?
        };
        debug!(path = %path.display(), kind = %config.kind(), "loaded effect config");
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json)?;
        file.into_config()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        file.into_config()
    }

    /// Check every field against its allowed domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_length == 0 {
            return Err(ConfigError::invalid("max_length", "must be at least 1"));
        }
        check_unit_interval("opacity", self.opacity)?;
        match &self.params {
            EffectParams::Particle(p) => p.validate(),
            EffectParams::Trail(t) => t.validate(),
            EffectParams::Sprite(s) => s.validate(),
        }
    }
}

/// `[min, max]` must be finite, ordered, and not below `floor`.
pub(crate) fn check_range(field: &'static str, [min, max]: [f64; 2], floor: f64) -> Result<(), ConfigError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ConfigError::invalid(field, "bounds must be finite"));
    }
    if min > max {
        return Err(ConfigError::invalid(field, format!("min {min} is greater than max {max}")));
    }
    if min < floor {
        return Err(ConfigError::invalid(field, format!("min {min} is below {floor}")));
    }
    Ok(())
}

pub(crate) fn check_unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::invalid(field, format!("expected a value in [0, 1], got {value}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::Emitter;
    use crate::lifecycle::FadeCurve;

    #[test]
    fn test_minimal_particle_config_uses_defaults() {
        let config = EffectConfig::from_json_str(r#"{"kind": "particle"}"#).unwrap();
        assert!(config.enabled);
        assert_eq!(config.max_length, 30);
        assert_eq!(config.opacity, 0.8);

        let EffectParams::Particle(p) = &config.params else {
            panic!("expected particle params");
        };
        assert_eq!(p.size_range, [1.0, 4.0]);
        assert_eq!(p.speed_range, [1.0, 3.0]);
        assert_eq!(p.life_range, [30, 90]);
        assert_eq!(p.spawn, Emitter::Isotropic);
        assert_eq!(p.fade, FadeCurve::Quadratic);
    }

    #[test]
    fn test_sprite_defaults() {
        let config = EffectConfig::from_json_str(r#"{"kind": "sprite", "sprite": {"rotate": true}}"#).unwrap();
        let EffectParams::Sprite(s) = &config.params else {
            panic!("expected sprite params");
        };
        assert_eq!(s.size, [32.0, 32.0]);
        assert_eq!(s.alpha_range, [0.3, 0.8]);
        assert!(s.rotate);
    }

    #[test]
    fn test_trail_alias_and_section_selection() {
        let json = r#"{
            "type": "trail",
            "max_length": 3,
            "particle": {"count": 0},
            "trail": {"width": 5.0}
        }"#;
        // The particle section is ignored, so its invalid count is irrelevant.
        let config = EffectConfig::from_json_str(json).unwrap();
        assert_eq!(config.kind(), EffectKind::Trail);
        let EffectParams::Trail(t) = &config.params else {
            panic!("expected trail params");
        };
        assert_eq!(t.width, 5.0);
        assert_eq!(t.color, "#9C27B0");
    }

    #[test]
    fn test_palette_color() {
        let json = r##"{"kind": "particle", "particle": {"color": ["#FF0000", "#00FF00"]}}"##;
        let config = EffectConfig::from_json_str(json).unwrap();
        let EffectParams::Particle(p) = &config.params else {
            panic!("expected particle params");
        };
        assert_eq!(p.color, ColorSpec::Palette(vec!["#FF0000".into(), "#00FF00".into()]));
    }

    #[test]
    fn test_unsupported_kind() {
        let err = EffectConfig::from_json_str(r#"{"kind": "confetti"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedKind(ref k) if k == "confetti"));
    }

    #[test]
    fn test_missing_kind_is_parse_error() {
        let err = EffectConfig::from_json_str(r#"{"enabled": true}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let json = r#"{"kind": "particle", "particle": {"size_range": [5, 1]}}"#;
        let err = EffectConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "particle.size_range", .. }));
    }

    #[test]
    fn test_rejects_bad_base_fields() {
        let err = EffectConfig::from_json_str(r#"{"kind": "sprite", "opacity": 1.5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "opacity", .. }));

        let err = EffectConfig::from_json_str(r#"{"kind": "sprite", "max_length": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_length", .. }));
    }

    #[test]
    fn test_rejects_empty_palette() {
        let json = r#"{"kind": "particle", "particle": {"color": []}}"#;
        let err = EffectConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "particle.color", .. }));
    }

    #[test]
    fn test_rejects_sprite_alpha_above_one() {
        let json = r#"{"kind": "sprite", "sprite": {"alpha_range": [0.5, 1.5]}}"#;
        let err = EffectConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "sprite.alpha_range", .. }));
    }

    #[test]
    fn test_toml_config() {
        let text = r#"
            kind = "particle"
            max_length = 10
            seed = 7

            [particle]
            count = 4
            spawn = "axis_jitter"
            fade = "linear"
            motion = "drag"
        "#;
        let config = EffectConfig::from_toml_str(text).unwrap();
        assert_eq!(config.max_length, 10);
        assert_eq!(config.seed, Some(7));
        let EffectParams::Particle(p) = &config.params else {
            panic!("expected particle params");
        };
        assert_eq!(p.count, 4);
        assert_eq!(p.spawn, Emitter::AxisJitter);
        assert_eq!(p.fade, FadeCurve::Linear);
        assert_eq!(p.motion.as_deref(), Some("drag"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = EffectConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_builder_chain() {
        let config = EffectConfig::for_kind(EffectKind::Trail)
            .with_max_length(3)
            .with_opacity(1.0)
            .with_seed(1)
            .with_enabled(false);
        assert!(config.validate().is_ok());
        assert!(!config.enabled);
        assert_eq!(config.kind().wire_name(), "snake_line");
    }
}
