//! Error types for cursorflow.
//!
//! Only configuration errors are fatal. Frame errors describe why an input
//! line was skipped and never leave the frame loop.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating an effect configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON or does not match the schema.
    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
    /// The file is not valid TOML or does not match the schema.
    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    /// `kind` names an effect that does not exist.
    #[error("unsupported effect kind '{0}' (expected particle, snake_line or sprite)")]
    UnsupportedKind(String),
    /// A field holds a value outside its allowed domain.
    #[error("invalid value for '{field}': {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Human readable explanation.
        reason: String,
    },
    /// `particle.motion` names a strategy nobody registered.
    #[error("unknown motion strategy '{0}'")]
    UnknownMotion(String),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Reasons an input line is rejected by the frame decoder.
#[derive(Debug, Error)]
pub enum FrameError {
    /// Blank line, or a line that does not start with `{`.
    #[error("line is not a JSON object")]
    NotAnObject,
    /// The line starts like an object but does not decode to a cursor event.
    #[error("malformed cursor record: {0}")]
    Json(#[from] serde_json::Error),
}
