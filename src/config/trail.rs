//! Snake line (trail) effect parameters

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Style of the polyline drawn through recent cursor positions.
///
/// The trail itself is just the last `max_length` cursor samples; these
/// fields are forwarded so the host can stroke and fade it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrailParams {
    pub color: String,
    pub width: f64,
    pub round_cap: bool,
    /// Host fades older segments toward transparent.
    pub fade_out: bool,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            color: "#9C27B0".into(),
            width: 3.0,
            round_cap: true,
            fade_out: true,
        }
    }
}

impl TrailParams {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.color.trim().is_empty() {
            return Err(ConfigError::invalid("snake_line.color", "must not be blank"));
        }
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(ConfigError::invalid(
                "snake_line.width",
                format!("expected a non-negative number, got {}", self.width),
            ));
        }
        Ok(())
    }
}
