//! Sprite effect parameters

use super::check_range;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// An image stamped at the cursor with a flickering alpha.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpriteParams {
    /// Passed to the host verbatim, relative paths resolve on the host side.
    pub image_path: String,
    /// `[width, height]`
    pub size: [f64; 2],
    /// Random rotation in whole degrees each tick.
    pub rotate: bool,
    pub alpha_range: [f64; 2],
}

impl Default for SpriteParams {
    fn default() -> Self {
        Self {
            image_path: String::new(),
            size: [32.0, 32.0],
            rotate: false,
            alpha_range: [0.3, 0.8],
        }
    }
}

impl SpriteParams {
    #[inline]
    pub fn width(&self) -> f64 {
        self.size[0]
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size[1]
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.size.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::invalid(
                "sprite.size",
                format!("expected non-negative [width, height], got {:?}", self.size),
            ));
        }
        check_range("sprite.alpha_range", self.alpha_range, 0.0)?;
        if self.alpha_range[1] > 1.0 {
            return Err(ConfigError::invalid("sprite.alpha_range", "alpha cannot exceed 1.0"));
        }
        Ok(())
    }
}
