//! Particle lifecycle: aging, death and fade over life.
//!
//! A particle's `life` counts down once per tick from `max_life`. Its
//! `life_ratio` (`life / max_life`) drives the visual fade: size always
//! shrinks linearly, alpha follows the configured [`FadeCurve`].
//!
//! | Curve | Per-particle alpha |
//! |-------|--------------------|
//! | [`FadeCurve::Flat`] | omitted, host applies the instruction opacity |
//! | [`FadeCurve::Linear`] | `opacity * ratio` |
//! | [`FadeCurve::Quadratic`] | `opacity * ratio²` |
//!
//! The quadratic curve drops off faster near the end so dying particles do
//! not leave a faint residue on screen.

use serde::{Deserialize, Serialize};

/// Alpha curve applied to particles as they age.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeCurve {
    /// No per-particle alpha.
    Flat,
    /// Alpha proportional to remaining life.
    Linear,
    /// Alpha proportional to the square of remaining life.
    #[default]
    Quadratic,
}

impl FadeCurve {
    /// Per-particle alpha for the given life ratio, `None` for [`FadeCurve::Flat`].
    pub fn alpha(self, opacity: f64, ratio: f64) -> Option<f64> {
        match self {
            FadeCurve::Flat => None,
            FadeCurve::Linear => Some(opacity * ratio),
            FadeCurve::Quadratic => Some(opacity * ratio * ratio),
        }
    }
}

/// Remaining life as a fraction of the spawn life.
///
/// Returns `None` when the ratio is undefined (`max_life == 0`) so callers can
/// treat the particle as dead instead of dividing by zero.
#[inline]
pub fn life_ratio(life: u32, max_life: u32) -> Option<f64> {
    if max_life == 0 {
        return None;
    }
    Some((f64::from(life) / f64::from(max_life)).clamp(0.0, 1.0))
}

/// Linear size fade: full size at birth, zero at death.
#[inline]
pub fn shrink(size: f64, ratio: f64) -> f64 {
    size * ratio
}
