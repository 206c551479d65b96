//! Render instructions sent to the host, one JSON object per line.
//!
//! ```text
//! {"type":"empty"}
//! {"type":"particle","opacity":0.8,"particles":[{"x":1.0,"y":2.0,"size":3.5,"color":"#FF9800","alpha":0.64}]}
//! {"type":"snake_line","opacity":0.8,"color":"#9C27B0","width":3.0,"round_cap":true,"fade_out":true,"points":[{"x":1,"y":2}]}
//! {"type":"sprite","opacity":0.4,"x":84.0,"y":84.0,"width":32.0,"height":32.0,"image_path":"sprite.png","rotate":0}
//! ```

use serde::{Deserialize, Serialize};

/// One frame's drawing instruction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderInstruction {
    /// Nothing to draw.
    Empty,
    /// Live particles after this tick.
    Particle {
        opacity: f64,
        particles: Vec<ParticleSprite>,
    },
    /// Polyline through the recent cursor positions, oldest first.
    SnakeLine {
        opacity: f64,
        color: String,
        width: f64,
        round_cap: bool,
        fade_out: bool,
        points: Vec<TrailPoint>,
    },
    /// Image centered on the cursor.
    Sprite {
        opacity: f64,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        image_path: String,
        rotate: u32,
    },
}

impl RenderInstruction {
    /// Whether the frame loop should forward this instruction to the host.
    ///
    /// Empty instructions and particle frames with no live particles are
    /// suppressed.
    pub fn is_drawable(&self) -> bool {
        match self {
            RenderInstruction::Empty => false,
            RenderInstruction::Particle { particles, .. } => !particles.is_empty(),
            RenderInstruction::SnakeLine { .. } | RenderInstruction::Sprite { .. } => true,
        }
    }

    /// Serialize as a single newline-terminated JSON line.
    pub fn to_line(&self) -> serde_json::Result<Vec<u8>> {
        let mut line = serde_json::to_vec(self)?;
        line.push(b'\n');
        Ok(line)
    }
}

/// A particle as the host draws it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleSprite {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

/// A raw cursor sample kept by the trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailPoint {
    pub x: i64,
    pub y: i64,
}

/// Round to 2 decimal places for stable output.
///
/// Values too large to scale are returned as is; they carry no fractional
/// part at that magnitude anyway.
#[inline]
pub fn round2(v: f64) -> f64 {
    let scaled = v * 100.0;
    if !scaled.is_finite() {
        return v;
    }
    scaled.round() / 100.0
}
