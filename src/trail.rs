//! Snake line trail: the last `max_length` cursor positions.
//!
//! No physics. Points are stored as raw integer samples and the fade is left
//! to the host, which gets the style parameters with every frame.

use crate::config::TrailParams;
use crate::pool::RingBuffer;
use crate::render::{RenderInstruction, TrailPoint};
use glam::DVec2;

#[derive(Clone, Debug)]
pub struct TrailState {
    params: TrailParams,
    points: RingBuffer<TrailPoint>,
}

impl TrailState {
    pub fn new(params: TrailParams, max_length: u32) -> Self {
        Self {
            params,
            points: RingBuffer::new(max_length as usize),
        }
    }

    pub fn params(&self) -> &TrailParams {
        &self.params
    }

    /// Stored points, oldest first.
    pub fn points(&self) -> impl ExactSizeIterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Record the cursor and describe the whole trail.
    pub fn update(&mut self, cursor: DVec2, opacity: f64) -> RenderInstruction {
        self.points.push(TrailPoint {
            x: cursor.x.round() as i64,
            y: cursor.y.round() as i64,
        });

        RenderInstruction::SnakeLine {
            opacity,
            color: self.params.color.clone(),
            width: self.params.width,
            round_cap: self.params.round_cap,
            fade_out: self.params.fade_out,
            points: self.points.iter().copied().collect(),
        }
    }
}
