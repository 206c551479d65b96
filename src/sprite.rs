//! Sprite stamped at the cursor.
//!
//! Nothing carries over between ticks: every frame samples a fresh alpha from
//! `alpha_range` and, when enabled, a fresh rotation in whole degrees.

use crate::config::SpriteParams;
use crate::render::RenderInstruction;
use crate::spawn::SpawnContext;
use glam::DVec2;

#[derive(Clone, Debug)]
pub struct SpriteState {
    params: SpriteParams,
}

impl SpriteState {
    pub fn new(params: SpriteParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SpriteParams {
        &self.params
    }

    /// Sample this tick's sprite, centered on the cursor.
    pub fn update(&self, cursor: DVec2, opacity: f64, ctx: &mut SpawnContext) -> RenderInstruction {
        let alpha = ctx.random_range(self.params.alpha_range);
        let rotate = if self.params.rotate {
            ctx.random_int([0, 360])
        } else {
            0
        };
        let width = self.params.width();
        let height = self.params.height();

        RenderInstruction::Sprite {
            opacity: opacity * alpha,
            x: cursor.x - width / 2.0,
            y: cursor.y - height / 2.0,
            width,
            height,
            image_path: self.params.image_path.clone(),
            rotate,
        }
    }
}
