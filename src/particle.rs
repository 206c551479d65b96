//! Particle effect state and per-tick update.
//!
//! Each tick, in order:
//!
//! 1. Age every live particle: gravity and wind into velocity, the optional
//!    motion strategy, velocity into position, `life -= 1`. Particles whose
//!    life reaches zero are dropped.
//! 2. Pick one color for the tick (palettes pick once, so a burst shares a
//!    color) and spawn `count` particles at the cursor.
//! 3. Emit every live particle with its size and alpha faded by remaining life.
//!
//! Newborns are emitted at full life in the tick they spawn and start aging
//! on the next one. The pool holds at most `max_length * count` particles;
//! once full, spawning evicts the oldest.

use crate::config::ParticleParams;
use crate::lifecycle::{life_ratio, shrink};
use crate::motion::Motion;
use crate::pool::RingBuffer;
use crate::render::{round2, ParticleSprite, RenderInstruction};
use crate::spawn::SpawnContext;
use glam::DVec2;
use std::sync::Arc;
use tracing::{trace, warn};

/// A single simulated particle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Particle {
    /// World position (screen pixels).
    pub position: DVec2,
    /// Units per tick.
    pub velocity: DVec2,
    /// Size at birth. The emitted size shrinks with remaining life.
    pub size: f64,
    /// Remaining ticks. Alive while `life > 0`.
    pub life: u32,
    /// Life at spawn.
    pub max_life: u32,
    pub color: String,
}

impl Particle {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Remaining life in `[0, 1]`, `None` if `max_life` is zero.
    #[inline]
    pub fn life_ratio(&self) -> Option<f64> {
        life_ratio(self.life, self.max_life)
    }
}

/// Live particles plus the parameters they were configured with.
pub struct ParticleState {
    params: ParticleParams,
    particles: RingBuffer<Particle>,
    motion: Option<Arc<dyn Motion>>,
}

impl ParticleState {
    pub fn new(params: ParticleParams, max_length: u32, motion: Option<Arc<dyn Motion>>) -> Self {
        let capacity = (max_length as usize).saturating_mul(params.count as usize);
        Self {
            params,
            particles: RingBuffer::new(capacity),
            motion,
        }
    }

    pub fn params(&self) -> &ParticleParams {
        &self.params
    }

    /// Live particles, oldest first.
    pub fn particles(&self) -> impl ExactSizeIterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Maximum number of live particles.
    pub fn capacity(&self) -> usize {
        self.particles.capacity()
    }

    /// Run one tick and describe the result.
    pub fn update(&mut self, cursor: DVec2, opacity: f64, ctx: &mut SpawnContext) -> RenderInstruction {
        self.age(cursor);
        self.spawn(cursor, ctx);
        self.emit(opacity)
    }

    fn age(&mut self, cursor: DVec2) {
        let gravity = self.params.gravity;
        let wind = self.params.wind;
        let motion = self.motion.as_deref();

        self.particles.retain_mut(|p| {
            p.velocity.y += gravity;
            p.velocity.x += wind;

            if let Some(motion) = motion {
                *p = motion.apply(std::mem::take(p), cursor);
            }

            p.position += p.velocity;
            p.life = p.life.saturating_sub(1);

            if !p.position.is_finite() || !p.velocity.is_finite() || !p.size.is_finite() {
                warn!(position = ?p.position, size = p.size, "dropping particle with non-finite state");
                return false;
            }
            p.is_alive()
        });
    }

    fn spawn(&mut self, cursor: DVec2, ctx: &mut SpawnContext) {
        let params = &self.params;
        let color = params.color.pick(ctx).to_owned();

        for _ in 0..params.count {
            let size = ctx.random_range(params.size_range);
            let speed = ctx.random_range(params.speed_range);
            let velocity = params.spawn.velocity(speed, ctx);
            let life = ctx.random_int(params.life_range);

            if life == 0 {
                trace!("skipping particle spawned with zero life");
                continue;
            }

            self.particles.push(Particle {
                position: cursor,
                velocity,
                size,
                life,
                max_life: life,
                color: color.clone(),
            });
        }
    }

    fn emit(&self, opacity: f64) -> RenderInstruction {
        let fade = self.params.fade;
        let particles = self
            .particles
            .iter()
            .filter_map(|p| {
                let Some(ratio) = p.life_ratio() else {
                    warn!(life = p.life, "particle has zero max_life, treating as dead");
                    return None;
                };
                Some(ParticleSprite {
                    x: round2(p.position.x),
                    y: round2(p.position.y),
                    size: round2(shrink(p.size, ratio)),
                    color: p.color.clone(),
                    alpha: fade.alpha(opacity, ratio).map(round2),
                })
            })
            .collect();

        RenderInstruction::Particle { opacity, particles }
    }
}
