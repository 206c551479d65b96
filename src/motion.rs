//! Named per-particle motion strategies.
//!
//! A strategy runs once per particle per tick, after gravity and wind and
//! before the position is integrated. It receives the particle and the current
//! cursor position and returns the (possibly modified) particle.
//!
//! Strategies are looked up by name from a [`MotionRegistry`]. The registry
//! ships with a few built-ins and applications can register their own:
//!
//! ```ignore
//! let engine = EffectEngine::builder(config)
//!     .with_motion("float_up", |mut p: Particle, _cursor: DVec2| {
//!         p.velocity.y -= 0.05;
//!         p
//!     })
//!     .build()?;
//! ```

use crate::particle::Particle;
use glam::DVec2;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Per-particle motion hook.
pub trait Motion: Send + Sync {
    /// Transform one particle given the current cursor position.
    fn apply(&self, particle: Particle, cursor: DVec2) -> Particle;
}

impl<F> Motion for F
where
    F: Fn(Particle, DVec2) -> Particle + Send + Sync,
{
    fn apply(&self, particle: Particle, cursor: DVec2) -> Particle {
        self(particle, cursor)
    }
}

/// Velocity damping, particles slow down and settle.
#[derive(Clone, Copy, Debug)]
pub struct Drag(pub f64);

impl Motion for Drag {
    fn apply(&self, mut particle: Particle, _cursor: DVec2) -> Particle {
        particle.velocity *= self.0;
        particle
    }
}

/// Pull toward the cursor, proportional to distance.
#[derive(Clone, Copy, Debug)]
pub struct Attract(pub f64);

impl Motion for Attract {
    fn apply(&self, mut particle: Particle, cursor: DVec2) -> Particle {
        particle.velocity += (cursor - particle.position) * self.0;
        particle
    }
}

/// Rotate velocity by a fixed angle (radians) each tick.
#[derive(Clone, Copy, Debug)]
pub struct Swirl(pub f64);

impl Motion for Swirl {
    fn apply(&self, mut particle: Particle, _cursor: DVec2) -> Particle {
        particle.velocity = DVec2::from_angle(self.0).rotate(particle.velocity);
        particle
    }
}

/// Name to strategy lookup table.
#[derive(Clone)]
pub struct MotionRegistry {
    strategies: HashMap<String, Arc<dyn Motion>>,
}

impl MotionRegistry {
    /// Registry with no strategies at all.
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Registry containing only the built-in strategies.
    ///
    /// | Name | Effect |
    /// |------|--------|
    /// | `drag` | velocity × 0.95 per tick |
    /// | `attract` | velocity += 2% of the offset to the cursor |
    /// | `swirl` | velocity rotated by 0.1 rad per tick |
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register("drag", Drag(0.95));
        registry.register("attract", Attract(0.02));
        registry.register("swirl", Swirl(0.1));
        registry
    }

    /// Add or replace a strategy.
    pub fn register(&mut self, name: impl Into<String>, motion: impl Motion + 'static) {
        self.strategies.insert(name.into(), Arc::new(motion));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Motion>> {
        self.strategies.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for MotionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for MotionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionRegistry")
            .field("strategies", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle_at(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            position: DVec2::new(x, y),
            velocity: DVec2::new(vx, vy),
            size: 2.0,
            life: 10,
            max_life: 10,
            color: "#fff".into(),
        }
    }

    #[test]
    fn test_builtins_registered() {
        let registry = MotionRegistry::with_builtins();
        assert_eq!(registry.names(), vec!["attract", "drag", "swirl"]);
        assert!(registry.contains("swirl"));
        assert!(!registry.contains("missing"));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_drag_scales_velocity() {
        let p = Drag(0.5).apply(particle_at(0.0, 0.0, 2.0, -4.0), DVec2::ZERO);
        assert_eq!(p.velocity, DVec2::new(1.0, -2.0));
    }

    #[test]
    fn test_attract_points_at_cursor() {
        let p = Attract(0.1).apply(particle_at(0.0, 0.0, 0.0, 0.0), DVec2::new(10.0, 0.0));
        assert!(p.velocity.x > 0.0);
        assert_eq!(p.velocity.y, 0.0);
    }

    #[test]
    fn test_swirl_preserves_speed() {
        let p = Swirl(0.3).apply(particle_at(0.0, 0.0, 3.0, 4.0), DVec2::ZERO);
        assert!((p.velocity.length() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_closure_strategy() {
        let mut registry = MotionRegistry::default();
        registry.register("freeze", |mut p: Particle, _cursor: DVec2| {
            p.velocity = DVec2::ZERO;
            p
        });
        let motion = registry.get("freeze").unwrap();
        let p = motion.apply(particle_at(1.0, 1.0, 5.0, 5.0), DVec2::ZERO);
        assert_eq!(p.velocity, DVec2::ZERO);
    }
}
