//! Loads the shipped demo configurations and runs each one briefly.

use cursorflow::{ColorSpec, EffectConfig, EffectEngine, EffectKind, EffectParams, Emitter, FadeCurve, RenderInstruction};
use std::path::PathBuf;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn smoke(config: EffectConfig) -> Vec<RenderInstruction> {
    let mut engine = EffectEngine::builder(config).with_seed(3).build().unwrap();
    (0..60)
        .map(|i| engine.advance(100.0 + f64::from(i), 200.0))
        .collect()
}

#[test]
fn test_fireworks_demo() {
    let config = EffectConfig::load(demo("fireworks.json")).unwrap();
    assert_eq!(config.kind(), EffectKind::Particle);
    assert_eq!(config.max_length, 50);
    let EffectParams::Particle(params) = &config.params else {
        panic!("expected particle params");
    };
    assert!(matches!(&params.color, ColorSpec::Palette(colors) if colors.len() == 9));
    assert_eq!(params.gravity, 0.6);

    for frame in smoke(config) {
        assert!(frame.is_drawable());
    }
}

#[test]
fn test_snake_line_demo() {
    let config = EffectConfig::load(demo("snake_line.json")).unwrap();
    assert_eq!(config.kind(), EffectKind::Trail);
    let frames = smoke(config);
    let RenderInstruction::SnakeLine { points, .. } = frames.last().unwrap() else {
        panic!("expected snake_line");
    };
    assert_eq!(points.len(), 30);
}

#[test]
fn test_sprite_demo() {
    let config = EffectConfig::load(demo("sprite.json")).unwrap();
    assert_eq!(config.kind(), EffectKind::Sprite);
    for frame in smoke(config) {
        let RenderInstruction::Sprite { rotate, opacity, .. } = frame else {
            panic!("expected sprite");
        };
        assert!(rotate <= 360);
        assert!(opacity <= 0.8 * 0.8 + 1e-9);
    }
}

#[test]
fn test_ambient_toml_demo() {
    let config = EffectConfig::load(demo("ambient.toml")).unwrap();
    let EffectParams::Particle(params) = &config.params else {
        panic!("expected particle params");
    };
    assert_eq!(params.spawn, Emitter::AxisJitter);
    assert_eq!(params.fade, FadeCurve::Linear);
    assert_eq!(params.motion.as_deref(), Some("drag"));
    assert_eq!(smoke(config).len(), 60);
}
