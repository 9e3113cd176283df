//! End-to-end scenarios driving a ParticleSystem across many ticks

use ember_core::{
    ArcEmitter, ParticlePool, ParticleRenderer, ParticleSystem, PointEmitter, SystemState, Vec3,
};
use std::any::Any;
use std::f32::consts::PI;

/// Minimal renderer counting lifecycle events
#[derive(Clone, Default)]
struct CountingRenderer {
    births: usize,
    kills: usize,
    rendered_alive: usize,
}

impl ParticleRenderer for CountingRenderer {
    fn init_geoms(&mut self, _pool_size: usize) {}

    fn birth_particle(&mut self, _index: usize) {
        self.births += 1;
    }

    fn kill_particle(&mut self, _index: usize) {
        self.kills += 1;
    }

    fn resize_pool(&mut self, _new_size: usize) {}

    fn render(&mut self, pool: &ParticlePool) {
        self.rendered_alive = pool.alive_count();
    }

    fn vertex_count(&self) -> usize {
        self.rendered_alive
    }

    fn clone_boxed(&self) -> Box<dyn ParticleRenderer> {
        Box::new(self.clone())
    }

    fn describe(&self, out: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(out, "CountingRenderer")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn counters(system: &ParticleSystem) -> &CountingRenderer {
    system
        .renderer()
        .as_any()
        .downcast_ref::<CountingRenderer>()
        .unwrap()
}

#[test]
fn test_birth_rate_converges_over_many_ticks() {
    // 10 births/s sampled at dt = 1/7 s never divides evenly; the
    // accumulator must still land within one birth of rate * time.
    let mut system = ParticleSystem::new(
        2000,
        Box::new(PointEmitter::new(Vec3::ZERO)),
        Box::new(CountingRenderer::default()),
    )
    .with_birth_rate(10.0)
    .with_lifespan(1_000.0)
    .with_seed(1);

    system.start();
    let dt = 1.0 / 7.0;
    for _ in 0..700 {
        system.update(dt);
    }

    let expected = 10.0 * 700.0 * dt;
    let births = counters(&system).births as f32;
    assert!(
        (births - expected).abs() <= 1.0,
        "expected ~{} births, got {}",
        expected,
        births
    );
}

#[test]
fn test_arc_fountain_steady_state() {
    // 5 births/s with a 2 s lifespan settles around 10 alive; after one
    // simulated second roughly 5 particles exist, all on the arc's circle.
    let mut system = ParticleSystem::new(
        50,
        Box::new(ArcEmitter::new(1.0, 0.0, PI).with_seed(3)),
        Box::new(CountingRenderer::default()),
    )
    .with_birth_rate(5.0)
    .with_lifespan(2.0)
    .with_seed(1);

    system.start();
    let dt = 1.0 / 60.0;
    for _ in 0..60 {
        system.update(dt);
    }

    let alive = system.alive_count() as i64;
    assert!((alive - 5).abs() <= 1, "alive = {}", alive);

    for (_, p) in system.pool().iter_alive() {
        assert_eq!(p.motion.position.z, 0.0);
        assert!((p.motion.position.length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn test_pool_invariants_across_resize_and_ticks() {
    let mut system = ParticleSystem::new(
        32,
        Box::new(PointEmitter::new(Vec3::ZERO)),
        Box::new(CountingRenderer::default()),
    )
    .with_birth_rate(20.0)
    .with_lifespan(5.0)
    .with_seed(1);

    system.start();
    for _ in 0..30 {
        system.update(0.1);
        assert!(system.alive_count() <= system.pool().capacity());
    }

    system.resize(8);
    assert!(system.alive_count() <= 8);

    // Renderer saw a kill for every pool death, including truncation.
    let total_births = counters(&system).births;
    let total_kills = counters(&system).kills;
    assert_eq!(total_births - total_kills, system.alive_count());

    // The system keeps running correctly at the smaller capacity.
    for _ in 0..30 {
        system.update(0.1);
        assert!(system.alive_count() <= 8);
    }
    assert_eq!(system.state(), SystemState::Running);
}

#[test]
fn test_soft_stop_reaches_stopped_without_intervention() {
    let mut system = ParticleSystem::new(
        64,
        Box::new(PointEmitter::new(Vec3::ZERO)),
        Box::new(CountingRenderer::default()),
    )
    .with_birth_rate(10.0)
    .with_lifespan(0.5)
    .with_seed(1);

    system.start();
    for _ in 0..20 {
        system.update(0.05);
    }
    system.soft_stop();

    for _ in 0..20 {
        system.update(0.05);
    }
    assert_eq!(system.state(), SystemState::Stopped);
    assert_eq!(system.alive_count(), 0);
}
