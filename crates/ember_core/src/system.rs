//! Per-tick orchestration
//!
//! [`ParticleSystem`] owns one pool, one emitter, one renderer and one
//! integrator, and runs the birth/age/death/render cycle each `update`.
//! Everything is synchronous and single-threaded; the owning loop calls
//! `update` once per tick and must not call it reentrantly.

use crate::emitter::Emitter;
use crate::renderer::ParticleRenderer;
use crate::ParticlePool;
use ember_physics::{Integrator, LinearIntegrator, Motion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Observable system state
///
/// `Idle` is derived, not stored: a running system with zero alive
/// particles reports `Idle` and returns to `Running` as soon as a birth
/// lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemState {
    Stopped,
    Running,
    SoftStopping,
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Stopped,
    Running,
    SoftStopping,
}

/// Orchestrator for one particle effect
pub struct ParticleSystem {
    pool: ParticlePool,
    emitter: Box<dyn Emitter>,
    renderer: Box<dyn ParticleRenderer>,
    integrator: Box<dyn Integrator>,
    birth_rate: f32,
    birth_accumulator: f32,
    lifespan: f32,
    lifespan_spread: f32,
    rng: StdRng,
    phase: Phase,
    /// Reusable index buffer so the tick loop stays allocation-free
    scratch: Vec<usize>,
}

impl ParticleSystem {
    /// Build a stopped system with `capacity` slots
    ///
    /// The renderer is initialized for the pool size immediately. The
    /// integrator defaults to [`LinearIntegrator`].
    pub fn new(
        capacity: usize,
        emitter: Box<dyn Emitter>,
        mut renderer: Box<dyn ParticleRenderer>,
    ) -> Self {
        renderer.init_geoms(capacity);
        Self {
            pool: ParticlePool::new(capacity),
            emitter,
            renderer,
            integrator: Box::new(LinearIntegrator),
            birth_rate: 0.0,
            birth_accumulator: 0.0,
            lifespan: 1.0,
            lifespan_spread: 0.0,
            rng: StdRng::from_entropy(),
            phase: Phase::Stopped,
            scratch: Vec::new(),
        }
    }

    /// Births per second; fractional rates accumulate across ticks
    pub fn with_birth_rate(mut self, rate: f32) -> Self {
        debug_assert!(rate >= 0.0);
        self.birth_rate = rate.max(0.0);
        self
    }

    /// Base lifespan in seconds for newborn particles
    pub fn with_lifespan(mut self, lifespan: f32) -> Self {
        debug_assert!(lifespan >= 0.0);
        self.lifespan = lifespan.max(0.0);
        self
    }

    /// Additive uniform perturbation of newborn lifespans
    pub fn with_lifespan_spread(mut self, spread: f32) -> Self {
        debug_assert!(spread >= 0.0);
        self.lifespan_spread = spread.max(0.0);
        self
    }

    /// Replace the default linear integrator
    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.integrator = integrator;
        self
    }

    /// Seed the lifespan-spread RNG for deterministic runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Current state; `Idle` when running with nothing alive
    pub fn state(&self) -> SystemState {
        match self.phase {
            Phase::Stopped => SystemState::Stopped,
            Phase::SoftStopping => SystemState::SoftStopping,
            Phase::Running if self.pool.is_empty() => SystemState::Idle,
            Phase::Running => SystemState::Running,
        }
    }

    /// Begin (or resume) spawning
    pub fn start(&mut self) {
        log::info!("system: start");
        self.phase = Phase::Running;
    }

    /// Stop spawning but let existing particles age out
    ///
    /// The system transitions to `Stopped` on its own once the pool drains.
    pub fn soft_stop(&mut self) {
        if self.phase == Phase::Running {
            log::info!("system: soft stop, {} alive", self.pool.alive_count());
            self.phase = Phase::SoftStopping;
        }
    }

    /// Kill every particle immediately and stop
    ///
    /// Valid from any state. The renderer is notified per index before the
    /// pool slot is freed.
    pub fn hard_clear(&mut self) {
        self.scratch.clear();
        self.scratch.extend(self.pool.alive_indices());
        for i in 0..self.scratch.len() {
            let index = self.scratch[i];
            self.renderer.kill_particle(index);
            self.pool.kill(index);
        }
        log::info!("system: hard clear, killed {}", self.scratch.len());
        self.birth_accumulator = 0.0;
        self.phase = Phase::Stopped;
        self.renderer.render(&self.pool);
    }

    /// Change pool capacity; only valid between ticks
    ///
    /// Shrinking force-kills particles at truncated indices, with renderer
    /// notification per index before the slot disappears.
    pub fn resize(&mut self, new_capacity: usize) {
        for i in new_capacity..self.pool.capacity() {
            if self.pool.get(i).map_or(false, |p| p.is_alive()) {
                self.renderer.kill_particle(i);
            }
        }
        let killed = self.pool.resize(new_capacity);
        if !killed.is_empty() {
            log::debug!("system: resize to {} killed {} particles", new_capacity, killed.len());
        }
        self.renderer.resize_pool(new_capacity);
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// One full cycle: age and reap, integrate survivors, accumulate and
    /// place births, then regenerate the render buffer.
    pub fn update(&mut self, dt: f32) {
        debug_assert!(dt >= 0.0);
        let dt = dt.max(0.0);

        self.age_and_integrate(dt);

        if self.phase == Phase::SoftStopping && self.pool.is_empty() {
            log::info!("system: drained");
            self.phase = Phase::Stopped;
            self.birth_accumulator = 0.0;
        }

        if self.phase == Phase::Running && self.birth_rate > 0.0 {
            self.birth_accumulator += self.birth_rate * dt;
            let births = self.birth_accumulator.floor();
            self.birth_accumulator -= births;
            self.spawn(births as usize);
        }

        self.renderer.render(&self.pool);
    }

    /// Step 1 of the tick: age alive particles, reap expired ones, record
    /// last positions and integrate survivors
    fn age_and_integrate(&mut self, dt: f32) {
        self.scratch.clear();
        for index in 0..self.pool.capacity() {
            let Some(particle) = self.pool.get_mut(index) else {
                continue;
            };
            if !particle.is_alive() {
                continue;
            }
            particle.age += dt;
            if particle.age >= particle.lifespan {
                self.scratch.push(index);
            } else {
                particle.last_position = particle.motion.position;
                self.integrator.step(&mut particle.motion, dt);
            }
        }
        for i in 0..self.scratch.len() {
            let index = self.scratch[i];
            self.renderer.kill_particle(index);
            self.pool.kill(index);
        }
    }

    /// Steps 2-3 of the tick: place up to `count` newborns
    ///
    /// Saturation soft-drops the remainder; the deficit is not carried to
    /// the next tick.
    fn spawn(&mut self, count: usize) {
        for placed in 0..count {
            let Some(index) = self.pool.reserve() else {
                log::debug!(
                    "system: pool saturated at {}, dropping {} births",
                    self.pool.capacity(),
                    count - placed
                );
                break;
            };
            self.pool.birth(index);
            self.renderer.birth_particle(index);

            let position = self.emitter.generate_position();
            let velocity = self.emitter.generate_velocity();
            let mut motion = Motion::new(position, velocity);
            self.integrator.bind(&mut motion);

            let lifespan = (self.lifespan + self.sample_lifespan_spread()).max(0.0);
            if let Some(particle) = self.pool.get_mut(index) {
                particle.respawn(motion, lifespan);
            }
        }
    }

    fn sample_lifespan_spread(&mut self) -> f32 {
        if self.lifespan_spread > 0.0 {
            self.rng.gen_range(-self.lifespan_spread..=self.lifespan_spread)
        } else {
            0.0
        }
    }

    /// Swap the emission strategy; the old emitter is dropped
    pub fn set_emitter(&mut self, emitter: Box<dyn Emitter>) {
        self.emitter = emitter;
    }

    /// Swap the renderer; it is re-initialized for the current capacity
    /// and told about every currently alive particle
    pub fn set_renderer(&mut self, mut renderer: Box<dyn ParticleRenderer>) {
        renderer.init_geoms(self.pool.capacity());
        for index in self.pool.alive_indices() {
            renderer.birth_particle(index);
        }
        self.renderer = renderer;
    }

    /// Swap the motion integrator
    ///
    /// Existing particles keep their current motion; the new integrator
    /// only affects subsequent steps and births.
    pub fn set_integrator(&mut self, integrator: Box<dyn Integrator>) {
        self.integrator = integrator;
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn renderer(&self) -> &dyn ParticleRenderer {
        self.renderer.as_ref()
    }

    pub fn alive_count(&self) -> usize {
        self.pool.alive_count()
    }

    /// Diagnostic dump of the attached emitter and renderer
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = self.emitter.describe(&mut out);
        out.push('\n');
        let _ = self.renderer.describe(&mut out);
        out
    }
}
