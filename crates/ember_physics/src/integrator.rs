//! Integrator trait and reference integrators

use crate::Motion;
use ember_math::Vec3;
use serde::{Serialize, Deserialize};

/// Advances particle motion each tick
///
/// The particle system calls [`bind`] exactly once per particle, right after
/// the emitter has placed it (position and velocity hint already set), and
/// [`step`] once per tick for every particle that survives aging. Forces are
/// internal to the implementation; the caller only sees updated motion.
///
/// [`bind`]: Integrator::bind
/// [`step`]: Integrator::step
pub trait Integrator {
    /// Attach initial velocity/force state to a freshly emitted particle
    ///
    /// `motion` arrives with the emitter-assigned position and velocity
    /// hint; implementations may adjust either.
    fn bind(&mut self, motion: &mut Motion);

    /// Advance motion by `dt` seconds
    fn step(&mut self, motion: &mut Motion, dt: f32);

    /// Produce an independent owned copy of this integrator
    fn clone_boxed(&self) -> Box<dyn Integrator>;
}

/// Constant-velocity integrator: position advances, velocity is untouched
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearIntegrator;

impl Integrator for LinearIntegrator {
    fn bind(&mut self, _motion: &mut Motion) {}

    fn step(&mut self, motion: &mut Motion, dt: f32) {
        motion.position += motion.velocity * dt;
    }

    fn clone_boxed(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }
}

/// Gravity + linear drag integrator
///
/// Velocity integration mirrors the usual semi-implicit Euler scheme:
/// velocity is updated first, then position advances with the new velocity.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BallisticIntegrator {
    /// Acceleration applied every second (world units / s^2)
    pub gravity: Vec3,
    /// Fraction of velocity removed per second (0.0 = none)
    pub drag: f32,
}

impl Default for BallisticIntegrator {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
            drag: 0.0,
        }
    }
}

impl BallisticIntegrator {
    /// Create an integrator with the given gravity and no drag
    pub fn new(gravity: Vec3) -> Self {
        Self { gravity, drag: 0.0 }
    }

    /// Set the drag coefficient
    pub fn with_drag(mut self, drag: f32) -> Self {
        self.drag = drag.max(0.0);
        self
    }
}

impl Integrator for BallisticIntegrator {
    fn bind(&mut self, _motion: &mut Motion) {}

    fn step(&mut self, motion: &mut Motion, dt: f32) {
        motion.velocity += self.gravity * dt;
        if self.drag > 0.0 {
            let damping = (1.0 - self.drag * dt).max(0.0);
            motion.velocity *= damping;
        }
        motion.position += motion.velocity * dt;
    }

    fn clone_boxed(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }
}
