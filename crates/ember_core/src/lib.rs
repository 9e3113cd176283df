//! Core types for the Ember particle engine
//!
//! This crate provides the simulation half of the engine:
//!
//! - [`Particle`] - a single pool slot: motion, age, lifespan
//! - [`ParticlePool`] - fixed-capacity arena with free/alive bookkeeping
//! - [`Emitter`] - strategy trait computing newborn placement, plus the
//!   shape variants (point, box, disc, line, rectangle, sphere, ring, arc,
//!   tangent ring)
//! - [`ParticleRenderer`] - strategy trait implemented by the buffer
//!   renderers in `ember_render`
//! - [`ParticleSystem`] - orchestrator running the per-tick
//!   birth/age/death/render cycle
//!
//! Everything here is single-threaded and synchronous: one tick at a time,
//! driven by the owning simulation loop.

mod particle;
mod pool;
mod renderer;
mod system;

pub mod emitter;

pub use particle::Particle;
pub use pool::ParticlePool;
pub use renderer::{AlphaMode, ParticleRenderer};
pub use system::{ParticleSystem, SystemState};

pub use emitter::{
    ArcEmitter, BoxEmitter, DiscEmitter, Emitter, LineEmitter, PointEmitter,
    RectangleEmitter, RingEmitter, SphereEmitter, TangentRingEmitter,
};

// Re-export the integrator boundary for convenient access through ember_core
pub use ember_physics::{BallisticIntegrator, Integrator, LinearIntegrator, Motion};

// Re-export the vector type used throughout the public API
pub use ember_math::Vec3;
