//! Ember - a real-time particle simulation engine
//!
//! Ember simulates pools of short-lived particles and turns them into
//! GPU-ready vertex buffers every tick. The workspace splits into:
//!
//! - `ember_math` - small vector math library
//! - `ember_physics` - motion state and the integrator boundary
//! - `ember_core` - pool, emitters, system orchestration
//! - `ember_render` - buffer-generating renderers
//!
//! This crate ties them together behind a configuration layer and ships a
//! headless demo binary.

pub mod config;

pub use ember_core::{
    AlphaMode, ArcEmitter, BoxEmitter, DiscEmitter, Emitter, LineEmitter, Particle,
    ParticlePool, ParticleRenderer, ParticleSystem, PointEmitter, RectangleEmitter,
    RingEmitter, SphereEmitter, SystemState, TangentRingEmitter,
};
pub use ember_physics::{BallisticIntegrator, Integrator, LinearIntegrator, Motion};
pub use ember_render::{ColoredVertex, LineRenderer, PointRenderer, SparkleRenderer};

pub use ember_math::Vec3;
