//! Physics integrator boundary for the Ember particle engine
//!
//! The particle core treats motion as opaque state advanced by an external
//! integrator. This crate defines that boundary:
//!
//! - [`Motion`] - position and velocity of a single particle
//! - [`Integrator`] - trait implemented by force systems
//! - [`LinearIntegrator`] - constant-velocity reference integrator
//! - [`BallisticIntegrator`] - gravity + drag reference integrator
//!
//! Real force systems (wind fields, attractors, ...) plug in behind
//! [`Integrator`]; the particle core never inspects forces.

mod integrator;
mod motion;

pub use integrator::{BallisticIntegrator, Integrator, LinearIntegrator};
pub use motion::Motion;
