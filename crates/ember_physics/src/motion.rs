//! Kinematic state of a single particle

use ember_math::Vec3;

/// Position and velocity of a particle, advanced by an [`Integrator`]
///
/// [`Integrator`]: crate::Integrator
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Motion {
    /// Position in world space
    pub position: Vec3,
    /// Velocity in units per second
    pub velocity: Vec3,
}

impl Motion {
    /// Create motion state from an initial position and velocity
    #[inline]
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Motion at rest at the given position
    #[inline]
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
        }
    }
}
