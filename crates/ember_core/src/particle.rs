//! Particle slot data

use ember_math::Vec3;
use ember_physics::Motion;

/// A single particle slot in the pool
///
/// Identity is the slot index, which stays stable while the particle is
/// alive. Position and velocity live in [`Motion`] and are advanced by the
/// external integrator; the pool only manages liveness.
#[derive(Clone, Copy, Debug, Default)]
pub struct Particle {
    /// Position and velocity, advanced by the integrator
    pub motion: Motion,
    /// Position at the previous tick (consumed by the line renderer)
    pub last_position: Vec3,
    /// Seconds since birth
    pub age: f32,
    /// Age at which the particle expires
    pub lifespan: f32,
    /// Liveness flag, managed by the pool
    pub(crate) alive: bool,
}

impl Particle {
    /// Whether this slot currently holds a live particle
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Fraction of lifespan elapsed, clamped to [0, 1]
    ///
    /// A non-positive lifespan reports 1.0 (already expired).
    #[inline]
    pub fn life_fraction(&self) -> f32 {
        if self.lifespan > 0.0 {
            (self.age / self.lifespan).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Reset this slot for a new birth
    pub(crate) fn respawn(&mut self, motion: Motion, lifespan: f32) {
        self.motion = motion;
        self.last_position = motion.position;
        self.age = 0.0;
        self.lifespan = lifespan;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead() {
        let p = Particle::default();
        assert!(!p.is_alive());
        assert_eq!(p.age, 0.0);
    }

    #[test]
    fn test_life_fraction() {
        let mut p = Particle::default();
        p.lifespan = 2.0;
        p.age = 0.5;
        assert!((p.life_fraction() - 0.25).abs() < 0.0001);

        p.age = 4.0;
        assert_eq!(p.life_fraction(), 1.0);
    }

    #[test]
    fn test_life_fraction_zero_lifespan() {
        let p = Particle::default();
        assert_eq!(p.life_fraction(), 1.0);
    }

    #[test]
    fn test_respawn_resets_state() {
        let mut p = Particle::default();
        p.age = 3.0;

        let motion = Motion::new(Vec3::X, Vec3::Y);
        p.respawn(motion, 2.0);

        assert_eq!(p.age, 0.0);
        assert_eq!(p.lifespan, 2.0);
        assert_eq!(p.motion.position, Vec3::X);
        assert_eq!(p.last_position, Vec3::X);
    }
}
