//! Single-point emission

use super::Emitter;
use ember_math::Vec3;

/// Emits every particle from one fixed point with one fixed velocity
///
/// The degenerate baseline variant; deterministic, no sampling involved.
#[derive(Clone, Debug, Default)]
pub struct PointEmitter {
    point: Vec3,
    velocity: Vec3,
}

impl PointEmitter {
    /// Emitter at `point` with zero initial velocity
    pub fn new(point: Vec3) -> Self {
        Self {
            point,
            velocity: Vec3::ZERO,
        }
    }

    /// Set the fixed initial velocity handed to every newborn
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Emission point
    pub fn point(&self) -> Vec3 {
        self.point
    }
}

impl Emitter for PointEmitter {
    fn generate_position(&mut self) -> Vec3 {
        self.point
    }

    fn generate_velocity(&mut self) -> Vec3 {
        self.velocity
    }

    fn clone_boxed(&self) -> Box<dyn Emitter> {
        Box::new(self.clone())
    }

    fn describe(&self, out: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(
            out,
            "PointEmitter {{ point: ({:.3}, {:.3}, {:.3}), velocity: ({:.3}, {:.3}, {:.3}) }}",
            self.point.x,
            self.point.y,
            self.point.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_emitter_fixed_output() {
        let mut e = PointEmitter::new(Vec3::new(1.0, 2.0, 3.0)).with_velocity(Vec3::Y);
        for _ in 0..10 {
            assert_eq!(e.generate_position(), Vec3::new(1.0, 2.0, 3.0));
            assert_eq!(e.generate_velocity(), Vec3::Y);
        }
    }

    #[test]
    fn test_describe_names_variant() {
        let e = PointEmitter::new(Vec3::ZERO);
        let mut s = String::new();
        e.describe(&mut s).unwrap();
        assert!(s.starts_with("PointEmitter"));
    }
}
