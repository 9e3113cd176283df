//! Volumetric shapes: box interior, sphere surface

use super::{spread_sample, Emitter};
use ember_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Emits uniformly inside an axis-aligned box centered on the origin
#[derive(Clone, Debug)]
pub struct BoxEmitter {
    half_extents: Vec3,
    amplitude: f32,
    rng: StdRng,
    last_position: Vec3,
}

impl BoxEmitter {
    pub fn new(half_extents: Vec3) -> Self {
        debug_assert!(
            half_extents.x >= 0.0 && half_extents.y >= 0.0 && half_extents.z >= 0.0
        );
        Self {
            half_extents: Vec3::new(
                half_extents.x.max(0.0),
                half_extents.y.max(0.0),
                half_extents.z.max(0.0),
            ),
            amplitude: 0.0,
            rng: StdRng::from_entropy(),
            last_position: Vec3::ZERO,
        }
    }

    /// Speed of the radiating velocity hint
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Seed the sampling RNG for deterministic output
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    fn axis(&mut self, extent: f32) -> f32 {
        if extent > 0.0 {
            self.rng.gen_range(-extent..=extent)
        } else {
            0.0
        }
    }
}

impl Emitter for BoxEmitter {
    fn generate_position(&mut self) -> Vec3 {
        let x = self.axis(self.half_extents.x);
        let y = self.axis(self.half_extents.y);
        let z = self.axis(self.half_extents.z);
        self.last_position = Vec3::new(x, y, z);
        self.last_position
    }

    fn generate_velocity(&mut self) -> Vec3 {
        if self.last_position.length_squared() > 0.0 {
            self.last_position.normalized() * self.amplitude
        } else {
            Vec3::ZERO
        }
    }

    fn clone_boxed(&self) -> Box<dyn Emitter> {
        Box::new(self.clone())
    }

    fn describe(&self, out: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(
            out,
            "BoxEmitter {{ half_extents: ({:.3}, {:.3}, {:.3}), amplitude: {:.3} }}",
            self.half_extents.x, self.half_extents.y, self.half_extents.z, self.amplitude
        )
    }
}

/// Emits uniformly on the surface of a sphere centered on the origin
///
/// Direction sampling uses the z/phi parameterization, which is uniform
/// over the surface without an extra distribution crate.
#[derive(Clone, Debug)]
pub struct SphereEmitter {
    radius: f32,
    radius_spread: f32,
    amplitude: f32,
    rng: StdRng,
    last_direction: Vec3,
}

impl SphereEmitter {
    pub fn new(radius: f32) -> Self {
        debug_assert!(radius >= 0.0);
        Self {
            radius: radius.max(0.0),
            radius_spread: 0.0,
            amplitude: 0.0,
            rng: StdRng::from_entropy(),
            last_direction: Vec3::Z,
        }
    }

    /// Additive uniform perturbation of the sampled radius
    pub fn with_radius_spread(mut self, spread: f32) -> Self {
        debug_assert!(spread >= 0.0);
        self.radius_spread = spread.max(0.0);
        self
    }

    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Emitter for SphereEmitter {
    fn generate_position(&mut self) -> Vec3 {
        let z: f32 = self.rng.gen_range(-1.0..=1.0);
        let phi: f32 = self.rng.gen_range(0.0..std::f32::consts::TAU);
        let rxy = (1.0 - z * z).max(0.0).sqrt();
        self.last_direction = Vec3::new(rxy * phi.cos(), rxy * phi.sin(), z);
        let r = self.radius + spread_sample(&mut self.rng, self.radius_spread);
        self.last_direction * r
    }

    fn generate_velocity(&mut self) -> Vec3 {
        self.last_direction * self.amplitude
    }

    fn clone_boxed(&self) -> Box<dyn Emitter> {
        Box::new(self.clone())
    }

    fn describe(&self, out: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(
            out,
            "SphereEmitter {{ radius: {:.3}, radius_spread: {:.3}, amplitude: {:.3} }}",
            self.radius, self.radius_spread, self.amplitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_samples_in_bounds() {
        let mut e = BoxEmitter::new(Vec3::new(1.0, 2.0, 3.0)).with_seed(42);
        for _ in 0..1000 {
            let p = e.generate_position();
            assert!(p.x.abs() <= 1.0);
            assert!(p.y.abs() <= 2.0);
            assert!(p.z.abs() <= 3.0);
        }
    }

    #[test]
    fn test_flat_box_axis_pinned() {
        let mut e = BoxEmitter::new(Vec3::new(1.0, 0.0, 1.0)).with_seed(42);
        for _ in 0..100 {
            assert_eq!(e.generate_position().y, 0.0);
        }
    }

    #[test]
    fn test_sphere_samples_on_surface() {
        let mut e = SphereEmitter::new(2.0).with_seed(42);
        for _ in 0..1000 {
            let p = e.generate_position();
            assert!((p.length() - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_sphere_covers_both_hemispheres() {
        let mut e = SphereEmitter::new(1.0).with_seed(42);
        let (mut above, mut below) = (0, 0);
        for _ in 0..10_000 {
            if e.generate_position().z >= 0.0 {
                above += 1;
            } else {
                below += 1;
            }
        }
        // Uniform surface sampling splits roughly evenly across z = 0.
        assert!(above > 4_000 && below > 4_000);
    }

    #[test]
    fn test_sphere_velocity_is_outward() {
        let mut e = SphereEmitter::new(1.5).with_amplitude(4.0).with_seed(7);
        for _ in 0..100 {
            let p = e.generate_position();
            let v = e.generate_velocity();
            assert!((v.length() - 4.0).abs() < 1e-4);
            assert!(p.dot(v) > 0.0);
        }
    }
}
