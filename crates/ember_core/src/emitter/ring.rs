//! Circular shapes: full ring, partial arc, tangent ring
//!
//! All three emit on a circle in the XY plane centered on the origin. They
//! differ in angular coverage and in the direction of the velocity hint.

use super::{spread_sample, Emitter};
use ember_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Emits on a full circle, velocity radiating outward
#[derive(Clone, Debug)]
pub struct RingEmitter {
    radius: f32,
    radius_spread: f32,
    amplitude: f32,
    rng: StdRng,
    last_theta: f32,
}

impl RingEmitter {
    pub fn new(radius: f32) -> Self {
        debug_assert!(radius >= 0.0);
        Self {
            radius: radius.max(0.0),
            radius_spread: 0.0,
            amplitude: 0.0,
            rng: StdRng::from_entropy(),
            last_theta: 0.0,
        }
    }

    /// Additive uniform perturbation of the sampled radius
    pub fn with_radius_spread(mut self, spread: f32) -> Self {
        debug_assert!(spread >= 0.0);
        self.radius_spread = spread.max(0.0);
        self
    }

    /// Speed of the outward velocity hint
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Seed the sampling RNG for deterministic output
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Emitter for RingEmitter {
    fn generate_position(&mut self) -> Vec3 {
        self.last_theta = self.rng.gen_range(0.0..TAU);
        let r = self.radius + spread_sample(&mut self.rng, self.radius_spread);
        Vec3::new(r * self.last_theta.cos(), r * self.last_theta.sin(), 0.0)
    }

    fn generate_velocity(&mut self) -> Vec3 {
        Vec3::new(
            self.last_theta.cos() * self.amplitude,
            self.last_theta.sin() * self.amplitude,
            0.0,
        )
    }

    fn clone_boxed(&self) -> Box<dyn Emitter> {
        Box::new(self.clone())
    }

    fn describe(&self, out: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(
            out,
            "RingEmitter {{ radius: {:.3}, radius_spread: {:.3}, amplitude: {:.3} }}",
            self.radius, self.radius_spread, self.amplitude
        )
    }
}

/// Emits on a partial circle between two angles
///
/// Angles are radians, counter-clockwise. When `start >= end` the span
/// wraps: the sample is drawn from `[start, end + 2π]` and used without
/// normalization. A fixed `π/2` phase offset is applied before projecting
/// to coordinates, so angle 0 emits along +Y rather than +X.
#[derive(Clone, Debug)]
pub struct ArcEmitter {
    radius: f32,
    radius_spread: f32,
    start_theta: f32,
    end_theta: f32,
    amplitude: f32,
    rng: StdRng,
    last_theta: f32,
}

impl ArcEmitter {
    pub fn new(radius: f32, start_theta: f32, end_theta: f32) -> Self {
        debug_assert!(radius >= 0.0);
        Self {
            radius: radius.max(0.0),
            radius_spread: 0.0,
            start_theta,
            end_theta,
            amplitude: 0.0,
            rng: StdRng::from_entropy(),
            last_theta: 0.0,
        }
    }

    /// Additive uniform perturbation of the sampled radius
    pub fn with_radius_spread(mut self, spread: f32) -> Self {
        debug_assert!(spread >= 0.0);
        self.radius_spread = spread.max(0.0);
        self
    }

    /// Speed of the outward velocity hint
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Seed the sampling RNG for deterministic output
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Sample an angle on the arc, before the phase offset
    ///
    /// A wrapping span (`start >= end`) interpolates into `[start, end +
    /// 2π]`; the result may exceed 2π and is deliberately left
    /// un-normalized.
    pub fn sample_angle(&mut self) -> f32 {
        let end = if self.start_theta < self.end_theta {
            self.end_theta
        } else {
            self.end_theta + TAU
        };
        let t: f32 = self.rng.gen_range(0.0..=1.0);
        self.start_theta + (end - self.start_theta) * t
    }
}

impl Emitter for ArcEmitter {
    fn generate_position(&mut self) -> Vec3 {
        self.last_theta = self.sample_angle() + FRAC_PI_2;
        let r = self.radius + spread_sample(&mut self.rng, self.radius_spread);
        Vec3::new(r * self.last_theta.cos(), r * self.last_theta.sin(), 0.0)
    }

    fn generate_velocity(&mut self) -> Vec3 {
        Vec3::new(
            self.last_theta.cos() * self.amplitude,
            self.last_theta.sin() * self.amplitude,
            0.0,
        )
    }

    fn clone_boxed(&self) -> Box<dyn Emitter> {
        Box::new(self.clone())
    }

    fn describe(&self, out: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(
            out,
            "ArcEmitter {{ radius: {:.3}, radius_spread: {:.3}, start: {:.1}°, end: {:.1}°, amplitude: {:.3} }}",
            self.radius,
            self.radius_spread,
            self.start_theta.to_degrees(),
            self.end_theta.to_degrees(),
            self.amplitude
        )
    }
}

/// Emits on a full circle with the velocity hint tangent to it
///
/// Tangent direction is counter-clockwise; a negative amplitude reverses
/// the swirl.
#[derive(Clone, Debug)]
pub struct TangentRingEmitter {
    radius: f32,
    radius_spread: f32,
    amplitude: f32,
    rng: StdRng,
    last_theta: f32,
}

impl TangentRingEmitter {
    pub fn new(radius: f32) -> Self {
        debug_assert!(radius >= 0.0);
        Self {
            radius: radius.max(0.0),
            radius_spread: 0.0,
            amplitude: 0.0,
            rng: StdRng::from_entropy(),
            last_theta: 0.0,
        }
    }

    /// Additive uniform perturbation of the sampled radius
    pub fn with_radius_spread(mut self, spread: f32) -> Self {
        debug_assert!(spread >= 0.0);
        self.radius_spread = spread.max(0.0);
        self
    }

    /// Tangential speed; sign selects the swirl direction
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Seed the sampling RNG for deterministic output
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Emitter for TangentRingEmitter {
    fn generate_position(&mut self) -> Vec3 {
        self.last_theta = self.rng.gen_range(0.0..TAU);
        let r = self.radius + spread_sample(&mut self.rng, self.radius_spread);
        Vec3::new(r * self.last_theta.cos(), r * self.last_theta.sin(), 0.0)
    }

    fn generate_velocity(&mut self) -> Vec3 {
        Vec3::new(
            -self.last_theta.sin() * self.amplitude,
            self.last_theta.cos() * self.amplitude,
            0.0,
        )
    }

    fn clone_boxed(&self) -> Box<dyn Emitter> {
        Box::new(self.clone())
    }

    fn describe(&self, out: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(
            out,
            "TangentRingEmitter {{ radius: {:.3}, radius_spread: {:.3}, amplitude: {:.3} }}",
            self.radius, self.radius_spread, self.amplitude
        )
    }
}
