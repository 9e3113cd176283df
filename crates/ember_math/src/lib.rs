//! Math primitives for the Ember particle engine
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//!
//! Also provides a scalar [`lerp`] helper used by the color and radius
//! interpolation in the renderers.

mod vec3;

pub use vec3::Vec3;

/// Linear interpolation between two scalars
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(2.0, 4.0, 0.25), 2.5);
    }
}
