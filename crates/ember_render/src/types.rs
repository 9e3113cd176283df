//! Buffer-compatible vertex data
//!
//! Layouts are plain-old-data and `repr(C)` so a renderer's output slice
//! can be handed to a GPU upload path byte-for-byte.

use bytemuck::{Pod, Zeroable};
use ember_math::lerp;

/// A position/color vertex, the unit of every renderer's output
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ColoredVertex {
    /// Position in world space (x, y, z)
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl ColoredVertex {
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Component-wise linear interpolation between two RGBA colors
pub fn lerp_color(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        lerp(a[0], b[0], t),
        lerp(a[1], b[1], t),
        lerp(a[2], b[2], t),
        lerp(a[3], b[3], t),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        // 3 + 4 floats, tightly packed.
        assert_eq!(std::mem::size_of::<ColoredVertex>(), 28);
        assert_eq!(std::mem::align_of::<ColoredVertex>(), 4);
    }

    #[test]
    fn test_vertex_is_pod() {
        let v = ColoredVertex::new([1.0, 2.0, 3.0], [0.5, 0.5, 0.5, 1.0]);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 28);
        let back: &ColoredVertex = bytemuck::from_bytes(bytes);
        assert_eq!(*back, v);
    }

    #[test]
    fn test_lerp_color_endpoints() {
        let a = [1.0, 0.0, 0.0, 1.0];
        let b = [0.0, 0.0, 1.0, 0.0];
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), [0.5, 0.0, 0.5, 0.5]);
    }
}
