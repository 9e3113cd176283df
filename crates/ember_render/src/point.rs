//! Point-sprite renderer

use crate::types::{lerp_color, ColoredVertex};
use ember_core::{AlphaMode, ParticlePool, ParticleRenderer};
use std::any::Any;

/// Renders each alive particle as a single vertex at its current position
///
/// Output is exactly `alive_count` vertices in ascending slot order. The
/// point size is advisory metadata for the upload path; it does not change
/// the buffer layout.
#[derive(Clone, Debug)]
pub struct PointRenderer {
    head_color: [f32; 4],
    tail_color: [f32; 4],
    alpha_mode: AlphaMode,
    point_size: f32,
    active: Vec<bool>,
    vertices: Vec<ColoredVertex>,
}

impl PointRenderer {
    pub fn new(head_color: [f32; 4], tail_color: [f32; 4]) -> Self {
        Self {
            head_color,
            tail_color,
            alpha_mode: AlphaMode::LifeFraction,
            point_size: 1.0,
            active: Vec::new(),
            vertices: Vec::new(),
        }
    }

    pub fn with_alpha_mode(mut self, mode: AlphaMode) -> Self {
        self.alpha_mode = mode;
        self
    }

    /// Advisory sprite size for the upload path
    pub fn with_point_size(mut self, size: f32) -> Self {
        debug_assert!(size > 0.0);
        self.point_size = size.max(f32::EPSILON);
        self
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    /// The vertex buffer produced by the last `render` call
    pub fn vertices(&self) -> &[ColoredVertex] {
        &self.vertices
    }
}

impl ParticleRenderer for PointRenderer {
    fn init_geoms(&mut self, pool_size: usize) {
        self.active = vec![false; pool_size];
        self.vertices = Vec::with_capacity(pool_size);
    }

    fn birth_particle(&mut self, index: usize) {
        if let Some(slot) = self.active.get_mut(index) {
            *slot = true;
        }
    }

    fn kill_particle(&mut self, index: usize) {
        if let Some(slot) = self.active.get_mut(index) {
            *slot = false;
        }
    }

    fn resize_pool(&mut self, new_size: usize) {
        self.active.resize(new_size, false);
    }

    fn render(&mut self, pool: &ParticlePool) {
        self.vertices.clear();
        for (index, particle) in pool.iter_alive() {
            debug_assert!(self.active.get(index).copied().unwrap_or(false));
            let t = self.alpha_mode.interpolant(particle.age, particle.lifespan);
            let color = lerp_color(self.head_color, self.tail_color, t);
            self.vertices
                .push(ColoredVertex::new(particle.motion.position.to_array(), color));
        }
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn clone_boxed(&self) -> Box<dyn ParticleRenderer> {
        Box::new(self.clone())
    }

    fn describe(&self, out: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(
            out,
            "PointRenderer {{ head: {:?}, tail: {:?}, alpha_mode: {}, point_size: {:.2} }}",
            self.head_color,
            self.tail_color,
            self.alpha_mode.name(),
            self.point_size
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
