//! Sparkle renderer

use crate::types::ColoredVertex;
use ember_core::{ParticlePool, ParticleRenderer};
use std::any::Any;

/// Renders each alive particle as a small three-axis star
///
/// Every particle contributes three axis-aligned spokes through its
/// position, drawn as six line segments (center to each spoke end), 12
/// vertices total. Spoke radius interpolates birth_radius -> death_radius
/// over the particle's life fraction; center vertices take `center_color`,
/// spoke ends take `edge_color`.
#[derive(Clone, Debug)]
pub struct SparkleRenderer {
    center_color: [f32; 4],
    edge_color: [f32; 4],
    birth_radius: f32,
    death_radius: f32,
    active: Vec<bool>,
    vertices: Vec<ColoredVertex>,
}

impl SparkleRenderer {
    pub fn new(center_color: [f32; 4], edge_color: [f32; 4]) -> Self {
        Self {
            center_color,
            edge_color,
            birth_radius: 0.1,
            death_radius: 0.0,
            active: Vec::new(),
            vertices: Vec::new(),
        }
    }

    /// Spoke radius at birth and at death; lerped by life fraction
    pub fn with_radii(mut self, birth_radius: f32, death_radius: f32) -> Self {
        debug_assert!(birth_radius >= 0.0 && death_radius >= 0.0);
        self.birth_radius = birth_radius.max(0.0);
        self.death_radius = death_radius.max(0.0);
        self
    }

    /// The vertex buffer produced by the last `render` call
    pub fn vertices(&self) -> &[ColoredVertex] {
        &self.vertices
    }

    fn push_spoke(&mut self, center: [f32; 3], axis: usize, radius: f32) {
        for sign in [1.0f32, -1.0] {
            let mut end = center;
            end[axis] += sign * radius;
            self.vertices.push(ColoredVertex::new(center, self.center_color));
            self.vertices.push(ColoredVertex::new(end, self.edge_color));
        }
    }
}

impl ParticleRenderer for SparkleRenderer {
    fn init_geoms(&mut self, pool_size: usize) {
        self.active = vec![false; pool_size];
        self.vertices = Vec::with_capacity(pool_size * 12);
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
        let (birth_r, death_r) = (self.birth_radius, self.death_radius);
        for (index, particle) in pool.iter_alive() {
            debug_assert!(self.active.get(index).copied().unwrap_or(false));
            let t = particle.life_fraction();
            let radius = ember_math::lerp(birth_r, death_r, t);
            let center = particle.motion.position.to_array();
            for axis in 0..3 {
                self.push_spoke(center, axis, radius);
            }
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
            "SparkleRenderer {{ center: {:?}, edge: {:?}, birth_radius: {:.3}, death_radius: {:.3} }}",
            self.center_color, self.edge_color, self.birth_radius, self.death_radius
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
