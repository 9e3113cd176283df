//! Line-segment renderer

use crate::types::{lerp_color, ColoredVertex};
use ember_core::{AlphaMode, ParticlePool, ParticleRenderer};
use std::any::Any;

/// Renders each alive particle as a line segment from its previous
/// position to its current one
///
/// Output is exactly `2 * alive_count` vertices, index-compacted in
/// ascending slot order; dead slots leave no placeholder. Both endpoints of
/// a segment carry the same color, interpolated head -> tail by the alpha
/// mode's interpolant.
#[derive(Clone, Debug)]
pub struct LineRenderer {
    head_color: [f32; 4],
    tail_color: [f32; 4],
    alpha_mode: AlphaMode,
    /// Per-slot liveness mirror maintained from birth/kill notifications
    active: Vec<bool>,
    vertices: Vec<ColoredVertex>,
}

impl LineRenderer {
    pub fn new(head_color: [f32; 4], tail_color: [f32; 4]) -> Self {
        Self {
            head_color,
            tail_color,
            alpha_mode: AlphaMode::LifeFraction,
            active: Vec::new(),
            vertices: Vec::new(),
        }
    }

    /// Select how segment color fades over a particle's lifetime
    pub fn with_alpha_mode(mut self, mode: AlphaMode) -> Self {
        self.alpha_mode = mode;
        self
    }

    /// The vertex buffer produced by the last `render` call
    pub fn vertices(&self) -> &[ColoredVertex] {
        &self.vertices
    }

    pub fn alpha_mode(&self) -> AlphaMode {
        self.alpha_mode
    }
}

impl ParticleRenderer for LineRenderer {
    fn init_geoms(&mut self, pool_size: usize) {
        self.active = vec![false; pool_size];
        self.vertices = Vec::with_capacity(pool_size * 2);
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
                .push(ColoredVertex::new(particle.last_position.to_array(), color));
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
            "LineRenderer {{ head: {:?}, tail: {:?}, alpha_mode: {} }}",
            self.head_color,
            self.tail_color,
            self.alpha_mode.name()
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
