//! Renderer boundary
//!
//! Rendering is a strategy the system drives through [`ParticleRenderer`];
//! the concrete buffer builders live in `ember_render`. The system notifies
//! the renderer of every lifecycle event (birth, death, resize) by slot
//! index, then hands it the whole pool once per tick to regenerate output.

use crate::ParticlePool;
use std::any::Any;

/// Per-tick buffer generator driven by the particle system
///
/// Lifecycle calls mirror the pool exactly: every `birth`/`kill` the pool
/// sees is forwarded here with the same index, before `render` runs.
pub trait ParticleRenderer {
    /// Allocate per-slot bookkeeping for a pool of `pool_size` slots
    ///
    /// Discards any previous state; called once when the renderer is
    /// attached.
    fn init_geoms(&mut self, pool_size: usize);

    /// A particle was born into slot `index`
    fn birth_particle(&mut self, index: usize);

    /// The particle in slot `index` died
    fn kill_particle(&mut self, index: usize);

    /// The pool changed capacity to `new_size`
    ///
    /// Surviving slots keep their state at unchanged indices; the system
    /// has already issued `kill_particle` for every truncated slot.
    fn resize_pool(&mut self, new_size: usize);

    /// Regenerate the output buffer for exactly the alive particles
    ///
    /// Output is dense and index-compacted: dead slots leave no
    /// placeholder. Runs once per tick, after births and deaths.
    fn render(&mut self, pool: &ParticlePool);

    /// Number of vertices produced by the last `render` call
    fn vertex_count(&self) -> usize;

    /// Produce an independent owned copy with identical configuration
    ///
    /// Per-slot state and buffers are copied as-is; the copy observes
    /// lifecycle events independently from the clone point onward.
    fn clone_boxed(&self) -> Box<dyn ParticleRenderer>;

    /// Write a human-readable dump of the variant name and parameters
    fn describe(&self, out: &mut dyn std::fmt::Write) -> std::fmt::Result;

    /// Downcast support for callers that need the concrete buffer type
    fn as_any(&self) -> &dyn Any;
}

/// How vertex color interpolates across a particle's lifetime
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphaMode {
    /// Interpolant is `age / lifespan`, clamped to [0, 1]
    LifeFraction,
    /// Interpolant is always 0 (head color throughout)
    Constant,
    /// Sentinel for an unrecognized mode name; callers must check
    Invalid,
}

impl AlphaMode {
    /// Parse a mode from its configuration name
    ///
    /// Unknown names map to [`AlphaMode::Invalid`] rather than failing, so
    /// the caller decides how to report the error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "life_fraction" => Self::LifeFraction,
            "constant" => Self::Constant,
            _ => Self::Invalid,
        }
    }

    /// Canonical configuration name
    pub fn name(&self) -> &'static str {
        match self {
            Self::LifeFraction => "life_fraction",
            Self::Constant => "constant",
            Self::Invalid => "invalid",
        }
    }

    /// Color interpolant for a particle of the given age and lifespan
    ///
    /// `Invalid` behaves as `Constant`; it should have been rejected at
    /// configuration time.
    pub fn interpolant(&self, age: f32, lifespan: f32) -> f32 {
        match self {
            Self::LifeFraction => {
                if lifespan > 0.0 {
                    (age / lifespan).clamp(0.0, 1.0)
                } else {
                    1.0
                }
            }
            Self::Constant | Self::Invalid => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known() {
        assert_eq!(AlphaMode::from_name("life_fraction"), AlphaMode::LifeFraction);
        assert_eq!(AlphaMode::from_name("constant"), AlphaMode::Constant);
    }

    #[test]
    fn test_from_name_unknown_is_invalid() {
        assert_eq!(AlphaMode::from_name("shimmer"), AlphaMode::Invalid);
        assert_eq!(AlphaMode::from_name(""), AlphaMode::Invalid);
    }

    #[test]
    fn test_name_round_trip() {
        for mode in [AlphaMode::LifeFraction, AlphaMode::Constant] {
            assert_eq!(AlphaMode::from_name(mode.name()), mode);
        }
    }

    #[test]
    fn test_interpolant_life_fraction() {
        let m = AlphaMode::LifeFraction;
        assert_eq!(m.interpolant(0.0, 2.0), 0.0);
        assert_eq!(m.interpolant(1.0, 2.0), 0.5);
        assert_eq!(m.interpolant(5.0, 2.0), 1.0);
        assert_eq!(m.interpolant(1.0, 0.0), 1.0);
    }

    #[test]
    fn test_interpolant_constant() {
        assert_eq!(AlphaMode::Constant.interpolant(1.9, 2.0), 0.0);
    }
}
