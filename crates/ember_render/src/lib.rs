//! Buffer-generating renderers for the Ember particle engine
//!
//! Each renderer implements [`ember_core::ParticleRenderer`] and turns the
//! alive particles of a pool into a dense vertex buffer once per tick. The
//! vertex type is plain-old-data so the buffer can be uploaded to a GPU
//! unchanged; no graphics API is touched here.

mod line;
mod point;
mod sparkle;
mod types;

pub use line::LineRenderer;
pub use point::PointRenderer;
pub use sparkle::SparkleRenderer;
pub use types::{lerp_color, ColoredVertex};
