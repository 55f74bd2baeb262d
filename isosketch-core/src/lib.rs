/// isosketch core library - isometric projection and animation helpers
///
/// This library provides the pure math the sketches are built on (a small matrix
/// kernel, the isometric rotation and projection, easing and shading helpers) along
/// with the drawing surface abstraction and the sketch controllers themselves.

pub mod color;
pub mod config;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod projection;
pub mod sketch;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use color::Color;
pub use config::SketchConfig;
pub use easing::{clamped_remap, ease_in_out, grayscale, lerp, looped};
pub use error::{IsoError, Result};
pub use matrix::{identity, multiply, multiply_dyn, zeros};
pub use projection::{project, project_flat, rotate_point, IsometricView};
pub use sketch::{build_sketch, Phase, Sketch, SketchKind};
pub use surface::{DrawCommand, LineCap, LineJoin, RecordingSurface, Surface};
pub use transform::{rotation_matrix, ViewAngles};
