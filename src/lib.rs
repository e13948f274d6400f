//! inkpad - velocity-sensitive ink stroke fitting and rendering
//!
//! Converts sparse, irregularly-timed pointer samples into smooth
//! variable-width ink strokes:
//! - [`point::Point`] - a raw sample with position, pressure, and time
//! - [`curve::CurveSegment`] - one cubic segment with a width pair
//! - [`fitter::CurveFitter`] - sliding-window incremental curve fitting
//! - [`render`] - raster (disc-stamping) and SVG backends over one
//!   directive stream
//! - [`surface::CpuSurface`] - CPU RGBA surface for raster output
//! - [`pipeline::InkPad`] - live input handling, persistence, replay
//!
//! Strokes are stored as plain point groups and replay
//! deterministically: a recorded stroke renders identically to the
//! live one it was captured from.

pub mod constants;
pub mod curve;
pub mod fitter;
pub mod pipeline;
pub mod point;
pub mod render;
pub mod surface;
pub mod types;

pub use constants::*;
pub use curve::*;
pub use fitter::*;
pub use pipeline::*;
pub use point::*;
pub use render::*;
pub use surface::*;
pub use types::*;
