//! Dual-backend stroke rendering.
//!
//! The fitter and replayer produce abstract [`StrokeDirective`]s; two
//! independent backends consume them:
//! - [`RasterBackend`] stamps filled discs onto a [`CpuSurface`]
//! - [`SvgBackend`] emits equivalent vector path elements
//!
//! Both backends see the identical directive sequence, so raster and
//! vector output never diverge geometrically.
//!
//! [`CpuSurface`]: crate::surface::CpuSurface

mod raster;
mod svg;

pub use raster::RasterBackend;
pub use svg::SvgBackend;

use crate::types::{StrokeDirective, StyleOptions};

/// Consumer of the dot/curve sequence a stroke produces.
pub trait StrokeBackend {
    /// Render an isolated tap or stroke start as a filled disc.
    fn draw_dot(&mut self, point: &crate::point::Point, style: &StyleOptions);

    /// Render one cubic segment. Implementations skip segments with
    /// non-finite control coordinates rather than failing the stroke.
    fn draw_curve(&mut self, segment: &crate::curve::CurveSegment, style: &StyleOptions);

    /// Dispatch a directive to the matching draw call.
    fn draw_directive(&mut self, directive: &StrokeDirective, style: &StyleOptions) {
        match directive {
            StrokeDirective::Dot(point) => self.draw_dot(point, style),
            StrokeDirective::Curve(segment) => self.draw_curve(segment, style),
        }
    }
}
