//! Disc-stamping raster backend.

use glam::Vec2;
use tracing::debug;

use crate::constants::SAMPLING_DENSITY;
use crate::curve::CurveSegment;
use crate::point::Point;
use crate::surface::CpuSurface;
use crate::types::StyleOptions;

use super::StrokeBackend;

/// Renders directives by stamping filled discs onto a [`CpuSurface`].
///
/// Each directive is rasterized through a single coverage mask, so
/// overlapping stamps within one directive composite once against the
/// surface, like one filled path, never translucent-stacked.
pub struct RasterBackend<'a> {
    surface: &'a mut CpuSurface,
}

impl<'a> RasterBackend<'a> {
    pub fn new(surface: &'a mut CpuSurface) -> Self {
        Self { surface }
    }

    /// Composite a set of disc stamps as one shape.
    fn fill_stamps(&mut self, stamps: &[(Vec2, f32)], color: [f32; 4]) {
        if stamps.is_empty() {
            return;
        }

        // Union bounding box, clamped to the surface.
        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for &(center, radius) in stamps {
            min_x = min_x.min(center.x - radius);
            min_y = min_y.min(center.y - radius);
            max_x = max_x.max(center.x + radius);
            max_y = max_y.max(center.y + radius);
        }

        let x0 = (min_x.floor().max(0.0) as u32).min(self.surface.width);
        let y0 = (min_y.floor().max(0.0) as u32).min(self.surface.height);
        let x1 = (max_x.ceil().max(0.0) as u32).min(self.surface.width);
        let y1 = (max_y.ceil().max(0.0) as u32).min(self.surface.height);
        if x0 >= x1 || y0 >= y1 {
            debug!("fill_stamps: shape outside surface bounds");
            return;
        }

        let bw = (x1 - x0) as usize;
        let mut covered = vec![false; bw * (y1 - y0) as usize];

        for &(center, radius) in stamps {
            let radius_sq = radius * radius;
            let sx0 = ((center.x - radius).floor().max(x0 as f32)) as u32;
            let sy0 = ((center.y - radius).floor().max(y0 as f32)) as u32;
            let sx1 = (((center.x + radius).ceil()).min(x1 as f32).max(0.0)) as u32;
            let sy1 = (((center.y + radius).ceil()).min(y1 as f32).max(0.0)) as u32;

            for y in sy0..sy1 {
                for x in sx0..sx1 {
                    // Pixel-center coverage test
                    let dx = x as f32 + 0.5 - center.x;
                    let dy = y as f32 + 0.5 - center.y;
                    if dx * dx + dy * dy <= radius_sq {
                        covered[(y - y0) as usize * bw + (x - x0) as usize] = true;
                    }
                }
            }
        }

        for y in y0..y1 {
            for x in x0..x1 {
                if covered[(y - y0) as usize * bw + (x - x0) as usize] {
                    self.surface.blend_pixel(x, y, color);
                }
            }
        }
    }
}

impl StrokeBackend for RasterBackend<'_> {
    fn draw_dot(&mut self, point: &Point, style: &StyleOptions) {
        self.fill_stamps(&[(point.pos(), style.dot_radius())], style.pen_color);
    }

    fn draw_curve(&mut self, segment: &CurveSegment, style: &StyleOptions) {
        // Same skip policy as the vector backend: degenerate segments
        // are omitted, never an error.
        if !segment.is_finite() {
            debug!("draw_curve: skipping segment with non-finite control point");
            return;
        }

        // Enough stamps that consecutive discs overlap; see
        // SAMPLING_DENSITY.
        let steps = (segment.length().ceil() as u32).max(1) * SAMPLING_DENSITY;
        let mut stamps = Vec::with_capacity(steps as usize);
        for i in 0..steps {
            let t = i as f32 / steps as f32;
            let radius = segment.width_at(t, style.max_width);
            stamps.push((segment.point_at(t), radius));
        }
        self.fill_stamps(&stamps, style.pen_color);
    }
}
