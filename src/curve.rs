//! Cubic Bezier segment with a start/end width pair.

use glam::Vec2;

use crate::constants::ARC_LENGTH_STEPS;
use crate::point::Point;

/// One cubic Bezier segment of a stroke.
///
/// Width interpolates between `start_width` and `end_width` in
/// parameter space (not arc length). Control coordinates may be
/// non-finite for pathological input; renderers check [`is_finite`]
/// and skip such segments rather than fail the stroke.
///
/// [`is_finite`]: CurveSegment::is_finite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    pub start: Vec2,
    pub control1: Vec2,
    pub control2: Vec2,
    pub end: Vec2,
    /// Stamp radius at t = 0
    pub start_width: f32,
    /// Stamp radius at t = 1
    pub end_width: f32,
}

/// Control points for the segment between `s2` and the midpoint-shifted
/// tangent through `s1..s3`. The returned pair brackets `s2`, which
/// keeps consecutive segments tangent-continuous.
fn control_points(s1: Vec2, s2: Vec2, s3: Vec2) -> (Vec2, Vec2) {
    let m1 = (s1 + s2) * 0.5;
    let m2 = (s2 + s3) * 0.5;
    let l1 = s1.distance(s2);
    let l2 = s2.distance(s3);
    // Degenerate triple (all points coincident): fall back to the
    // second midpoint rather than propagating 0/0.
    let k = if l1 + l2 > 0.0 { l2 / (l1 + l2) } else { 0.0 };
    let cm = m2 + (m1 - m2) * k;
    let shift = s2 - cm;
    (m1 + shift, m2 + shift)
}

impl CurveSegment {
    /// Build a segment from a four-point fitter window.
    ///
    /// Endpoints are the second and third window points; the control
    /// points come from the two overlapping triples so the segment
    /// stays tangent-continuous with its neighbors.
    pub fn from_window(window: &[Point], start_width: f32, end_width: f32) -> Self {
        debug_assert_eq!(window.len(), 4);
        let p0 = window[0].pos();
        let p1 = window[1].pos();
        let p2 = window[2].pos();
        let p3 = window[3].pos();

        let (_, control1) = control_points(p0, p1, p2);
        let (control2, _) = control_points(p1, p2, p3);

        Self {
            start: p1,
            control1,
            control2,
            end: p2,
            start_width,
            end_width,
        }
    }

    /// Whether all four control coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite()
            && self.control1.is_finite()
            && self.control2.is_finite()
            && self.end.is_finite()
    }

    /// Position at parameter `t` via the Bernstein basis.
    pub fn point_at(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.start * (u * u * u)
            + self.control1 * (3.0 * u * u * t)
            + self.control2 * (3.0 * u * t * t)
            + self.end * (t * t * t)
    }

    /// Stamp radius at parameter `t`.
    ///
    /// Uses t cubed rather than t, biasing width growth toward the
    /// segment end, and clamps above by `max_width` as a safety bound.
    pub fn width_at(&self, t: f32, max_width: f32) -> f32 {
        (self.start_width + t * t * t * (self.end_width - self.start_width)).min(max_width)
    }

    /// Approximate arc length by sampling a polyline with
    /// [`ARC_LENGTH_STEPS`] subdivisions. Only used to pace raster
    /// stamping; small estimate errors affect smoothness, not shape.
    pub fn length(&self) -> f32 {
        let mut length = 0.0;
        let mut prev = self.point_at(0.0);
        for i in 1..=ARC_LENGTH_STEPS {
            let p = self.point_at(i as f32 / ARC_LENGTH_STEPS as f32);
            length += prev.distance(p);
            prev = p;
        }
        length
    }
}
