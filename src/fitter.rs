//! Incremental curve fitting over a sliding sample window.
//!
//! One [`CurveFitter`] exists per in-progress stroke. It owns the
//! window of up to four most recent accepted samples plus the smoothed
//! velocity and width, and emits at most one renderable directive per
//! incoming sample. The same fitter drives both live drawing and
//! replay, which is what makes replayed strokes bit-for-bit identical
//! to live ones.

use crate::curve::CurveSegment;
use crate::point::Point;
use crate::types::{StrokeDirective, StyleOptions};

/// Result of feeding one sample to the fitter.
#[derive(Debug, Clone)]
pub enum SampleOutcome {
    /// Sample was within the jitter threshold of the last accepted
    /// sample; window and filters are untouched.
    Rejected,
    /// Sample accepted, but the window is still too short to form a
    /// segment.
    Buffered,
    /// Sample accepted and produced a renderable directive.
    Emitted(StrokeDirective),
}

/// Per-stroke fitting state. Reset by constructing a fresh value when
/// a new group begins; never persisted.
#[derive(Debug)]
pub struct CurveFitter {
    style: StyleOptions,
    velocity_filter_weight: f32,
    min_distance: f32,
    /// Up to 4 most recent accepted samples
    window: Vec<Point>,
    last_velocity: f32,
    last_width: f32,
}

impl CurveFitter {
    /// Create a fitter for one stroke. The first segment's start width
    /// is the style's midpoint width.
    pub fn new(style: StyleOptions, velocity_filter_weight: f32, min_distance: f32) -> Self {
        Self {
            style,
            velocity_filter_weight,
            min_distance,
            window: Vec::with_capacity(5),
            last_velocity: 0.0,
            last_width: style.midpoint_width(),
        }
    }

    /// Style this fitter was seeded with.
    pub fn style(&self) -> &StyleOptions {
        &self.style
    }

    /// Feed one raw sample.
    ///
    /// The first sample of a stroke emits a dot immediately and seeds
    /// the window. Samples within `min_distance` of the last accepted
    /// sample are rejected without touching any state. Once three
    /// samples are known, the first is duplicated to the front so the
    /// initial segment has a usable tangent estimate; from then on
    /// every accepted sample yields one curve directive.
    pub fn add_point(&mut self, point: Point) -> SampleOutcome {
        if let Some(last) = self.window.last() {
            if point.distance_to(last) <= self.min_distance {
                return SampleOutcome::Rejected;
            }
        }

        self.window.push(point);

        match self.window.len() {
            1 => return SampleOutcome::Emitted(StrokeDirective::Dot(point)),
            2 => return SampleOutcome::Buffered,
            3 => {
                // Duplicate the first point so the window holds four;
                // avoids first-segment pop-in from a missing tangent.
                let first = self.window[0];
                self.window.insert(0, first);
            }
            _ => {}
        }

        let (start_width, end_width) = self.next_widths();
        let segment = CurveSegment::from_window(&self.window, start_width, end_width);
        self.window.remove(0);

        SampleOutcome::Emitted(StrokeDirective::Curve(segment))
    }

    /// Width pair for the next segment: start is the previous segment's
    /// end width (continuity), end follows the smoothed velocity
    /// between the window's second and third points.
    fn next_widths(&mut self) -> (f32, f32) {
        let instant = self.window[1].velocity_to(&self.window[2]);
        let velocity = self.velocity_filter_weight * instant
            + (1.0 - self.velocity_filter_weight) * self.last_velocity;
        let end_width = self.stroke_width(velocity);

        let widths = (self.last_width, end_width);
        self.last_velocity = velocity;
        self.last_width = end_width;
        widths
    }

    /// Map velocity to stamp radius: shrinks toward `min_width` as
    /// speed increases, approaches `max_width` as speed approaches
    /// zero. Bounded in `[min_width, max_width]` for all v >= 0.
    pub fn stroke_width(&self, velocity: f32) -> f32 {
        (self.style.max_width / (velocity + 1.0)).max(self.style.min_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitter(min_distance: f32) -> CurveFitter {
        let style = StyleOptions {
            min_width: 0.5,
            max_width: 2.5,
            ..Default::default()
        };
        CurveFitter::new(style, 0.7, min_distance)
    }

    fn feed(fitter: &mut CurveFitter, points: &[(f32, f32, u64)]) -> Vec<StrokeDirective> {
        let mut out = Vec::new();
        for &(x, y, t) in points {
            if let SampleOutcome::Emitted(d) = fitter.add_point(Point::new(x, y, 1.0, t)) {
                out.push(d);
            }
        }
        out
    }

    #[test]
    fn test_first_point_emits_dot() {
        let mut f = fitter(0.0);
        match f.add_point(Point::new(5.0, 5.0, 1.0, 0)) {
            SampleOutcome::Emitted(StrokeDirective::Dot(p)) => {
                assert_eq!(p.x, 5.0);
                assert_eq!(p.y, 5.0);
            }
            other => panic!("expected dot, got {other:?}"),
        }
    }

    #[test]
    fn test_n_points_yield_n_minus_two_curves() {
        // First 3 points collapse to 1 curve via the duplicated first
        // point, then one more curve per additional point.
        for n in 4usize..8 {
            let mut f = fitter(0.0);
            let points: Vec<_> = (0..n).map(|i| (i as f32 * 10.0, 0.0, i as u64 * 10)).collect();
            let directives = feed(&mut f, &points);
            let curves = directives
                .iter()
                .filter(|d| matches!(d, StrokeDirective::Curve(_)))
                .count();
            let dots = directives
                .iter()
                .filter(|d| matches!(d, StrokeDirective::Dot(_)))
                .count();
            assert_eq!(curves, n - 2, "n = {n}");
            assert_eq!(dots, 1, "n = {n}");
        }
    }

    #[test]
    fn test_jitter_rejection_leaves_state_untouched() {
        let mut f = fitter(5.0);
        f.add_point(Point::new(0.0, 0.0, 1.0, 0));
        // Two samples within the threshold of the last accepted sample
        assert!(matches!(
            f.add_point(Point::new(1.0, 0.0, 1.0, 5)),
            SampleOutcome::Rejected
        ));
        assert!(matches!(
            f.add_point(Point::new(3.0, 0.0, 1.0, 10)),
            SampleOutcome::Rejected
        ));
        assert_eq!(f.window.len(), 1);
        // A sample past the threshold is accepted normally
        assert!(matches!(
            f.add_point(Point::new(10.0, 0.0, 1.0, 15)),
            SampleOutcome::Buffered
        ));
    }

    #[test]
    fn test_stroke_width_monotone_and_bounded() {
        let f = fitter(0.0);
        let mut prev = f.stroke_width(0.0);
        assert!(prev <= 2.5);
        for i in 1..100 {
            let w = f.stroke_width(i as f32 * 0.5);
            assert!(w <= prev, "width must not increase with velocity");
            assert!((0.5..=2.5).contains(&w));
            prev = w;
        }
        // Saturates at min_width for high velocity
        assert_eq!(f.stroke_width(1000.0), 0.5);
    }

    #[test]
    fn test_constant_velocity_scenario() {
        // minWidth 0.5, maxWidth 2.5, weight 0.7, minDistance 0, four
        // points 10px/10ms apart: two curves with widths decreasing
        // toward the saturated stroke width.
        let mut f = fitter(0.0);
        let directives = feed(
            &mut f,
            &[(0.0, 0.0, 0), (10.0, 0.0, 10), (20.0, 0.0, 20), (30.0, 0.0, 30)],
        );
        let curves: Vec<_> = directives
            .iter()
            .filter_map(|d| match d {
                StrokeDirective::Curve(c) => Some(*c),
                _ => None,
            })
            .collect();
        assert_eq!(curves.len(), 2);

        // First segment starts at the midpoint width.
        assert!((curves[0].start_width - 1.5).abs() < 1e-6);
        // Velocity smoothing: v1 = 0.7, v2 = 0.91 at unit speed.
        assert!((curves[0].end_width - 2.5 / 1.7).abs() < 1e-4);
        assert!((curves[1].end_width - 2.5 / 1.91).abs() < 1e-4);
        // Widths decrease monotonically toward 2.5 / 2.0 = 1.25.
        assert!(curves[0].end_width > curves[1].end_width);
        assert!(curves[1].end_width > 1.25);
    }

    #[test]
    fn test_width_continuity_between_segments() {
        let mut f = fitter(0.0);
        let points: Vec<_> = (0..6).map(|i| (i as f32 * 10.0, 0.0, i as u64 * 10)).collect();
        let curves: Vec<_> = feed(&mut f, &points)
            .into_iter()
            .filter_map(|d| match d {
                StrokeDirective::Curve(c) => Some(c),
                _ => None,
            })
            .collect();
        for pair in curves.windows(2) {
            assert_eq!(pair[0].end_width, pair[1].start_width);
        }
    }

    #[test]
    fn test_zero_elapsed_time_stays_finite() {
        let mut f = fitter(0.0);
        let points: Vec<_> = (0..5).map(|i| (i as f32 * 10.0, 0.0, 0)).collect();
        for d in feed(&mut f, &points) {
            if let StrokeDirective::Curve(c) = d {
                assert!(c.is_finite());
                assert!(c.start_width.is_finite());
                assert!(c.end_width.is_finite());
            }
        }
    }
}
