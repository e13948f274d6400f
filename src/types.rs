use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_WIDTH, DEFAULT_MIN_DISTANCE, DEFAULT_MIN_WIDTH, DEFAULT_VELOCITY_FILTER_WEIGHT,
};
use crate::curve::CurveSegment;
use crate::point::Point;

/// Style captured into a point group when its stroke begins.
///
/// Immutable for the life of the group, even if the pad's current
/// options change while drawing continues elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleOptions {
    /// Pen color as straight RGBA, each channel 0.0-1.0
    pub pen_color: [f32; 4],
    /// Dot radius for single-tap groups; 0 means use the midpoint width
    pub dot_size: f32,
    /// Stroke radius floor
    pub min_width: f32,
    /// Stroke radius ceiling
    pub max_width: f32,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            pen_color: [0.0, 0.0, 0.0, 1.0],
            dot_size: 0.0,
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl StyleOptions {
    /// Midpoint of the width range; the width of the very first
    /// segment of a stroke and the fallback dot radius.
    pub fn midpoint_width(&self) -> f32 {
        (self.min_width + self.max_width) / 2.0
    }

    /// Radius used when rendering a dot directive.
    pub fn dot_radius(&self) -> f32 {
        if self.dot_size > 0.0 {
            self.dot_size
        } else {
            self.midpoint_width()
        }
    }
}

/// One continuous stroke (pointer-down to pointer-up) or a single tap.
///
/// The ordered collection of groups is the sole durable representation
/// of a drawing; it round-trips through serde as plain nested records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGroup {
    /// Accepted raw samples in capture order
    pub points: Vec<Point>,
    /// Style snapshot taken at stroke begin
    pub style: StyleOptions,
}

/// Current pad settings, read once at `begin_stroke` and snapshotted
/// into the new group's [`StyleOptions`]. Mutating these never affects
/// strokes already in progress or completed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PadOptions {
    /// Pen color as straight RGBA, each channel 0.0-1.0
    pub pen_color: [f32; 4],
    /// Surface clear color
    pub background_color: [f32; 4],
    /// Dot radius for single-tap groups; 0 means use the midpoint width
    pub dot_size: f32,
    /// Stroke radius floor
    pub min_width: f32,
    /// Stroke radius ceiling
    pub max_width: f32,
    /// Exponential smoothing weight blending instantaneous and
    /// historical velocity, in (0, 1]
    pub velocity_filter_weight: f32,
    /// Samples closer than this to the last accepted sample are ignored
    pub min_distance: f32,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            pen_color: [0.0, 0.0, 0.0, 1.0],
            background_color: [0.0, 0.0, 0.0, 0.0],
            dot_size: 0.0,
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            velocity_filter_weight: DEFAULT_VELOCITY_FILTER_WEIGHT,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

impl PadOptions {
    /// Snapshot the per-group style portion of these options.
    pub fn style(&self) -> StyleOptions {
        StyleOptions {
            pen_color: self.pen_color,
            dot_size: self.dot_size,
            min_width: self.min_width,
            max_width: self.max_width,
        }
    }
}

/// A renderable unit emitted by the curve fitter.
///
/// Backends consume directives without re-deriving geometry, so raster
/// and vector output stay in lockstep.
#[derive(Debug, Clone)]
pub enum StrokeDirective {
    /// An isolated tap, or the first sample of a stroke
    Dot(Point),
    /// A fully-formed cubic segment
    Curve(CurveSegment),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_width() {
        let style = StyleOptions {
            min_width: 0.5,
            max_width: 2.5,
            ..Default::default()
        };
        assert!((style.midpoint_width() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_dot_radius_fallback() {
        let mut style = StyleOptions::default();
        style.dot_size = 0.0;
        assert_eq!(style.dot_radius(), style.midpoint_width());
        style.dot_size = 4.0;
        assert_eq!(style.dot_radius(), 4.0);
    }

    #[test]
    fn test_style_snapshot_from_options() {
        let options = PadOptions {
            pen_color: [1.0, 0.0, 0.0, 1.0],
            dot_size: 3.0,
            ..Default::default()
        };
        let style = options.style();
        assert_eq!(style.pen_color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(style.dot_size, 3.0);
        assert_eq!(style.min_width, options.min_width);
    }

    #[test]
    fn test_point_group_roundtrip() {
        let group = PointGroup {
            points: vec![
                Point::new(1.0, 2.0, 0.5, 100),
                Point::new(3.0, 4.0, 0.75, 120),
            ],
            style: StyleOptions::default(),
        };
        let json = serde_json::to_string(&group).unwrap();
        let back: PointGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, group);
    }
}
