//! Replay of stored point groups through the curve fitter.
//!
//! Replay is the single code path behind raster re-rendering and SVG
//! export: it re-runs the fitter over each group's stored points with
//! a fresh per-group state, producing the identical directive sequence
//! live drawing produced.

use tracing::debug;

use crate::fitter::{CurveFitter, SampleOutcome};
use crate::render::{RasterBackend, StrokeBackend, SvgBackend};
use crate::types::PointGroup;

use super::InkPad;

/// Error type for loading persisted stroke data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("group {index} has no points")]
    EmptyGroup { index: usize },
    #[error("group {index} has an invalid width range ({min_width}..{max_width})")]
    InvalidWidths {
        index: usize,
        min_width: f32,
        max_width: f32,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Drive a backend with the directive sequence of the given groups.
///
/// Each group gets a fresh fitter seeded from its own stored style, so
/// groups never share state and replay order within a group is the
/// only thing that matters. A single-point group yields exactly one
/// dot directive.
pub fn replay_groups<B: StrokeBackend>(
    groups: &[PointGroup],
    velocity_filter_weight: f32,
    min_distance: f32,
    backend: &mut B,
) {
    for group in groups {
        let mut fitter = CurveFitter::new(group.style, velocity_filter_weight, min_distance);
        for point in &group.points {
            if let SampleOutcome::Emitted(directive) = fitter.add_point(*point) {
                backend.draw_directive(&directive, &group.style);
            }
        }
    }
}

impl InkPad {
    /// Validate persisted groups, then replace or extend the current
    /// collection and redraw the surface.
    ///
    /// Malformed data (an empty group, an inverted or non-positive
    /// width range) rejects the whole load; the pad state is untouched
    /// on error.
    pub fn load_strokes(&mut self, groups: Vec<PointGroup>, replace: bool) -> Result<(), LoadError> {
        for (index, group) in groups.iter().enumerate() {
            if group.points.is_empty() {
                return Err(LoadError::EmptyGroup { index });
            }
            let style = &group.style;
            if !(style.min_width > 0.0 && style.max_width >= style.min_width) {
                return Err(LoadError::InvalidWidths {
                    index,
                    min_width: style.min_width,
                    max_width: style.max_width,
                });
            }
        }

        debug!(
            "load_strokes: {} groups, replace = {}",
            groups.len(),
            replace
        );
        if replace {
            self.groups = groups;
        } else {
            self.groups.extend(groups);
        }
        self.current = None;
        self.redraw();
        Ok(())
    }

    /// Re-render every stored group onto the surface over a fresh
    /// background fill.
    pub fn redraw(&mut self) {
        self.surface.clear(self.options.background_color);
        let mut backend = RasterBackend::new(&mut self.surface);
        replay_groups(
            &self.groups,
            self.options.velocity_filter_weight,
            self.options.min_distance,
            &mut backend,
        );
    }

    /// Export every stored group as an SVG document string.
    pub fn to_svg(&self) -> String {
        let mut backend = SvgBackend::new(self.surface.width, self.surface.height);
        replay_groups(
            &self.groups,
            self.options.velocity_filter_weight,
            self.options.min_distance,
            &mut backend,
        );
        backend.to_svg()
    }

    /// Serialize the stored groups as plain nested JSON records.
    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string(&self.groups)?)
    }

    /// Load groups from a JSON string produced by [`to_json`],
    /// replacing the current collection.
    ///
    /// [`to_json`]: InkPad::to_json
    pub fn load_json(&mut self, json: &str) -> Result<(), LoadError> {
        let groups: Vec<PointGroup> = serde_json::from_str(json)?;
        self.load_strokes(groups, true)
    }
}
