//! Live stroke handling for the ink pad

use tracing::debug;

use crate::fitter::{CurveFitter, SampleOutcome};
use crate::point::Point;
use crate::render::{RasterBackend, StrokeBackend};
use crate::types::PointGroup;

use super::InkPad;

impl InkPad {
    /// Begin a stroke at the given sample.
    ///
    /// Captures the current options into the new group's style and
    /// seeds a fresh fitter. An unfinished previous stroke is ended
    /// first.
    pub fn begin_stroke(&mut self, sample: Point) {
        if self.current.is_some() {
            debug!("begin_stroke: previous stroke still open, ending it");
            self.finish_current();
        }

        let style = self.options.style();
        let group = PointGroup {
            points: Vec::new(),
            style,
        };
        let fitter = CurveFitter::new(
            style,
            self.options.velocity_filter_weight,
            self.options.min_distance,
        );
        self.current = Some((group, fitter));
        self.feed_sample(sample);
    }

    /// Continue the in-progress stroke with a new sample.
    ///
    /// Safe to call before `begin_stroke`; a begin is synthesized.
    pub fn update_stroke(&mut self, sample: Point) {
        if self.current.is_none() {
            debug!("update_stroke: no active stroke, synthesizing begin");
            self.begin_stroke(sample);
            return;
        }
        self.feed_sample(sample);
    }

    /// End the in-progress stroke, processing the final sample first.
    ///
    /// Ignored if no stroke is active.
    pub fn end_stroke(&mut self, sample: Point) {
        if self.current.is_none() {
            debug!("end_stroke: no active stroke, ignoring");
            return;
        }
        self.feed_sample(sample);
        self.finish_current();
    }

    /// Check if a stroke is currently in progress.
    pub fn is_stroking(&self) -> bool {
        self.current.is_some()
    }

    /// Run one sample through the fitter, record it if accepted, and
    /// draw any emitted directive onto the surface.
    fn feed_sample(&mut self, sample: Point) {
        let Some((group, fitter)) = self.current.as_mut() else {
            return;
        };

        match fitter.add_point(sample) {
            SampleOutcome::Rejected => {
                debug!(
                    "feed_sample: rejected jitter sample at ({:.1}, {:.1})",
                    sample.x, sample.y
                );
            }
            SampleOutcome::Buffered => {
                group.points.push(sample);
            }
            SampleOutcome::Emitted(directive) => {
                group.points.push(sample);
                let style = group.style;
                RasterBackend::new(&mut self.surface).draw_directive(&directive, &style);
            }
        }
    }

    /// Move the in-progress group into the persisted collection.
    fn finish_current(&mut self) {
        if let Some((group, _)) = self.current.take() {
            debug!("finish_current: stroke with {} points", group.points.len());
            if !group.points.is_empty() {
                self.groups.push(group);
            }
        }
    }
}
