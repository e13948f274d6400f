//! Complete ink pad pipeline
//!
//! This module provides the main pad that connects:
//! - Input handling (begin/update/end stroke samples)
//! - Curve fitter (directive generation)
//! - CPU surface (live raster rendering)
//! - Point group storage (for persistence and replay)
//!
//! The pad is synchronous and single-threaded: each sample is processed
//! to completion before the next is accepted.

mod replay;
mod stroke;

use tracing::debug;

use crate::fitter::CurveFitter;
use crate::surface::CpuSurface;
use crate::types::{PadOptions, PointGroup};

pub use replay::LoadError;

/// A drawing pad for velocity-sensitive ink strokes.
///
/// Owns the persisted group collection, the in-progress stroke state,
/// and a raster surface that live strokes draw onto. The same replay
/// path re-renders the surface and produces SVG export, so the two
/// backends can never disagree about geometry.
pub struct InkPad {
    /// Raster target for live drawing and redraws
    pub(crate) surface: CpuSurface,
    /// Completed strokes in chronological order
    pub(crate) groups: Vec<PointGroup>,
    /// In-progress stroke, if any
    pub(crate) current: Option<(PointGroup, CurveFitter)>,
    /// Settings read at stroke begin
    pub(crate) options: PadOptions,
}

impl InkPad {
    /// Create a pad with a surface of the given dimensions and default
    /// options.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_options(width, height, PadOptions::default())
    }

    /// Create a pad with explicit options.
    pub fn with_options(width: u32, height: u32, options: PadOptions) -> Self {
        let mut surface = CpuSurface::new(width, height);
        surface.clear(options.background_color);
        Self {
            surface,
            groups: Vec::new(),
            current: None,
            options,
        }
    }

    /// Current pad options.
    pub fn options(&self) -> &PadOptions {
        &self.options
    }

    /// Replace the pad options. Takes effect at the next stroke begin;
    /// the in-progress stroke keeps its captured style.
    pub fn set_options(&mut self, options: PadOptions) {
        self.options = options;
    }

    /// Completed strokes, in chronological order.
    pub fn strokes(&self) -> &[PointGroup] {
        &self.groups
    }

    /// Whether the pad holds no strokes (in progress or completed).
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.current.is_none()
    }

    /// The raster surface live strokes draw onto.
    pub fn surface(&self) -> &CpuSurface {
        &self.surface
    }

    /// Discard all strokes and fill the surface with the background
    /// color.
    pub fn clear(&mut self) {
        debug!("clear: discarding {} groups", self.groups.len());
        self.groups.clear();
        self.current = None;
        self.surface.clear(self.options.background_color);
    }
}
