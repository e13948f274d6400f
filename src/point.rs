//! Pointer sample with position, pressure, and capture time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::MIN_TIME_DELTA_MS;

/// A single pointer sample.
///
/// Immutable once constructed; derived quantities (distance, velocity)
/// are computed on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X position in surface coordinates
    pub x: f32,
    /// Y position in surface coordinates
    pub y: f32,
    /// Normalized pressure 0.0-1.0
    pub pressure: f32,
    /// Capture time in milliseconds
    pub time: u64,
}

impl Point {
    /// Create a new sample. Pressure is clamped to 0.0-1.0.
    pub fn new(x: f32, y: f32, pressure: f32, time: u64) -> Self {
        Self {
            x,
            y,
            pressure: pressure.clamp(0.0, 1.0),
            time,
        }
    }

    /// Position as a vector, for curve math.
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean distance to another sample.
    pub fn distance_to(&self, other: &Point) -> f32 {
        self.pos().distance(other.pos())
    }

    /// Velocity from this sample to a later one, in pixels per
    /// millisecond. The time delta is clamped to at least
    /// [`MIN_TIME_DELTA_MS`], so the result is finite even when both
    /// samples share a timestamp.
    pub fn velocity_to(&self, other: &Point) -> f32 {
        let dt = other.time.abs_diff(self.time).max(MIN_TIME_DELTA_MS);
        self.distance_to(other) / dt as f32
    }
}
