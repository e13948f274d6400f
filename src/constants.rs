/// Disc stamps per unit of estimated arc length. Arc length alone
/// leaves visible seams on sharp turns; 2 keeps consecutive stamps
/// overlapping. Empirical visual tuning.
pub const SAMPLING_DENSITY: u32 = 2;

/// Stroke width multiplier for the SVG backend. The raster backend
/// stamps radius-sized discs while an SVG stroke width is
/// diameter-like; 2.25 is an empirical correction, not a unit
/// conversion.
pub const VECTOR_WIDTH_SCALE: f32 = 2.25;

/// Minimum time delta when deriving velocity between samples.
/// Prevents division by zero for samples sharing a timestamp.
pub const MIN_TIME_DELTA_MS: u64 = 1;

/// Polyline subdivisions used by the arc-length approximation.
pub const ARC_LENGTH_STEPS: u32 = 10;

/// Default stroke width bounds in pixels.
pub const DEFAULT_MIN_WIDTH: f32 = 0.5;
pub const DEFAULT_MAX_WIDTH: f32 = 2.5;

/// Default exponential velocity smoothing weight.
pub const DEFAULT_VELOCITY_FILTER_WEIGHT: f32 = 0.7;

/// Default jitter rejection distance in pixels.
pub const DEFAULT_MIN_DISTANCE: f32 = 5.0;
