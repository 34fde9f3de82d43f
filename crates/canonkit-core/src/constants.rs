//! Numeric defaults shared across the workspace.

/// Lower bound on the number of straight sub-segments emitted per arc.
pub const MIN_ARC_STEPS: u32 = 8;

/// Sub-segments emitted for a half turn (π radians) of arc sweep.
pub const ARC_STEPS_PER_HALF_TURN: u32 = 128;

/// Upper bound accepted from configuration for either arc step setting.
pub const MAX_ARC_STEPS: u32 = 16_384;

/// Allowed difference between an arc's start and end radius before a warning is logged.
pub const ARC_RADIUS_TOLERANCE: f64 = 1e-3;

/// Half the width of the "X" glyph drawn at dwell positions (1/64 unit).
pub const DWELL_GLYPH_HALF_SIZE: f64 = 0.015625;

/// Feed rate in effect before the program sets one (units per second).
pub const DEFAULT_FEED_RATE: f64 = 1.0;

/// Converts programmed per-minute feed rates to the stored per-second rate.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Smallest bounding-sphere radius used when framing a point or empty selection.
pub const MIN_FRAME_RADIUS: f64 = 0.5;
