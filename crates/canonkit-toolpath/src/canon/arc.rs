//! Arc tessellation for circular and helical feed moves.
//!
//! An arc is converted into straight sub-segments by stepping the angle
//! linearly from start to end. The out-of-plane coordinate and the rotary axes
//! are interpolated linearly over the same steps, so helices become a
//! staircase of straight pieces rather than an exact helix.
//!
//! The tessellator covers one monotonic angular span of less than a full turn
//! in the requested direction. Drivers that need multiple revolutions split
//! the move into several calls.

use canonkit_core::constants::{ARC_RADIUS_TOLERANCE, ARC_STEPS_PER_HALF_TURN, MIN_ARC_STEPS};
use canonkit_core::{Orientation, Plane, Point3};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use tracing::{trace, warn};

/// Controls how finely arcs are subdivided
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcResolution {
    /// Minimum sub-segments per arc, however small the sweep
    pub min_steps: u32,
    /// Sub-segments for a half turn of sweep
    pub steps_per_half_turn: u32,
    /// Start/end radius mismatch tolerated before a warning is logged
    pub radius_tolerance: f64,
}

impl Default for ArcResolution {
    fn default() -> Self {
        Self {
            min_steps: MIN_ARC_STEPS,
            steps_per_half_turn: ARC_STEPS_PER_HALF_TURN,
            radius_tolerance: ARC_RADIUS_TOLERANCE,
        }
    }
}

/// A position together with its rotary values
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ArcPoint {
    pub position: Point3,
    pub orientation: Orientation,
}

impl ArcPoint {
    pub const fn new(position: Point3, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

/// Number of sub-segments for a sweep from `theta1` to `theta2` (radians).
///
/// `max(min_steps, round(steps_per_half_turn * |theta1 - theta2| / π))`,
/// never less than one.
pub fn arc_steps(theta1: f64, theta2: f64, resolution: &ArcResolution) -> u32 {
    let sweep = (theta1 - theta2).abs();
    let scaled = (f64::from(resolution.steps_per_half_turn) * sweep / PI).round();
    // NaN saturates to 0 here and falls back to the minimum
    (scaled as u32).max(resolution.min_steps).max(1)
}

/// Start angle, end angle and radius of an arc after direction resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSweep {
    pub theta1: f64,
    pub theta2: f64,
    pub radius: f64,
}

/// Converts arcs into straight sub-segments
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArcTessellator {
    resolution: ArcResolution,
}

impl ArcTessellator {
    pub fn new(resolution: ArcResolution) -> Self {
        Self { resolution }
    }

    pub fn resolution(&self) -> &ArcResolution {
        &self.resolution
    }

    /// Resolve the angular span of an arc.
    ///
    /// `center` holds the in-plane center in the plane's axis order. A negative
    /// `rotation` sweeps clockwise, anything else counter-clockwise. The radius
    /// is measured at the start point; a target on a different radius is not
    /// corrected.
    pub fn sweep(
        &self,
        plane: Plane,
        start: Point3,
        end: Point3,
        center: [f64; 2],
        rotation: i32,
    ) -> ArcSweep {
        let axes = plane.axes();
        let [cx, cy] = center;

        let (sx, sy) = (start.axis(axes.first) - cx, start.axis(axes.second) - cy);
        let (ex, ey) = (end.axis(axes.first) - cx, end.axis(axes.second) - cy);

        let theta1 = sy.atan2(sx);
        let mut theta2 = ey.atan2(ex);
        let radius = sx.hypot(sy);

        let end_radius = ex.hypot(ey);
        if (end_radius - radius).abs() > self.resolution.radius_tolerance {
            warn!(
                "Arc end radius {:.4} differs from start radius {:.4}",
                end_radius, radius
            );
        }

        if rotation < 0 {
            if theta2 >= theta1 {
                theta2 -= TAU;
            }
        } else if theta2 <= theta1 {
            theta2 += TAU;
        }

        ArcSweep {
            theta1,
            theta2,
            radius,
        }
    }

    /// Tessellate one arc into the end points of its sub-segments.
    ///
    /// The first sub-segment starts at `start` (not included in the output).
    /// The last returned point is exactly `end`.
    pub fn tessellate(
        &self,
        plane: Plane,
        start: ArcPoint,
        end: ArcPoint,
        center: [f64; 2],
        rotation: i32,
    ) -> Vec<ArcPoint> {
        let axes = plane.axes();
        let [cx, cy] = center;
        let ArcSweep {
            theta1,
            theta2,
            radius,
        } = self.sweep(plane, start.position, end.position, center, rotation);

        let steps = arc_steps(theta1, theta2, &self.resolution);
        trace!(
            "Arc in {}: theta {:.4} -> {:.4}, radius {:.4}, {} steps",
            plane,
            theta1,
            theta2,
            radius,
            steps
        );

        let start_normal = start.position.axis(axes.normal);
        let end_normal = end.position.axis(axes.normal);
        let interp = |low: f64, high: f64, t: f64| low + (high - low) * t;

        let mut points = Vec::with_capacity(steps as usize);
        for i in 1..steps {
            let t = f64::from(i) / f64::from(steps);
            let theta = interp(theta1, theta2, t);

            let mut position = Point3::ZERO;
            position.set_axis(axes.first, theta.cos() * radius + cx);
            position.set_axis(axes.second, theta.sin() * radius + cy);
            position.set_axis(axes.normal, interp(start_normal, end_normal, t));

            points.push(ArcPoint::new(
                position,
                start.orientation.lerp(end.orientation, t),
            ));
        }
        points.push(end);

        points
    }
}
