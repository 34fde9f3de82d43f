//! Origin and tool-length offset bookkeeping.

use canonkit_core::{Orientation, Point3, ToolOffset};
use tracing::trace;

/// Holds the active origin offsets and tool offsets, plus the current drawn
/// position they apply to.
///
/// Incoming program coordinates are shifted by the origin offset before they
/// are drawn. Tool offsets are not applied to incoming coordinates (the
/// interpreter already did that); they are recorded with every event so the
/// nominal position can be reconstructed later.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffsetTracker {
    origin: Point3,
    rotary_origin: Orientation,
    tool: ToolOffset,
    position: Point3,
    orientation: Orientation,
}

impl OffsetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active origin offset. Positions already drawn are not touched.
    pub fn set_origin_offsets(&mut self, offset: Point3, rotary: Orientation) {
        trace!("Origin offset: {} {}", offset, rotary);
        self.origin = offset;
        self.rotary_origin = rotary;
    }

    /// Replace the active tool offsets.
    ///
    /// The current position is moved from the old offset to the new one so the
    /// nominal (zero-length tool) position stays where it was and the preview
    /// shows no jump at the tool change.
    pub fn set_tool_offset(&mut self, z: f64, x: f64) {
        let old = self.tool;
        self.position.x = self.position.x - x + old.x;
        self.position.z = self.position.z - z + old.z;
        self.tool = ToolOffset::new(x, z);
        trace!(
            "Tool offset x={:.4} z={:.4}, position now {}",
            x,
            z,
            self.position
        );
    }

    /// Shift a raw program coordinate into the drawn frame
    pub fn apply_origin_offset(&self, point: Point3) -> Point3 {
        point + self.origin
    }

    pub fn apply_rotary_offset(&self, orientation: Orientation) -> Orientation {
        orientation + self.rotary_origin
    }

    /// Position a zero-length tool would occupy for a drawn point
    pub fn nominal(&self, drawn: Point3) -> Point3 {
        self.tool.nominal(drawn)
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn rotary_origin(&self) -> Orientation {
        self.rotary_origin
    }

    pub fn tool_offset(&self) -> ToolOffset {
        self.tool
    }

    /// Current drawn position
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Current rotary values
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub(crate) fn move_to(&mut self, position: Point3, orientation: Orientation) {
        self.position = position;
        self.orientation = orientation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_offset_applies_to_points() {
        let mut tracker = OffsetTracker::new();
        tracker.set_origin_offsets(Point3::new(10.0, -5.0, 2.0), Orientation::ZERO);

        assert_eq!(
            tracker.apply_origin_offset(Point3::new(1.0, 1.0, 1.0)),
            Point3::new(11.0, -4.0, 3.0)
        );
    }

    #[test]
    fn test_rotary_offset() {
        let mut tracker = OffsetTracker::new();
        tracker.set_origin_offsets(Point3::ZERO, Orientation::new(90.0, 0.0, -45.0));

        assert_eq!(
            tracker.apply_rotary_offset(Orientation::new(10.0, 1.0, 45.0)),
            Orientation::new(100.0, 1.0, 0.0)
        );
    }

    #[test]
    fn test_tool_change_preserves_nominal_position() {
        let mut tracker = OffsetTracker::new();
        tracker.move_to(Point3::new(5.0, 2.0, 10.0), Orientation::ZERO);
        let nominal_before = tracker.nominal(tracker.position());

        tracker.set_tool_offset(1.5, 0.25);
        assert_eq!(tracker.position(), Point3::new(4.75, 2.0, 8.5));
        assert_eq!(tracker.nominal(tracker.position()), nominal_before);

        tracker.set_tool_offset(0.5, 0.0);
        assert_eq!(tracker.position(), Point3::new(5.0, 2.0, 9.5));
        assert_eq!(tracker.nominal(tracker.position()), nominal_before);
    }

    #[test]
    fn test_origin_change_is_not_retroactive() {
        let mut tracker = OffsetTracker::new();
        tracker.move_to(Point3::new(1.0, 1.0, 1.0), Orientation::ZERO);
        tracker.set_origin_offsets(Point3::new(100.0, 0.0, 0.0), Orientation::ZERO);

        assert_eq!(tracker.position(), Point3::new(1.0, 1.0, 1.0));
    }
}
