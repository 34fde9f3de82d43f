//! Canonical motion translator
//!
//! Receives canonical motion calls in program order and appends the resulting
//! events to a [`ToolpathBuffer`]. The translator is the only writer of its
//! offset tracker and buffer.
//!
//! Two flags make up its state machine:
//! - `suppressed`: while set, motion calls are ignored entirely (no events,
//!   no position change). The driver sets it around blocks it replays for
//!   their modal effects only.
//! - `first_move`: set until the first traverse or feed. That first move
//!   only establishes the position, since there is no meaningful point to
//!   draw it from.

use super::arc::{ArcPoint, ArcResolution, ArcTessellator};
use super::offsets::OffsetTracker;
use super::{ArcFeed, CanonCall};
use crate::toolpath::buffer::ToolpathBuffer;
use crate::toolpath::palette::Palette;
use crate::toolpath::{ArcSegment, Dwell, Feed, LineNumber, Traverse};
use canonkit_core::constants::{DEFAULT_FEED_RATE, SECONDS_PER_MINUTE};
use canonkit_core::{Color, GlyphAxis, Orientation, Plane, Point3};
use tracing::trace;

/// Translates canonical motion calls into toolpath events
#[derive(Debug, Clone)]
pub struct CanonTranslator {
    offsets: OffsetTracker,
    buffer: ToolpathBuffer,
    tessellator: ArcTessellator,
    palette: Palette,
    plane: Plane,
    line: LineNumber,
    /// Units per second
    feed_rate: f64,
    first_move: bool,
    suppressed: bool,
    dwell_time: f64,
}

impl Default for CanonTranslator {
    fn default() -> Self {
        Self::new(ArcResolution::default(), Palette::default())
    }
}

impl CanonTranslator {
    pub fn new(resolution: ArcResolution, palette: Palette) -> Self {
        Self {
            offsets: OffsetTracker::new(),
            buffer: ToolpathBuffer::new(),
            tessellator: ArcTessellator::new(resolution),
            palette,
            plane: Plane::default(),
            line: 0,
            feed_rate: DEFAULT_FEED_RATE,
            first_move: true,
            suppressed: false,
            dwell_time: 0.0,
        }
    }

    /// Dispatch one call
    pub fn apply(&mut self, call: &CanonCall) {
        trace!("line {}: {}", self.line, call);

        match call {
            CanonCall::Traverse { to, orientation } => self.straight_traverse(*to, *orientation),
            CanonCall::Feed {
                to,
                orientation,
                feed_rate,
            } => match feed_rate {
                Some(rate) => self.feed(*to, *orientation, *rate),
                None => self.straight_feed(*to, *orientation),
            },
            CanonCall::Probe { to, orientation } => self.straight_probe(*to, *orientation),
            CanonCall::RigidTap { to } => self.rigid_tap(*to),
            CanonCall::ArcFeed(arc) => self.arc_feed(arc),
            CanonCall::Dwell { seconds } => self.dwell(*seconds),
            CanonCall::UserFunction { number, p, q } => self.user_defined_function(*number, *p, *q),
            CanonCall::ToolChange { z, x } => self.tool_offset(*z, *x),
            CanonCall::OriginOffset { offset, rotary } => self.set_origin_offsets(*offset, *rotary),
            CanonCall::PlaneSelect { plane } => self.select_plane(*plane),
            CanonCall::FeedRate { units_per_minute } => self.set_feed_rate(*units_per_minute),
            CanonCall::Suppress { suppressed } => self.set_suppressed(*suppressed),
            CanonCall::SpindleRate { .. } | CanonCall::Comment { .. } | CanonCall::Message { .. } => {}
        }
    }

    /// Set the program line number for the calls that follow
    pub fn next_line(&mut self, line: LineNumber) {
        self.line = line;
    }

    pub fn set_suppressed(&mut self, suppressed: bool) {
        self.suppressed = suppressed;
    }

    pub fn select_plane(&mut self, plane: Plane) {
        self.plane = plane;
    }

    /// Set the feed rate from units per minute; stored per second
    pub fn set_feed_rate(&mut self, units_per_minute: f64) {
        self.feed_rate = units_per_minute / SECONDS_PER_MINUTE;
    }

    pub fn set_origin_offsets(&mut self, offset: Point3, rotary: Orientation) {
        self.offsets.set_origin_offsets(offset, rotary);
    }

    /// Tool change: records the new offsets without emitting an event
    pub fn tool_offset(&mut self, z: f64, x: f64) {
        self.offsets.set_tool_offset(z, x);
    }

    pub fn straight_traverse(&mut self, to: Point3, orientation: Orientation) {
        if self.suppressed {
            return;
        }
        let (to, orientation) = self.translate(to, orientation);

        if !self.first_move {
            self.buffer.push_traverse(Traverse {
                line: self.line,
                from: self.offsets.position(),
                to,
                tool_offset: self.offsets.tool_offset(),
            });
        }
        self.first_move = false;
        self.offsets.move_to(to, orientation);
    }

    pub fn straight_feed(&mut self, to: Point3, orientation: Orientation) {
        if self.suppressed {
            return;
        }
        let (to, orientation) = self.translate(to, orientation);

        if !self.first_move {
            self.push_feed(self.offsets.position(), to);
        }
        self.first_move = false;
        self.offsets.move_to(to, orientation);
    }

    /// Feed at an explicit rate (units per second), which stays active afterwards
    pub fn feed(&mut self, to: Point3, orientation: Orientation, feed_rate: f64) {
        if self.suppressed {
            return;
        }
        self.feed_rate = feed_rate;
        self.straight_feed(to, orientation);
    }

    /// Probe moves draw like feeds
    pub fn straight_probe(&mut self, to: Point3, orientation: Orientation) {
        self.straight_feed(to, orientation);
    }

    /// Rigid tapping: feed in, mark the bottom, feed back out.
    /// The current position is unchanged afterwards.
    pub fn rigid_tap(&mut self, to: Point3) {
        if self.suppressed {
            return;
        }
        let start = self.offsets.position();
        let bottom = self.offsets.apply_origin_offset(to);

        self.push_feed(start, bottom);
        self.buffer.push_dwell(Dwell {
            line: self.line,
            color: self.palette.dwell,
            at: bottom,
            axis: GlyphAxis::Z,
        });
        self.push_feed(bottom, start);
    }

    pub fn arc_feed(&mut self, arc: &ArcFeed) {
        if self.suppressed {
            return;
        }
        let axes = self.plane.axes();
        let origin = self.offsets.origin();
        let center = [
            arc.center[0] + origin.axis(axes.first),
            arc.center[1] + origin.axis(axes.second),
        ];
        let (end, orientation) = self.translate(arc.end, arc.orientation);

        let start = ArcPoint::new(self.offsets.position(), self.offsets.orientation());
        let points = self.tessellator.tessellate(
            self.plane,
            start,
            ArcPoint::new(end, orientation),
            center,
            arc.rotation,
        );

        self.first_move = false;
        let mut from = start.position;
        for point in points {
            self.buffer.push_arc_segment(ArcSegment {
                line: self.line,
                from,
                to: point.position,
                feed_rate: self.feed_rate,
                tool_offset: self.offsets.tool_offset(),
            });
            from = point.position;
        }
        self.offsets.move_to(end, orientation);
    }

    pub fn dwell(&mut self, seconds: f64) {
        if self.suppressed {
            return;
        }
        self.dwell_time += seconds;
        self.push_marker(self.palette.dwell);
    }

    /// User M-codes leave a marker like a dwell but take no time
    pub fn user_defined_function(&mut self, number: u32, p: f64, q: f64) {
        if self.suppressed {
            return;
        }
        trace!("M{} P{} Q{} at line {}", number, p, q, self.line);
        self.push_marker(self.palette.user_function);
    }

    pub fn offsets(&self) -> &OffsetTracker {
        &self.offsets
    }

    pub fn buffer(&self) -> &ToolpathBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> ToolpathBuffer {
        self.buffer
    }

    pub fn plane(&self) -> Plane {
        self.plane
    }

    pub fn line(&self) -> LineNumber {
        self.line
    }

    /// Current drawn position
    pub fn position(&self) -> Point3 {
        self.offsets.position()
    }

    pub fn orientation(&self) -> Orientation {
        self.offsets.orientation()
    }

    /// Active feed rate in units per second
    pub fn feed_rate(&self) -> f64 {
        self.feed_rate
    }

    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Total seconds of dwell seen so far
    pub fn dwell_time(&self) -> f64 {
        self.dwell_time
    }

    fn translate(&self, to: Point3, orientation: Orientation) -> (Point3, Orientation) {
        (
            self.offsets.apply_origin_offset(to),
            self.offsets.apply_rotary_offset(orientation),
        )
    }

    fn push_feed(&mut self, from: Point3, to: Point3) {
        self.buffer.push_feed(Feed {
            line: self.line,
            from,
            to,
            feed_rate: self.feed_rate,
            tool_offset: self.offsets.tool_offset(),
        });
    }

    fn push_marker(&mut self, color: Color) {
        self.buffer.push_dwell(Dwell {
            line: self.line,
            color,
            at: self.offsets.position(),
            axis: self.plane.glyph_axis(),
        });
    }
}
