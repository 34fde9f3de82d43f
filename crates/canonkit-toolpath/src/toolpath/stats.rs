//! Toolpath statistics

use super::buffer::ToolpathBuffer;
use super::Segment;
use serde::Serialize;
use std::fmt;

/// Counts and path lengths for a translated program
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ToolpathStats {
    pub traverses: usize,
    pub feeds: usize,
    pub arc_segments: usize,
    pub dwells: usize,
    pub traverse_length: f64,
    pub feed_length: f64,
    pub arc_length: f64,
    /// Seconds
    pub dwell_time: f64,
}

fn total_length<S: Segment>(segments: &[S]) -> f64 {
    segments.iter().map(Segment::length).sum()
}

impl ToolpathStats {
    /// Dwell time is not recorded in the buffer, so the caller passes it in
    pub fn collect(buffer: &ToolpathBuffer, dwell_time: f64) -> Self {
        Self {
            traverses: buffer.traverses().len(),
            feeds: buffer.feeds().len(),
            arc_segments: buffer.arc_segments().len(),
            dwells: buffer.dwells().len(),
            traverse_length: total_length(buffer.traverses()),
            feed_length: total_length(buffer.feeds()),
            arc_length: total_length(buffer.arc_segments()),
            dwell_time,
        }
    }

    /// Length of all cutting moves
    pub fn cutting_length(&self) -> f64 {
        self.feed_length + self.arc_length
    }

    pub fn total_length(&self) -> f64 {
        self.traverse_length + self.cutting_length()
    }
}

impl fmt::Display for ToolpathStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "traverses:    {:>8}  length {:.4}",
            self.traverses, self.traverse_length
        )?;
        writeln!(f, "feeds:        {:>8}  length {:.4}", self.feeds, self.feed_length)?;
        writeln!(
            f,
            "arc segments: {:>8}  length {:.4}",
            self.arc_segments, self.arc_length
        )?;
        write!(
            f,
            "dwells:       {:>8}  time {:.3} s",
            self.dwells, self.dwell_time
        )
    }
}
