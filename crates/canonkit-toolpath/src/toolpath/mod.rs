//! Toolpath event records and the queries built on them
//!
//! This module provides:
//! - The four buffered event kinds (traverse, feed, arc segment, dwell)
//! - The append-only toolpath buffer
//! - Drawn and nominal extents
//! - Line-number selection and highlighting
//! - Renderer-facing draw lists and camera framing

pub mod buffer;
pub mod cache;
pub mod draw;
pub mod extents;
pub mod framing;
pub mod palette;
pub mod selection;
pub mod stats;

use canonkit_core::{Color, GlyphAxis, Point3, ToolOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Program line number an event was produced on
pub type LineNumber = u32;

/// Common view over the three straight-segment event kinds
pub trait Segment {
    fn line(&self) -> LineNumber;
    fn start(&self) -> Point3;
    fn end(&self) -> Point3;
    fn tool_offset(&self) -> ToolOffset;

    fn length(&self) -> f64 {
        self.start().distance(self.end())
    }
}

/// Rapid (non-cutting) linear move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Traverse {
    pub line: LineNumber,
    pub from: Point3,
    pub to: Point3,
    pub tool_offset: ToolOffset,
}

/// Cutting linear move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub line: LineNumber,
    pub from: Point3,
    pub to: Point3,
    /// Units per second
    pub feed_rate: f64,
    pub tool_offset: ToolOffset,
}

/// One straight piece of a tessellated arc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub line: LineNumber,
    pub from: Point3,
    pub to: Point3,
    /// Units per second
    pub feed_rate: f64,
    pub tool_offset: ToolOffset,
}

/// Marker left at a dwell (or user M-code) position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dwell {
    pub line: LineNumber,
    pub color: Color,
    pub at: Point3,
    pub axis: GlyphAxis,
}

macro_rules! impl_segment {
    ($($ty:ty),*) => {
        $(
            impl Segment for $ty {
                fn line(&self) -> LineNumber {
                    self.line
                }

                fn start(&self) -> Point3 {
                    self.from
                }

                fn end(&self) -> Point3 {
                    self.to
                }

                fn tool_offset(&self) -> ToolOffset {
                    self.tool_offset
                }
            }
        )*
    };
}

impl_segment!(Traverse, Feed, ArcSegment);

/// Category of a straight segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Traverse,
    Feed,
    Arc,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Traverse => write!(f, "traverse"),
            Self::Feed => write!(f, "feed"),
            Self::Arc => write!(f, "arc"),
        }
    }
}

/// A normalized event as appended to the [`buffer::ToolpathBuffer`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CanonicalEvent {
    Traverse(Traverse),
    Feed(Feed),
    ArcSegment(ArcSegment),
    Dwell(Dwell),
}

impl CanonicalEvent {
    pub fn line(&self) -> LineNumber {
        match self {
            Self::Traverse(t) => t.line,
            Self::Feed(f) => f.line,
            Self::ArcSegment(a) => a.line,
            Self::Dwell(d) => d.line,
        }
    }
}

impl From<Traverse> for CanonicalEvent {
    fn from(value: Traverse) -> Self {
        Self::Traverse(value)
    }
}

impl From<Feed> for CanonicalEvent {
    fn from(value: Feed) -> Self {
        Self::Feed(value)
    }
}

impl From<ArcSegment> for CanonicalEvent {
    fn from(value: ArcSegment) -> Self {
        Self::ArcSegment(value)
    }
}

impl From<Dwell> for CanonicalEvent {
    fn from(value: Dwell) -> Self {
        Self::Dwell(value)
    }
}
