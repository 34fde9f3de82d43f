//! # Canonkit Toolpath
//!
//! Turns a stream of canonical machine-motion calls into preview geometry.
//! Includes the offset tracker, plane-aware arc tessellator, the motion
//! translator, the line-tagged toolpath buffer with its extents and selection
//! queries, and renderer-facing draw lists.

pub mod canon;
pub mod session;
pub mod toolpath;

pub use canon::{
    arc::{arc_steps, ArcPoint, ArcResolution, ArcTessellator},
    offsets::OffsetTracker,
    translator::CanonTranslator,
    ArcFeed, CanonCall, CanonRecord,
};

pub use session::{SessionOptions, TranslationSession};

pub use toolpath::{
    buffer::ToolpathBuffer,
    cache::ToolpathCache,
    draw::{dwell_glyph, line_strips, selection_batches, DrawList, GlyphBatch, SelectionBatch},
    extents::{ExtentBox, ToolpathExtents},
    framing::CameraFrame,
    palette::Palette,
    selection::{Highlight, SelectedSegment, Selection},
    stats::ToolpathStats,
    ArcSegment, CanonicalEvent, Dwell, Feed, Segment, SegmentKind, Traverse,
};
