//! Append-only store of translated toolpath events.

use super::extents::ToolpathExtents;
use super::selection::Selection;
use super::{ArcSegment, CanonicalEvent, Dwell, Feed, LineNumber, Traverse};
use std::sync::OnceLock;
use tracing::debug;

/// Line-tagged toolpath events, one ordered sequence per category.
///
/// Events are only ever appended. Extents are computed on first request and
/// cached until the next append.
#[derive(Debug, Clone, Default)]
pub struct ToolpathBuffer {
    traverses: Vec<Traverse>,
    feeds: Vec<Feed>,
    arc_segments: Vec<ArcSegment>,
    dwells: Vec<Dwell>,
    /// Bumped on every append
    revision: u64,
    extents: OnceLock<ToolpathExtents>,
}

impl ToolpathBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to its category
    pub fn append(&mut self, event: impl Into<CanonicalEvent>) {
        match event.into() {
            CanonicalEvent::Traverse(t) => self.traverses.push(t),
            CanonicalEvent::Feed(f) => self.feeds.push(f),
            CanonicalEvent::ArcSegment(a) => self.arc_segments.push(a),
            CanonicalEvent::Dwell(d) => self.dwells.push(d),
        }
        self.touch();
    }

    pub fn push_traverse(&mut self, traverse: Traverse) {
        self.traverses.push(traverse);
        self.touch();
    }

    pub fn push_feed(&mut self, feed: Feed) {
        self.feeds.push(feed);
        self.touch();
    }

    pub fn push_arc_segment(&mut self, segment: ArcSegment) {
        self.arc_segments.push(segment);
        self.touch();
    }

    pub fn push_dwell(&mut self, dwell: Dwell) {
        self.dwells.push(dwell);
        self.touch();
    }

    pub fn traverses(&self) -> &[Traverse] {
        &self.traverses
    }

    pub fn feeds(&self) -> &[Feed] {
        &self.feeds
    }

    pub fn arc_segments(&self) -> &[ArcSegment] {
        &self.arc_segments
    }

    pub fn dwells(&self) -> &[Dwell] {
        &self.dwells
    }

    /// Total number of buffered events across all categories
    pub fn len(&self) -> usize {
        self.traverses.len() + self.feeds.len() + self.arc_segments.len() + self.dwells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of appends so far; changes whenever the contents change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Every event, one category after another (traverse, feed, arc, dwell)
    pub fn events(&self) -> impl Iterator<Item = CanonicalEvent> + '_ {
        self.traverses
            .iter()
            .copied()
            .map(CanonicalEvent::from)
            .chain(self.feeds.iter().copied().map(CanonicalEvent::from))
            .chain(self.arc_segments.iter().copied().map(CanonicalEvent::from))
            .chain(self.dwells.iter().copied().map(CanonicalEvent::from))
    }

    /// Drawn and nominal extents, cached until the next append
    pub fn compute_extents(&self) -> ToolpathExtents {
        *self.extents.get_or_init(|| {
            let extents = ToolpathExtents::scan(self);
            debug!(
                "Extents over {} events: drawn {:?}",
                self.len(),
                extents.drawn
            );
            extents
        })
    }

    /// Everything produced by one program line
    pub fn select_by_line(&self, line: LineNumber) -> Selection {
        Selection::collect(self, line)
    }

    /// Drop all events, as when a new program is loaded
    pub fn clear(&mut self) {
        self.traverses.clear();
        self.feeds.clear();
        self.arc_segments.clear();
        self.dwells.clear();
        self.touch();
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.extents = OnceLock::new();
    }
}
