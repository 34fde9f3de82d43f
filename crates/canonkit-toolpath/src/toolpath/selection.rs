//! Line-number selection and highlighting.

use super::buffer::ToolpathBuffer;
use super::draw::{vertex, GlyphBatch};
use super::palette::Palette;
use super::{Dwell, LineNumber, Segment, SegmentKind};
use canonkit_core::{Color, Point3};
use glam::Vec3;
use serde::Serialize;
use tracing::trace;

/// One straight segment belonging to a selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectedSegment {
    pub kind: SegmentKind,
    pub from: Point3,
    pub to: Point3,
}

impl SelectedSegment {
    fn of<S: Segment>(kind: SegmentKind, segment: &S) -> Self {
        Self {
            kind,
            from: segment.start(),
            to: segment.end(),
        }
    }
}

/// Everything one program line produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub line: LineNumber,
    /// Traverses, then arc segments, then feeds, each in append order
    pub segments: Vec<SelectedSegment>,
    pub markers: Vec<Dwell>,
    /// Mean of the collected endpoints and marker positions, or the center
    /// of the drawn extents when nothing matched
    pub centroid: Point3,
}

impl Selection {
    pub(crate) fn collect(buffer: &ToolpathBuffer, line: LineNumber) -> Self {
        fn matching<S: Segment>(
            kind: SegmentKind,
            segments: &[S],
            line: LineNumber,
        ) -> impl Iterator<Item = SelectedSegment> + '_ {
            segments
                .iter()
                .filter(move |s| s.line() == line)
                .map(move |s| SelectedSegment::of(kind, s))
        }

        let segments: Vec<SelectedSegment> = matching(SegmentKind::Traverse, buffer.traverses(), line)
            .chain(matching(SegmentKind::Arc, buffer.arc_segments(), line))
            .chain(matching(SegmentKind::Feed, buffer.feeds(), line))
            .collect();

        let markers: Vec<Dwell> = buffer
            .dwells()
            .iter()
            .filter(|d| d.line == line)
            .copied()
            .collect();

        let mut selection = Self {
            line,
            segments,
            markers,
            centroid: Point3::ZERO,
        };

        let (sum, count) = selection
            .points()
            .fold((Point3::ZERO, 0usize), |(sum, n), point| (sum + point, n + 1));
        selection.centroid = if count > 0 {
            sum / count as f64
        } else {
            buffer.compute_extents().drawn.center()
        };

        trace!(
            "Selected line {}: {} segments, {} markers, centroid {}",
            line,
            selection.segments.len(),
            selection.markers.len(),
            selection.centroid
        );

        selection
    }

    /// True when the line produced no geometry
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.markers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len() + self.markers.len()
    }

    /// Endpoints and marker positions, as used for the centroid
    pub fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        self.segments
            .iter()
            .flat_map(|s| [s.from, s.to])
            .chain(self.markers.iter().map(|d| d.at))
    }

    /// Render data for this selection in the palette's selected color
    pub fn highlight(&self, palette: &Palette, glyph_half_size: f64) -> Highlight {
        Highlight::new(self, palette.selected, glyph_half_size)
    }
}

/// Selected geometry ready to draw over the regular toolpath
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub line: LineNumber,
    pub color: Color,
    /// Two vertices per selected segment
    pub lines: Vec<Vec3>,
    /// Markers at twice the regular glyph size
    pub glyphs: Vec<GlyphBatch>,
    pub centroid: Point3,
}

impl Highlight {
    pub fn new(selection: &Selection, color: Color, glyph_half_size: f64) -> Self {
        let lines = selection
            .segments
            .iter()
            .flat_map(|s| [vertex(s.from), vertex(s.to)])
            .collect();

        let glyphs = selection
            .markers
            .iter()
            .map(|d| GlyphBatch::from_dwell(d, color, glyph_half_size * 2.0))
            .collect();

        Self {
            line: selection.line,
            color,
            lines,
            glyphs,
            centroid: selection.centroid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolpath::{ArcSegment, Feed, Traverse};
    use canonkit_core::{GlyphAxis, ToolOffset};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn sample() -> ToolpathBuffer {
        let mut buffer = ToolpathBuffer::new();
        buffer.push_traverse(Traverse {
            line: 1,
            from: p(0.0, 0.0, 0.0),
            to: p(4.0, 0.0, 0.0),
            tool_offset: ToolOffset::NONE,
        });
        buffer.push_feed(Feed {
            line: 2,
            from: p(4.0, 0.0, 0.0),
            to: p(4.0, 4.0, 0.0),
            feed_rate: 1.0,
            tool_offset: ToolOffset::NONE,
        });
        buffer.push_arc_segment(ArcSegment {
            line: 2,
            from: p(4.0, 4.0, 0.0),
            to: p(0.0, 4.0, 0.0),
            feed_rate: 1.0,
            tool_offset: ToolOffset::NONE,
        });
        buffer.push_dwell(Dwell {
            line: 3,
            color: Color::WHITE,
            at: p(0.0, 4.0, 2.0),
            axis: GlyphAxis::Z,
        });
        buffer
    }

    #[test]
    fn test_select_collects_across_categories() {
        let buffer = sample();
        let selection = buffer.select_by_line(2);

        assert_eq!(selection.len(), 2);
        assert_eq!(selection.segments[0].kind, SegmentKind::Arc);
        assert_eq!(selection.segments[1].kind, SegmentKind::Feed);
        // (4,4,0) (0,4,0) (4,0,0) (4,4,0)
        assert_eq!(selection.centroid, p(3.0, 3.0, 0.0));
    }

    #[test]
    fn test_dwell_contributes_its_position() {
        let buffer = sample();
        let selection = buffer.select_by_line(3);

        assert!(selection.segments.is_empty());
        assert_eq!(selection.markers.len(), 1);
        assert_eq!(selection.centroid, p(0.0, 4.0, 2.0));
    }

    #[test]
    fn test_miss_falls_back_to_extents_center() {
        let buffer = sample();
        let selection = buffer.select_by_line(99);

        assert!(selection.is_empty());
        assert_eq!(selection.centroid, p(2.0, 2.0, 0.0));
    }

    #[test]
    fn test_select_on_empty_buffer() {
        let selection = ToolpathBuffer::new().select_by_line(1);
        assert!(selection.is_empty());
        assert_eq!(selection.centroid, Point3::ZERO);
    }

    #[test]
    fn test_highlight_recolors_and_doubles_glyphs() {
        let buffer = sample();
        let palette = Palette::default();

        let highlight = buffer.select_by_line(3).highlight(&palette, 0.5);
        assert_eq!(highlight.color, palette.selected);
        assert_eq!(highlight.glyphs.len(), 1);
        assert_eq!(highlight.glyphs[0].color, palette.selected);
        assert_eq!(highlight.glyphs[0].vertices[0], Vec3::new(-1.0, 3.0, 2.0));

        let highlight = buffer.select_by_line(2).highlight(&palette, 0.5);
        assert_eq!(highlight.lines.len(), 4);
        assert!(highlight.glyphs.is_empty());
    }
}
