//! Renderer-facing vertex lists
//!
//! Nothing here issues draw calls. A backend walks the lists and emits line
//! strips, line pairs and glyph lines in whatever API it uses.

use super::buffer::ToolpathBuffer;
use super::palette::Palette;
use super::{Dwell, LineNumber, Segment, SegmentKind};
use canonkit_core::{Color, GlyphAxis, Point3};
use glam::Vec3;
use serde::Serialize;
use tracing::debug;

/// Convert a world position to a render vertex
pub fn vertex(point: Point3) -> Vec3 {
    Vec3::new(point.x as f32, point.y as f32, point.z as f32)
}

/// Merge consecutive segments into polylines.
///
/// A new strip starts wherever a segment does not begin at the previous
/// segment's end.
pub fn line_strips<S: Segment>(segments: &[S]) -> Vec<Vec<Vec3>> {
    let mut strips: Vec<Vec<Vec3>> = Vec::new();
    let mut last_end: Option<Point3> = None;

    for segment in segments {
        if last_end != Some(segment.start()) {
            strips.push(vec![vertex(segment.start())]);
        }
        if let Some(strip) = strips.last_mut() {
            strip.push(vertex(segment.end()));
        }
        last_end = Some(segment.end());
    }

    strips
}

/// Line pairs for one program line, used for picking by name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionBatch {
    pub kind: SegmentKind,
    pub line: LineNumber,
    /// Two vertices per segment
    pub vertices: Vec<Vec3>,
}

/// Group consecutive segments sharing a line number into picking batches
pub fn selection_batches<S: Segment>(kind: SegmentKind, segments: &[S]) -> Vec<SelectionBatch> {
    let mut batches: Vec<SelectionBatch> = Vec::new();

    for segment in segments {
        if batches.last().is_none_or(|b| b.line != segment.line()) {
            batches.push(SelectionBatch {
                kind,
                line: segment.line(),
                vertices: Vec::new(),
            });
        }
        if let Some(batch) = batches.last_mut() {
            batch.vertices.push(vertex(segment.start()));
            batch.vertices.push(vertex(segment.end()));
        }
    }

    batches
}

/// An "X" of two crossing lines, each traced in both directions, lying in the
/// plane perpendicular to `axis`. Returned as four line pairs.
pub fn dwell_glyph(at: Point3, axis: GlyphAxis, delta: f64) -> [Vec3; 8] {
    // (first in-plane offset, second in-plane offset) -> world point
    let place = |u: f64, v: f64| -> Vec3 {
        let p = match axis {
            GlyphAxis::Z => Point3::new(at.x + u, at.y + v, at.z),
            GlyphAxis::Y => Point3::new(at.x + u, at.y, at.z + v),
            GlyphAxis::X => Point3::new(at.x, at.y + u, at.z + v),
        };
        vertex(p)
    };
    let d = delta;

    [
        place(-d, -d),
        place(d, d),
        place(-d, d),
        place(d, -d),
        place(d, d),
        place(-d, -d),
        place(d, -d),
        place(-d, d),
    ]
}

/// One dwell marker ready to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlyphBatch {
    pub line: LineNumber,
    pub color: Color,
    pub vertices: [Vec3; 8],
}

impl GlyphBatch {
    pub fn from_dwell(dwell: &Dwell, color: Color, delta: f64) -> Self {
        Self {
            line: dwell.line,
            color,
            vertices: dwell_glyph(dwell.at, dwell.axis, delta),
        }
    }
}

/// Polylines with their draw color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokeGroup {
    pub kind: SegmentKind,
    pub color: Color,
    pub strips: Vec<Vec<Vec3>>,
}

/// Everything needed to draw the full toolpath in one pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawList {
    /// Traverse, straight feed, arc feed, in drawing order
    pub strokes: Vec<StrokeGroup>,
    pub glyphs: Vec<GlyphBatch>,
}

impl DrawList {
    pub fn build(buffer: &ToolpathBuffer, palette: &Palette, glyph_half_size: f64) -> Self {
        let strokes = vec![
            StrokeGroup {
                kind: SegmentKind::Traverse,
                color: palette.traverse,
                strips: line_strips(buffer.traverses()),
            },
            StrokeGroup {
                kind: SegmentKind::Feed,
                color: palette.straight_feed,
                strips: line_strips(buffer.feeds()),
            },
            StrokeGroup {
                kind: SegmentKind::Arc,
                color: palette.arc_feed,
                strips: line_strips(buffer.arc_segments()),
            },
        ];

        let glyphs = buffer
            .dwells()
            .iter()
            .map(|d| GlyphBatch::from_dwell(d, d.color, glyph_half_size))
            .collect();

        let list = Self { strokes, glyphs };
        debug!(
            "Built draw list: {} strips, {} vertices, {} glyphs",
            list.strip_count(),
            list.vertex_count(),
            list.glyphs.len()
        );
        list
    }

    /// Picking batches for every segment category
    pub fn picking(buffer: &ToolpathBuffer) -> Vec<SelectionBatch> {
        let mut batches = selection_batches(SegmentKind::Traverse, buffer.traverses());
        batches.extend(selection_batches(SegmentKind::Feed, buffer.feeds()));
        batches.extend(selection_batches(SegmentKind::Arc, buffer.arc_segments()));
        batches
    }

    pub fn strip_count(&self) -> usize {
        self.strokes.iter().map(|s| s.strips.len()).sum()
    }

    /// Polyline vertices plus glyph vertices
    pub fn vertex_count(&self) -> usize {
        let strip_vertices: usize = self
            .strokes
            .iter()
            .flat_map(|s| s.strips.iter())
            .map(Vec::len)
            .sum();
        strip_vertices + self.glyphs.len() * 8
    }

    pub fn stroke(&self, kind: SegmentKind) -> Option<&StrokeGroup> {
        self.strokes.iter().find(|s| s.kind == kind)
    }
}
