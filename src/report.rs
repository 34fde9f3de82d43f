//! Summary of a replayed call stream, printable as text or JSON

use canonkit_core::Point3;
use canonkit_toolpath::toolpath::LineNumber;
use canonkit_toolpath::{CameraFrame, ExtentBox, ToolpathExtents, ToolpathStats, TranslationSession};
use serde::Serialize;
use std::fmt;

/// What one program line produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionReport {
    pub line: LineNumber,
    pub segments: usize,
    pub markers: usize,
    pub centroid: Point3,
    pub frame: CameraFrame,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub calls: usize,
    pub stats: ToolpathStats,
    pub extents: ToolpathExtents,
    pub frame: CameraFrame,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionReport>,
}

impl Report {
    pub fn build(session: &TranslationSession, select: Option<LineNumber>, fov: f32) -> Self {
        let selection = select.map(|line| {
            let selection = session.select(line);
            SelectionReport {
                line,
                segments: selection.segments.len(),
                markers: selection.markers.len(),
                centroid: selection.centroid,
                frame: CameraFrame::from_selection(&selection, fov),
            }
        });

        Self {
            calls: session.call_count(),
            stats: session.stats(),
            extents: session.extents(),
            frame: session.frame_all(fov),
            selection,
        }
    }
}

fn write_box(f: &mut fmt::Formatter<'_>, label: &str, extents: &ExtentBox) -> fmt::Result {
    if extents.is_empty() {
        writeln!(f, "{:<9}(empty)", label)
    } else {
        writeln!(f, "{:<9}min {}  max {}", label, extents.min, extents.max)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "calls:        {:>8}", self.calls)?;
        writeln!(f, "{}", self.stats)?;
        writeln!(f)?;
        write_box(f, "drawn", &self.extents.drawn)?;
        write_box(f, "nominal", &self.extents.nominal)?;
        writeln!(
            f,
            "frame    target ({:.4}, {:.4}, {:.4})  radius {:.4}  distance {:.4}",
            self.frame.target.x,
            self.frame.target.y,
            self.frame.target.z,
            self.frame.radius,
            self.frame.distance
        )?;

        if let Some(selection) = &self.selection {
            writeln!(f)?;
            writeln!(
                f,
                "line {}: {} segments, {} markers",
                selection.line, selection.segments, selection.markers
            )?;
            writeln!(f, "centroid {}", selection.centroid)?;
            write!(
                f,
                "frame    radius {:.4}  distance {:.4}",
                selection.frame.radius, selection.frame.distance
            )?;
        }

        Ok(())
    }
}
