//! Axis-aligned extents of the buffered toolpath.

use super::buffer::ToolpathBuffer;
use super::Segment;
use canonkit_core::Point3;
use serde::Serialize;

/// Axis-aligned bounding box in world units.
///
/// An empty box has `min = +∞` and `max = −∞` on every axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtentBox {
    pub min: Point3,
    pub max: Point3,
}

impl Default for ExtentBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl ExtentBox {
    pub const EMPTY: Self = Self {
        min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
        max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
    };

    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Smallest box holding all the given points
    pub fn from_points(points: impl IntoIterator<Item = Point3>) -> Self {
        let mut extents = Self::EMPTY;
        for point in points {
            extents.include(point);
        }
        extents
    }

    pub fn include(&mut self, point: Point3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// True until at least one point has been included
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Midpoint of the box; the origin for an empty box
    pub fn center(&self) -> Point3 {
        if self.is_empty() {
            return Point3::ZERO;
        }
        self.min.midpoint(self.max)
    }

    /// Edge lengths; zero for an empty box
    pub fn size(&self) -> Point3 {
        if self.is_empty() {
            return Point3::ZERO;
        }
        self.max - self.min
    }

    /// Half the diagonal, i.e. the radius of the enclosing sphere
    pub fn radius(&self) -> f64 {
        self.size().length() / 2.0
    }

    pub fn union(&self, other: &ExtentBox) -> ExtentBox {
        ExtentBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grow each side by `factor` times the box size along that axis
    pub fn padded(&self, factor: f64) -> ExtentBox {
        if self.is_empty() {
            return *self;
        }
        let pad = self.size() * factor;
        ExtentBox {
            min: self.min - pad,
            max: self.max + pad,
        }
    }
}

/// Extents of the toolpath as drawn and with tool offsets removed
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ToolpathExtents {
    /// Endpoints as positioned, including tool length
    pub drawn: ExtentBox,
    /// Endpoints with each event's tool offset added back
    pub nominal: ExtentBox,
}

impl ToolpathExtents {
    /// Single pass over the traverse, feed and arc sequences.
    ///
    /// Dwell markers sit on a segment endpoint and do not widen the box.
    pub fn scan(buffer: &ToolpathBuffer) -> Self {
        let mut extents = Self::default();

        let segments = buffer
            .traverses()
            .iter()
            .map(|s| s as &dyn Segment)
            .chain(buffer.feeds().iter().map(|s| s as &dyn Segment))
            .chain(buffer.arc_segments().iter().map(|s| s as &dyn Segment));

        for segment in segments {
            let offset = segment.tool_offset();
            for point in [segment.start(), segment.end()] {
                extents.drawn.include(point);
                extents.nominal.include(offset.nominal(point));
            }
        }

        extents
    }
}
