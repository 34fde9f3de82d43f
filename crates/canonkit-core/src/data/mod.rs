//! Data models for positions, rotary orientation and tool offsets
//!
//! This module provides:
//! - 3-axis positions used for every drawn vertex
//! - Rotary (A, B, C) orientation carried alongside positions
//! - Lathe-style tool offsets (X and Z)
//! - Display colors

pub mod color;

pub use color::Color;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A position in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
    /// Z-axis position
    pub z: f64,
}

impl Point3 {
    /// The origin
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build a point from an `[x, y, z]` array
    pub const fn from_array(v: [f64; 3]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }

    /// Get the coordinates as an `[x, y, z]` array
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Read one coordinate by axis index (0 = X, 1 = Y, 2 = Z)
    ///
    /// # Panics
    /// Panics if `axis` is greater than 2.
    pub fn axis(&self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("axis index out of range: {axis}"),
        }
    }

    /// Write one coordinate by axis index (0 = X, 1 = Y, 2 = Z)
    ///
    /// # Panics
    /// Panics if `axis` is greater than 2.
    pub fn set_axis(&mut self, axis: usize, value: f64) {
        match axis {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => panic!("axis index out of range: {axis}"),
        }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point3) -> f64 {
        (*self - other).length()
    }

    /// Length of this point taken as a vector from the origin
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Component-wise minimum
    pub fn min(self, other: Point3) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum
    pub fn max(self, other: Point3) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Point halfway between `self` and `other`
    pub fn midpoint(self, other: Point3) -> Self {
        (self + other) / 2.0
    }

    /// True when every coordinate is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, rhs: f64) -> Point3 {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Point3 {
    type Output = Point3;

    fn div(self, rhs: f64) -> Point3 {
        Point3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(v: [f64; 3]) -> Self {
        Self::from_array(v)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{:.4} Y:{:.4} Z:{:.4}", self.x, self.y, self.z)
    }
}

/// Rotary axis values (A, B, C) that travel with a position.
///
/// Preview drawing ignores them; they are tracked so a motion call's
/// rotary values come back out unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Orientation {
    /// A-axis (rotation about X)
    pub a: f64,
    /// B-axis (rotation about Y)
    pub b: f64,
    /// C-axis (rotation about Z)
    pub c: f64,
}

impl Orientation {
    pub const ZERO: Self = Self {
        a: 0.0,
        b: 0.0,
        c: 0.0,
    };

    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Linear interpolation toward `other` by `t` in `[0, 1]`
    pub fn lerp(self, other: Orientation, t: f64) -> Self {
        Self::new(
            self.a + (other.a - self.a) * t,
            self.b + (other.b - self.b) * t,
            self.c + (other.c - self.c) * t,
        )
    }
}

impl Add for Orientation {
    type Output = Orientation;

    fn add(self, rhs: Orientation) -> Orientation {
        Orientation::new(self.a + rhs.a, self.b + rhs.b, self.c + rhs.c)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A:{:.4} B:{:.4} C:{:.4}", self.a, self.b, self.c)
    }
}

/// Active tool-length offsets.
///
/// `x` shifts the X coordinate and `z` the height, following lathe tool geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolOffset {
    /// Offset applied along X
    pub x: f64,
    /// Offset applied along Z
    pub z: f64,
}

impl ToolOffset {
    pub const NONE: Self = Self { x: 0.0, z: 0.0 };

    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Recover the position a zero-length tool would occupy
    pub fn nominal(&self, drawn: Point3) -> Point3 {
        Point3::new(drawn.x + self.x, drawn.y, drawn.z + self.z)
    }

    /// Inverse of [`ToolOffset::nominal`]
    pub fn drawn(&self, nominal: Point3) -> Point3 {
        Point3::new(nominal.x - self.x, nominal.y, nominal.z - self.z)
    }
}
