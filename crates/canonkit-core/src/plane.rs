//! Working planes and their axis permutations.
//!
//! Circular interpolation happens in one of three planes. Arc math is written
//! once against a generic `(first, second, normal)` axis triple, and each plane
//! supplies the permutation that maps that triple onto X, Y and Z.

use crate::error::CanonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Axis permutation for one working plane.
///
/// `first` and `second` are the in-plane axes in the order angles are measured
/// (counter-clockwise from `first` toward `second`); `normal` is the
/// out-of-plane (helical) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisMap {
    pub first: usize,
    pub second: usize,
    pub normal: usize,
}

impl AxisMap {
    /// The permutation as an `(ia, ib, ic)` triple
    pub const fn as_tuple(self) -> (usize, usize, usize) {
        (self.first, self.second, self.normal)
    }
}

/// Working plane for circular interpolation (G17, G18, G19)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    /// G17
    #[default]
    Xy,
    /// G18
    Xz,
    /// G19
    Yz,
}

impl Plane {
    /// Axis permutation used by arc interpolation.
    ///
    /// XY → (X, Y, Z), XZ → (Z, X, Y), YZ → (Y, Z, X). Each triple is a cyclic
    /// rotation of (X, Y, Z), so angles keep the right-handed sense about the
    /// plane normal.
    pub const fn axes(self) -> AxisMap {
        match self {
            Plane::Xy => AxisMap {
                first: 0,
                second: 1,
                normal: 2,
            },
            Plane::Xz => AxisMap {
                first: 2,
                second: 0,
                normal: 1,
            },
            Plane::Yz => AxisMap {
                first: 1,
                second: 2,
                normal: 0,
            },
        }
    }

    /// Orientation of dwell glyphs drawn while this plane is active
    pub const fn glyph_axis(self) -> GlyphAxis {
        match self {
            Plane::Xy => GlyphAxis::Z,
            Plane::Xz => GlyphAxis::Y,
            Plane::Yz => GlyphAxis::X,
        }
    }

    /// Decode the interpreter's canonical plane number (1 = XY, 2 = YZ, 3 = XZ)
    pub fn from_canonical(code: u8) -> Result<Self, CanonError> {
        match code {
            1 => Ok(Plane::Xy),
            2 => Ok(Plane::Yz),
            3 => Ok(Plane::Xz),
            _ => Err(CanonError::InvalidPlane {
                code: code.to_string(),
            }),
        }
    }

    /// Decode a G-code plane selection word (17, 18 or 19)
    pub fn from_gcode(code: u8) -> Result<Self, CanonError> {
        match code {
            17 => Ok(Plane::Xy),
            18 => Ok(Plane::Xz),
            19 => Ok(Plane::Yz),
            _ => Err(CanonError::InvalidPlane {
                code: format!("G{code}"),
            }),
        }
    }

    pub const fn gcode(self) -> u8 {
        match self {
            Plane::Xy => 17,
            Plane::Xz => 18,
            Plane::Yz => 19,
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plane::Xy => write!(f, "XY"),
            Plane::Xz => write!(f, "XZ"),
            Plane::Yz => write!(f, "YZ"),
        }
    }
}

impl FromStr for Plane {
    type Err = CanonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "XY" | "G17" => Ok(Plane::Xy),
            "XZ" | "G18" => Ok(Plane::Xz),
            "YZ" | "G19" => Ok(Plane::Yz),
            _ => Err(CanonError::InvalidPlane {
                code: s.to_string(),
            }),
        }
    }
}

/// The axis a dwell glyph is drawn perpendicular to.
///
/// The discriminant is the glyph axis index used by renderers:
/// 0 draws in the XY plane, 1 in XZ, 2 in YZ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GlyphAxis {
    #[default]
    Z = 0,
    Y = 1,
    X = 2,
}

impl GlyphAxis {
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for GlyphAxis {
    type Error = CanonError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GlyphAxis::Z),
            1 => Ok(GlyphAxis::Y),
            2 => Ok(GlyphAxis::X),
            _ => Err(CanonError::InvalidGlyphAxis { axis: value }),
        }
    }
}

impl From<GlyphAxis> for u8 {
    fn from(axis: GlyphAxis) -> Self {
        axis.index()
    }
}
