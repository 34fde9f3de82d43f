//! Error handling for canonkit
//!
//! Toolpath translation itself never fails: malformed numbers propagate into
//! the produced geometry. Errors only exist at the edges, where external input
//! is decoded into the strongly typed values the translator works with:
//! plane selectors, glyph axes and colors.

use thiserror::Error;

/// Canon decoding error type
///
/// Represents values coming from the motion-program driver that do not map
/// onto a canonical value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CanonError {
    /// Plane selector outside XY / XZ / YZ
    #[error("Invalid plane selector: {code}")]
    InvalidPlane {
        /// The selector as received.
        code: String,
    },

    /// Dwell glyph axis outside 0..=2
    #[error("Invalid glyph axis {axis}, expected 0, 1 or 2")]
    InvalidGlyphAxis {
        /// The axis index as received.
        axis: u8,
    },

    /// Color specification that is not `#rrggbb`
    #[error("Invalid color '{spec}', expected #rrggbb")]
    InvalidColor {
        /// The color text as received.
        spec: String,
    },
}
