//! # Canonkit Core
//!
//! Core types shared by the canonkit crates.
//! Provides the fundamental value types for toolpath preview:
//! positions, rotary orientation, tool offsets, working planes,
//! display colors and the error types used at the crate edges.

pub mod constants;
pub mod data;
pub mod error;
pub mod plane;

pub use data::{Color, Orientation, Point3, ToolOffset};

pub use error::CanonError;

pub use plane::{AxisMap, GlyphAxis, Plane};
