//! Canonical machine-motion calls and their translation into toolpath events
//!
//! This module provides:
//! - The closed set of calls a motion-program driver issues ([`CanonCall`])
//! - Origin and tool offset tracking
//! - Arc tessellation
//! - The translator that turns calls into buffered events

pub mod arc;
pub mod offsets;
pub mod translator;

use crate::toolpath::LineNumber;
use canonkit_core::{Orientation, Plane, Point3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A circular or helical feed move, in program coordinates.
///
/// `center` is the in-plane center in the active plane's axis order:
/// `(x, y)` for XY, `(z, x)` for XZ and `(y, z)` for YZ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcFeed {
    /// Target position; its out-of-plane coordinate is the helix end
    pub end: Point3,
    pub center: [f64; 2],
    /// Negative for clockwise, otherwise counter-clockwise
    pub rotation: i32,
    /// Rotary values at the end of the move
    #[serde(default)]
    pub orientation: Orientation,
}

/// One call from the motion-program driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CanonCall {
    Traverse {
        to: Point3,
        #[serde(default)]
        orientation: Orientation,
    },
    Feed {
        to: Point3,
        #[serde(default)]
        orientation: Orientation,
        /// Units per second; when present it becomes the active feed rate
        #[serde(default)]
        feed_rate: Option<f64>,
    },
    Probe {
        to: Point3,
        #[serde(default)]
        orientation: Orientation,
    },
    RigidTap {
        to: Point3,
    },
    ArcFeed(ArcFeed),
    Dwell {
        seconds: f64,
    },
    UserFunction {
        number: u32,
        #[serde(default)]
        p: f64,
        #[serde(default)]
        q: f64,
    },
    ToolChange {
        z: f64,
        #[serde(default)]
        x: f64,
    },
    OriginOffset {
        offset: Point3,
        #[serde(default)]
        rotary: Orientation,
    },
    PlaneSelect {
        plane: Plane,
    },
    /// Units per minute
    FeedRate {
        units_per_minute: f64,
    },
    SpindleRate {
        rpm: f64,
    },
    Suppress {
        suppressed: bool,
    },
    Comment {
        text: String,
    },
    Message {
        text: String,
    },
}

impl fmt::Display for CanonCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let xyz = |p: &Point3| format!("{:.4} {:.4} {:.4}", p.x, p.y, p.z);
        let abc = |o: &Orientation| format!("{:.4} {:.4} {:.4}", o.a, o.b, o.c);

        match self {
            Self::Traverse { to, orientation } => {
                write!(f, "straight_traverse {}  {}", xyz(to), abc(orientation))
            }
            Self::Feed {
                to, orientation, ..
            } => write!(f, "straight_feed {}  {}", xyz(to), abc(orientation)),
            Self::Probe { to, orientation } => {
                write!(f, "straight_probe {}  {}", xyz(to), abc(orientation))
            }
            Self::RigidTap { to } => write!(f, "rigid_tap {}", xyz(to)),
            Self::ArcFeed(arc) => write!(
                f,
                "arc_feed {}  center {:.4} {:.4}  rot {}  {}",
                xyz(&arc.end),
                arc.center[0],
                arc.center[1],
                arc.rotation,
                abc(&arc.orientation)
            ),
            Self::Dwell { seconds } => {
                if *seconds < 0.1 {
                    write!(f, "dwell {:.3} ms", seconds * 1000.0)
                } else {
                    write!(f, "dwell {:.3} seconds", seconds)
                }
            }
            Self::UserFunction { number, p, q } => {
                write!(f, "user_defined_function M{} P{} Q{}", number, p, q)
            }
            Self::ToolChange { z, x } => write!(f, "tool_offset z={:.4} x={:.4}", z, x),
            Self::OriginOffset { offset, rotary } => {
                write!(f, "set_origin_offsets {}  {}", xyz(offset), abc(rotary))
            }
            Self::PlaneSelect { plane } => write!(f, "set_plane {}", plane),
            Self::FeedRate { units_per_minute } => {
                write!(f, "set_feed_rate {}", units_per_minute)
            }
            Self::SpindleRate { rpm } => write!(f, "set_spindle_rate {}", rpm),
            Self::Suppress { suppressed } => write!(f, "suppress {}", suppressed),
            Self::Comment { text } => write!(f, "# {}", text),
            Self::Message { text } => write!(f, "message {}", text),
        }
    }
}

/// A call tagged with the program line it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonRecord {
    pub line: LineNumber,
    #[serde(flatten)]
    pub call: CanonCall,
}

impl CanonRecord {
    pub fn new(line: LineNumber, call: CanonCall) -> Self {
        Self { line, call }
    }
}
