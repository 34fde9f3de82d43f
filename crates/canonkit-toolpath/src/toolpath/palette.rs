//! Preview colors

use canonkit_core::Color;
use serde::{Deserialize, Serialize};

/// Colors for each kind of preview geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub traverse: Color,
    pub straight_feed: Color,
    pub arc_feed: Color,
    pub dwell: Color,
    /// Markers left by user M-codes (M100-M199)
    pub user_function: Color,
    pub selected: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            traverse: Color::rgb(0x4c, 0x80, 0x80),
            straight_feed: Color::WHITE,
            arc_feed: Color::WHITE,
            dwell: Color::rgb(0xff, 0x80, 0x80),
            user_function: Color::rgb(0x80, 0x80, 0xff),
            selected: Color::rgb(0x00, 0xff, 0xff),
        }
    }
}
