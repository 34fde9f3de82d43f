//! RGB display colors, serialized as `#rrggbb` strings.

use crate::error::CanonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`
    pub fn from_hex(spec: &str) -> Result<Self, CanonError> {
        let invalid = || CanonError::InvalidColor {
            spec: spec.to_string(),
        };

        let hex = spec.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Channels scaled to `[0, 1]`, the form vertex colors are uploaded in
    pub fn to_rgb_f32(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = CanonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = CanonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(Color::from_hex("#ff8000").unwrap(), Color::rgb(255, 128, 0));
        assert_eq!(Color::from_hex("00FFff").unwrap(), Color::rgb(0, 255, 255));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Color::from_hex("#fff"),
            Err(CanonError::InvalidColor { .. })
        ));
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("#ff00ä").is_err());
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Color::rgb(0, 171, 255).to_string(), "#00abff");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::rgb(255, 0, 16)).unwrap();
        assert_eq!(json, "\"#ff0010\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(255, 0, 16));
        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }

    #[test]
    fn test_to_rgb_f32() {
        assert_eq!(Color::WHITE.to_rgb_f32(), [1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_rgb_f32(), [0.0, 0.0, 0.0]);
    }
}
