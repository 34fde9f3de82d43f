//! Canonkit Settings Crate
//!
//! Viewer configuration (colors, arc resolution, glyph size) and its
//! persistence as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{ArcSettings, ConfigFormat, GlyphSettings, ViewerConfig, CONFIG_FILE_NAME};
pub use error::{SettingsError, SettingsResult};
