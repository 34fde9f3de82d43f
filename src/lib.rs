//! # canonkit
//!
//! Toolpath preview geometry from a canonical machine-motion call stream:
//! - Plane-aware arc tessellation with an adaptive step count
//! - Origin and tool-length offset tracking
//! - Drawn and nominal extents
//! - Line-number selection, highlighting and camera framing
//!
//! ## Architecture
//!
//! 1. **canonkit-core** - Points, colors, planes, constants, errors
//! 2. **canonkit-toolpath** - Translator, arc tessellator, toolpath buffer and queries
//! 3. **canonkit-settings** - Viewer configuration and persistence
//! 4. **canonkit** - Command-line driver that replays recorded call streams

pub mod report;

pub use canonkit_core::{CanonError, Color, GlyphAxis, Orientation, Plane, Point3, ToolOffset};
pub use canonkit_settings::{SettingsError, ViewerConfig};
pub use canonkit_toolpath::{
    ArcFeed, CameraFrame, CanonCall, CanonRecord, CanonTranslator, ExtentBox, SessionOptions,
    ToolpathBuffer, ToolpathExtents, ToolpathStats, TranslationSession,
};
pub use report::{Report, SelectionReport};

use anyhow::Context;
use std::io::Read;
use std::path::Path;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging on stderr
///
/// `verbosity` raises the default level (0 = warn, 1 = info, 2 = debug,
/// 3+ = trace); `RUST_LOG` directives still apply on top. With `json` set,
/// each event is written as one JSON object per line.
pub fn init_logging(verbosity: u8, json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

/// Parse a JSON array of call records
pub fn parse_program(json: &str) -> anyhow::Result<Vec<CanonRecord>> {
    serde_json::from_str(json).context("Invalid call stream, expected a JSON array of records")
}

/// Read a recorded call stream from a file, or from stdin when `path` is `-`
pub fn load_program(path: &Path) -> anyhow::Result<Vec<CanonRecord>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read call stream from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read call stream {}", path.display()))?
    };

    parse_program(&content).with_context(|| format!("While loading {}", path.display()))
}
