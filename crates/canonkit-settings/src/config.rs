//! Viewer configuration and file persistence.

use crate::error::{SettingsError, SettingsResult};
use canonkit_core::constants::{DWELL_GLYPH_HALF_SIZE, MAX_ARC_STEPS};
use canonkit_toolpath::{ArcResolution, Palette, SessionOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name used under the platform config directory
pub const CONFIG_FILE_NAME: &str = "viewer.toml";

/// Directory created under the platform config directory
const APP_DIR: &str = "canonkit";

/// Arc subdivision settings
pub type ArcSettings = ArcResolution;

/// Marker glyph sizing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphSettings {
    /// Half the width of the dwell "X" in world units
    pub dwell_half_size: f64,
}

impl Default for GlyphSettings {
    fn default() -> Self {
        Self {
            dwell_half_size: DWELL_GLYPH_HALF_SIZE,
        }
    }
}

/// Serialization format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) => Err(SettingsError::UnsupportedFormat(ext.to_string())),
            None => Err(SettingsError::UnsupportedFormat(format!(
                "{} has no extension, expected .json or .toml",
                path.display()
            ))),
        }
    }
}

/// Complete viewer configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewerConfig {
    pub palette: Palette,
    pub arcs: ArcSettings,
    pub glyphs: GlyphSettings,
}

impl ViewerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration file (.json or .toml)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::LoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded viewer config from {}", path.display());
        Ok(config)
    }

    /// Validate and write the configuration; the format follows the extension
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| SettingsError::SaveError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        info!("Saved viewer config to {}", path.display());
        Ok(())
    }

    /// Load `path` if given, otherwise the default file if it exists,
    /// otherwise the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_config_path() {
            Ok(default_path) if default_path.is_file() => Self::load_from_file(&default_path),
            Ok(_) => Ok(Self::default()),
            Err(e) => {
                debug!("No default config location: {}", e);
                Ok(Self::default())
            }
        }
    }

    /// `<config dir>/canonkit/viewer.toml`, falling back to the home directory
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory".to_string())
            })?;
        path.push(APP_DIR);
        path.push(CONFIG_FILE_NAME);
        Ok(path)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        for (key, steps) in [
            ("arcs.min_steps", self.arcs.min_steps),
            ("arcs.steps_per_half_turn", self.arcs.steps_per_half_turn),
        ] {
            if steps == 0 || steps > MAX_ARC_STEPS {
                return Err(SettingsError::invalid(
                    key,
                    format!("must be between 1 and {}", MAX_ARC_STEPS),
                ));
            }
        }

        if !self.arcs.radius_tolerance.is_finite() || self.arcs.radius_tolerance < 0.0 {
            return Err(SettingsError::invalid(
                "arcs.radius_tolerance",
                "must be a finite value >= 0",
            ));
        }

        if !self.glyphs.dwell_half_size.is_finite() || self.glyphs.dwell_half_size <= 0.0 {
            return Err(SettingsError::invalid(
                "glyphs.dwell_half_size",
                "must be a finite value > 0",
            ));
        }

        Ok(())
    }

    /// Options for a translation session using this configuration
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            resolution: self.arcs,
            palette: self.palette,
            glyph_half_size: self.glyphs.dwell_half_size,
        }
    }
}
