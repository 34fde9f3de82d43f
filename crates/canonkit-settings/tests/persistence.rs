//! Save/load round trips through real files

use canonkit_core::Color;
use canonkit_settings::{SettingsError, ViewerConfig};
use tempfile::TempDir;

fn customized() -> ViewerConfig {
    let mut config = ViewerConfig::default();
    config.palette.selected = Color::rgb(0xff, 0x00, 0xff);
    config.arcs.min_steps = 24;
    config.glyphs.dwell_half_size = 0.125;
    config
}

#[test]
fn toml_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("viewer.toml");

    let config = customized();
    config.save_to_file(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[palette]"));
    assert!(text.contains("#ff00ff"));

    let loaded = ViewerConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn json_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("viewer.json");

    let config = customized();
    config.save_to_file(&path).unwrap();

    let loaded = ViewerConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn invalid_file_contents_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("viewer.toml");
    std::fs::write(&path, "[glyphs]\ndwell_half_size = -1.0\n").unwrap();

    let err = ViewerConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));

    std::fs::write(&path, "[arcs]\nsteps_per_half_turn = 4000000000\n").unwrap();
    let err = ViewerConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::InvalidSetting { ref key, .. } if key == "arcs.steps_per_half_turn"
    ));

    std::fs::write(&path, "[palette]\ntraverse = \"not a color\"\n").unwrap();
    let err = ViewerConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::TomlError(_)));
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let err = ViewerConfig::load_from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SettingsError::LoadError { .. }));
}

#[test]
fn invalid_config_is_not_saved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("viewer.toml");

    let mut config = ViewerConfig::default();
    config.arcs.steps_per_half_turn = 0;
    assert!(config.save_to_file(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn explicit_path_wins_over_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("viewer.json");
    customized().save_to_file(&path).unwrap();

    let loaded = ViewerConfig::load_or_default(Some(&path)).unwrap();
    assert_eq!(loaded.arcs.min_steps, 24);
}
