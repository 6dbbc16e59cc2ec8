//! Configuration system tests
//!
//! Tests for config paths, the JSON config record and loading/fallback.

use std::fs;

use fastfm::config::AppConfig;
use fastfm::config_paths;
use fastfm::fs::{SortBy, SortOrder};
use fastfm::keymap::{default_keyboard_config, Action, BindingTable};
use tempfile::TempDir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_file_name() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.ends_with("FastFileManage/key-config.json"));
    }
}

#[test]
fn test_logs_dir_is_under_config_dir() {
    if let (Some(dir), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(dir));
    }
}

// ========================================================================
// Record shape
// ========================================================================

#[test]
fn test_default_record_matches_documented_shape() {
    let json = serde_json::to_value(AppConfig::default()).unwrap();

    assert_eq!(json["version"], "1.0.0");
    assert_eq!(json["keyboard"]["navigation"]["tab"], "tab");
    assert_eq!(json["keyboard"]["fileOperations"]["openInExplorer"], "ctrl+e");
    assert_eq!(json["keyboard"]["selection"]["multiSelect"], "shift");
    assert_eq!(json["keyboard"]["search"]["clearSearch"], "escape");
    assert_eq!(json["ui"]["theme"], "dark");
    assert_eq!(json["ui"]["showHiddenFiles"], false);
    assert_eq!(json["ui"]["sortBy"], "name");
    assert_eq!(json["ui"]["sortOrder"], "asc");
}

#[test]
fn test_partial_record_fills_defaults() {
    let config: AppConfig = serde_json::from_str(r#"{"ui": {"sortBy": "modified"}}"#).unwrap();

    assert_eq!(config.version, "1.0.0");
    assert_eq!(config.keyboard, default_keyboard_config());
    assert_eq!(config.ui.sort_by, SortBy::Modified);
    assert_eq!(config.ui.sort_order, SortOrder::Asc);
    assert!(!config.ui.show_hidden_files);
}

#[test]
fn test_absent_category_stays_unbound() {
    let config: AppConfig =
        serde_json::from_str(r#"{"keyboard": {"navigation": {"up": "k"}}}"#).unwrap();
    let table = BindingTable::build(&config.keyboard);

    assert_eq!(table.display_for(Action::Up).as_deref(), Some("k"));
    assert!(!table.is_bound(Action::Down));
    assert!(!table.is_bound(Action::Copy));
    assert!(!table.is_bound(Action::FocusSearch));
}

// ========================================================================
// Load / save
// ========================================================================

#[test]
fn test_missing_file_writes_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested/key-config.json");

    let config = AppConfig::load_from(&path);
    assert_eq!(config, AppConfig::default());
    assert!(path.exists());

    let written = AppConfig::read_from(&path).unwrap();
    assert_eq!(written, AppConfig::default());
}

#[test]
fn test_malformed_file_is_replaced() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("key-config.json");
    fs::write(&path, "{ not json").unwrap();

    let config = AppConfig::load_from(&path);
    assert_eq!(config, AppConfig::default());
    assert!(AppConfig::read_from(&path).is_ok());
}

#[test]
fn test_save_is_pretty_json() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("key-config.json");

    let mut config = AppConfig::default();
    config.ui.show_hidden_files = true;
    config.save_to(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains('\n'));
    assert!(content.contains("\"showHiddenFiles\": true"));
    assert_eq!(AppConfig::read_from(&path).unwrap(), config);
}

#[test]
fn test_user_bindings_round_trip() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("key-config.json");
    fs::write(
        &path,
        r#"{
            "version": "1.0.0",
            "keyboard": {
                "navigation": {"up": "Ctrl+Shift+K", "down": "j"}
            },
            "ui": {"theme": "light", "showHiddenFiles": false, "sortBy": "size", "sortOrder": "desc"}
        }"#,
    )
    .unwrap();

    let config = AppConfig::load_from(&path);
    assert_eq!(config.ui.theme, "light");
    assert_eq!(config.ui.sort_by, SortBy::Size);

    let table = BindingTable::build(&config.keyboard);
    let binding = table.binding(Action::Up).unwrap();
    assert_eq!(binding.spec, "ctrl+shift+k");
    assert!(binding.chord.is_some());
}

#[test]
fn test_reset_overwrites_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("key-config.json");
    fs::write(&path, r#"{"keyboard": {}}"#).unwrap();

    let config = AppConfig::reset(&path).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(AppConfig::read_from(&path).unwrap(), AppConfig::default());
}
