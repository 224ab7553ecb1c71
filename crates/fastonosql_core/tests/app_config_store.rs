use fastonosql_core::{AppConfig, AppConfigStore, CoreError, DEFAULT_DELIMITER, ValueType};
use std::fs;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = AppConfigStore::with_path(dir.path().join("config.json"));

    let config = store.load().unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.editor.delimiter, DEFAULT_DELIMITER);
    assert!(config.workspace.duplicate_copies_text);
}

#[test]
fn save_then_load_keeps_settings() {
    let dir = tempfile::tempdir().unwrap();
    let store = AppConfigStore::with_path(dir.path().join("nested").join("config.json"));

    let mut config = AppConfig::default();
    config.editor.delimiter = ",".into();
    config.editor.default_type = ValueType::Hash;
    config.workspace.duplicate_copies_text = false;

    store.save(&config).unwrap();
    assert_eq!(store.load().unwrap(), config);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "editor": { "default_type": "zset" } }"#).unwrap();

    let config = AppConfigStore::with_path(&path).load().unwrap();
    assert_eq!(config.editor.default_type, ValueType::ZSet);
    assert_eq!(config.editor.delimiter, DEFAULT_DELIMITER);
}

#[test]
fn malformed_file_is_an_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let err = AppConfigStore::with_path(&path).load().unwrap_err();
    assert!(matches!(err, CoreError::InvalidConfig(_)));
}
