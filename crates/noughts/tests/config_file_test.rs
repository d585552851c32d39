//! Tests for loading the config file from disk.

use noughts::NoughtsConfig;
use noughts_core::GameMode;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, tempdir};

#[test]
fn test_loads_config_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(
        file,
        r#"
turn_seconds = 20
computer_delay_ms = 0
default_mode = "human-vs-human"
log_file = "/tmp/noughts-test.log"
"#
    )
    .unwrap();

    let config = NoughtsConfig::from_file(file.path()).expect("Config should load");
    assert_eq!(*config.turn_seconds(), 20);
    assert_eq!(*config.computer_delay_ms(), 0);
    assert_eq!(*config.default_mode(), GameMode::HumanVsHuman);
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/noughts-test.log"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = NoughtsConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, NoughtsConfig::default());
}

#[test]
fn test_missing_file_is_an_error_when_required() {
    let dir = tempdir().expect("Failed to create temp dir");
    let err = NoughtsConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_reports_location() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "turn_seconds = \"soon\"").unwrap();

    let err = NoughtsConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
    assert!(err.to_string().contains("Config error"));
}
