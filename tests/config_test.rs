//! Tests for loading game configuration from disk.

use squaretoe::{BoardEngine, GameConfig};
use std::io::Write;

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "side = 5").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.side(), 5);
    assert_eq!(config.log_filter(), "info");

    let engine = BoardEngine::with_side(*config.side()).unwrap();
    assert_eq!(engine.board().len(), 25);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_size_override() {
    let config = GameConfig::default().with_side(6);
    assert!(config.validate().is_ok());
    assert_eq!(*config.side(), 6);
}

#[test]
fn test_oversized_side_in_file_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "side = 2147483648").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("side must be at most"));
}
