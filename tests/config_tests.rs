use caesar_cipher::config::{load_settings, ConfigError, LogFormat, DEFAULT_FAILURE_MESSAGE};
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

fn toml_file() -> NamedTempFile {
    Builder::new().suffix(".toml").tempfile().unwrap()
}

#[test]
fn loads_values_from_toml_file() {
    let mut file = toml_file();
    writeln!(file, "failure_message = \"ключ не найден\"").unwrap();
    writeln!(file, "log_format = \"json\"").unwrap();
    file.flush().unwrap();

    let settings = load_settings(Some(file.path())).unwrap();
    assert_eq!(settings.failure_message, "ключ не найден");
    assert_eq!(settings.log_format, LogFormat::Json);
    // untouched keys keep their defaults
    assert_eq!(settings.log_level, "info");
}

#[test]
fn partial_file_keeps_default_marker() {
    let mut file = toml_file();
    writeln!(file, "log_level = \"debug\"").unwrap();
    file.flush().unwrap();

    let settings = load_settings(Some(file.path())).unwrap();
    assert_eq!(settings.failure_message, DEFAULT_FAILURE_MESSAGE);
    assert_eq!(settings.log_level, "debug");
}

#[test]
fn rejects_unknown_log_format() {
    let mut file = toml_file();
    writeln!(file, "log_format = \"xml\"").unwrap();
    file.flush().unwrap();

    let err = load_settings(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Config(_)));
}
