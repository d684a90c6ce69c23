use caesar_cipher::config::ConfigError;
use caesar_cipher::errors::{AppError, CipherError};
use std::path::PathBuf;

#[test]
fn app_error_from_cipher_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "fail");
    let app: AppError = CipherError::io("out.txt", io_err).into();
    assert!(matches!(app, AppError::Cipher(CipherError::Io { .. })));
}

#[test]
fn invalid_key_message_names_range() {
    let err = CipherError::InvalidKey { key: 40, max: 39 };
    assert_eq!(err.to_string(), "key must be between 0 and 39, got 40");
}

#[test]
fn missing_input_message_names_path() {
    let err = CipherError::InputNotFound(PathBuf::from("нет.txt"));
    assert_eq!(err.to_string(), "input file does not exist: нет.txt");
}

#[test]
fn app_error_displays_cipher_error_unchanged() {
    let app: AppError = CipherError::MissingSample.into();
    assert_eq!(
        app.to_string(),
        "a sample file is required for statistical analysis"
    );
}

#[test]
fn app_error_from_config_error() {
    let err = ConfigError::NotFound("missing.toml".to_string());
    let app: AppError = err.into();
    assert!(matches!(app, AppError::Config(ConfigError::NotFound(_))));
    assert_eq!(
        app.to_string(),
        "config error: config file not found: missing.toml"
    );
}
