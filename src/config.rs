use config as config_rs;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "caesar.toml";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Brute force failed to find the correct key.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Written to the output file when brute force finds no key.
    pub failure_message: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
}

/// Build settings from defaults, an optional TOML file and `CAESAR_*`
/// environment variables, in increasing order of precedence.
///
/// An explicit `path` must exist; otherwise `caesar.toml` in the working
/// directory is picked up when present.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let defaults = Settings::default();
    let mut builder = config_rs::Config::builder()
        .set_default("failure_message", defaults.failure_message)?
        .set_default("log_level", defaults.log_level)?
        .set_default("log_format", "text")?;

    builder = match path {
        Some(path) => {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.display().to_string()));
            }
            builder.add_source(config_rs::File::from(path).required(true))
        }
        None => builder
            .add_source(config_rs::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
    };

    // CAESAR_LOG_LEVEL=debug overrides log_level, and so on
    builder = builder.add_source(config_rs::Environment::with_prefix("CAESAR"));

    let cfg = builder.build()?;
    Ok(cfg.try_deserialize::<Settings>()?)
}
