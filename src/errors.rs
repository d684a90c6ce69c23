use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CipherError>;

/// Failures raised while validating or running a cipher operation.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("key must be an integer, got '{0}'")]
    MalformedKey(String),

    #[error("key must be between 0 and {max}, got {key}")]
    InvalidKey { key: i64, max: usize },

    #[error("a sample file is required for statistical analysis")]
    MissingSample,

    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CipherError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CipherError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("{0}")]
    Cipher(#[from] CipherError),
    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("terminal io error: {0}")]
    Io(#[from] std::io::Error),
}
