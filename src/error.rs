use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Failed to write to console: {0}")]
    Console(#[from] io::Error),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid log format: '{0}'. Valid options: text, json, pretty")]
    LogFormat(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl PatternError {
    pub fn config_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
