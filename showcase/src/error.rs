use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Application error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },
    #[error("invalid config value for `{key}`: {reason}")]
    ConfigValue { key: &'static str, reason: String },
    #[error("failed to create log file {}: {source}", path.display())]
    LogFile { path: PathBuf, source: io::Error },
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
