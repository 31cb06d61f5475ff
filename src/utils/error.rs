use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum TimesinceError {
    #[error(transparent)]
    #[diagnostic(code(timesince::other))]
    Other(#[from] anyhow::Error),

    #[error(transparent)]
    #[diagnostic(code(timesince::io))]
    Io(#[from] std::io::Error),

    #[error("Config error: {path}")]
    #[diagnostic(code(timesince::config_error))]
    ConfigError {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(transparent)]
    #[diagnostic(code(timesince::toml::de))]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    #[diagnostic(code(timesince::toml::ser))]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid timestamp: '{value}' is neither milliseconds nor a parseable date")]
    #[diagnostic(code(timesince::invalid_timestamp))]
    InvalidTimestamp { value: String },

    #[error("Error: {message}")]
    #[diagnostic(code(timesince::error))]
    Error {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type Result<T, E = TimesinceError> = std::result::Result<T, E>;

#[macro_export]
macro_rules! error {
    (source = $source:expr, $($arg:tt)*) => {
        {
            crate::utils::error::TimesinceError::Error {
                message: format!($($arg)*),
                source: Some(Box::new($source)),
            }
        }
    };
    ($($arg:tt)*) => {
        {
            crate::utils::error::TimesinceError::Error {
                message: format!($($arg)*),
                source: None,
            }
        }
    };
}
