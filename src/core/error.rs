//! Error types for the terminal front end using thiserror
//!
//! All errors are typed - no .unwrap() or .expect() in production code.

use thiserror::Error;
use translumen_core::config::ConfigError;
use translumen_core::TranslumenError;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] TranslumenError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Usage(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl AppError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}

/// Convenience Result type for the front end
pub type Result<T> = std::result::Result<T, AppError>;
