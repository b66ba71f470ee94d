//! Error types for TransLumen Core
//!
//! Provides a unified error type for all backend operations.

use crate::document::DocumentError;
use crate::llm::LlmError;
use thiserror::Error;

/// Result type for TransLumen Core operations
pub type Result<T> = std::result::Result<T, TranslumenError>;

/// Unified error type for TransLumen Core
#[derive(Error, Debug)]
pub enum TranslumenError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Translation request error
    #[error("{0}")]
    Llm(#[from] LlmError),

    /// Document could not be used
    #[error("{0}")]
    Document(#[from] DocumentError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TranslumenError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        TranslumenError::Config(msg.into())
    }
}

impl From<serde_json::Error> for TranslumenError {
    fn from(err: serde_json::Error) -> Self {
        TranslumenError::Serialization(err.to_string())
    }
}
