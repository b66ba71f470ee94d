//! TransLumen Core - Backend library for TransLumen
//!
//! This crate provides the UI-agnostic translation client:
//! - Language table and prompt templates
//! - Document selection with the size guard and base64 payload
//! - Claude Messages API client (text and document call shapes)
//! - Session state (mode, file, output, progress, in-flight flag)
//! - Background jobs, export, persisted preferences, configuration
//!
//! Any front end (TUI, CLI) drives a [`Session`] and runs the requests it
//! hands out through a [`Translator`].
//!
//! # Example
//!
//! ```ignore
//! use translumen_core::{job, ClaudeTranslator, Session};
//!
//! let translator = ClaudeTranslator::new(&api_key, "claude-sonnet-4-20250514");
//! let mut session = Session::default();
//!
//! let request = session.begin_text("Good morning")?;
//! session.finish_text(job::run_text(&translator, &request));
//! println!("{}", session.text_output());
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod job;
pub mod language;
pub mod llm;
pub mod preferences;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::{ApiConfig, TranslumenConfig, UiConfig};
pub use document::{DocumentError, DocumentFile, MAX_FILE_BYTES};
pub use error::{Result, TranslumenError};
pub use job::JobEvent;
pub use language::Language;
pub use llm::{ClaudeTranslator, LlmError, SharedTranslator, TranslationRequest, Translator};
pub use preferences::{PreferenceStore, ThemeVariant};
pub use session::{DocumentJob, FileSelection, Progress, Rejection, Session, TranslateMode};
