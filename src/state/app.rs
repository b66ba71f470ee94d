//! Central application state container
//!
//! The translation session itself lives in the core crate; this adds what
//! only the terminal front end needs.

use super::InputMode;
use std::path::PathBuf;
use translumen_core::{Language, Session};

/// Central application state
pub struct AppState {
    /// Translation session (mode, file, languages, output, progress)
    pub session: Session,

    /// Current input mode
    pub input_mode: InputMode,

    /// Application should quit
    pub should_quit: bool,

    /// Status bar message (if any)
    pub status_message: Option<StatusMessage>,

    /// Directory downloads are written to
    pub output_dir: PathBuf,
}

/// Status bar message
pub struct StatusMessage {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Language::Auto, Language::Id)
    }
}

impl AppState {
    /// Create new application state writing downloads to the working directory
    pub fn new(source: Language, target: Language) -> Self {
        let output_dir = std::env::current_dir().unwrap_or_else(|_| {
            dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
        });

        Self {
            session: Session::new(source, target),
            input_mode: InputMode::default(),
            should_quit: false,
            status_message: None,
            output_dir,
        }
    }

    /// Override the download directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show a blocking alert
    pub fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "alert");
        self.input_mode.open_alert(message);
    }

    /// Set status message
    pub fn set_status(&mut self, text: impl Into<String>, level: MessageLevel) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Set info status
    pub fn info(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageLevel::Info);
    }

    /// Set warning status
    pub fn warn(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageLevel::Warning);
    }

    /// Set error status
    pub fn error(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageLevel::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = AppState::default();
        assert!(!state.should_quit);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.session.source, Language::Auto);
        assert_eq!(state.session.target, Language::Id);
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::default();
        state.quit();
        assert!(state.should_quit);
    }

    #[test]
    fn test_status_message() {
        let mut state = AppState::default();

        state.info("Hello");
        assert_eq!(
            state.status_message.as_ref().map(|m| m.level),
            Some(MessageLevel::Info)
        );

        state.clear_status();
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_alert_opens_modal() {
        let mut state = AppState::default();
        state.alert("Please enter some text to translate.");
        assert_eq!(
            state.input_mode.alert(),
            Some("Please enter some text to translate.")
        );
    }
}
