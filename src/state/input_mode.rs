//! Input mode state machine
//!
//! Decides where a key goes: the text editor, the path prompt, or the
//! blocking alert.

/// Input mode state machine
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Typing goes to the active panel
    #[default]
    Normal,

    /// The "open file" prompt is collecting a path
    PathPrompt { query: String },

    /// Blocking alert; everything but dismiss is swallowed
    Alert { message: String },
}

impl InputMode {
    /// Check if a modal/overlay is open
    pub fn is_modal(&self) -> bool {
        !matches!(self, InputMode::Normal)
    }

    /// Get the current query if the path prompt is open
    pub fn query(&self) -> Option<&str> {
        match self {
            InputMode::PathPrompt { query } => Some(query),
            _ => None,
        }
    }

    /// Mutable access to the path prompt buffer
    pub fn query_mut(&mut self) -> Option<&mut String> {
        match self {
            InputMode::PathPrompt { query } => Some(query),
            _ => None,
        }
    }

    /// Alert text, if one is showing
    pub fn alert(&self) -> Option<&str> {
        match self {
            InputMode::Alert { message } => Some(message),
            _ => None,
        }
    }

    /// Transition to normal mode
    pub fn to_normal(&mut self) {
        *self = InputMode::Normal;
    }

    /// Open the path prompt
    pub fn open_path_prompt(&mut self) {
        *self = InputMode::PathPrompt {
            query: String::new(),
        };
    }

    /// Show a blocking alert
    pub fn open_alert(&mut self, message: impl Into<String>) {
        *self = InputMode::Alert {
            message: message.into(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_normal() {
        let mode = InputMode::default();
        assert_eq!(mode, InputMode::Normal);
        assert!(!mode.is_modal());
    }

    #[test]
    fn test_transitions() {
        let mut mode = InputMode::Normal;

        mode.open_path_prompt();
        assert_eq!(mode.query(), Some(""));
        mode.query_mut().unwrap().push_str("/tmp/a.pdf");
        assert_eq!(mode.query(), Some("/tmp/a.pdf"));

        mode.open_alert("Please upload a PDF file.");
        assert!(mode.is_modal());
        assert_eq!(mode.alert(), Some("Please upload a PDF file."));
        assert_eq!(mode.query(), None);

        mode.to_normal();
        assert_eq!(mode, InputMode::Normal);
    }
}
