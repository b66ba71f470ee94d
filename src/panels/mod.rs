//! Panel system with trait-based composition
//!
//! Each panel implements the Panel trait for consistent behavior.
//!
//! Layout per mode:
//! - Text: Input (left) and Output (right)
//! - Document: Document drop zone with progress (top) and Output (bottom)

mod document;
mod input;
mod output;

pub use document::{dropped_path, DocumentPanel};
pub use input::InputPanel;
pub use output::OutputPanel;

use crate::core::Result;
use crate::events::Event;
use crate::state::AppState;
use ratatui::layout::Rect;
use ratatui::Frame;
use translumen_core::TranslateMode;

/// Panel trait - defines the interface for all panels
///
/// Panels own their view state (cursor, scroll); everything about the
/// translation itself is read from and written to [`AppState`].
pub trait Panel {
    /// Handle an input event
    ///
    /// Returns Ok(true) if the event was consumed, Ok(false) to propagate.
    fn handle_input(&mut self, event: &Event, state: &mut AppState) -> Result<bool>;

    /// Render the panel to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, focused: bool);
}

/// Container for all panels
pub struct PanelRegistry {
    /// Text mode editor
    pub input: InputPanel,

    /// Translation output (both modes)
    pub output: OutputPanel,

    /// Document mode drop zone, file info and progress
    pub document: DocumentPanel,
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self {
            input: InputPanel::new(),
            output: OutputPanel::new(),
            document: DocumentPanel::new(),
        }
    }

    /// Offer an event to the panels of the active mode, in focus order
    pub fn dispatch(&mut self, event: &Event, state: &mut AppState) -> Result<bool> {
        let primary: &mut dyn Panel = match state.session.mode() {
            TranslateMode::Text => &mut self.input,
            TranslateMode::Document => &mut self.document,
        };
        if primary.handle_input(event, state)? {
            return Ok(true);
        }
        self.output.handle_input(event, state)
    }
}
