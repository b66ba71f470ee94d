//! TransLumen - a terminal front end for translating text and PDFs with Claude
//!
//! Built with ratatui on top of `translumen-core`:
//! - Text mode: multi-line editor with the translation alongside
//! - Document mode: drop or open a PDF, progress gauge, output card
//! - Language selection with swap, light/dark theme that persists
//! - Download as `.txt`, export as HTML, copy to clipboard

pub mod app;
pub mod clipboard;
pub mod core;
pub mod events;
pub mod logging;
pub mod panels;
pub mod state;
pub mod ui;

// Re-export commonly used types
pub use app::TuiApp;
pub use core::{AppError, Result};
pub use events::{Event, EventBus};
pub use panels::PanelRegistry;
pub use state::AppState;
