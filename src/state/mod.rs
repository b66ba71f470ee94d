//! Application state management
//!
//! Contains the central state container and input mode state machine.

mod app;
mod input_mode;

pub use app::{AppState, MessageLevel, StatusMessage};
pub use input_mode::InputMode;
