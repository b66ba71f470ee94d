//! Core infrastructure module
//!
//! Error types shared by the TUI and the headless commands.

mod error;

pub use error::{AppError, Result};
