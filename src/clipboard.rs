//! System clipboard access for copying translations
//!
//! The arboard handle is created once; on headless systems it stays
//! `None` and every call reports the clipboard as unavailable.

use arboard::Clipboard;
use parking_lot::Mutex;
use std::sync::OnceLock;
use thiserror::Error;

static CLIPBOARD: OnceLock<Mutex<Option<Clipboard>>> = OnceLock::new();

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard unavailable")]
    Unavailable,

    #[error("Clipboard error: {0}")]
    Backend(#[from] arboard::Error),
}

fn handle() -> &'static Mutex<Option<Clipboard>> {
    CLIPBOARD.get_or_init(|| {
        let clipboard = Clipboard::new()
            .map_err(|e| tracing::warn!(error = %e, "system clipboard not available"))
            .ok();
        Mutex::new(clipboard)
    })
}

/// Initialize the clipboard eagerly (optional; first use also initializes it)
pub fn init() {
    handle();
}

/// Copy text to clipboard
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut lock = handle().lock();
    let clipboard = lock.as_mut().ok_or(ClipboardError::Unavailable)?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Get text from clipboard
pub fn paste() -> Result<String, ClipboardError> {
    let mut lock = handle().lock();
    let clipboard = lock.as_mut().ok_or(ClipboardError::Unavailable)?;
    Ok(clipboard.get_text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_init() {
        init();
        init();
    }

    #[test]
    fn test_unavailable_display() {
        assert_eq!(ClipboardError::Unavailable.to_string(), "Clipboard unavailable");
    }
}
