//! Layout management for panel arrangement

use crate::panels::DocumentPanel;
use crate::state::AppState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use translumen_core::TranslateMode;

/// Screen areas
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ TransLumen  [Text] [PDF]            ☀ Light  │ header
/// │ English  ⇄  Indonesian                       │ languages
/// ├──────────────────────┬───────────────────────┤
/// │       Input          │        Output         │ text mode
/// │                      │                       │
/// ├──────────────────────┴───────────────────────┤
/// │ 12 characters · status          key hints    │ status
/// └──────────────────────────────────────────────┘
/// ```
///
/// In document mode the content area stacks the drop zone (with its
/// progress gauge) above the output card.
pub struct AppLayout {
    pub header: Rect,
    pub languages: Rect,

    /// Text editor (text mode) or drop zone (document mode)
    pub primary: Rect,

    pub output: Rect,
    pub status: Rect,
}

/// Calculate layout areas for the active mode
pub fn get_layout(area: Rect, state: &AppState) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Language bar
            Constraint::Min(6),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = rows[2];
    let (primary, output) = match state.session.mode() {
        TranslateMode::Text => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(content);
            (cols[0], cols[1])
        }
        TranslateMode::Document => {
            let stack = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(DocumentPanel::height(state)),
                    Constraint::Min(3),
                ])
                .split(content);
            (stack[0], stack[1])
        }
    };

    AppLayout {
        header: rows[0],
        languages: rows[1],
        primary,
        output,
        status: rows[3],
    }
}

/// Rectangle of `width` x `height` centered in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
