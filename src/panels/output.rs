//! Translation output panel
//!
//! Text mode shows the output field; document mode shows the output card,
//! which stays hidden until a document translation completes.

use crate::core::Result;
use crate::events::Event;
use crate::panels::Panel;
use crate::state::AppState;
use crate::ui::theme;
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use translumen_core::TranslateMode;

/// Placeholder for an empty document result
const NO_OUTPUT: &str = "No output received.";

/// Lines moved per PageUp/PageDown
const PAGE: u16 = 10;

/// What the panel shows for the current session
#[derive(Debug, PartialEq)]
enum OutputView<'a> {
    /// Nothing yet; muted hint
    Hint(&'static str),

    /// Document finished without text
    Empty,

    Text(&'a str),
}

fn view(state: &AppState) -> OutputView<'_> {
    let session = &state.session;
    match session.mode() {
        TranslateMode::Text => {
            if session.is_in_flight() {
                OutputView::Hint("Translating…")
            } else if session.text_output().is_empty() {
                OutputView::Hint("Translation will appear here")
            } else {
                OutputView::Text(session.text_output())
            }
        }
        TranslateMode::Document => {
            if !session.is_output_visible() {
                OutputView::Hint("The translated document will appear here")
            } else {
                match session.translated().first() {
                    Some(block) => OutputView::Text(block),
                    None => OutputView::Empty,
                }
            }
        }
    }
}

/// Read-only, scrollable output
pub struct OutputPanel {
    scroll: u16,

    /// Length of the last rendered output, to reset scroll on change
    last_len: usize,
}

impl Default for OutputPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPanel {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            last_len: 0,
        }
    }
}

impl Panel for OutputPanel {
    fn handle_input(&mut self, event: &Event, _state: &mut AppState) -> Result<bool> {
        let Event::Key(key) = event else {
            return Ok(false);
        };
        match key.code {
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(PAGE),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
        let theme = theme::theme();
        let border_style = if focused {
            Style::default().fg(theme.border_focused)
        } else {
            Style::default().fg(theme.border_unfocused)
        };

        let title = match state.session.mode() {
            TranslateMode::Text => format!(" {} ", state.session.target),
            TranslateMode::Document => format!(" Translation · {} ", state.session.target),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);

        let content = view(state);
        let len = match content {
            OutputView::Text(text) => text.len(),
            _ => 0,
        };
        if len != self.last_len {
            self.last_len = len;
            self.scroll = 0;
        }

        let paragraph = match content {
            OutputView::Hint(hint) => Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(theme.text_muted),
            ))),
            OutputView::Empty => Paragraph::new(Line::from(Span::styled(
                NO_OUTPUT,
                Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
            ))),
            OutputView::Text(text) => Paragraph::new(text.to_string())
                .style(Style::default().fg(theme.text_primary))
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
        };

        frame.render_widget(paragraph.block(block), area);
    }
}
