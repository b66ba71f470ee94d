//! Document drop zone, selected file and progress gauge
//!
//! Terminals deliver a dragged file as a bracketed paste of its path, so a
//! paste here is treated as a drop.

use crate::core::Result;
use crate::events::Event;
use crate::panels::Panel;
use crate::state::AppState;
use crate::ui::theme;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};
use std::path::PathBuf;
use translumen_core::FileSelection;

/// Turn pasted text into a path, undoing the quoting terminals add on drop
pub fn dropped_path(text: &str) -> Option<PathBuf> {
    let line = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    let unquoted = line
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| line.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(line);
    let path = unquoted.strip_prefix("file://").unwrap_or(unquoted);
    Some(PathBuf::from(path.replace("\\ ", " ")))
}

pub struct DocumentPanel;

impl Default for DocumentPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentPanel {
    pub fn new() -> Self {
        Self
    }

    /// Rows needed for the zone, plus the gauge while it is visible
    pub fn height(state: &AppState) -> u16 {
        if state.session.progress().is_some() {
            8
        } else {
            5
        }
    }

    fn drop(&self, text: &str, state: &mut AppState) {
        let Some(path) = dropped_path(text) else {
            return;
        };
        match state.session.drop_path(&path) {
            FileSelection::Selected => {
                let name = state.session.file().map(|f| f.name().to_string());
                state.info(format!("Selected {}", name.unwrap_or_default()));
            }
            FileSelection::Ignored => {}
            FileSelection::Rejected(message) => state.alert(message),
        }
    }

    fn render_zone(&self, frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
        let theme = theme::theme();
        let border_style = if focused {
            Style::default().fg(theme.border_focused)
        } else {
            Style::default().fg(theme.border_unfocused)
        };
        let block = Block::default()
            .title(" PDF ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let lines = match state.session.file() {
            Some(file) => vec![
                Line::from(vec![
                    Span::styled(
                        file.name().to_string(),
                        Style::default()
                            .fg(theme.text_primary)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", file.size_label()),
                        Style::default().fg(theme.text_secondary),
                    ),
                ]),
                Line::from(Span::styled(
                    "Ctrl+R remove · Ctrl+O choose another",
                    Style::default().fg(theme.text_muted),
                )),
            ],
            None => vec![
                Line::from(Span::styled(
                    "Drop a PDF here or press Enter to choose one",
                    Style::default().fg(theme.accent_primary),
                )),
                Line::from(Span::styled(
                    "PDF only · up to 20 MB",
                    Style::default().fg(theme.text_muted),
                )),
            ],
        };

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

impl Panel for DocumentPanel {
    fn handle_input(&mut self, event: &Event, state: &mut AppState) -> Result<bool> {
        match event {
            Event::Paste(text) => {
                self.drop(text, state);
                Ok(true)
            }
            Event::Key(key) if key.code == KeyCode::Enter => {
                state.input_mode.open_path_prompt();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
        let Some(progress) = state.session.progress() else {
            self.render_zone(frame, area, state, focused);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Length(3)])
            .split(area);
        self.render_zone(frame, chunks[0], state, focused);

        let theme = theme::theme();
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(theme.gauge_filled).bg(theme.gauge_empty))
            .percent(u16::from(progress.percent))
            .label(format!("{} {}%", progress.label, progress.percent));
        frame.render_widget(gauge, chunks[1]);
    }
}
