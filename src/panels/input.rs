//! Multi-line editor for the text to translate

use crate::clipboard;
use crate::core::Result;
use crate::events::Event;
use crate::panels::Panel;
use crate::state::AppState;
use crate::ui::theme;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Input panel holding the source text
pub struct InputPanel {
    /// Current input buffer
    text: String,

    /// Cursor position as a char index into `text`
    cursor: usize,

    /// First visible line
    scroll: usize,
}

impl Default for InputPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPanel {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            scroll: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the buffer, placing the cursor at the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Char index at which each line starts
    fn line_starts(&self) -> Vec<usize> {
        let mut starts = vec![0];
        for (i, c) in self.text.chars().enumerate() {
            if c == '\n' {
                starts.push(i + 1);
            }
        }
        starts
    }

    /// Cursor as (line, column in chars)
    fn cursor_line_col(&self) -> (usize, usize) {
        let starts = self.line_starts();
        let line = starts
            .iter()
            .rposition(|&start| start <= self.cursor)
            .unwrap_or(0);
        (line, self.cursor - starts[line])
    }

    fn line_len(&self, starts: &[usize], line: usize) -> usize {
        let total = self.text.chars().count();
        match starts.get(line + 1) {
            Some(next) => next - 1 - starts[line],
            None => total - starts[line],
        }
    }

    // ==================== Editing ====================

    fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor, normalising line endings
    pub fn insert_str(&mut self, s: &str) {
        let clean = s.replace("\r\n", "\n").replace('\r', "\n");
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, &clean);
        self.cursor += clean.chars().count();
    }

    fn delete_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
    }

    fn delete_forward(&mut self) {
        if self.cursor < self.text.chars().count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    // ==================== Cursor Movement ====================

    fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    fn move_vertical(&mut self, down: bool) {
        let starts = self.line_starts();
        let (line, col) = self.cursor_line_col();
        let target = if down {
            if line + 1 >= starts.len() {
                return;
            }
            line + 1
        } else {
            if line == 0 {
                return;
            }
            line - 1
        };
        self.cursor = starts[target] + col.min(self.line_len(&starts, target));
    }

    fn move_home(&mut self) {
        let (_, col) = self.cursor_line_col();
        self.cursor -= col;
    }

    fn move_end(&mut self) {
        let starts = self.line_starts();
        let (line, _) = self.cursor_line_col();
        self.cursor = starts[line] + self.line_len(&starts, line);
    }

    fn paste_from_clipboard(&mut self, state: &mut AppState) {
        match clipboard::paste() {
            Ok(text) => self.insert_str(&text),
            Err(e) => state.warn(e.to_string()),
        }
    }

    /// Keep the cursor line inside a viewport of `height` lines
    fn scroll_to_cursor(&mut self, height: usize) {
        let (line, _) = self.cursor_line_col();
        if line < self.scroll {
            self.scroll = line;
        } else if height > 0 && line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }
    }
}

impl Panel for InputPanel {
    fn handle_input(&mut self, event: &Event, state: &mut AppState) -> Result<bool> {
        let key = match event {
            Event::Key(key) => key,
            Event::Paste(text) => {
                self.insert_str(text);
                return Ok(true);
            }
            _ => return Ok(false),
        };

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter if !ctrl => self.insert_char('\n'),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Up => self.move_vertical(false),
            KeyCode::Down => self.move_vertical(true),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            KeyCode::Backspace => self.delete_back(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Char('v') if ctrl => self.paste_from_clipboard(state),
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Char(c) if !ctrl => self.insert_char(c),
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

        let block = Block::default()
            .title(format!(" {} ", state.session.source))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let height = inner.height as usize;
        self.scroll_to_cursor(height);

        if self.text.is_empty() {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Type or paste text to translate…",
                Style::default().fg(theme.text_muted),
            )));
            frame.render_widget(hint, inner);
        } else {
            let lines: Vec<Line> = self
                .text
                .split('\n')
                .skip(self.scroll)
                .take(height)
                .map(|l| {
                    Line::from(Span::styled(
                        l.to_string(),
                        Style::default().fg(theme.text_primary),
                    ))
                })
                .collect();
            frame.render_widget(Paragraph::new(lines), inner);
        }

        if focused && !state.input_mode.is_modal() {
            let (line, col) = self.cursor_line_col();
            let line_text = self.text.split('\n').nth(line).unwrap_or("");
            let before: String = line_text.chars().take(col).collect();
            let x = inner.x + (before.width() as u16).min(inner.width.saturating_sub(1));
            let y = inner.y + (line - self.scroll) as u16;
            frame.set_cursor_position(Position::new(x, y));
        }
    }
}
