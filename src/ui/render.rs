//! Main render function

use super::layout::{centered_rect, get_layout};
use super::theme::{current_variant, theme};
use crate::panels::{Panel, PanelRegistry};
use crate::state::{AppState, InputMode, MessageLevel};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use translumen_core::{ThemeVariant, TranslateMode};
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = " F5 Translate  Tab Mode  Ctrl+S Swap  Ctrl+D Save  Ctrl+Y Copy  Ctrl+T Theme  Ctrl+Q Quit ";

/// Render the entire application
pub fn render(frame: &mut Frame, state: &AppState, panels: &mut PanelRegistry, input: &str) {
    let area = frame.area();
    let layout = get_layout(area, state);

    {
        let theme = theme();
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.bg_primary).fg(theme.text_primary)),
            area,
        );
    }

    render_header(frame, layout.header, state);
    render_languages(frame, layout.languages, state);

    match state.session.mode() {
        TranslateMode::Text => panels.input.render(frame, layout.primary, state, true),
        TranslateMode::Document => panels.document.render(frame, layout.primary, state, true),
    }
    panels.output.render(frame, layout.output, state, false);

    render_status_bar(frame, layout.status, state, input);

    match &state.input_mode {
        InputMode::Normal => {}
        InputMode::PathPrompt { query } => render_path_prompt(frame, area, query),
        InputMode::Alert { message } => render_alert(frame, area, message),
    }
}

/// Title, mode tabs and theme indicator
fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    // Read the variant before taking the theme guard; the lock is not reentrant
    let indicator = match current_variant() {
        ThemeVariant::Light => " ☀ Light ",
        ThemeVariant::Dark => " ☾ Dark ",
    };
    let theme = theme();
    let tab = |mode: TranslateMode| {
        let label = format!(" {} ", mode.label());
        if state.session.mode() == mode {
            Span::styled(
                label,
                Style::default()
                    .bg(theme.statusbar_mode_bg)
                    .fg(theme.statusbar_mode_fg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, Style::default().fg(theme.text_secondary))
        }
    };

    let left = Line::from(vec![
        Span::styled(
            " TransLumen ",
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        tab(TranslateMode::Text),
        Span::raw(" "),
        tab(TranslateMode::Document),
    ]);

    frame.render_widget(Paragraph::new(left), area);
    frame.render_widget(
        Paragraph::new(Span::styled(indicator, Style::default().fg(theme.text_muted)))
            .alignment(Alignment::Right),
        area,
    );
}

/// Source, swap arrow and target
fn render_languages(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = theme();
    let session = &state.session;
    let swap_style = if session.source.is_target() {
        Style::default().fg(theme.accent_highlight)
    } else {
        Style::default().fg(theme.text_muted)
    };

    let line = Line::from(vec![
        Span::styled(" F2 ", Style::default().fg(theme.text_muted)),
        Span::styled(
            session.source.display_name(),
            Style::default().fg(theme.text_primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ⇄  ", swap_style),
        Span::styled(
            session.target.display_name(),
            Style::default().fg(theme.text_primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" F3", Style::default().fg(theme.text_muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Character count / file label, status message and key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, input: &str) {
    let theme = theme();
    let label = format!(" {} ", state.session.char_count_label(input));

    let mut spans = vec![Span::styled(
        label,
        Style::default()
            .bg(theme.statusbar_mode_bg)
            .fg(theme.statusbar_mode_fg),
    )];

    if let Some(msg) = &state.status_message {
        let color = match msg.level {
            MessageLevel::Info => theme.status_info,
            MessageLevel::Warning => theme.status_warning,
            MessageLevel::Error => theme.status_error,
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(msg.text.clone(), Style::default().fg(color)));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.statusbar_bg));
    frame.render_widget(bar, area);

    let used: usize = state.session.char_count_label(input).width() + 2;
    if (area.width as usize) > used + KEY_HINTS.width() {
        frame.render_widget(
            Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(theme.text_muted)))
                .alignment(Alignment::Right),
            area,
        );
    }
}

/// Blocking alert box
fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let theme = theme();
    let width = message
        .lines()
        .map(|l| l.width())
        .max()
        .unwrap_or(0)
        .clamp(30, 70) as u16
        + 4;
    let height = message.lines().count().max(1) as u16 + 4;
    let rect = centered_rect(width, height, area);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(" TransLumen ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_highlight))
        .style(Style::default().bg(theme.bg_modal));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    frame.render_widget(
        Paragraph::new(message.to_string())
            .style(Style::default().fg(theme.text_primary))
            .wrap(Wrap { trim: false }),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "[Enter] OK",
            Style::default().fg(theme.accent_primary),
        ))
        .alignment(Alignment::Right),
        chunks[1],
    );
}

/// "Open PDF" path prompt
fn render_path_prompt(frame: &mut Frame, area: Rect, query: &str) {
    let theme = theme();
    let rect = centered_rect(70, 5, area);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(" Open PDF ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_modal));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let lines = vec![
        Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.accent_primary)),
            Span::styled(query.to_string(), Style::default().fg(theme.text_primary)),
        ]),
        Line::from(Span::styled(
            "Enter open · Esc cancel",
            Style::default().fg(theme.text_muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    let x = inner.x + (2 + query.width() as u16).min(inner.width.saturating_sub(1));
    frame.set_cursor_position(Position::new(x, inner.y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &AppState, panels: &mut PanelRegistry) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, state, panels, "hello"))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_text_mode() {
        let state = AppState::default();
        let mut panels = PanelRegistry::new();
        let screen = draw(&state, &mut panels);
        assert!(screen.contains("TransLumen"));
        assert!(screen.contains("Auto Detect"));
        assert!(screen.contains("Indonesian"));
        assert!(screen.contains("5 characters"));
    }

    #[test]
    fn test_renders_alert() {
        let mut state = AppState::default();
        state.alert("Please upload a PDF file.");
        let mut panels = PanelRegistry::new();
        let screen = draw(&state, &mut panels);
        assert!(screen.contains("Please upload a PDF file."));
        assert!(screen.contains("[Enter] OK"));
    }

    #[test]
    fn test_renders_document_progress() {
        let mut state = AppState::default();
        state.session.switch_mode(TranslateMode::Document);
        state.session.set_progress(15, "Sending to Claude AI…");
        let mut panels = PanelRegistry::new();
        let screen = draw(&state, &mut panels);
        assert!(screen.contains("No file selected"));
        assert!(screen.contains("Drop a PDF here"));
        assert!(screen.contains("Sending to Claude AI… 15%"));
    }
}
