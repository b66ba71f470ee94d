//! TuiApp - ties the session, panels and translation jobs together
//!
//! Terminal input and job results arrive on one event bus. Global keys are
//! handled here; everything else is offered to the panels of the active
//! mode.

use crate::clipboard;
use crate::core::Result;
use crate::events::{self, Event, EventBus};
use crate::panels::{dropped_path, PanelRegistry};
use crate::state::{AppState, InputMode};
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use translumen_core::{
    export, job, FileSelection, JobEvent, PreferenceStore, Rejection, SharedTranslator,
    TranslateMode,
};

/// Main TUI application
pub struct TuiApp {
    /// Session and front-end state
    pub state: AppState,

    /// Panel instances
    pub panels: PanelRegistry,

    translator: SharedTranslator,
    preferences: PreferenceStore,
    events: EventBus,
}

impl TuiApp {
    pub fn new(
        state: AppState,
        translator: SharedTranslator,
        preferences: PreferenceStore,
    ) -> Self {
        Self {
            state,
            panels: PanelRegistry::new(),
            translator,
            preferences,
            events: EventBus::new(1024),
        }
    }

    /// Run the main event loop until quit
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        events::spawn_input_reader(self.events.sender());

        loop {
            let input = self.panels.input.text().to_owned();
            terminal.draw(|frame| ui::render(frame, &self.state, &mut self.panels, &input))?;

            if !self.pump(Duration::from_millis(50))? {
                self.handle_event(Event::Tick)?;
            }

            // Drain additional events to prevent lag
            for event in self.events.drain(50) {
                self.handle_event(event)?;
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Wait up to `timeout` for one event and handle it
    ///
    /// Returns false when nothing arrived.
    pub fn pump(&mut self, timeout: Duration) -> Result<bool> {
        match self.events.recv_timeout(timeout) {
            Some(event) => {
                self.handle_event(event)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Process a single application event
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => self.handle_key(key)?,
            Event::Paste(text) => self.handle_paste(text)?,
            Event::Job(job) => self.on_job(job),
            Event::Tick | Event::Resize(..) => {}
        }
        self.state.session.tick(Instant::now());
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }

        match self.state.input_mode {
            InputMode::Alert { .. } => {
                // Nothing else is reachable until the alert is dismissed
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.state.input_mode.to_normal();
                }
                return Ok(());
            }
            InputMode::PathPrompt { .. } => {
                self.handle_prompt_key(key);
                return Ok(());
            }
            InputMode::Normal => {}
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let session = &mut self.state.session;

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => self.state.quit(),
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            KeyCode::Char('s') if ctrl => {
                if !session.swap_languages() {
                    self.state.info("Auto Detect cannot be used as the target language");
                }
            }
            KeyCode::Enter if ctrl => self.translate(),
            KeyCode::F(5) => self.translate(),
            KeyCode::Tab | KeyCode::BackTab => {
                let mode = session.mode().toggle();
                session.switch_mode(mode);
            }
            KeyCode::Char('o') if ctrl => {
                session.switch_mode(TranslateMode::Document);
                self.state.input_mode.open_path_prompt();
            }
            KeyCode::Char('r') if ctrl => {
                if session.file().is_some() {
                    session.remove_file();
                    self.state.info("File removed");
                }
            }
            KeyCode::Char('d') if ctrl => self.download(),
            KeyCode::Char('h') if ctrl => self.export_html(),
            KeyCode::Char('y') if ctrl => self.copy_output(),
            KeyCode::F(2) => {
                session.source = if shift {
                    session.source.prev()
                } else {
                    session.source.next()
                };
            }
            KeyCode::F(3) => {
                session.target = if shift {
                    session.target.prev_target()
                } else {
                    session.target.next_target()
                };
            }
            _ => {
                self.panels.dispatch(&Event::Key(key), &mut self.state)?;
            }
        }
        Ok(())
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.input_mode.to_normal(),
            KeyCode::Enter => {
                let query = self.state.input_mode.query().unwrap_or_default().to_owned();
                self.state.input_mode.to_normal();
                if let Some(path) = dropped_path(&query) {
                    self.open_file(&expand_home(&path));
                }
            }
            KeyCode::Backspace => {
                if let Some(query) = self.state.input_mode.query_mut() {
                    query.pop();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(query) = self.state.input_mode.query_mut() {
                    query.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_paste(&mut self, text: String) -> Result<()> {
        if let Some(query) = self.state.input_mode.query_mut() {
            query.push_str(text.trim());
            return Ok(());
        }
        if !self.state.input_mode.is_modal() {
            self.panels.dispatch(&Event::Paste(text), &mut self.state)?;
        }
        Ok(())
    }

    /// Select a file through the picker path; rejections raise an alert
    pub fn open_file(&mut self, path: &Path) {
        match self.state.session.select_path(path) {
            FileSelection::Selected => {
                self.state.session.switch_mode(TranslateMode::Document);
                let name = self.state.session.file().map(|f| f.name().to_owned());
                self.state.info(format!("Selected {}", name.unwrap_or_default()));
            }
            FileSelection::Ignored => {}
            FileSelection::Rejected(message) => self.state.alert(message),
        }
    }

    /// Start a translation for the active mode
    fn translate(&mut self) {
        let tx = self.events.sender();
        let started = match self.state.session.mode() {
            TranslateMode::Text => self
                .state
                .session
                .begin_text(self.panels.input.text())
                .map(|request| job::spawn_text_job(self.translator.clone(), request, tx)),
            TranslateMode::Document => self
                .state
                .session
                .begin_document()
                .map(|work| job::spawn_document_job(self.translator.clone(), work, tx)),
        };

        match started {
            Ok(()) => {
                tracing::info!(mode = self.state.session.mode().label(), "translation started");
                self.state.clear_status();
            }
            Err(Rejection::Busy) => tracing::debug!("translate ignored while a request is running"),
            Err(rejection) => self.state.alert(rejection.message()),
        }
    }

    fn on_job(&mut self, event: JobEvent) {
        match event {
            JobEvent::Progress { percent, label } => {
                self.state.session.set_progress(percent, &label);
            }
            JobEvent::TextFinished(result) => {
                self.state.session.finish_text(result);
            }
            JobEvent::DocumentFinished(result) => {
                if let Some(message) = self.state.session.finish_document(result, Instant::now()) {
                    self.state.alert(message);
                }
            }
        }
    }

    fn toggle_theme(&mut self) {
        let next = ui::toggle_theme();
        self.preferences.save_theme(next);
    }

    fn download(&mut self) {
        let body = self.state.session.visible_output().to_owned();
        match export::download(&self.state.output_dir, &body) {
            Ok(path) => self.state.info(format!("Saved {}", path.display())),
            Err(e) => self.state.error(format!("Download failed: {}", e)),
        }
    }

    fn export_html(&mut self) {
        let session = &self.state.session;
        let blocks: Vec<String> = match session.mode() {
            TranslateMode::Document => session.translated().to_vec(),
            TranslateMode::Text if session.text_output().is_empty() => Vec::new(),
            TranslateMode::Text => vec![session.text_output().to_owned()],
        };
        match export::export_html(&self.state.output_dir, &blocks) {
            Ok(path) => self.state.info(format!("Exported {}", path.display())),
            Err(e) => self.state.error(format!("Export failed: {}", e)),
        }
    }

    fn copy_output(&mut self) {
        let output = self.state.session.visible_output();
        if output.is_empty() {
            self.state.warn("Nothing to copy");
            return;
        }
        match clipboard::copy(output) {
            Ok(()) => self.state.info("Copied to clipboard"),
            Err(e) => self.state.error(e.to_string()),
        }
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
