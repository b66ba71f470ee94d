//! TransLumen entry point
//!
//! Without a subcommand the interactive TUI starts. `translate` runs one
//! request headlessly and `languages` lists the supported codes.

use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;
use translumen::{
    app::TuiApp,
    clipboard,
    core::{AppError, Result},
    logging::{self, LogTarget},
    state::AppState,
    ui,
};
use translumen_core::{
    config::{load_config, sample_config, user_config_path},
    job, ClaudeTranslator, FileSelection, Language, PreferenceStore, Session, SharedTranslator,
    TranslumenConfig, TranslumenError,
};

/// Translate text and PDF documents with Claude
#[derive(Parser, Debug)]
#[command(name = "translumen", version, about)]
struct Cli {
    /// PDF to open in document mode
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Source language code (default from config, usually "auto")
    #[arg(long, value_name = "CODE", value_parser = parse_source)]
    from: Option<Language>,

    /// Target language code (default from config, usually "id")
    #[arg(long, value_name = "CODE", value_parser = parse_target)]
    to: Option<Language>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single translation without the TUI
    Translate {
        /// Text to translate
        #[arg(long, required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        /// PDF document to translate
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        #[arg(long, value_name = "CODE", value_parser = parse_source)]
        from: Option<Language>,

        #[arg(long, value_name = "CODE", value_parser = parse_target)]
        to: Option<Language>,

        /// Write the translation here instead of stdout
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List supported language codes
    Languages {
        /// Print as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print a sample config file and where it is looked up
    Config,
}

fn parse_source(code: &str) -> std::result::Result<Language, String> {
    Language::from_code(code).ok_or_else(|| format!("unknown language code '{}'", code))
}

fn parse_target(code: &str) -> std::result::Result<Language, String> {
    let language = parse_source(code)?;
    if language.is_target() {
        Ok(language)
    } else {
        Err("auto-detect cannot be a target language".to_string())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Languages { json }) => list_languages(json),
        Some(Command::Config) => {
            print_config_help();
            Ok(())
        }
        Some(Command::Translate {
            text,
            file,
            from,
            to,
            output,
        }) => run_headless(text, file, from, to, output),
        None => run_tui(cli.file, cli.from, cli.to),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load config from the working directory
fn config() -> Result<TranslumenConfig> {
    let cwd = std::env::current_dir()?;
    Ok(load_config(&cwd)?)
}

/// Load config for the TUI, falling back to defaults on error
fn config_or_default() -> TranslumenConfig {
    config().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
        TranslumenConfig::default()
    })
}

#[derive(Serialize)]
struct LanguageEntry {
    code: &'static str,
    name: &'static str,
    target: bool,
}

fn list_languages(json: bool) -> Result<()> {
    if json {
        let entries: Vec<LanguageEntry> = Language::ALL
            .iter()
            .map(|l| LanguageEntry {
                code: l.code(),
                name: l.display_name(),
                target: l.is_target(),
            })
            .collect();
        let out = serde_json::to_string_pretty(&entries).map_err(TranslumenError::from)?;
        println!("{}", out);
    } else {
        for language in Language::ALL {
            println!("{:<5} {}", language.code(), language.display_name());
        }
    }
    Ok(())
}

fn print_config_help() {
    eprintln!("# project: ./.translumen.toml");
    if let Some(path) = user_config_path() {
        eprintln!("# user:    {}", path.display());
    }
    print!("{}", sample_config());
}

/// One request, no terminal UI; same validation as the TUI
fn run_headless(
    text: Option<String>,
    file: Option<PathBuf>,
    from: Option<Language>,
    to: Option<Language>,
    output: Option<PathBuf>,
) -> Result<()> {
    if let Err(e) = logging::init(LogTarget::Stderr) {
        eprintln!("Warning: {}", e);
    }

    // Config errors are fatal for one-shot runs
    let config = config()?;
    let translator = ClaudeTranslator::from_config(&config.api);
    let mut session = Session::new(
        from.unwrap_or(config.ui.default_source),
        to.unwrap_or(config.ui.default_target),
    );

    let body = match (text, file) {
        (Some(text), _) => {
            let request = session
                .begin_text(&text)
                .map_err(|r| AppError::usage(r.message()))?;
            let result = job::run_text(&translator, &request)
                .map_err(|e| AppError::Core(TranslumenError::from(e)))?;
            session.finish_text(Ok(result));
            session.text_output().to_owned()
        }
        (None, Some(path)) => {
            if let FileSelection::Rejected(message) = session.select_path(&path) {
                return Err(AppError::usage(message));
            }
            let work = session
                .begin_document()
                .map_err(|r| AppError::usage(r.message()))?;
            let result = job::run_document(&translator, work, |percent, label| {
                tracing::info!(percent, "{}", label);
            });
            if let Some(alert) = session.finish_document(result, Instant::now()) {
                return Err(AppError::usage(alert));
            }
            session.download_body().to_owned()
        }
        (None, None) => return Err(AppError::usage("Please enter some text to translate.")),
    };

    match output {
        Some(path) => write_output(&path, &body),
        None => {
            println!("{}", body);
            Ok(())
        }
    }
}

fn write_output(path: &Path, body: &str) -> Result<()> {
    std::fs::write(path, body)?;
    tracing::info!(path = %path.display(), "translation written");
    Ok(())
}

/// Set up the terminal, run the app, and always restore the terminal
fn run_tui(file: Option<PathBuf>, from: Option<Language>, to: Option<Language>) -> Result<()> {
    match logging::init(LogTarget::File) {
        Ok(Some(path)) => tracing::info!(log = %path.display(), "starting translumen"),
        Ok(None) => {}
        Err(e) => eprintln!("Warning: {}", e),
    }

    let config = config_or_default();
    let preferences = PreferenceStore::open_default().unwrap_or_else(|e| {
        eprintln!("Warning: {}. Preferences will not persist.", e);
        PreferenceStore::with_path(std::env::temp_dir().join("translumen-preferences.json"))
    });
    ui::set_theme(preferences.load_theme().unwrap_or_default());

    let mut state = AppState::new(
        from.unwrap_or(config.ui.default_source),
        to.unwrap_or(config.ui.default_target),
    );
    if let Some(dir) = &config.ui.output_dir {
        state = state.with_output_dir(dir);
    }
    if !config.has_api_key() {
        state.warn("No API key configured (set ANTHROPIC_API_KEY)");
    }

    let translator: SharedTranslator = Arc::new(ClaudeTranslator::from_config(&config.api));
    let mut app = TuiApp::new(state, translator, preferences);
    if let Some(path) = file {
        app.open_file(&path);
    }
    clipboard::init();

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend)?;

    let result = app.run(&mut term);

    // Restore terminal (ALWAYS, even on error)
    terminal::disable_raw_mode()?;
    execute!(term.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    term.show_cursor()?;

    result
}
