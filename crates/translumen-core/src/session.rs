//! Translation session state
//!
//! Holds everything a front end shows between requests: the active mode,
//! the selected document, language pair, output, progress and the
//! in-flight flag. Every user action maps to one method here; the methods
//! never touch the network, so validation always happens before a request
//! is built.

use crate::document::{media_type_for, DocumentError, DocumentFile, PDF_MEDIA_TYPE};
use crate::error::TranslumenError;
use crate::language::{self, Language};
use crate::llm::{LlmError, TranslationRequest};
use crate::prompt;
use std::path::Path;
use std::time::{Duration, Instant};

/// Fallback shown in the text output when the response carried no text
pub const TEXT_FALLBACK: &str = "Translation failed. Please check your API access.";

/// How long the progress bar stays visible after a document finishes
pub const PROGRESS_LINGER: Duration = Duration::from_millis(1400);

/// Which input the Translate action reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslateMode {
    #[default]
    Text,
    Document,
}

impl TranslateMode {
    pub fn label(&self) -> &'static str {
        match self {
            TranslateMode::Text => "Text",
            TranslateMode::Document => "PDF",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            TranslateMode::Text => TranslateMode::Document,
            TranslateMode::Document => TranslateMode::Text,
        }
    }
}

/// Progress bar state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub percent: u8,
    pub label: String,
}

/// Why a translation was not started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Text mode with blank input
    EmptyText,

    /// Document mode with nothing selected
    NoFile,

    /// A request is already running
    Busy,
}

impl Rejection {
    /// Message for the blocking alert
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::EmptyText => "Please enter some text to translate.",
            Rejection::NoFile => "Please upload a PDF file.",
            Rejection::Busy => "A translation is already in progress.",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Work item for a document translation
///
/// The file is read and encoded by whoever runs the job, not when it is
/// created.
#[derive(Debug, Clone)]
pub struct DocumentJob {
    pub file: DocumentFile,
    pub prompt: String,
}

impl DocumentJob {
    /// Read and encode the file, producing the document call shape
    pub fn into_request(self) -> Result<TranslationRequest, DocumentError> {
        let data = self.file.read_base64()?;
        let media_type = self
            .file
            .media_type()
            .unwrap_or(PDF_MEDIA_TYPE)
            .to_string();
        Ok(TranslationRequest::Document {
            prompt: self.prompt,
            media_type,
            data,
        })
    }
}

/// Outcome of selecting a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelection {
    /// File stored as the current selection
    Selected,

    /// Silently ignored (non-PDF drop)
    Ignored,

    /// Rejected with an alert message
    Rejected(String),
}

/// Session state for one front end
#[derive(Debug)]
pub struct Session {
    mode: TranslateMode,
    file: Option<DocumentFile>,

    /// Latest document output, zero or one block
    translated: Vec<String>,

    /// Text-mode output field
    text_output: String,

    pub source: Language,
    pub target: Language,

    in_flight: bool,
    progress: Option<Progress>,
    progress_hide_at: Option<Instant>,
    output_visible: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Language::Auto, Language::Id)
    }
}

impl Session {
    pub fn new(source: Language, target: Language) -> Self {
        Self {
            mode: TranslateMode::default(),
            file: None,
            translated: Vec::new(),
            text_output: String::new(),
            source,
            target: if target.is_target() { target } else { Language::En },
            in_flight: false,
            progress: None,
            progress_hide_at: None,
            output_visible: false,
        }
    }

    pub fn mode(&self) -> TranslateMode {
        self.mode
    }

    pub fn file(&self) -> Option<&DocumentFile> {
        self.file.as_ref()
    }

    pub fn translated(&self) -> &[String] {
        &self.translated
    }

    pub fn text_output(&self) -> &str {
        &self.text_output
    }

    /// Whether the Translate action is disabled
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn progress(&self) -> Option<&Progress> {
        self.progress.as_ref()
    }

    /// Whether the document output card is shown
    pub fn is_output_visible(&self) -> bool {
        self.output_visible
    }

    /// Switch between text and document input
    pub fn switch_mode(&mut self, mode: TranslateMode) {
        self.mode = mode;
        self.output_visible = false;
    }

    /// Footer label: character count in text mode, file name in document mode
    pub fn char_count_label(&self, input: &str) -> String {
        match self.mode {
            TranslateMode::Text => {
                let len = input.chars().count();
                format!("{} character{}", len, if len != 1 { "s" } else { "" })
            }
            TranslateMode::Document => self
                .file
                .as_ref()
                .map(|f| f.name().to_string())
                .unwrap_or_else(|| "No file selected".to_string()),
        }
    }

    /// Select a file through the picker
    pub fn select_path(&mut self, path: &Path) -> FileSelection {
        match DocumentFile::open(path) {
            Ok(file) if file.is_pdf() => self.set_file(file),
            Ok(file) => FileSelection::Rejected(
                DocumentError::Unsupported(file.name().to_string()).to_string(),
            ),
            Err(e) => FileSelection::Rejected(e.to_string()),
        }
    }

    /// Select a file dropped onto the drop zone; non-PDF drops are ignored
    pub fn drop_path(&mut self, path: &Path) -> FileSelection {
        if media_type_for(path) != Some(PDF_MEDIA_TYPE) {
            tracing::debug!(path = %path.display(), "ignoring non-PDF drop");
            return FileSelection::Ignored;
        }
        match DocumentFile::open(path) {
            Ok(file) if file.is_pdf() => self.set_file(file),
            Ok(_) => FileSelection::Ignored,
            Err(e @ DocumentError::TooLarge { .. }) => FileSelection::Rejected(e.to_string()),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring dropped path");
                FileSelection::Ignored
            }
        }
    }

    /// Store a file, applying the size guard again
    pub fn set_file(&mut self, file: DocumentFile) -> FileSelection {
        if let Err(e) = DocumentFile::from_parts(file.path(), file.size()) {
            return FileSelection::Rejected(e.to_string());
        }
        tracing::info!(name = file.name(), size = file.size(), "document selected");
        self.file = Some(file);
        FileSelection::Selected
    }

    /// Forget the selected file and its output
    pub fn remove_file(&mut self) {
        self.file = None;
        self.translated.clear();
        self.output_visible = false;
    }

    /// Exchange source and target unless the source is auto-detect
    pub fn swap_languages(&mut self) -> bool {
        language::swap(&mut self.source, &mut self.target)
    }

    /// Start a text translation
    pub fn begin_text(&mut self, input: &str) -> Result<TranslationRequest, Rejection> {
        if self.in_flight {
            return Err(Rejection::Busy);
        }
        let input = input.trim();
        if input.is_empty() {
            return Err(Rejection::EmptyText);
        }

        self.in_flight = true;
        self.text_output.clear();

        Ok(TranslationRequest::Text {
            prompt: prompt::text_prompt(self.source, self.target, input),
        })
    }

    /// Record the result of a text translation
    pub fn finish_text(&mut self, result: Result<String, LlmError>) {
        self.text_output = match result {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => TEXT_FALLBACK.to_string(),
            Err(e) => {
                tracing::error!(error = %e, "text translation failed");
                format!("Error: {}", e)
            }
        };
        self.in_flight = false;
    }

    /// Start a document translation
    pub fn begin_document(&mut self) -> Result<DocumentJob, Rejection> {
        if self.in_flight {
            return Err(Rejection::Busy);
        }
        let file = self.file.clone().ok_or(Rejection::NoFile)?;

        self.in_flight = true;
        self.output_visible = false;
        self.translated.clear();
        self.progress_hide_at = None;
        self.set_progress(0, "Reading PDF…");

        Ok(DocumentJob {
            file,
            prompt: prompt::document_prompt(self.source, self.target),
        })
    }

    /// Update the progress bar
    pub fn set_progress(&mut self, percent: u8, label: &str) {
        let label = if label.is_empty() {
            self.progress
                .as_ref()
                .map(|p| p.label.clone())
                .unwrap_or_default()
        } else {
            label.to_string()
        };
        self.progress = Some(Progress {
            percent: percent.min(100),
            label,
        });
    }

    /// Record the result of a document translation
    ///
    /// Returns the alert message when the translation failed.
    pub fn finish_document(
        &mut self,
        result: Result<String, TranslumenError>,
        now: Instant,
    ) -> Option<String> {
        let alert = match result {
            Ok(text) => {
                let trimmed = text.trim();
                self.translated = if trimmed.is_empty() {
                    Vec::new()
                } else {
                    vec![trimmed.to_string()]
                };
                self.set_progress(100, "Done!");
                self.output_visible = true;
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "document translation failed");
                Some(format!("Translation error: {}", e))
            }
        };

        self.in_flight = false;
        self.progress_hide_at = Some(now + PROGRESS_LINGER);
        alert
    }

    /// Hide the progress bar once its linger time has passed
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.progress_hide_at {
            if now >= deadline {
                self.progress = None;
                self.progress_hide_at = None;
            }
        }
    }

    /// Body of the `.txt` download
    pub fn download_body(&self) -> &str {
        self.translated.first().map(String::as_str).unwrap_or("")
    }

    /// Text currently displayed as output for the active mode
    pub fn visible_output(&self) -> &str {
        match self.mode {
            TranslateMode::Text => &self.text_output,
            TranslateMode::Document => self.download_body(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MAX_FILE_BYTES;
    use pretty_assertions::assert_eq;

    fn session_with_file() -> Session {
        let mut session = Session::default();
        let file = DocumentFile::from_parts("/tmp/paper.pdf", 1024).unwrap();
        assert_eq!(session.set_file(file), FileSelection::Selected);
        session.switch_mode(TranslateMode::Document);
        session
    }

    #[test]
    fn test_char_count_label() {
        let session = Session::default();
        assert_eq!(session.char_count_label(""), "0 characters");
        assert_eq!(session.char_count_label("a"), "1 character");
        assert_eq!(session.char_count_label("héllo"), "5 characters");
    }

    #[test]
    fn test_char_count_label_document_mode() {
        let mut session = Session::default();
        session.switch_mode(TranslateMode::Document);
        assert_eq!(session.char_count_label("ignored"), "No file selected");
        let session = session_with_file();
        assert_eq!(session.char_count_label(""), "paper.pdf");
    }

    #[test]
    fn test_empty_text_rejected() {
        let mut session = Session::default();
        assert_eq!(session.begin_text("   \n\t"), Err(Rejection::EmptyText));
        assert!(!session.is_in_flight());
    }

    #[test]
    fn test_begin_text_trims_and_locks() {
        let mut session = Session::new(Language::En, Language::Id);
        let request = session.begin_text("  hello \n").unwrap();
        assert!(request.prompt().ends_with("Text to translate:\nhello"));
        assert!(session.is_in_flight());
        assert_eq!(session.begin_text("again"), Err(Rejection::Busy));
    }

    #[test]
    fn test_finish_text_variants() {
        let mut session = Session::default();
        session.begin_text("x").unwrap();
        session.finish_text(Ok("halo".to_string()));
        assert_eq!(session.text_output(), "halo");
        assert!(!session.is_in_flight());

        session.begin_text("x").unwrap();
        assert_eq!(session.text_output(), "");
        session.finish_text(Ok(String::new()));
        assert_eq!(session.text_output(), TEXT_FALLBACK);

        session.begin_text("x").unwrap();
        session.finish_text(Err(LlmError::Connection("refused".to_string())));
        assert_eq!(session.text_output(), "Error: Connection error: refused");
    }

    #[test]
    fn test_document_without_file_rejected() {
        let mut session = Session::default();
        session.switch_mode(TranslateMode::Document);
        assert_eq!(session.begin_document().unwrap_err(), Rejection::NoFile);
        assert!(session.progress().is_none());
    }

    #[test]
    fn test_document_lifecycle() {
        let mut session = session_with_file();
        let job = session.begin_document().unwrap();
        assert_eq!(job.file.name(), "paper.pdf");
        assert_eq!(
            session.progress(),
            Some(&Progress {
                percent: 0,
                label: "Reading PDF…".to_string()
            })
        );

        let now = Instant::now();
        let alert = session.finish_document(Ok("  Terjemahan\n".to_string()), now);
        assert_eq!(alert, None);
        assert_eq!(session.translated(), &["Terjemahan".to_string()]);
        assert!(session.is_output_visible());
        assert_eq!(session.progress().map(|p| p.percent), Some(100));

        session.tick(now + Duration::from_millis(100));
        assert!(session.progress().is_some());
        session.tick(now + PROGRESS_LINGER);
        assert!(session.progress().is_none());
    }

    #[test]
    fn test_document_empty_output() {
        let mut session = session_with_file();
        session.begin_document().unwrap();
        session.finish_document(Ok("   ".to_string()), Instant::now());
        assert!(session.translated().is_empty());
        assert!(session.is_output_visible());
        assert_eq!(session.download_body(), "");
    }

    #[test]
    fn test_document_error_alerts() {
        let mut session = session_with_file();
        session.begin_document().unwrap();
        let alert = session.finish_document(Err(LlmError::Timeout.into()), Instant::now());
        assert_eq!(alert.as_deref(), Some("Translation error: Request timed out"));
        assert!(!session.is_in_flight());
        assert!(!session.is_output_visible());
    }

    #[test]
    fn test_oversized_non_pdf_drop_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("video.mp4");
        std::fs::File::create(&path)
            .unwrap()
            .set_len(MAX_FILE_BYTES + 1)
            .unwrap();

        let mut session = Session::default();
        assert_eq!(session.drop_path(&path), FileSelection::Ignored);
        assert!(session.file().is_none());
    }

    #[test]
    fn test_oversized_pdf_drop_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.pdf");
        std::fs::File::create(&path)
            .unwrap()
            .set_len(MAX_FILE_BYTES + 1)
            .unwrap();

        let mut session = Session::default();
        assert!(matches!(session.drop_path(&path), FileSelection::Rejected(_)));
    }

    #[test]
    fn test_file_grown_after_selection_is_not_sent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.pdf");
        std::fs::write(&path, b"%PDF").unwrap();

        let mut session = Session::default();
        assert_eq!(session.select_path(&path), FileSelection::Selected);
        std::fs::OpenOptions::new()
            .write(true)
            .open(&path)
            .unwrap()
            .set_len(MAX_FILE_BYTES + 1)
            .unwrap();

        let job = session.begin_document().unwrap();
        assert!(matches!(
            job.into_request(),
            Err(DocumentError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_remove_file_clears_output() {
        let mut session = session_with_file();
        session.begin_document().unwrap();
        session.finish_document(Ok("done".to_string()), Instant::now());
        assert_eq!(session.download_body(), "done");

        session.remove_file();
        assert!(session.file().is_none());
        assert!(session.translated().is_empty());
        assert!(!session.is_output_visible());
    }

    #[test]
    fn test_switch_mode_hides_output() {
        let mut session = session_with_file();
        session.begin_document().unwrap();
        session.finish_document(Ok("done".to_string()), Instant::now());
        session.switch_mode(TranslateMode::Text);
        assert!(!session.is_output_visible());
        assert_eq!(session.translated().len(), 1);
    }

    #[test]
    fn test_swap_languages() {
        let mut session = Session::new(Language::Auto, Language::Id);
        assert!(!session.swap_languages());
        session.source = Language::En;
        assert!(session.swap_languages());
        assert_eq!((session.source, session.target), (Language::Id, Language::En));
    }

    #[test]
    fn test_auto_target_is_replaced() {
        let session = Session::new(Language::En, Language::Auto);
        assert_eq!(session.target, Language::En);
    }

    #[test]
    fn test_set_progress_keeps_label_when_blank() {
        let mut session = Session::default();
        session.set_progress(15, "Sending");
        session.set_progress(40, "");
        assert_eq!(
            session.progress(),
            Some(&Progress {
                percent: 40,
                label: "Sending".to_string()
            })
        );
    }
}
