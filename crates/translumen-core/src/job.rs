//! Running one translation request off the UI thread
//!
//! A job runs on its own thread, reports progress, and ends with exactly one
//! finished event. There is no cancellation.

use crate::error::TranslumenError;
use crate::llm::{LlmError, SharedTranslator, TranslationRequest, Translator};
use crate::session::DocumentJob;
use crossbeam_channel::Sender;

/// Events emitted by a running job
#[derive(Debug)]
pub enum JobEvent {
    /// Progress update for the document bar
    Progress { percent: u8, label: String },

    /// Text translation finished
    TextFinished(Result<String, LlmError>),

    /// Document translation finished
    DocumentFinished(Result<String, TranslumenError>),
}

/// Run a text translation on the calling thread
pub fn run_text(
    translator: &dyn Translator,
    request: &TranslationRequest,
) -> Result<String, LlmError> {
    translator.translate(request)
}

/// Run a document translation on the calling thread
///
/// `progress` receives the same updates the threaded job would emit.
pub fn run_document<F>(
    translator: &dyn Translator,
    job: DocumentJob,
    mut progress: F,
) -> Result<String, TranslumenError>
where
    F: FnMut(u8, &str),
{
    let request = job.into_request()?;
    progress(15, &format!("Sending to {} AI…", translator.name()));

    let text = translator.translate(&request)?;
    progress(75, "Translating…");

    Ok(text)
}

/// Spawn a text translation
pub fn spawn_text_job<E>(translator: SharedTranslator, request: TranslationRequest, tx: Sender<E>)
where
    E: From<JobEvent> + Send + 'static,
{
    std::thread::spawn(move || {
        let result = run_text(translator.as_ref(), &request);
        if tx.send(JobEvent::TextFinished(result).into()).is_err() {
            tracing::warn!("text job finished after the receiver closed");
        }
    });
}

/// Spawn a document translation
pub fn spawn_document_job<E>(translator: SharedTranslator, job: DocumentJob, tx: Sender<E>)
where
    E: From<JobEvent> + Send + 'static,
{
    std::thread::spawn(move || {
        let progress_tx = tx.clone();
        let result = run_document(translator.as_ref(), job, |percent, label| {
            let _ = progress_tx.send(
                JobEvent::Progress {
                    percent,
                    label: label.to_string(),
                }
                .into(),
            );
        });
        if tx.send(JobEvent::DocumentFinished(result).into()).is_err() {
            tracing::warn!("document job finished after the receiver closed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentFile;
    use crate::llm::ProviderStatus;
    use crossbeam_channel::bounded;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;

    struct EchoTranslator {
        seen: Mutex<Vec<TranslationRequest>>,
    }

    impl Translator for EchoTranslator {
        fn name(&self) -> &str {
            "Echo"
        }

        fn model(&self) -> String {
            "echo-1".to_string()
        }

        fn status(&self) -> ProviderStatus {
            ProviderStatus::Ready
        }

        fn translate(&self, request: &TranslationRequest) -> Result<String, LlmError> {
            self.seen.lock().push(request.clone());
            Ok(format!("echo: {}", request.prompt()))
        }
    }

    fn echo() -> Arc<EchoTranslator> {
        Arc::new(EchoTranslator {
            seen: Mutex::new(Vec::new()),
        })
    }

    #[test]
    fn test_spawn_text_job_reports_once() {
        let translator = echo();
        let (tx, rx) = bounded::<JobEvent>(4);
        spawn_text_job(
            translator.clone(),
            TranslationRequest::Text {
                prompt: "hi".to_string(),
            },
            tx,
        );

        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            JobEvent::TextFinished(Ok(text)) => assert_eq!(text, "echo: hi"),
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(translator.seen.lock().len(), 1);
    }

    #[test]
    fn test_run_document_progress_and_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.pdf");
        std::fs::write(&path, b"%PDF").unwrap();

        let translator = echo();
        let job = DocumentJob {
            file: DocumentFile::open(&path).unwrap(),
            prompt: "translate it".to_string(),
        };

        let mut steps = Vec::new();
        let text = run_document(translator.as_ref(), job, |p, l| steps.push((p, l.to_string())))
            .unwrap();

        assert_eq!(text, "echo: translate it");
        assert_eq!(
            steps,
            vec![
                (15, "Sending to Echo AI…".to_string()),
                (75, "Translating…".to_string())
            ]
        );
        match &translator.seen.lock()[0] {
            TranslationRequest::Document {
                media_type, data, ..
            } => {
                assert_eq!(media_type, "application/pdf");
                assert_eq!(data, "JVBERg==");
            }
            other => panic!("unexpected request: {:?}", other),
        };
    }

    #[test]
    fn test_document_read_failure_skips_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.pdf");
        std::fs::write(&path, b"%PDF").unwrap();
        let file = DocumentFile::open(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let translator = echo();
        let (tx, rx) = bounded::<JobEvent>(4);
        spawn_document_job(
            translator.clone(),
            DocumentJob {
                file,
                prompt: String::new(),
            },
            tx,
        );

        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            JobEvent::DocumentFinished(Err(TranslumenError::Document(_))) => {}
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(translator.seen.lock().is_empty());
    }
}
