//! Translator trait and the two request shapes

use super::LlmError;

/// Provider status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderStatus {
    /// Ready to accept requests
    Ready,

    /// Not available (no API key, etc.)
    Unavailable(String),
}

impl ProviderStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, ProviderStatus::Ready)
    }
}

/// One translation request, in one of the two call shapes the endpoint accepts
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationRequest {
    /// The prompt already embeds the text to translate
    Text { prompt: String },

    /// A base64 document followed by the prompt
    Document {
        prompt: String,
        media_type: String,
        data: String,
    },
}

impl TranslationRequest {
    pub fn is_document(&self) -> bool {
        matches!(self, TranslationRequest::Document { .. })
    }

    pub fn prompt(&self) -> &str {
        match self {
            TranslationRequest::Text { prompt } => prompt,
            TranslationRequest::Document { prompt, .. } => prompt,
        }
    }
}

/// Translator trait
///
/// Implemented by the hosted-API client; tests substitute their own.
pub trait Translator: Send + Sync {
    /// Display name (e.g. "Claude")
    fn name(&self) -> &str;

    /// Model the requests are sent to
    fn model(&self) -> String;

    /// Current provider status
    fn status(&self) -> ProviderStatus;

    /// Issue one blocking request.
    ///
    /// Returns the text of the first response block, or an empty string
    /// when the response carried none.
    fn translate(&self, request: &TranslationRequest) -> Result<String, LlmError>;

    /// Check if the provider is currently available
    fn is_available(&self) -> bool {
        self.status().is_ready()
    }
}

/// Shared handle to a translator, cloneable across the worker thread
pub type SharedTranslator = std::sync::Arc<dyn Translator>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_status() {
        assert!(ProviderStatus::Ready.is_ready());
        let status = ProviderStatus::Unavailable("No API key".to_string());
        assert!(!status.is_ready());
        assert!(matches!(status, ProviderStatus::Unavailable(msg) if msg == "No API key"));
    }

    #[test]
    fn test_request_accessors() {
        let text = TranslationRequest::Text {
            prompt: "p".to_string(),
        };
        assert!(!text.is_document());
        assert_eq!(text.prompt(), "p");

        let doc = TranslationRequest::Document {
            prompt: "q".to_string(),
            media_type: "application/pdf".to_string(),
            data: String::new(),
        };
        assert!(doc.is_document());
        assert_eq!(doc.prompt(), "q");
    }
}
