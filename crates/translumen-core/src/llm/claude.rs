//! Claude (Anthropic) translator
//!
//! Connects to Anthropic's Messages API. One blocking request per
//! translation, no streaming.

use super::message::{ChatMessage, MessagesRequest, MessagesResponse};
use super::{LlmError, ProviderStatus, TranslationRequest, Translator};
use crate::config::ApiConfig;
use std::time::Duration;

/// API version header value
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claude translator for Anthropic's API
pub struct ClaudeTranslator {
    /// API key
    api_key: String,

    /// Base URL for the API
    base_url: String,

    /// Model used for every request
    model: String,

    /// Output budget for the text call shape
    text_max_tokens: u32,

    /// Output budget for the document call shape
    document_max_tokens: u32,

    agent: ureq::Agent,
}

impl ClaudeTranslator {
    /// Create a new Claude translator
    pub fn new(api_key: &str, model: &str) -> Self {
        Self::from_config(&ApiConfig {
            api_key: Some(api_key.to_string()),
            model: model.to_string(),
            ..ApiConfig::default()
        })
    }

    /// Create from the `[api]` config section
    pub fn from_config(config: &ApiConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout))
            .build();

        Self {
            api_key: config.usable_api_key().unwrap_or_default().to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            text_max_tokens: config.text_max_tokens,
            document_max_tokens: config.document_max_tokens,
            agent,
        }
    }

    /// Create with a specific base URL (for proxies)
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Build the request body for one call shape
    pub fn build_body(&self, request: &TranslationRequest) -> MessagesRequest<'_> {
        match request {
            TranslationRequest::Text { prompt } => MessagesRequest {
                model: &self.model,
                max_tokens: self.text_max_tokens,
                messages: vec![ChatMessage::user(prompt.as_str())],
            },
            TranslationRequest::Document {
                prompt,
                media_type,
                data,
            } => MessagesRequest {
                model: &self.model,
                max_tokens: self.document_max_tokens,
                messages: vec![ChatMessage::user_with_document(
                    media_type.as_str(),
                    data.as_str(),
                    prompt.as_str(),
                )],
            },
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

/// Extract the translated text from a raw response body
pub fn parse_response(body: &str) -> Result<String, LlmError> {
    let response: MessagesResponse = serde_json::from_str(body)?;
    Ok(response.first_text().unwrap_or_default().to_string())
}

impl Translator for ClaudeTranslator {
    fn name(&self) -> &str {
        "Claude"
    }

    fn model(&self) -> String {
        self.model.clone()
    }

    fn status(&self) -> ProviderStatus {
        if self.api_key.is_empty() {
            ProviderStatus::Unavailable("No API key configured".to_string())
        } else {
            ProviderStatus::Ready
        }
    }

    fn translate(&self, request: &TranslationRequest) -> Result<String, LlmError> {
        if let ProviderStatus::Unavailable(reason) = self.status() {
            return Err(LlmError::ProviderUnavailable(format!(
                "{} (set ANTHROPIC_API_KEY)",
                reason
            )));
        }

        let body = self.build_body(request);
        tracing::info!(
            model = %self.model,
            max_tokens = body.max_tokens,
            document = request.is_document(),
            "sending translation request"
        );

        let response = self
            .agent
            .post(&self.endpoint())
            .set("Content-Type", "application/json")
            .set("x-api-key", &self.api_key)
            .set("anthropic-version", ANTHROPIC_VERSION)
            .send_json(&body)?;

        let raw = response.into_string()?;
        let text = parse_response(&raw)?;
        if text.is_empty() {
            tracing::warn!("response carried no text block");
        } else {
            tracing::debug!(chars = text.chars().count(), "translation received");
        }
        Ok(text)
    }
}
