//! Configuration types for TransLumen
//!
//! Defines the structure of `.translumen.toml` configuration.

use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslumenConfig {
    /// Messages API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Front-end defaults
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[api]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (supports ${ENV_VAR} syntax)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model every request is sent to
    #[serde(default = "default_model")]
    pub model: String,

    /// Output token budget for plain-text requests
    #[serde(default = "default_text_max_tokens")]
    pub text_max_tokens: u32,

    /// Output token budget for document requests
    #[serde(default = "default_document_max_tokens")]
    pub document_max_tokens: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_text_max_tokens() -> u32 {
    4000
}

fn default_document_max_tokens() -> u32 {
    16000
}

fn default_timeout() -> u64 {
    300
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            model: default_model(),
            text_max_tokens: default_text_max_tokens(),
            document_max_tokens: default_document_max_tokens(),
            timeout: default_timeout(),
        }
    }
}

/// `[ui]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Source language selected at startup
    #[serde(default = "default_source")]
    pub default_source: Language,

    /// Target language selected at startup
    #[serde(default = "default_target")]
    pub default_target: Language,

    /// Where downloads are written (defaults to the working directory)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_source() -> Language {
    Language::Auto
}

fn default_target() -> Language {
    Language::Id
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_source: default_source(),
            default_target: default_target(),
            output_dir: None,
        }
    }
}

impl ApiConfig {
    /// The configured key, unless it is empty or an unexpanded `${VAR}`
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty() && !key.starts_with("${"))
    }
}

impl TranslumenConfig {
    /// Whether an API key is present
    pub fn has_api_key(&self) -> bool {
        self.api.usable_api_key().is_some()
    }
}
