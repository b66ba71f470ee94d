//! LLM integration module
//!
//! Provides the client for the hosted translation endpoint.

mod claude;
mod error;
mod message;
mod provider;

pub use claude::{parse_response, ClaudeTranslator};
pub use error::LlmError;
pub use message::{
    ChatMessage, ContentPart, DocumentSource, MessageContent, MessagesRequest, MessagesResponse,
    ResponseBlock, Role,
};
pub use provider::{ProviderStatus, SharedTranslator, TranslationRequest, Translator};
