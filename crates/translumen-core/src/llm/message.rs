//! Messages API request and response bodies

use serde::{Deserialize, Serialize};

/// Role in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Where a document block's bytes come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentSource {
    /// Inline base64 payload
    Base64 { media_type: String, data: String },
}

/// Content part for multimodal messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text content
    Text { text: String },

    /// Attached document
    Document { source: DocumentSource },
}

/// Message content - either simple text or multipart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Simple text content
    Text(String),

    /// Multipart content (document + text)
    Parts(Vec<ContentPart>),
}

/// Chat message for the Messages API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

impl ChatMessage {
    /// Create a user message with text content
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Create a user message carrying a base64 document followed by a prompt
    pub fn user_with_document(
        media_type: impl Into<String>,
        data: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Parts(vec![
                ContentPart::Document {
                    source: DocumentSource::Base64 {
                        media_type: media_type.into(),
                        data: data.into(),
                    },
                },
                ContentPart::Text {
                    text: prompt.into(),
                },
            ]),
        }
    }
}

/// Body of `POST /v1/messages`
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage>,
}

/// One block of a Messages API response
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseBlock {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub text: Option<String>,
}

/// Subset of the Messages API response that the translator reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ResponseBlock>,
}

impl MessagesResponse {
    /// Text of the first content block, if it carries any
    pub fn first_text(&self) -> Option<&str> {
        self.content
            .first()
            .and_then(|block| block.text.as_deref())
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_text_message_shape() {
        let body = MessagesRequest {
            model: "claude-sonnet-4-20250514",
            max_tokens: 4000,
            messages: vec![ChatMessage::user("translate me")],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "model": "claude-sonnet-4-20250514",
                "max_tokens": 4000,
                "messages": [{"role": "user", "content": "translate me"}]
            })
        );
    }

    #[test]
    fn test_document_message_shape() {
        let msg = ChatMessage::user_with_document("application/pdf", "JVBERi0=", "prompt");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({
                "role": "user",
                "content": [
                    {
                        "type": "document",
                        "source": {
                            "type": "base64",
                            "media_type": "application/pdf",
                            "data": "JVBERi0="
                        }
                    },
                    {"type": "text", "text": "prompt"}
                ]
            })
        );
    }

    #[test]
    fn test_first_text() {
        let resp: MessagesResponse = serde_json::from_value(json!({
            "id": "msg_1",
            "content": [{"type": "text", "text": "Halo dunia"}],
            "stop_reason": "end_turn"
        }))
        .unwrap();
        assert_eq!(resp.first_text(), Some("Halo dunia"));
    }

    #[test]
    fn test_first_text_missing() {
        let resp: MessagesResponse =
            serde_json::from_value(json!({"type": "error", "error": {"message": "x"}})).unwrap();
        assert_eq!(resp.first_text(), None);

        let empty: MessagesResponse =
            serde_json::from_value(json!({"content": [{"type": "text", "text": ""}]})).unwrap();
        assert_eq!(empty.first_text(), None);
    }
}
