//! LLM error types

use std::fmt;

/// Error type for translation requests
#[derive(Debug, Clone, PartialEq)]
pub enum LlmError {
    /// Network/connection error
    Connection(String),

    /// API error (authentication, bad request, etc.)
    Api { status: u16, message: String },

    /// Provider not usable (missing API key, etc.)
    ProviderUnavailable(String),

    /// Request timeout
    Timeout,

    /// Rate limited
    RateLimited { retry_after: Option<u64> },

    /// Internal error
    Internal(String),
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::Connection(msg) => write!(f, "Connection error: {}", msg),
            LlmError::Api { status, message } => {
                write!(f, "API error ({}): {}", status, message)
            }
            LlmError::ProviderUnavailable(reason) => {
                write!(f, "Provider unavailable: {}", reason)
            }
            LlmError::Timeout => write!(f, "Request timed out"),
            LlmError::RateLimited { retry_after } => {
                if let Some(seconds) = retry_after {
                    write!(f, "Rate limited, retry after {} seconds", seconds)
                } else {
                    write!(f, "Rate limited")
                }
            }
            LlmError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for LlmError {}

/// Pull `error.message` out of an Anthropic error body, falling back to the raw text
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

impl From<ureq::Error> for LlmError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => {
                let retry_after = response
                    .header("retry-after")
                    .and_then(|v| v.trim().parse::<u64>().ok());
                let body = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                if status == 429 {
                    LlmError::RateLimited { retry_after }
                } else {
                    LlmError::Api {
                        status,
                        message: api_error_message(&body),
                    }
                }
            }
            ureq::Error::Transport(transport) => LlmError::Connection(transport.to_string()),
        }
    }
}

impl From<std::io::Error> for LlmError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::TimedOut {
            LlmError::Timeout
        } else {
            LlmError::Internal(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::Internal(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_display() {
        let err = LlmError::Connection("refused".to_string());
        assert_eq!(err.to_string(), "Connection error: refused");
    }

    #[test]
    fn test_api_display() {
        let err = LlmError::Api {
            status: 400,
            message: "max_tokens too large".to_string(),
        };
        assert_eq!(err.to_string(), "API error (400): max_tokens too large");
    }

    #[test]
    fn test_rate_limited_display() {
        let with = LlmError::RateLimited { retry_after: Some(60) };
        assert_eq!(with.to_string(), "Rate limited, retry after 60 seconds");
        let without = LlmError::RateLimited { retry_after: None };
        assert_eq!(without.to_string(), "Rate limited");
    }

    #[test]
    fn test_api_error_message_from_body() {
        let body = r#"{"type":"error","error":{"type":"invalid_request_error","message":"bad model"}}"#;
        assert_eq!(api_error_message(body), "bad model");
        assert_eq!(api_error_message("  gateway down \n"), "gateway down");
    }

    #[test]
    fn test_from_io_error() {
        let timed_out = std::io::Error::new(std::io::ErrorKind::TimedOut, "slow");
        assert_eq!(LlmError::from(timed_out), LlmError::Timeout);

        let other = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(LlmError::from(other), LlmError::Internal(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LlmError = json_err.into();
        assert!(err.to_string().starts_with("Internal error: JSON error:"));
    }
}
