//! Completion Provider Port - Interface for the LLM completion service.
//!
//! Abstracts the external text-generation API so the consultation handler
//! never couples to a specific provider. One request, one response: no
//! streaming, no retries, and timeout policy stays with the client's
//! defaults.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for LLM completion interactions.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a single completion for the given messages.
    ///
    /// Implementations must return [`ProviderError::EmptyCompletion`] when
    /// the provider answers without any usable text; an empty string is
    /// never a valid completion.
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, ProviderError>;
}

/// Request for a completion.
#[derive(Debug, Clone, Default)]
pub struct CompletionRequest {
    /// Ordered messages: typically one system instruction and one user prompt.
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    /// Creates an empty completion request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message, preserving insertion order.
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

/// A message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent this message.
    pub role: MessageRole,
    /// Message content.
    pub content: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

/// Role of the message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instructions (guides model behavior).
    System,
    /// User input.
    User,
}

impl MessageRole {
    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
        }
    }
}

/// Successful completion.
#[derive(Debug, Clone)]
pub struct Completion {
    /// Extracted plain text, trimmed and non-empty.
    pub text: String,
    /// Model that generated the response.
    pub model: String,
}

/// Completion provider errors. The `Display` output doubles as the
/// user-facing failure detail, passed through verbatim.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// Provider answered, but no usable text could be extracted.
    #[error("Resposta vazia do modelo.")]
    EmptyCompletion,

    /// Network failure during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Provider returned a non-success status.
    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the provider response body.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ProviderError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an API status error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_request_preserves_message_order() {
        let request = CompletionRequest::new()
            .with_message(Message::system("instrução"))
            .with_message(Message::user("pergunta"));

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert_eq!(request.messages[1].role, MessageRole::User);
        assert_eq!(request.messages[1].content, "pergunta");
    }

    #[test]
    fn message_role_serializes_lowercase() {
        let json = serde_json::to_string(&MessageRole::User).unwrap();
        assert_eq!(json, "\"user\"");

        let json = serde_json::to_string(&MessageRole::System).unwrap();
        assert_eq!(json, "\"system\"");
    }

    #[test]
    fn provider_error_displays_empty_completion_detail() {
        assert_eq!(
            ProviderError::EmptyCompletion.to_string(),
            "Resposta vazia do modelo."
        );
    }

    #[test]
    fn provider_error_displays_api_status() {
        let err = ProviderError::api(429, "rate limited");
        assert_eq!(
            err.to_string(),
            "provider returned status 429: rate limited"
        );
    }
}
