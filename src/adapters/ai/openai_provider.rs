//! OpenAI Provider - Implementation of CompletionProvider for the Responses API.
//!
//! Sends the ordered messages as `input` and lets [`extract_text`] normalize
//! whichever response shape comes back. One round-trip per request: no
//! retries, and the timeout policy stays with the HTTP client's defaults.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAiConfig::new(api_key)
//!     .with_model("gpt-4.1-mini")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let provider = OpenAiProvider::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use super::response::{extract_text, ProviderResponse};
use crate::ports::{Completion, CompletionProvider, CompletionRequest, ProviderError};

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-4.1-mini").
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
}

impl OpenAiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4.1-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI Responses API provider implementation.
pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiProvider {
    /// Creates a new OpenAI provider with the given configuration.
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Builds the responses endpoint URL.
    fn responses_url(&self) -> String {
        format!("{}/responses", self.config.base_url)
    }

    /// Converts our request to the API's wire format.
    fn to_api_request(&self, request: &CompletionRequest) -> ApiRequest {
        ApiRequest {
            model: self.config.model.clone(),
            input: request
                .messages
                .iter()
                .map(|msg| ApiMessage {
                    role: msg.role.as_str(),
                    content: msg.content.clone(),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, ProviderError> {
        let api_request = self.to_api_request(&request);

        tracing::debug!(model = %self.config.model, "sending completion request");
        let response = self
            .client
            .post(self.responses_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(&api_request)
            .send()
            .await
            .map_err(|e| ProviderError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::api(status.as_u16(), message));
        }

        let parsed: ProviderResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::parse(e.to_string()))?;

        let text = extract_text(&parsed)?;
        Ok(Completion {
            text,
            model: self.config.model.clone(),
        })
    }
}

// ----- API wire types -----

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    input: Vec<ApiMessage>,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: &'static str,
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Message;

    #[test]
    fn config_builder_works() {
        let config = OpenAiConfig::new("test-key")
            .with_model("gpt-4.1")
            .with_base_url("https://custom.api.com/v1");

        assert_eq!(config.model, "gpt-4.1");
        assert_eq!(config.base_url, "https://custom.api.com/v1");
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn responses_url_appends_endpoint() {
        let provider = OpenAiProvider::new(OpenAiConfig::new("test"));
        assert_eq!(
            provider.responses_url(),
            "https://api.openai.com/v1/responses"
        );
    }

    #[test]
    fn api_request_preserves_roles_and_order() {
        let provider = OpenAiProvider::new(OpenAiConfig::new("test").with_model("gpt-4.1-mini"));

        let request = CompletionRequest::new()
            .with_message(Message::system("instrução"))
            .with_message(Message::user("pergunta"));
        let api_request = provider.to_api_request(&request);

        assert_eq!(api_request.model, "gpt-4.1-mini");
        assert_eq!(api_request.input.len(), 2);
        assert_eq!(api_request.input[0].role, "system");
        assert_eq!(api_request.input[0].content, "instrução");
        assert_eq!(api_request.input[1].role, "user");
    }

    #[test]
    fn api_request_serializes_expected_wire_format() {
        let provider = OpenAiProvider::new(OpenAiConfig::new("test"));
        let request = CompletionRequest::new().with_message(Message::user("olá"));

        let json = serde_json::to_value(provider.to_api_request(&request)).unwrap();
        assert_eq!(json["model"], "gpt-4.1-mini");
        assert_eq!(json["input"][0]["role"], "user");
        assert_eq!(json["input"][0]["content"], "olá");
    }
}
