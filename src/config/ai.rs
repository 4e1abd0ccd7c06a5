//! Completion provider configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Completion provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key. When absent the consultation endpoint reports a
    /// configuration error instead of calling the provider.
    pub openai_api_key: Option<String>,

    /// Model identifier sent with every completion request
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Responses API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl AiConfig {
    /// Check if an API key is configured
    pub fn has_credentials(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingModel);
        }
        if !self.base_url.starts_with("http") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

fn default_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}
