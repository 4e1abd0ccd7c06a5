//! GenerateReading - orchestrates a consultation from intake to generated text.
//!
//! Linear flow, no branching back: validate the intake, build the prompt,
//! require a configured provider, issue exactly one completion call, return
//! the extracted text. Every failure maps to a structured error at the HTTP
//! boundary.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::consultation::{build_prompt, ConsultationIntake, IntakeError, SYSTEM_PROMPT};
use crate::ports::{CompletionProvider, CompletionRequest, Message, ProviderError};

/// Failures of the consultation pipeline.
#[derive(Debug, Error)]
pub enum ConsultationError {
    /// The intake did not pass validation.
    #[error(transparent)]
    Intake(#[from] IntakeError),

    /// No API credential is configured; the external call is never attempted.
    #[error("TARO_HOLISTICO__AI__OPENAI_API_KEY não configurada no ambiente.")]
    MissingCredentials,

    /// The external completion call failed or produced no usable text.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Successful consultation outcome.
#[derive(Debug, Clone)]
pub struct GeneratedReading {
    pub mensagem: String,
}

/// Handler for generating consultation readings.
pub struct GenerateReadingHandler {
    /// `None` when no API credential was configured at startup.
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl GenerateReadingHandler {
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self { provider }
    }

    pub async fn handle(
        &self,
        intake: ConsultationIntake,
    ) -> Result<GeneratedReading, ConsultationError> {
        // 1. Validate and normalize: trimmed fields, recomputed age,
        //    normalized birth date. Client-supplied age never survives this.
        let consultation = intake.validate()?;

        // 2. Assemble the deterministic prompt.
        let prompt = build_prompt(
            &consultation.profile,
            &consultation.contact,
            &consultation.request,
        );

        // 3. Credentials are checked before any external call.
        let provider = self
            .provider
            .as_ref()
            .ok_or(ConsultationError::MissingCredentials)?;

        let request = CompletionRequest::new()
            .with_message(Message::system(SYSTEM_PROMPT))
            .with_message(Message::user(prompt));

        tracing::debug!(tema = %consultation.request.tema, "requesting consultation reading");
        let completion = provider.complete(request).await?;
        tracing::debug!(model = %completion.model, "consultation reading generated");

        Ok(GeneratedReading {
            mensagem: completion.text,
        })
    }
}
