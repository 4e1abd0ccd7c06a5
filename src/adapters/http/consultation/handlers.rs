//! HTTP handlers for the consultation endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::consultation::{ConsultationError, GenerateReadingHandler};
use crate::domain::consultation::IntakeError;

use super::dto::{ConsultaRequest, ConsultaResponse, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ConsultationHandlers {
    generate_handler: Arc<GenerateReadingHandler>,
}

impl ConsultationHandlers {
    pub fn new(generate_handler: Arc<GenerateReadingHandler>) -> Self {
        Self { generate_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/consulta - Generate a consultation reading
pub async fn create_consultation(
    State(handlers): State<ConsultationHandlers>,
    Json(req): Json<ConsultaRequest>,
) -> Response {
    match handlers.generate_handler.handle(req.into()).await {
        Ok(reading) => (
            StatusCode::OK,
            Json(ConsultaResponse {
                mensagem: reading.mensagem,
            }),
        )
            .into_response(),
        Err(e) => handle_consultation_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_consultation_error(error: ConsultationError) -> Response {
    let (status, body) = match &error {
        ConsultationError::Intake(IntakeError::IncompleteData { missing }) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(
                "Dados incompletos.",
                format!("Campos obrigatórios ausentes: {}.", missing.join(", ")),
            ),
        ),
        ConsultationError::Intake(IntakeError::InvalidBirthDate) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("Data de nascimento inválida.", "Use o formato AAAA-MM-DD."),
        ),
        ConsultationError::Intake(IntakeError::ConsultationNotAllowed) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(
                "Consulta não permitida.",
                "Somente maiores de 18 anos podem receber esta orientação.",
            ),
        ),
        ConsultationError::MissingCredentials | ConsultationError::Provider(_) => {
            tracing::error!(%error, "consultation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Não foi possível gerar a resposta.", error.to_string()),
            )
        }
    };

    (status, Json(body)).into_response()
}
