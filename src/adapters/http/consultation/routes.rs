//! HTTP routes for the consultation endpoint.

use axum::{routing::post, Router};

use super::handlers::{create_consultation, ConsultationHandlers};

/// Creates the consultation router.
pub fn consultation_routes(handlers: ConsultationHandlers) -> Router {
    Router::new()
        .route("/consulta", post(create_consultation))
        .with_state(handlers)
}
