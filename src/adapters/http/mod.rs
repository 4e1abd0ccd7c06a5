//! HTTP adapters - REST API implementation.

use axum::response::Html;

pub mod consultation;

// Re-export key types for convenience
pub use consultation::consultation_routes;
pub use consultation::ConsultationHandlers;

/// GET / - static landing page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}
