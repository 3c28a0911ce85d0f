use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    sessions: usize,
    model_endpoint: String,
    version: &'static str,
}

/// Liveness only; the model endpoint is reported but never called from here.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        sessions: state.workspaces.count().await,
        model_endpoint: state.config.stylize_endpoint.clone(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
