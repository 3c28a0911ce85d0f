use super::{
    handlers::{docs, health, page, previews, stylize, uploads, workspace},
    middleware::logging::logging_middleware,
    middleware::request_id::request_id_middleware,
    middleware::session::session_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    let session_routes = Router::new()
        // Page
        .route("/", get(page::index))
        .route("/upload/content", post(uploads::upload_content))
        .route("/upload/style", post(uploads::upload_style))
        .route("/stylize", post(stylize::stylize_workspace))
        // Session state
        .route("/api/v1/workspace", get(workspace::get_workspace))
        .route_layer(middleware::from_fn(session_middleware));

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Callbacks
        .route("/api/v1/previews", post(previews::update_previews))
        .route("/api/v1/stylize", post(stylize::stylize_images))
        // Docs
        .route("/api/v1/docs", get(docs::api_docs))
        .merge(session_routes)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
