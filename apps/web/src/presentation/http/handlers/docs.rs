use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Neural Style Transfer",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/": { "get": { "summary": "Upload page with previews and stylized result" } },
            "/upload/content": { "post": { "summary": "Select content image (multipart field `file`)" } },
            "/upload/style": { "post": { "summary": "Select style image (multipart field `file`)" } },
            "/stylize": { "post": { "summary": "Stylize the session's uploads and show the result" } },
            "/api/v1/workspace": { "get": { "summary": "Current session's preview and result data URLs" } },
            "/api/v1/previews": { "post": { "summary": "Echo uploaded data URLs as previews" } },
            "/api/v1/stylize": { "post": { "summary": "Stylize two data URLs; result is null on any failure" } },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } },
            "/health": { "get": { "summary": "Health check" } }
        }
    }))
}
