use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct PreviewPayload {
    #[serde(default)]
    pub content_image: Option<String>,
    #[serde(default)]
    pub style_image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub content_preview: Option<String>,
    pub style_preview: Option<String>,
}

/// Preview callback: each uploaded data URL is shown as-is in its slot.
pub async fn update_previews(Json(payload): Json<PreviewPayload>) -> Json<PreviewResponse> {
    Json(PreviewResponse {
        content_preview: payload.content_image,
        style_preview: payload.style_image,
    })
}
