use crate::{
    application::stylize_image::{dto::StylizeImageRequest, use_case::StylizeImageUseCase},
    domain::{image::DataUrl, workspace::entity::SessionId},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Extension, Json,
    extract::State,
    response::Redirect,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct StylizePayload {
    #[serde(default)]
    pub content_image: Option<String>,
    #[serde(default)]
    pub style_image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StylizeResponse {
    pub stylized_image: Option<DataUrl>,
}

/// "Stylize Image" button on the page: runs on the session's uploads.
pub async fn stylize_workspace(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Redirect, AppError> {
    StylizeImageUseCase::new(state.style_transfer.clone())
        .execute_for_session(state.workspaces.as_ref(), session)
        .await?;
    Ok(Redirect::to("/"))
}

/// Stylize callback: data URLs in, data URL (or `null`) out.
///
/// Always answers 200; a failed round trip is reported as `null`.
pub async fn stylize_images(
    State(state): State<AppState>,
    Json(payload): Json<StylizePayload>,
) -> Json<StylizeResponse> {
    let stylized_image = StylizeImageUseCase::new(state.style_transfer.clone())
        .execute(StylizeImageRequest {
            content_image: parse_or_log(payload.content_image.as_deref(), "content"),
            style_image: parse_or_log(payload.style_image.as_deref(), "style"),
        })
        .await;

    Json(StylizeResponse { stylized_image })
}

fn parse_or_log(value: Option<&str>, role: &str) -> Option<DataUrl> {
    match DataUrl::parse(value?) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::warn!(role, error = %err, "ignoring malformed data URL");
            None
        }
    }
}
