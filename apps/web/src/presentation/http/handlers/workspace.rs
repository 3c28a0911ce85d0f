use crate::{
    domain::workspace::entity::{SessionId, Workspace},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{Extension, Json, extract::State};

pub async fn get_workspace(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Json<Workspace>, AppError> {
    Ok(Json(state.workspaces.find(session).await?))
}
