use crate::{
    domain::workspace::entity::SessionId,
    presentation::http::{errors::AppError, state::AppState, view::render_page},
};
use axum::{Extension, extract::State, response::Html};

pub async fn index(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Html<String>, AppError> {
    let workspace = state.workspaces.find(session).await?;
    Ok(Html(render_page(&workspace)))
}
