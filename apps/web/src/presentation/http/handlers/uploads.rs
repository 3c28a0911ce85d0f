use crate::{
    application::select_image::{dto::SelectImageRequest, use_case::SelectImageUseCase},
    domain::workspace::entity::{ImageRole, SessionId},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Extension,
    extract::{Multipart, State},
    response::Redirect,
};
use bytes::Bytes;

/// Name of the multipart part carrying the selected file.
pub const FILE_FIELD: &str = "file";

struct SelectedFile {
    file_name: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

async fn read_selected_file(multipart: &mut Multipart) -> Result<Option<SelectedFile>, AppError> {
    let mut selected = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;
        selected = Some(SelectedFile {
            file_name,
            content_type,
            data,
        });
    }

    Ok(selected)
}

async fn select_image(
    state: AppState,
    session: SessionId,
    role: ImageRole,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let Some(file) = read_selected_file(&mut multipart).await? else {
        tracing::debug!(role = role.as_str(), "upload without file part ignored");
        return Ok(Redirect::to("/"));
    };

    SelectImageUseCase::new(state.workspaces.clone())
        .execute(SelectImageRequest {
            session,
            role,
            file_name: file.file_name,
            content_type: file.content_type,
            data: file.data,
        })
        .await?;

    Ok(Redirect::to("/"))
}

pub async fn upload_content(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    select_image(state, session, ImageRole::Content, multipart).await
}

pub async fn upload_style(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    select_image(state, session, ImageRole::Style, multipart).await
}
