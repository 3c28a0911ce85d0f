use crate::{
    application::select_image::dto::SelectImageRequest,
    domain::{
        image::DataUrl,
        shared::errors::DomainError,
        workspace::{
            entity::{Workspace, WorkspaceChange},
            repository::WorkspaceRepository,
        },
    },
};
use std::sync::Arc;
use tracing::{debug, instrument};

const GENERIC_BINARY: &str = "application/octet-stream";

/// Turns a freshly selected file into the preview data URL for its slot.
///
/// File type and size are not validated; the global body limit is the only
/// guard.
pub struct SelectImageUseCase {
    workspaces: Arc<dyn WorkspaceRepository>,
}

impl SelectImageUseCase {
    pub fn new(workspaces: Arc<dyn WorkspaceRepository>) -> Self {
        Self { workspaces }
    }

    #[instrument(skip_all, fields(
        session = %request.session,
        role = request.role.as_str(),
        file_name = request.file_name.as_deref().unwrap_or(""),
        size = request.data.len()
    ))]
    pub async fn execute(&self, request: SelectImageRequest) -> Result<Workspace, DomainError> {
        if request.data.is_empty() {
            // Same as an untouched upload widget: keep whatever is shown.
            debug!("empty upload ignored");
            return self.workspaces.find(request.session).await;
        }

        let mime_type = resolve_mime_type(request.content_type.as_deref(), &request.data);
        let image = DataUrl::from_bytes(&mime_type, &request.data);

        self.workspaces
            .apply(
                request.session,
                WorkspaceChange::ImageSelected {
                    role: request.role,
                    image,
                },
            )
            .await
    }
}

/// Prefers the MIME type the browser declared, then sniffs the bytes.
///
/// Only the bare `type/subtype` of the declaration is kept; parameters are
/// dropped and anything that is not a plain token pair is ignored.
pub fn resolve_mime_type(declared: Option<&str>, data: &[u8]) -> String {
    declared
        .and_then(essence)
        .map(str::to_ascii_lowercase)
        .filter(|mime| mime != GENERIC_BINARY)
        .or_else(|| {
            image::guess_format(data)
                .ok()
                .map(|format| format.to_mime_type().to_string())
        })
        .unwrap_or_else(|| GENERIC_BINARY.to_string())
}

fn essence(declared: &str) -> Option<&str> {
    let mime = declared.split(';').next().unwrap_or(declared).trim();
    let (kind, subtype) = mime.split_once('/')?;
    let is_token = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '.' | '_'))
    };
    (is_token(kind) && is_token(subtype)).then_some(mime)
}
