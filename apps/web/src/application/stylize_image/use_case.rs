use crate::{
    application::stylize_image::dto::StylizeImageRequest,
    domain::{
        image::DataUrl,
        shared::errors::DomainError,
        workspace::{
            entity::{SessionId, WorkspaceChange},
            repository::WorkspaceRepository,
        },
    },
    infrastructure::style_transfer::traits::StyleTransferService,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// The single round trip behind the "Stylize Image" button.
///
/// Every failure (missing upload, undecodable data URL, transport error or a
/// non-200 status) collapses into `None`; the caller only ever sees a blank
/// result. Nothing is retried.
pub struct StylizeImageUseCase {
    service: Arc<dyn StyleTransferService>,
}

impl StylizeImageUseCase {
    pub fn new(service: Arc<dyn StyleTransferService>) -> Self {
        Self { service }
    }

    #[instrument(skip_all, fields(
        has_content = request.content_image.is_some(),
        has_style = request.style_image.is_some()
    ))]
    pub async fn execute(&self, request: StylizeImageRequest) -> Option<DataUrl> {
        let (Some(content), Some(style)) = (&request.content_image, &request.style_image) else {
            debug!("stylize skipped, both images are required");
            return None;
        };

        let content_bytes = decode_or_log(content, "content")?;
        let style_bytes = decode_or_log(style, "style")?;

        match self.service.stylize(content_bytes, style_bytes).await {
            Ok(bytes) => {
                info!(result_bytes = bytes.len(), "style transfer succeeded");
                Some(DataUrl::png(&bytes))
            }
            Err(err) => {
                warn!(error = %err, "style transfer failed");
                None
            }
        }
    }

    /// Stylizes the session's current uploads and stores the outcome in its
    /// result slot, clearing it on failure.
    ///
    /// The store is not locked while the model runs, so a later upload in the
    /// same session is never lost, and concurrent clicks resolve as "last
    /// response wins".
    pub async fn execute_for_session(
        &self,
        workspaces: &dyn WorkspaceRepository,
        session: SessionId,
    ) -> Result<Option<DataUrl>, DomainError> {
        let workspace = workspaces.find(session).await?;
        let result = self
            .execute(StylizeImageRequest {
                content_image: workspace.content_image,
                style_image: workspace.style_image,
            })
            .await;

        workspaces
            .apply(session, WorkspaceChange::Stylized(result.clone()))
            .await?;
        Ok(result)
    }
}

fn decode_or_log(image: &DataUrl, role: &str) -> Option<Vec<u8>> {
    match image.decode() {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            warn!(role, error = %err, "could not decode uploaded image");
            None
        }
    }
}
