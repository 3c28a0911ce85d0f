use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleTransferError {
    #[error("style transfer request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("style transfer endpoint answered with status {status}")]
    Rejected { status: u16 },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StyleTransferService: Send + Sync {
    /// Runs the remote model on raw content/style bytes and returns the
    /// stylized image bytes exactly as the endpoint sent them.
    async fn stylize(
        &self,
        content_image: Vec<u8>,
        style_image: Vec<u8>,
    ) -> Result<Bytes, StyleTransferError>;
}
