use super::traits::{StyleTransferError, StyleTransferService};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{
    StatusCode,
    multipart::{Form, Part},
};
use tracing::debug;

/// Client for the model server's `POST {base}/stylize` endpoint.
///
/// The underlying client has no request timeout; a click waits for as long
/// as the model takes.
pub struct RemoteStyleTransfer {
    client: reqwest::Client,
    stylize_url: String,
}

impl RemoteStyleTransfer {
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            stylize_url: stylize_url(endpoint),
        })
    }

    pub fn stylize_url(&self) -> &str {
        &self.stylize_url
    }
}

pub fn stylize_url(endpoint: &str) -> String {
    format!("{}/stylize", endpoint.trim().trim_end_matches('/'))
}

fn image_part(name: &'static str, data: Vec<u8>) -> Part {
    Part::bytes(data).file_name(name)
}

#[async_trait]
impl StyleTransferService for RemoteStyleTransfer {
    async fn stylize(
        &self,
        content_image: Vec<u8>,
        style_image: Vec<u8>,
    ) -> Result<Bytes, StyleTransferError> {
        debug!(
            url = %self.stylize_url,
            content_bytes = content_image.len(),
            style_bytes = style_image.len(),
            "sending stylize request"
        );

        let form = Form::new()
            .part("content_image", image_part("content_image", content_image))
            .part("style_image", image_part("style_image", style_image));

        let response = self
            .client
            .post(&self.stylize_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(StyleTransferError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?)
    }
}
