use crate::domain::image::DataUrl;

/// Both images as they sit in the upload slots at click time.
#[derive(Debug, Clone, Default)]
pub struct StylizeImageRequest {
    pub content_image: Option<DataUrl>,
    pub style_image: Option<DataUrl>,
}
