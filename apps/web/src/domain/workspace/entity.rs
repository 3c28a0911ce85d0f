use crate::domain::image::DataUrl;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Identifies one browser session and the workspace that belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Which upload widget an image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    Content,
    Style,
}

impl ImageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Style => "style",
        }
    }
}

/// The three display slots of the page.
///
/// # Invariants
/// - Selecting a content image only ever touches `content_image`, and the
///   same holds for the style slot.
/// - `stylized_image` is only `Some` after the model answered successfully;
///   every attempt overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Workspace {
    pub content_image: Option<DataUrl>,
    pub style_image: Option<DataUrl>,
    pub stylized_image: Option<DataUrl>,
}

/// A single UI event applied to a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceChange {
    ImageSelected { role: ImageRole, image: DataUrl },
    Stylized(Option<DataUrl>),
}

impl Workspace {
    pub fn apply(&mut self, change: WorkspaceChange) {
        match change {
            WorkspaceChange::ImageSelected {
                role: ImageRole::Content,
                image,
            } => self.content_image = Some(image),
            WorkspaceChange::ImageSelected {
                role: ImageRole::Style,
                image,
            } => self.style_image = Some(image),
            WorkspaceChange::Stylized(result) => self.stylized_image = result,
        }
    }

    pub fn image(&self, role: ImageRole) -> Option<&DataUrl> {
        match role {
            ImageRole::Content => self.content_image.as_ref(),
            ImageRole::Style => self.style_image.as_ref(),
        }
    }
}
