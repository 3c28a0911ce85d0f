use crate::domain::workspace::entity::{ImageRole, SessionId};
use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct SelectImageRequest {
    pub session: SessionId,
    pub role: ImageRole,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}
