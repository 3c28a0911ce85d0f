use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),
    #[error("Invalid image payload: {0}")]
    InvalidPayload(String),
}
