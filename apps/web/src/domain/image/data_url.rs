use crate::domain::shared::errors::DomainError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use std::fmt;

const FALLBACK_MIME: &str = "application/octet-stream";

/// An image embedded as `data:<mime>;base64,<payload>`.
///
/// Everything before the first comma is the prefix; the payload is the
/// segment between the first and second comma, and anything after a second
/// comma is dropped. The prefix is kept verbatim so a value renders back
/// exactly as the browser produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct DataUrl {
    prefix: String,
    payload: String,
}

impl DataUrl {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let (prefix, rest) = value
            .split_once(',')
            .ok_or_else(|| DomainError::InvalidDataUrl("missing ',' separator".into()))?;
        let payload = rest.split(',').next().unwrap_or(rest);

        Ok(Self {
            prefix: prefix.trim().to_string(),
            payload: payload.trim().to_string(),
        })
    }

    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        let mime_type = mime_type.trim();
        let mime_type = if mime_type.is_empty() {
            FALLBACK_MIME
        } else {
            mime_type
        };

        Self {
            prefix: format!("data:{};base64", mime_type),
            payload: BASE64.encode(bytes),
        }
    }

    /// Wraps a model response; the remote service always answers with PNG.
    pub fn png(bytes: &[u8]) -> Self {
        Self::from_bytes("image/png", bytes)
    }

    pub fn mime_type(&self) -> &str {
        self.prefix
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .map(str::trim)
            .filter(|mime| !mime.is_empty())
            .unwrap_or(FALLBACK_MIME)
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn decode(&self) -> Result<Vec<u8>, DomainError> {
        BASE64
            .decode(self.payload.as_bytes())
            .map_err(|e| DomainError::InvalidPayload(e.to_string()))
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.prefix, self.payload)
    }
}

impl From<DataUrl> for String {
    fn from(value: DataUrl) -> Self {
        value.to_string()
    }
}
