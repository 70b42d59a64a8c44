//! Encoded image payloads returned by the image provider.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use vermeer_error::{ProviderError, ProviderErrorKind, VermeerResult};

/// An inline image as returned by the provider: MIME type plus base64 data.
///
/// The data is kept encoded; decoding happens only when a consumer needs bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    /// MIME type reported by the provider
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl ImagePayload {
    /// Create a payload from a MIME type and base64 data.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Decode the base64 data into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns a malformed-response error if the data is not valid base64.
    pub fn decode(&self) -> VermeerResult<Vec<u8>> {
        STANDARD.decode(self.data.as_bytes()).map_err(|e| {
            ProviderError::new(ProviderErrorKind::MalformedResponse(format!(
                "invalid base64 image data: {}",
                e
            )))
            .into()
        })
    }

    /// A `data:` URL suitable for embedding.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// File extension matching the MIME type.
    pub fn file_extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_base64_data() {
        let payload = ImagePayload::new("image/png", "iVBORw==");
        assert_eq!(payload.decode().unwrap(), vec![0x89, 0x50, 0x4E, 0x47]);
        assert_eq!(payload.data_url(), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn invalid_data_is_a_malformed_response() {
        let payload = ImagePayload::new("image/png", "not base64!");
        let err = payload.decode().unwrap_err();
        assert!(err.as_provider().unwrap().kind.is_contract_violation());
    }

    #[test]
    fn extension_follows_mime_type() {
        assert_eq!(ImagePayload::new("image/jpeg", "").file_extension(), "jpg");
        assert_eq!(ImagePayload::new("image/png", "").file_extension(), "png");
    }
}
