//! Request and response value types exchanged with providers.

use serde::{Deserialize, Serialize};
use vermeer_core::SupportedAspectRatio;

/// Structured-output text request.
///
/// # Examples
///
/// ```
/// use vermeer_interface::TextRequest;
/// use serde_json::json;
///
/// let request = TextRequest::builder()
///     .prompt("Write a haiku")
///     .response_schema(json!({"type": "OBJECT"}))
///     .build()
///     .unwrap();
/// assert!(request.model.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct TextRequest {
    /// Model override; the provider default is used when `None`
    #[builder(default)]
    pub model: Option<String>,
    /// System-level instruction
    #[builder(default)]
    pub system_instruction: Option<String>,
    /// User prompt
    pub prompt: String,
    /// Schema the JSON answer must match
    pub response_schema: serde_json::Value,
}

impl TextRequest {
    /// Creates a new request builder.
    pub fn builder() -> TextRequestBuilder {
        TextRequestBuilder::default()
    }
}

/// Answer to a [`TextRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextResponse {
    /// JSON text, if the provider returned any
    pub text: Option<String>,
}

/// Single-prompt image request.
///
/// Carries no size parameter; the provider does not accept one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Model override; the provider default is used when `None`
    #[builder(default)]
    pub model: Option<String>,
    /// Final provider-facing prompt
    pub prompt: String,
    /// Validated aspect ratio
    pub aspect_ratio: SupportedAspectRatio,
}

impl ImageRequest {
    /// Creates a new request builder.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}

/// One part of a provider answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ContentPart {
    /// Plain text
    Text(String),
    /// Inline binary payload, base64-encoded
    InlineData {
        /// MIME type of the payload
        mime_type: String,
        /// Base64 data
        data: String,
    },
}

/// Answer to an [`ImageRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageResponse {
    /// Parts in provider order
    pub parts: Vec<ContentPart>,
}
