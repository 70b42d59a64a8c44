//! Turning provider answers into domain values.

use serde::Deserialize;
use serde_json::Value;
use strum::IntoEnumIterator;
use tracing::debug;
use vermeer_core::{GeneratedContent, ImagePayload, Platform, SocialPost};
use vermeer_error::{ProviderError, ProviderErrorKind, VermeerResult};
use vermeer_interface::{ContentPart, ImageResponse, TextResponse};

/// A platform entry as the provider returns it (keyed externally by platform).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostPayload {
    content: String,
    image_prompt: String,
    #[serde(default)]
    hashtags: Option<Vec<String>>,
}

fn malformed(message: impl Into<String>) -> ProviderError {
    ProviderError::new(ProviderErrorKind::MalformedResponse(message.into()))
}

/// Parse the batch text answer into per-platform posts.
///
/// # Errors
///
/// - `NoResponse` if the provider returned no text (or only whitespace)
/// - `MalformedResponse` if the text is not a JSON object with a complete
///   entry for every platform
pub fn parse_generated_content(response: &TextResponse) -> VermeerResult<GeneratedContent> {
    let text = match response.text.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => return Err(ProviderError::new(ProviderErrorKind::NoResponse).into()),
    };

    let root: Value = serde_json::from_str(text)
        .map_err(|e| malformed(format!("response is not JSON: {}", e)))?;
    let Value::Object(mut entries) = root else {
        return Err(malformed("response is not a JSON object").into());
    };

    let mut posts = Vec::new();
    for platform in Platform::iter() {
        let entry = entries
            .remove(&platform.to_string())
            .ok_or_else(|| malformed(format!("missing entry for {}", platform)))?;
        let payload: PostPayload = serde_json::from_value(entry)
            .map_err(|e| malformed(format!("invalid entry for {}: {}", platform, e)))?;
        posts.push(SocialPost {
            platform,
            content: payload.content,
            image_prompt: payload.image_prompt,
            hashtags: payload.hashtags.unwrap_or_default(),
        });
    }
    if !entries.is_empty() {
        debug!(extra = entries.len(), "Ignoring entries for unknown platforms");
    }

    GeneratedContent::new(posts)
}

/// The first inline image among the answer's parts.
///
/// # Errors
///
/// Returns `NoImageData` if no part carries non-empty inline data.
pub fn extract_image(response: &ImageResponse) -> VermeerResult<ImagePayload> {
    response
        .parts
        .iter()
        .find_map(|part| match part {
            ContentPart::InlineData { mime_type, data } if !data.is_empty() => {
                Some(ImagePayload::new(mime_type.clone(), data.clone()))
            }
            _ => None,
        })
        .ok_or_else(|| ProviderError::new(ProviderErrorKind::NoImageData).into())
}
