//! Provider traits.

use crate::{ImageRequest, ImageResponse, TextRequest, TextResponse};
use async_trait::async_trait;
use vermeer_error::VermeerResult;

/// A provider that answers a prompt with JSON matching an explicit schema.
#[async_trait]
pub trait StructuredTextProvider: Send + Sync {
    /// Run a structured-output request.
    ///
    /// A missing payload is reported as `TextResponse { text: None }`, not as
    /// an error; the caller decides what an empty answer means.
    async fn generate_structured(&self, req: &TextRequest) -> VermeerResult<TextResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// A provider that turns a text prompt into zero or more content parts.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Run an image request.
    async fn generate_image(&self, req: &ImageRequest) -> VermeerResult<ImageResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// Supplies the credential for each provider call.
///
/// Implementations own refresh: a provider asks for the credential on every
/// call and never caches it.
pub trait CredentialSource: Send + Sync + std::fmt::Debug {
    /// The credential to use for the next call.
    fn credential(&self) -> VermeerResult<String>;
}
