//! Gemini REST client.

use super::conversion::{image_request_body, image_response, text_request_body, text_response};
use super::dto::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use derive_getters::Getters;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use vermeer_error::{ProviderError, ProviderErrorKind, VermeerResult};
use vermeer_interface::{
    CredentialSource, ImageProvider, ImageRequest, ImageResponse, StructuredTextProvider,
    TextRequest, TextResponse,
};

/// Gemini REST API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model used for structured text unless overridden.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
/// Model used for images unless overridden.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini `generateContent` endpoint.
///
/// Implements both [`StructuredTextProvider`] and [`ImageProvider`]. The
/// credential is fetched from its source on every call.
#[derive(Debug, Clone, Getters)]
pub struct GeminiClient {
    #[getter(skip)]
    http: Client,
    /// API root, without trailing slash
    base_url: String,
    /// Default text model
    text_model: String,
    /// Default image model
    image_model: String,
    #[getter(skip)]
    credentials: Arc<dyn CredentialSource>,
}

impl GeminiClient {
    /// Client with default endpoint and models.
    pub fn new(credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            credentials,
        }
    }

    /// Use a preconfigured HTTP client (timeouts, proxies).
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Point at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Change the default text model.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    /// Change the default image model.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    async fn generate_content(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> VermeerResult<GenerateContentResponse> {
        let api_key = self.credentials.credential()?;
        let url = self.endpoint(model);
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                ProviderError::new(ProviderErrorKind::Transport(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini API returned error status");
            return Err(ProviderError::new(ProviderErrorKind::Http {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        response.json::<GenerateContentResponse>().await.map_err(|e| {
            ProviderError::new(ProviderErrorKind::MalformedResponse(format!(
                "Failed to parse response: {}",
                e
            )))
            .into()
        })
    }
}

#[async_trait]
impl StructuredTextProvider for GeminiClient {
    #[instrument(skip(self, req), fields(model = tracing::field::Empty))]
    async fn generate_structured(&self, req: &TextRequest) -> VermeerResult<TextResponse> {
        let model = req.model.as_deref().unwrap_or(&self.text_model);
        tracing::Span::current().record("model", model);

        let response = self.generate_content(model, &text_request_body(req)).await?;
        let response = text_response(response);
        debug!(has_text = response.text.is_some(), "Structured text received");
        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

#[async_trait]
impl ImageProvider for GeminiClient {
    #[instrument(skip(self, req), fields(model = tracing::field::Empty, aspect_ratio = %req.aspect_ratio))]
    async fn generate_image(&self, req: &ImageRequest) -> VermeerResult<ImageResponse> {
        let model = req.model.as_deref().unwrap_or(&self.image_model);
        tracing::Span::current().record("model", model);

        let response = self.generate_content(model, &image_request_body(req)).await?;
        let response = image_response(response);
        debug!(parts = response.parts.len(), "Image response received");
        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticCredentials;

    #[test]
    fn endpoint_joins_model_path() {
        let client = GeminiClient::new(Arc::new(StaticCredentials::new("k")))
            .with_base_url("http://localhost:8080/v1beta/");
        assert_eq!(
            client.endpoint("gemini-2.5-flash-image"),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
    }
}
