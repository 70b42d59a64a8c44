//! Generative provider integrations for Vermeer.
//!
//! [`GeminiClient`] implements both provider seams against the Gemini REST
//! API. Credentials are supplied through a [`CredentialSource`] and read on
//! every call.
//!
//! ```no_run
//! use std::sync::Arc;
//! use vermeer_interface::{StructuredTextProvider, TextRequest};
//! use vermeer_models::{EnvCredentials, GeminiClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(Arc::new(EnvCredentials::default()));
//! let request = TextRequest::builder()
//!     .prompt("Describe a sunrise")
//!     .response_schema(serde_json::json!({"type": "STRING"}))
//!     .build()?;
//! let response = client.generate_structured(&request).await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`CredentialSource`]: vermeer_interface::CredentialSource

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credentials;
mod gemini;

pub use credentials::{DEFAULT_API_KEY_ENV, EnvCredentials, StaticCredentials};
pub use gemini::{
    Candidate, Content, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL,
    GeminiClient, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
    InlineData, Part, image_request_body, image_response, text_request_body, text_response,
};
