//! Gemini REST provider.

mod client;
mod conversion;
mod dto;

pub use client::{DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, GeminiClient};
pub use conversion::{image_request_body, image_response, text_request_body, text_response};
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, InlineData, Part,
};
