//! Trait definitions for the generative providers Vermeer consumes.
//!
//! The orchestrator only talks to providers through these seams, so tests and
//! alternate backends can stand in for the real Gemini client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{CredentialSource, ImageProvider, StructuredTextProvider};
pub use types::{
    ContentPart, ImageRequest, ImageRequestBuilder, ImageResponse, TextRequest,
    TextRequestBuilder, TextResponse,
};
