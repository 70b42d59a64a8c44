//! Vermeer - one idea, a post per platform, an image per post.
//!
//! Vermeer turns a short idea into ready-to-publish content for LinkedIn,
//! Twitter/X, and Instagram: per-platform text and hashtags from a single
//! structured text call, then one generated image per platform. Any single
//! post or image can be regenerated without disturbing the others.
//!
//! # Quick Start
//!
//! ```no_run
//! use vermeer::{Tone, VermeerConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = VermeerConfig::load()?.orchestrator();
//! orchestrator
//!     .generate_all("launch of a productivity app", Tone::Witty)
//!     .await?;
//!
//! let state = orchestrator.snapshot();
//! for post in state.content().into_iter().flat_map(|c| c.posts()) {
//!     println!("{}: {}", post.platform.label(), post.content);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `vermeer_error` - Error types
//! - `vermeer_core` - Data model (platforms, tones, posts, settings)
//! - `vermeer_interface` - Provider traits
//! - `vermeer_prompt` - Aspect ratio resolution, style strings, request composition
//! - `vermeer_models` - Gemini client
//! - `vermeer_orchestrator` - Generation state machine
//!
//! This crate re-exports everything for convenience and adds configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use crate::config::{DefaultsConfig, ProviderConfig, VermeerConfig};

pub use vermeer_core::{
    AspectRatio, GeneratedContent, ImagePayload, ImageSize, Platform, Settings, SettingsBuilder,
    SettingsUpdate, SocialPost, SupportedAspectRatio, Tone, init_tracing,
};
pub use vermeer_error::{
    ConfigError, JsonError, OrchestratorError, OrchestratorErrorKind, PERMISSION_DENIED_MESSAGE,
    ProviderError, ProviderErrorKind, VermeerError, VermeerErrorKind, VermeerResult,
};
pub use vermeer_interface::{
    ContentPart, CredentialSource, ImageProvider, ImageRequest, ImageResponse,
    StructuredTextProvider, TextRequest, TextResponse,
};
pub use vermeer_models::{EnvCredentials, GeminiClient, StaticCredentials};
pub use vermeer_orchestrator::{
    CommandOutcome, FailureKind, GenerationFailure, GenerationState, Orchestrator, Scope,
};
pub use vermeer_prompt::{
    PromptComposer, compose_style_modifiers, resolve_aspect_ratio, validate_aspect_ratio,
    validate_aspect_ratio_label,
};
