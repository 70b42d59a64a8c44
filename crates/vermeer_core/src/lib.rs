//! Core data types for the Vermeer social content generator.
//!
//! This crate provides the vocabulary shared by every other Vermeer crate:
//! platforms, tones, image parameters, generated posts, and user settings.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aspect_ratio;
mod image_size;
mod payload;
mod platform;
mod post;
mod settings;
mod telemetry;
mod tone;

pub use aspect_ratio::{AspectRatio, SupportedAspectRatio};
pub use image_size::ImageSize;
pub use payload::ImagePayload;
pub use platform::Platform;
pub use post::{GeneratedContent, SocialPost};
pub use settings::{Settings, SettingsBuilder, SettingsUpdate};
pub use telemetry::init_tracing;
pub use tone::Tone;
