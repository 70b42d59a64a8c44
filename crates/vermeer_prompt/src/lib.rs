//! Parameter resolution and prompt composition for Vermeer.
//!
//! Everything here is pure and total:
//! - [`resolve_aspect_ratio`] / [`validate_aspect_ratio`] turn a user selection
//!   into a ratio the image provider accepts
//! - [`compose_style_modifiers`] builds the visual style string
//! - [`PromptComposer`] builds the batch text request and per-platform image
//!   requests
//! - [`parse_generated_content`] / [`extract_image`] turn provider answers back
//!   into domain values, reporting contract violations

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod composer;
mod parse;
mod resolver;
mod style;

pub use composer::{DEFAULT_SYSTEM_INSTRUCTION, PromptComposer, response_schema};
pub use parse::{extract_image, parse_generated_content};
pub use resolver::{
    platform_default_ratio, resolve_aspect_ratio, validate_aspect_ratio,
    validate_aspect_ratio_label,
};
pub use style::{compose_style_modifiers, platform_style, size_style, tone_style};
