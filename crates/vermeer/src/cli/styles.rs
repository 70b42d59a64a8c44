//! Style preview command handler.

use std::str::FromStr;
use vermeer::{
    AspectRatio, ConfigError, ImageSize, Platform, Tone, VermeerResult, compose_style_modifiers,
    resolve_aspect_ratio, validate_aspect_ratio,
};

/// Print the style string and default ratio an image request would use.
///
/// # Errors
///
/// Returns an error if the platform is unknown. Tone and size fall back to
/// their defaults.
pub fn print_styles(platform: &str, tone: &str, size: &str) -> VermeerResult<()> {
    let platform = Platform::from_str(platform.trim().to_lowercase().as_str())
        .map_err(|_| ConfigError::new(format!("Unknown platform '{}'", platform)))?;
    let tone = Tone::from_label(tone);
    let size = ImageSize::from_label(size);

    println!("{}", compose_style_modifiers(platform, tone, size));
    println!(
        "aspect ratio (auto): {}",
        validate_aspect_ratio(resolve_aspect_ratio(platform, AspectRatio::Auto))
    );
    Ok(())
}
