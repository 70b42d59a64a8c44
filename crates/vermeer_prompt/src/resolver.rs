//! Aspect ratio resolution against the provider's supported set.

use std::str::FromStr;
use vermeer_core::{AspectRatio, Platform, SupportedAspectRatio};

/// Default ratio for each platform when the user picks `Auto`.
pub fn platform_default_ratio(platform: Platform) -> SupportedAspectRatio {
    match platform {
        Platform::Linkedin => SupportedAspectRatio::Square1x1,
        Platform::Twitter => SupportedAspectRatio::Landscape16x9,
        Platform::Instagram => SupportedAspectRatio::Portrait3x4,
    }
}

/// Replace `Auto` with the platform default; concrete selections pass through.
///
/// # Examples
///
/// ```
/// use vermeer_core::{AspectRatio, Platform};
/// use vermeer_prompt::resolve_aspect_ratio;
///
/// assert_eq!(
///     resolve_aspect_ratio(Platform::Twitter, AspectRatio::Auto),
///     AspectRatio::Landscape16x9
/// );
/// assert_eq!(
///     resolve_aspect_ratio(Platform::Twitter, AspectRatio::Portrait2x3),
///     AspectRatio::Portrait2x3
/// );
/// ```
pub fn resolve_aspect_ratio(platform: Platform, selected: AspectRatio) -> AspectRatio {
    if selected.is_auto() {
        platform_default_ratio(platform).into()
    } else {
        selected
    }
}

/// Snap a ratio to the provider's supported set.
///
/// Supported ratios pass through. `2:3` becomes `3:4`, `3:2` becomes `4:3`,
/// `21:9` becomes `16:9`, and anything else (including an unresolved `Auto`)
/// becomes `1:1`.
pub fn validate_aspect_ratio(ratio: AspectRatio) -> SupportedAspectRatio {
    if let Some(supported) = SupportedAspectRatio::exact(ratio) {
        return supported;
    }
    match ratio {
        AspectRatio::Portrait2x3 => SupportedAspectRatio::Portrait3x4,
        AspectRatio::Landscape3x2 => SupportedAspectRatio::Landscape4x3,
        AspectRatio::Ultrawide21x9 => SupportedAspectRatio::Landscape16x9,
        _ => SupportedAspectRatio::Square1x1,
    }
}

/// [`validate_aspect_ratio`] for raw labels; unknown labels become `1:1`.
pub fn validate_aspect_ratio_label(label: &str) -> SupportedAspectRatio {
    AspectRatio::from_str(label.trim())
        .map(validate_aspect_ratio)
        .unwrap_or_default()
}
