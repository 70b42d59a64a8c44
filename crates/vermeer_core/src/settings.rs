//! User-controlled generation parameters.

use crate::{AspectRatio, ImageSize, Tone};
use serde::{Deserialize, Serialize};

/// Generation parameters applied to the next run or regeneration.
///
/// # Examples
///
/// ```
/// use vermeer_core::{AspectRatio, ImageSize, Settings, Tone};
///
/// let settings = Settings::builder()
///     .tone(Tone::Witty)
///     .image_size(ImageSize::Size2K)
///     .build()
///     .unwrap();
/// assert_eq!(settings.aspect_ratio, AspectRatio::Auto);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(default)]
pub struct Settings {
    /// Voice preset
    pub tone: Tone,
    /// Fidelity tier used to bias the image style
    pub image_size: ImageSize,
    /// Requested aspect ratio, possibly `Auto`
    pub aspect_ratio: AspectRatio,
}

impl Settings {
    /// Creates a new settings builder.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Apply a partial update, keeping fields the update leaves unset.
    pub fn merged(&self, update: &SettingsUpdate) -> Settings {
        Settings {
            tone: update.tone.unwrap_or(self.tone),
            image_size: update.image_size.unwrap_or(self.image_size),
            aspect_ratio: update.aspect_ratio.unwrap_or(self.aspect_ratio),
        }
    }
}

/// Partial settings change issued by the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    /// New tone, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    /// New image size, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<ImageSize>,
    /// New aspect ratio, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<AspectRatio>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_only_touches_set_fields() {
        let current = Settings {
            tone: Tone::Urgent,
            image_size: ImageSize::Size4K,
            aspect_ratio: AspectRatio::Landscape16x9,
        };
        let update = SettingsUpdate {
            tone: Some(Tone::Empathetic),
            ..Default::default()
        };

        let merged = current.merged(&update);
        assert_eq!(merged.tone, Tone::Empathetic);
        assert_eq!(merged.image_size, ImageSize::Size4K);
        assert_eq!(merged.aspect_ratio, AspectRatio::Landscape16x9);
    }

    #[test]
    fn update_deserializes_from_partial_json() {
        let update: SettingsUpdate = serde_json::from_str(r#"{"aspectRatio": "9:16"}"#).unwrap();
        assert_eq!(update.aspect_ratio, Some(AspectRatio::Portrait9x16));
        assert_eq!(update.tone, None);
    }
}
