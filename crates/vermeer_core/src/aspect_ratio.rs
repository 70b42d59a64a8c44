//! Aspect ratio selections and the provider-supported subset.

use serde::{Deserialize, Serialize};

/// Aspect ratio as chosen by the user.
///
/// `Auto` defers to a per-platform default; the remaining variants are
/// concrete ratios, not all of which the image provider accepts.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum AspectRatio {
    /// Pick the platform's default ratio
    #[default]
    Auto,
    /// Square
    #[serde(rename = "1:1")]
    #[strum(serialize = "1:1")]
    Square1x1,
    /// Classic portrait
    #[serde(rename = "2:3")]
    #[strum(serialize = "2:3")]
    Portrait2x3,
    /// Classic landscape
    #[serde(rename = "3:2")]
    #[strum(serialize = "3:2")]
    Landscape3x2,
    /// Portrait
    #[serde(rename = "3:4")]
    #[strum(serialize = "3:4")]
    Portrait3x4,
    /// Landscape
    #[serde(rename = "4:3")]
    #[strum(serialize = "4:3")]
    Landscape4x3,
    /// Tall portrait (stories)
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Portrait9x16,
    /// Widescreen
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Landscape16x9,
    /// Ultrawide
    #[serde(rename = "21:9")]
    #[strum(serialize = "21:9")]
    Ultrawide21x9,
}

impl AspectRatio {
    /// Ratios a settings surface should offer: `Auto` plus the supported set.
    pub fn selectable() -> [AspectRatio; 6] {
        [
            AspectRatio::Auto,
            AspectRatio::Square1x1,
            AspectRatio::Portrait3x4,
            AspectRatio::Landscape4x3,
            AspectRatio::Portrait9x16,
            AspectRatio::Landscape16x9,
        ]
    }

    /// Whether this is the `Auto` sentinel.
    pub fn is_auto(&self) -> bool {
        matches!(self, AspectRatio::Auto)
    }
}

/// Aspect ratios the image provider accepts.
///
/// Image requests carry this type, so an unsupported ratio cannot reach the
/// provider.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum SupportedAspectRatio {
    /// Square
    #[default]
    #[serde(rename = "1:1")]
    #[strum(serialize = "1:1")]
    Square1x1,
    /// Portrait
    #[serde(rename = "3:4")]
    #[strum(serialize = "3:4")]
    Portrait3x4,
    /// Landscape
    #[serde(rename = "4:3")]
    #[strum(serialize = "4:3")]
    Landscape4x3,
    /// Tall portrait
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Portrait9x16,
    /// Widescreen
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Landscape16x9,
}

impl SupportedAspectRatio {
    /// The supported variant equal to `ratio`, if the provider accepts it as is.
    pub fn exact(ratio: AspectRatio) -> Option<Self> {
        match ratio {
            AspectRatio::Square1x1 => Some(SupportedAspectRatio::Square1x1),
            AspectRatio::Portrait3x4 => Some(SupportedAspectRatio::Portrait3x4),
            AspectRatio::Landscape4x3 => Some(SupportedAspectRatio::Landscape4x3),
            AspectRatio::Portrait9x16 => Some(SupportedAspectRatio::Portrait9x16),
            AspectRatio::Landscape16x9 => Some(SupportedAspectRatio::Landscape16x9),
            AspectRatio::Auto
            | AspectRatio::Portrait2x3
            | AspectRatio::Landscape3x2
            | AspectRatio::Ultrawide21x9 => None,
        }
    }

    /// The ratio string sent to the provider (e.g. `"16:9"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedAspectRatio::Square1x1 => "1:1",
            SupportedAspectRatio::Portrait3x4 => "3:4",
            SupportedAspectRatio::Landscape4x3 => "4:3",
            SupportedAspectRatio::Portrait9x16 => "9:16",
            SupportedAspectRatio::Landscape16x9 => "16:9",
        }
    }
}

impl From<SupportedAspectRatio> for AspectRatio {
    fn from(ratio: SupportedAspectRatio) -> Self {
        match ratio {
            SupportedAspectRatio::Square1x1 => AspectRatio::Square1x1,
            SupportedAspectRatio::Portrait3x4 => AspectRatio::Portrait3x4,
            SupportedAspectRatio::Landscape4x3 => AspectRatio::Landscape4x3,
            SupportedAspectRatio::Portrait9x16 => AspectRatio::Portrait9x16,
            SupportedAspectRatio::Landscape16x9 => AspectRatio::Landscape16x9,
        }
    }
}
