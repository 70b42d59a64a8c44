//! Image fidelity tiers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Requested image fidelity.
///
/// Only biases the style string; it is never sent to the image provider.
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
pub enum ImageSize {
    /// Standard definition
    #[default]
    #[serde(rename = "1K")]
    #[strum(serialize = "1K")]
    Size1K,
    /// High fidelity
    #[serde(rename = "2K")]
    #[strum(serialize = "2K")]
    Size2K,
    /// Ultra high definition
    #[serde(rename = "4K")]
    #[strum(serialize = "4K")]
    Size4K,
}

impl ImageSize {
    /// Parse a size label, falling back to [`ImageSize::Size1K`] when unrecognized.
    pub fn from_label(label: &str) -> Self {
        ImageSize::from_str(label.trim().to_uppercase().as_str()).unwrap_or_default()
    }
}
