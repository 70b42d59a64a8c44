//! Target social platforms.

use serde::{Deserialize, Serialize};

/// A social platform that receives its own post variant.
///
/// The serialized form is the lowercase key used in provider payloads.
///
/// # Examples
///
/// ```
/// use vermeer_core::Platform;
/// use strum::IntoEnumIterator;
///
/// assert_eq!(Platform::Twitter.to_string(), "twitter");
/// assert_eq!(Platform::iter().count(), 3);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    /// LinkedIn: long-form professional posts
    Linkedin,
    /// Twitter/X: short posts under 280 characters
    Twitter,
    /// Instagram: visual-first captions
    Instagram,
}

impl Platform {
    /// Human-readable platform name.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Linkedin => "LinkedIn",
            Platform::Twitter => "Twitter/X",
            Platform::Instagram => "Instagram",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_lowercase_keys() {
        assert_eq!(Platform::from_str("linkedin").ok(), Some(Platform::Linkedin));
        assert_eq!(Platform::from_str("instagram").ok(), Some(Platform::Instagram));
        assert!(Platform::from_str("myspace").is_err());
    }

    #[test]
    fn serializes_as_lowercase() {
        let json = serde_json::to_string(&Platform::Linkedin).unwrap();
        assert_eq!(json, "\"linkedin\"");
    }
}
