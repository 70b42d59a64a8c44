//! Voice presets carried into text and image prompts.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Voice preset selected once per generation run.
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
pub enum Tone {
    /// Authoritative and polished
    #[default]
    Professional,
    /// Humorous and clever
    Witty,
    /// Time-sensitive and direct
    Urgent,
    /// Compassionate and warm
    Empathetic,
    /// Provocative and bold
    Controversial,
}

impl Tone {
    /// Parse a tone label, falling back to [`Tone::Professional`] when unrecognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use vermeer_core::Tone;
    ///
    /// assert_eq!(Tone::from_label("Witty"), Tone::Witty);
    /// assert_eq!(Tone::from_label("Sarcastic"), Tone::Professional);
    /// ```
    pub fn from_label(label: &str) -> Self {
        Tone::from_str(label.trim()).unwrap_or_default()
    }

    /// One-line guidance on when the tone fits.
    pub fn description(&self) -> &'static str {
        match self {
            Tone::Professional => {
                "Authoritative, polished, and credible. Best for industry insights and corporate announcements."
            }
            Tone::Witty => {
                "Humorous, clever, and entertaining. Great for high engagement and brand personality."
            }
            Tone::Urgent => {
                "Time-sensitive and direct. Ideal for sales, limited-time offers, or critical updates."
            }
            Tone::Empathetic => {
                "Compassionate, warm, and supportive. Ideal for building community trust and addressing sensitive topics."
            }
            Tone::Controversial => {
                "Provocative and bold. Designed to spark debate and maximize reach (use with caution)."
            }
        }
    }
}
