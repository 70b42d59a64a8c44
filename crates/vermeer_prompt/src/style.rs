//! Visual style vocabulary appended to image prompts.
//!
//! Each table is an exhaustive `match`, so adding a platform, tone, or size
//! fails to compile until its fragment is written.

use vermeer_core::{ImageSize, Platform, Tone};

/// Visual style associated with a platform.
pub fn platform_style(platform: Platform) -> &'static str {
    match platform {
        Platform::Linkedin => {
            "Professional photography, polished corporate aesthetic, clean composition, high definition, trusted business style"
        }
        Platform::Twitter => {
            "Eye-catching, bold graphic design, high contrast, viral visual style, punchy and dynamic"
        }
        Platform::Instagram => {
            "Aesthetic lifestyle photography, cinematic lighting, visually stunning, trending instagram style, highly detailed"
        }
    }
}

/// Mood vocabulary driven by tone.
pub fn tone_style(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => {
            "minimalist, sophisticated, neutral color palette, authoritative, sharp focus, elegant, office vibe"
        }
        Tone::Witty => {
            "vibrant colors, playful, quirky, pop art elements, fun, energetic, creative composition, bright"
        }
        Tone::Urgent => {
            "dramatic lighting, bold red or orange accents, high impact, intense, action-oriented, motion blur elements"
        }
        Tone::Empathetic => {
            "soft golden hour lighting, warm tones, shallow depth of field, gentle, emotional, authentic, human-centric"
        }
        Tone::Controversial => {
            "gritty texture, moody chiaroscuro lighting, stark contrast, edgy, provocative, unconventional angles, dark atmosphere"
        }
    }
}

/// Fidelity vocabulary driven by the requested image size.
pub fn size_style(size: ImageSize) -> &'static str {
    match size {
        ImageSize::Size1K => "highly detailed, sharp focus, high quality, standard definition",
        ImageSize::Size2K => {
            "2k resolution, incredibly detailed, crisp, high fidelity, enhanced textures"
        }
        ImageSize::Size4K => {
            "4k resolution, ultra high definition, intricate details, masterpiece, best quality, hyperrealistic"
        }
    }
}

/// Platform style, tone mood, and size fidelity joined in that order.
///
/// # Examples
///
/// ```
/// use vermeer_core::{ImageSize, Platform, Tone};
/// use vermeer_prompt::compose_style_modifiers;
///
/// let style = compose_style_modifiers(Platform::Instagram, Tone::Witty, ImageSize::Size4K);
/// assert!(style.starts_with("Aesthetic lifestyle photography"));
/// assert!(style.ends_with("photorealistic"));
/// ```
pub fn compose_style_modifiers(platform: Platform, tone: Tone, size: ImageSize) -> String {
    format!(
        "{}, {}, {}, photorealistic",
        platform_style(platform),
        tone_style(tone),
        size_style(size)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn composition_is_deterministic() {
        for platform in Platform::iter() {
            for tone in Tone::iter() {
                for size in ImageSize::iter() {
                    assert_eq!(
                        compose_style_modifiers(platform, tone, size),
                        compose_style_modifiers(platform, tone, size)
                    );
                }
            }
        }
    }

    #[test]
    fn fragments_appear_in_fixed_order() {
        let style = compose_style_modifiers(Platform::Twitter, Tone::Urgent, ImageSize::Size2K);
        let platform_at = style.find(platform_style(Platform::Twitter)).unwrap();
        let tone_at = style.find(tone_style(Tone::Urgent)).unwrap();
        let size_at = style.find(size_style(ImageSize::Size2K)).unwrap();
        assert!(platform_at < tone_at && tone_at < size_at);
    }

    #[test]
    fn unrecognized_tone_uses_professional_fragment() {
        let fallback = Tone::from_label("Sarcastic");
        assert_eq!(
            compose_style_modifiers(Platform::Linkedin, fallback, ImageSize::Size1K),
            compose_style_modifiers(Platform::Linkedin, Tone::Professional, ImageSize::Size1K)
        );
    }

    #[test]
    fn unrecognized_size_uses_standard_fragment() {
        assert_eq!(size_style(ImageSize::from_label("16K")), size_style(ImageSize::Size1K));
    }
}
