//! Provider request composition.

use crate::{compose_style_modifiers, resolve_aspect_ratio, validate_aspect_ratio};
use derive_getters::Getters;
use serde_json::{Map, Value, json};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};
use vermeer_core::{Platform, Settings, Tone};
use vermeer_interface::{ImageRequest, TextRequest};

/// System instruction sent with every text request unless overridden.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str =
    "You are a world-class social media strategist and copywriter.";

/// Writing register each platform's post must follow.
fn platform_register(platform: Platform) -> &'static str {
    match platform {
        Platform::Linkedin => "Professional, long-form, insightful, structured with paragraphs.",
        Platform::Twitter => "Short, punchy, under 280 chars, engaging.",
        Platform::Instagram => "Visual-focused caption, engaging hook, clean formatting.",
    }
}

fn post_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "content": {
                "type": "STRING",
                "description": "The main text body of the post."
            },
            "imagePrompt": {
                "type": "STRING",
                "description": "A detailed, vivid prompt to generate a high-quality image for this post."
            },
            "hashtags": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Relevant hashtags."
            }
        },
        "required": ["content", "imagePrompt", "hashtags"]
    })
}

/// Output schema for the batch text call: one post object per platform, all
/// fields required.
pub fn response_schema() -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for platform in Platform::iter() {
        properties.insert(platform.to_string(), post_schema());
        required.push(Value::String(platform.to_string()));
    }
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required
    })
}

/// Builds provider requests from user input and settings.
///
/// # Examples
///
/// ```
/// use vermeer_core::{Platform, Settings, Tone};
/// use vermeer_prompt::PromptComposer;
///
/// let composer = PromptComposer::new();
/// let text = composer.build_text_request("launch of a productivity app", Tone::Witty);
/// assert!(text.prompt.contains("launch of a productivity app"));
///
/// let image = composer.build_image_request(
///     Platform::Twitter,
///     "A rocket made of sticky notes",
///     Tone::Witty,
///     &Settings::default(),
/// );
/// assert_eq!(image.aspect_ratio.as_str(), "16:9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PromptComposer {
    /// Text model override
    text_model: Option<String>,
    /// Image model override
    image_model: Option<String>,
    /// System instruction for text requests
    system_instruction: String,
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptComposer {
    /// Composer that leaves model choice to the provider.
    pub fn new() -> Self {
        Self {
            text_model: None,
            image_model: None,
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
        }
    }

    /// Pin the model used for text requests.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = Some(model.into());
        self
    }

    /// Pin the model used for image requests.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = Some(model.into());
        self
    }

    /// Replace the system instruction.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    /// One structured request covering every platform.
    #[instrument(skip(self, idea), fields(tone = %tone))]
    pub fn build_text_request(&self, idea: &str, tone: Tone) -> TextRequest {
        let mut prompt = String::new();
        prompt.push_str("You are an expert social media manager.\n");
        prompt.push_str(&format!("Create content for a user's idea: \"{}\".\n", idea));
        prompt.push_str(&format!("Tone: {}.\n\n", tone));
        for (index, platform) in Platform::iter().enumerate() {
            prompt.push_str(&format!(
                "{}. {}: {}\n",
                index + 1,
                platform.label(),
                platform_register(platform)
            ));
        }
        prompt.push_str(
            "\nFor each, provide the text content, a specific image generation prompt \
             tailored to the platform's visual style, and hashtags.",
        );

        debug!(prompt_len = prompt.len(), "Composed text request");
        TextRequest {
            model: self.text_model.clone(),
            system_instruction: Some(self.system_instruction.clone()),
            prompt,
            response_schema: response_schema(),
        }
    }

    /// Image request for one platform: content-derived prompt plus style,
    /// with the validated aspect ratio as the only structured parameter.
    #[instrument(skip(self, image_prompt, settings), fields(platform = %platform, tone = %tone))]
    pub fn build_image_request(
        &self,
        platform: Platform,
        image_prompt: &str,
        tone: Tone,
        settings: &Settings,
    ) -> ImageRequest {
        let ratio = validate_aspect_ratio(resolve_aspect_ratio(platform, settings.aspect_ratio));
        let style = compose_style_modifiers(platform, tone, settings.image_size);

        debug!(aspect_ratio = %ratio, "Composed image request");
        ImageRequest {
            model: self.image_model.clone(),
            prompt: format!("{}. {}", image_prompt, style),
            aspect_ratio: ratio,
        }
    }
}
