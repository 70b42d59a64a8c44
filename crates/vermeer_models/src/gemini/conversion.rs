//! Mapping between provider-neutral requests and Gemini wire types.

use super::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig, Part,
};
use vermeer_interface::{ContentPart, ImageRequest, ImageResponse, TextRequest, TextResponse};

const USER_ROLE: &str = "user";
const JSON_MIME_TYPE: &str = "application/json";

/// Body for a structured-output text call.
pub fn text_request_body(req: &TextRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::text(Some(USER_ROLE), req.prompt.clone())],
        system_instruction: req
            .system_instruction
            .as_ref()
            .map(|instruction| Content::text(None, instruction.clone())),
        generation_config: Some(GenerationConfig {
            response_mime_type: Some(JSON_MIME_TYPE.to_string()),
            response_schema: Some(req.response_schema.clone()),
            image_config: None,
        }),
    }
}

/// Body for an image call. The ratio is the only structured parameter.
pub fn image_request_body(req: &ImageRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::text(Some(USER_ROLE), req.prompt.clone())],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            image_config: Some(ImageConfig {
                aspect_ratio: req.aspect_ratio.as_str().to_string(),
            }),
            ..Default::default()
        }),
    }
}

fn first_candidate_parts(response: GenerateContentResponse) -> Vec<Part> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts)
        .unwrap_or_default()
}

/// Text of the first candidate, joined across parts. `None` when there is
/// no text at all.
pub fn text_response(response: GenerateContentResponse) -> TextResponse {
    let texts: Vec<String> = first_candidate_parts(response)
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    TextResponse {
        text: if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        },
    }
}

/// Parts of the first candidate, in order.
pub fn image_response(response: GenerateContentResponse) -> ImageResponse {
    let parts = first_candidate_parts(response)
        .into_iter()
        .filter_map(|part| match (part.inline_data, part.text) {
            (Some(inline), _) => Some(ContentPart::InlineData {
                mime_type: inline.mime_type,
                data: inline.data,
            }),
            (None, Some(text)) => Some(ContentPart::Text(text)),
            (None, None) => None,
        })
        .collect();
    ImageResponse { parts }
}
