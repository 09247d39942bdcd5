use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::image::{NormalizedImage, CANVAS_SIZE};
use super::params::GenerationParameters;

/// Negative prompt applied to every generation, independent of user input.
pub const NEGATIVE_PROMPT: &str =
    "EasyNegative, (ugly:1.2), (worst quality, poor details:1.4), badhandv4, blurry";

/// Scheduler the generation service runs for every request.
pub const SCHEDULER: &str = "DPM++2MKarras";

pub const GUIDANCE_SCALE: f32 = 6.5;

pub const CLIP_SKIP: u32 = 2;

/// Textual inversions loaded alongside the negative prompt.
fn text_inversions() -> HashMap<String, String> {
    HashMap::from([
        ("easynegative".to_string(), "EasyNegative".to_string()),
        ("badhandv4".to_string(), "badhandv4".to_string()),
    ])
}

/// Image-to-image request body for the generation service. Everything not
/// derived from the caller's parameters is pinned here.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub init_image: String,
    pub prompt: String,
    pub strength: f32,
    pub negative_prompt: String,
    pub text_inversions: HashMap<String, String>,
    pub model_name: String,
    pub scheduler: String,
    pub guidance_scale: f32,
    pub num_images_per_prompt: u32,
    pub seed: u32,
    pub width: u32,
    pub height: u32,
    pub num_inference_steps: u32,
    pub loras: HashMap<String, f32>,
    pub clip_skip: u32,
}

impl GenerationRequest {
    pub fn new(
        image: &NormalizedImage,
        caption: &str,
        params: &GenerationParameters,
    ) -> Self {
        Self {
            init_image: image.to_base64(),
            prompt: build_prompt(params, caption),
            strength: params.transmitted_strength(),
            negative_prompt: NEGATIVE_PROMPT.to_string(),
            text_inversions: text_inversions(),
            model_name: params.style.model_id().to_string(),
            scheduler: SCHEDULER.to_string(),
            guidance_scale: GUIDANCE_SCALE,
            num_images_per_prompt: 1,
            seed: params.seed,
            width: CANVAS_SIZE,
            height: CANVAS_SIZE,
            num_inference_steps: params.steps,
            loras: params
                .modifiers
                .iter()
                .map(|(modifier, strength)| (modifier.lora_id().to_string(), *strength))
                .collect(),
            clip_skip: CLIP_SKIP,
        }
    }
}

/// Final prompt: the weighted free-text description (when present) ahead of
/// the machine caption, joined with a literal `", "`.
pub fn build_prompt(params: &GenerationParameters, caption: &str) -> String {
    match params.weighted_description() {
        Some(description) => [description.as_str(), ", ", caption].concat(),
        None => caption.to_string(),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse {
    pub image_0: String,
}
