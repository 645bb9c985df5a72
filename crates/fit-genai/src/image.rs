//! Outfit image generation

use async_trait::async_trait;
use fit_core::{
    GenerationError, Gender, OutfitBrief, OutfitIllustrator, RealismLevel, RecommendationContent,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::client::GenAiClient;
use crate::types::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig};

const DEFAULT_IMAGE_MIME: &str = "image/jpeg";
const ASPECT_RATIO: &str = "3:4";

/// How the wearer is described to the image model
pub fn subject_term(gender: Gender) -> &'static str {
    match gender {
        Gender::Kids => "child",
        other => other.label(),
    }
}

pub fn build_image_prompt(
    content: &RecommendationContent,
    gender: Gender,
    realism: RealismLevel,
    location: &str,
) -> String {
    format!(
        "Fashion photography, full body shot of a {} model wearing: {}.\n\
         Style: {}.\n\
         Location background: {}.\n\
         Colors: {}.\n\
         Accessories: {}.\n\
         Aspect ratio {}, high quality, detailed visible fabric texture, 4k.",
        subject_term(gender),
        content.items.join(", "),
        realism.style_phrase(),
        location,
        content.color_palette.join(", "),
        content.accessories.join(", "),
        ASPECT_RATIO,
    )
}

/// First inline image of the first candidate, as a `data:` URI
pub fn extract_image(response: &GenerateContentResponse) -> fit_core::Result<String> {
    for part in response.first_parts() {
        if let Some(inline) = part.inline_data.as_ref().filter(|i| !i.data.is_empty()) {
            let mime = inline
                .mime_type
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(DEFAULT_IMAGE_MIME);
            return Ok(format!("data:{};base64,{}", mime, inline.data));
        }
        if let Some(text) = &part.text {
            info!("Model returned text instead of image: {}", text);
        }
    }

    Err(GenerationError::NoImage)
}

pub struct OutfitImageGenerator {
    client: Arc<GenAiClient>,
    model: String,
}

impl OutfitImageGenerator {
    pub fn new(client: Arc<GenAiClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl OutfitIllustrator for OutfitImageGenerator {
    async fn generate_outfit_image(
        &self,
        content: &RecommendationContent,
        brief: &OutfitBrief,
        realism: RealismLevel,
    ) -> fit_core::Result<String> {
        let prompt = build_image_prompt(content, brief.gender, realism, &brief.location);
        debug!(%realism, "requesting outfit image");

        let request = GenerateContentRequest::from_prompt(prompt).with_config(GenerationConfig {
            image_config: Some(ImageConfig {
                aspect_ratio: ASPECT_RATIO.to_string(),
            }),
            ..Default::default()
        });

        let response = self.client.generate_content(&self.model, &request).await?;
        extract_image(&response)
    }
}
