//! Outfit text generation
//!
//! One call per recommendation: a stylist prompt plus a JSON schema that
//! makes every field of [`RecommendationContent`] required. Palette entries
//! go through [`normalize_palette`] after parsing.

use async_trait::async_trait;
use fit_core::{
    GenerationError, Gender, OutfitBrief, OutfitWriter, RecommendationContent, normalize_palette,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::client::GenAiClient;
use crate::types::{GenerateContentRequest, GenerationConfig};

/// Fashion conventions for the places the stylist knows by name
const CITY_STYLES: &[(&str, &str)] = &[
    (
        "Paris",
        "chic and tailored, neutral tones, trench coats, loafers, understated elegance",
    ),
    (
        "Tokyo",
        "experimental layering, oversized silhouettes, quality denim, unusual textures or clean minimal lines",
    ),
    (
        "New York",
        "utilitarian, black, grey and navy, leather jackets, sneakers worn with coats, smart-casual",
    ),
    (
        "London",
        "eclectic, trench coats and boots, vintage mixed with modern, layers for changeable weather",
    ),
    (
        "Milan",
        "bold but refined, sharp tailoring, statement accessories, fine leather, vivid accent colors",
    ),
    (
        "Berlin",
        "techno-minimal, mostly black, functional streetwear, combat boots, long coats",
    ),
    (
        "Seoul",
        "polished and trend-led, soft palettes or monochrome, wide-leg slacks, oversized blazers, clean sneakers",
    ),
    (
        "Lagos",
        "vibrant bold prints, breathable fabrics for heat, polished accessories",
    ),
    (
        "Stockholm/Copenhagen",
        "Scandinavian minimalism, sleek lines, functional outerwear, monochrome or earthy tones",
    ),
    (
        "Dubai/Middle East",
        "luxurious modest cuts, light linen and silk that still cover skin, gold accents",
    ),
    (
        "Miami/LA",
        "relaxed and colorful, athleisure-adjacent, linen, open shirts, sunglasses, sun-aware",
    ),
];

/// Build the stylist instruction for one request
pub fn build_outfit_prompt(brief: &OutfitBrief) -> String {
    let weather = &brief.weather;
    let location = brief.location.as_str();

    let mut prompt = format!(
        "Act as a culturally aware, high-end personal stylist.\n\
         Recommend a realistic, stylish and functional everyday outfit for {} for the occasion: \"{}\".\n\
         Location context: \"{}\".\n\
         The weather is: {}°C, {}, Humidity: {}%, Wind: {} km/h, {}.\n",
        brief.gender,
        brief.occasion,
        location,
        weather.temperature,
        weather.condition,
        weather.humidity,
        weather.wind_speed,
        if weather.is_day { "daytime" } else { "night" }
    );

    prompt.push_str(&format!(
        "\nStyle guidelines:\n\
         - Local and cultural context matters most. The outfit must reflect the street style and sensibilities of \"{}\", not a generic look.\n",
        location
    ));
    for (city, style) in CITY_STYLES {
        prompt.push_str(&format!("  - {}: {}.\n", city, style));
    }
    prompt.push_str("  - Anywhere else: assume a modern global-city smart-casual aesthetic.\n");

    prompt.push_str("- Demographic adjustments:\n");
    if brief.gender == Gender::Kids {
        prompt.push_str(
            "  - Kids: prioritise durability, comfort and freedom of movement with age-appropriate pieces (adjustable waistbands, soft fabrics). Playful prints and bright colors are welcome where the location suits them.\n",
        );
    } else {
        prompt.push_str("  - Follow current contemporary norms for this wearer.\n");
    }

    prompt.push_str(concat!(
        "- Keep it wearable: suggest what real people wear in this place today. Avoid runway-only looks unless the occasion is Party/Club or Wedding.\n",
        "- Color diversity: do not default to cream, beige and black unless the city calls for it. Use bold, deep or pastel colors that fit the season and place.\n",
        "- Material and texture: every main item names its fabric, e.g. \"Heavyweight French Terry Hoodie\", \"Raw Denim Jeans\", \"Ribbed Merino Wool Sweater\", \"Crisp Poplin Shirt\".\n",
        "\nReturn a JSON object with:\n",
        "- title: a short catchy name for the look\n",
    ));
    prompt.push_str(&format!(
        "- description: two sentences on the vibe and how it fits the {} aesthetic and the weather\n",
        location
    ));
    prompt.push_str(concat!(
        "- items: specific clothing pieces, each including its color and fabric, e.g. \"Emerald Green Silk Blouse\"\n",
        "- colorPalette: 4-5 strings that MUST be hex codes starting with '#', e.g. [\"#2C3E50\", \"#E74C3C\"]. Never color names.\n",
        "- whyItWorks: why this suits the weather, occasion and location\n",
        "- accessories: list of accessories\n",
        "- stylingTips: list of actionable tips\n",
    ));

    prompt
}

/// JSON schema sent with the request; every field is required
pub fn response_schema() -> serde_json::Value {
    let string_array = json!({ "type": "ARRAY", "items": { "type": "STRING" } });
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "items": string_array,
            "colorPalette": string_array,
            "whyItWorks": { "type": "STRING" },
            "accessories": string_array,
            "stylingTips": string_array,
        },
        "required": [
            "title",
            "description",
            "items",
            "colorPalette",
            "whyItWorks",
            "accessories",
            "stylingTips"
        ]
    })
}

/// Parse the model's JSON text and fix up the palette
pub fn parse_content(text: &str) -> fit_core::Result<RecommendationContent> {
    let mut content: RecommendationContent = serde_json::from_str(text)?;
    content.color_palette = normalize_palette(content.color_palette);
    Ok(content)
}

pub struct OutfitTextGenerator {
    client: Arc<GenAiClient>,
    model: String,
}

impl OutfitTextGenerator {
    pub fn new(client: Arc<GenAiClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl OutfitWriter for OutfitTextGenerator {
    async fn generate_outfit_details(
        &self,
        brief: &OutfitBrief,
    ) -> fit_core::Result<RecommendationContent> {
        let request = GenerateContentRequest::from_prompt(build_outfit_prompt(brief)).with_config(
            GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(response_schema()),
                ..Default::default()
            },
        );

        let response = self.client.generate_content(&self.model, &request).await?;
        let text = response.text().ok_or(GenerationError::EmptyResponse)?;
        let content = parse_content(&text)?;

        info!(title = %content.title, items = content.items.len(), "outfit text generated");
        Ok(content)
    }
}
