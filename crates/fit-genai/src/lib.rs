//! Generative AI calls for fitfortoday
//!
//! - `client`: owned HTTP client for the `generateContent` endpoint
//! - `text`: outfit text generation constrained by a JSON schema
//! - `image`: outfit image generation derived from the text result

pub mod client;
pub mod image;
pub mod text;
pub mod types;

pub use client::GenAiClient;
pub use image::{OutfitImageGenerator, build_image_prompt, extract_image, subject_term};
pub use text::{OutfitTextGenerator, build_outfit_prompt, parse_content, response_schema};
