//! Core domain models and logic for fitfortoday
//!
//! This crate contains:
//! - Domain models (WeatherReading, OutfitRecommendation, RecommendationContent)
//! - Weather code mapping and color palette hygiene
//! - Provider traits implemented by the weather and generation crates

pub mod error;
pub mod outfit;
pub mod palette;
pub mod provider;
pub mod weather;

pub use error::{GenerationError, ParseChoiceError, Result};
pub use outfit::{Gender, Occasion, OutfitBrief, OutfitRecommendation, RealismLevel, RecommendationContent};
pub use palette::{FALLBACK_COLOR, normalize_palette};
pub use provider::{OutfitIllustrator, OutfitWriter, WeatherSource};
pub use weather::{Condition, WeatherReading};
