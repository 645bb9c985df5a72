//! Provider traits
//!
//! The orchestrator talks to weather and generation services only through
//! these traits.

use async_trait::async_trait;

use crate::error::Result;
use crate::outfit::{OutfitBrief, RealismLevel, RecommendationContent};
use crate::weather::WeatherReading;

/// Source of current weather conditions
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Never fails: implementations substitute a fallback reading.
    async fn fetch_weather(&self, latitude: f64, longitude: f64) -> WeatherReading;
}

/// Produces the textual part of a recommendation
#[async_trait]
pub trait OutfitWriter: Send + Sync {
    async fn generate_outfit_details(&self, brief: &OutfitBrief) -> Result<RecommendationContent>;
}

/// Produces an image for a recommendation, as a `data:` URI
#[async_trait]
pub trait OutfitIllustrator: Send + Sync {
    async fn generate_outfit_image(
        &self,
        content: &RecommendationContent,
        brief: &OutfitBrief,
        realism: RealismLevel,
    ) -> Result<String>;
}
