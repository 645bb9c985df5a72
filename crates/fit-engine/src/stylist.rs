use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use fit_core::{
    Gender, Occasion, OutfitBrief, OutfitIllustrator, OutfitRecommendation, OutfitWriter,
    RealismLevel, Result, WeatherSource,
};
use time::OffsetDateTime;
use tracing::{info, warn};

/// Location context used when the user leaves the location blank
pub const DEFAULT_LOCATION: &str = "General Urban City";

#[derive(Debug, Clone)]
pub struct StylistSettings {
    /// Coordinates looked up when a request carries none
    pub default_latitude: f64,
    pub default_longitude: f64,
    pub default_location: String,
}

impl Default for StylistSettings {
    fn default() -> Self {
        Self {
            default_latitude: 51.50,
            default_longitude: -0.12,
            default_location: DEFAULT_LOCATION.to_string(),
        }
    }
}

/// One "get my outfit" submission
#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    pub occasion: Occasion,
    pub gender: Gender,
    /// Free text as typed, may be blank
    pub location: String,
    /// Device coordinates, if the user shared them
    pub coordinates: Option<(f64, f64)>,
    pub realism: RealismLevel,
}

impl RecommendationRequest {
    pub fn new(occasion: Occasion, gender: Gender, location: impl Into<String>) -> Self {
        Self {
            occasion,
            gender,
            location: location.into(),
            coordinates: None,
            realism: RealismLevel::default(),
        }
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some((latitude, longitude));
        self
    }

    pub fn with_realism(mut self, realism: RealismLevel) -> Self {
        self.realism = realism;
        self
    }
}

/// Recommendation orchestrator.
///
/// Steps run strictly in order. Weather never fails, a text failure ends the
/// request, an image failure only leaves `image_url` empty. Overlapping calls
/// are neither serialized nor cancelled here.
pub struct Stylist {
    weather: Arc<dyn WeatherSource>,
    writer: Arc<dyn OutfitWriter>,
    illustrator: Arc<dyn OutfitIllustrator>,
    settings: StylistSettings,
    last_timestamp: AtomicI64,
}

impl Stylist {
    pub fn new(
        weather: Arc<dyn WeatherSource>,
        writer: Arc<dyn OutfitWriter>,
        illustrator: Arc<dyn OutfitIllustrator>,
    ) -> Self {
        Self {
            weather,
            writer,
            illustrator,
            settings: StylistSettings::default(),
            last_timestamp: AtomicI64::new(0),
        }
    }

    pub fn with_settings(mut self, settings: StylistSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Trimmed user input, or the default label when blank
    pub fn effective_location(&self, input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.settings.default_location.clone()
        } else {
            trimmed.to_string()
        }
    }

    pub async fn produce_recommendation(
        &self,
        request: &RecommendationRequest,
    ) -> Result<OutfitRecommendation> {
        let (latitude, longitude) = request.coordinates.unwrap_or((
            self.settings.default_latitude,
            self.settings.default_longitude,
        ));
        let weather = self.weather.fetch_weather(latitude, longitude).await;
        info!(weather = %weather.headline(), "weather resolved");

        let brief = OutfitBrief {
            weather,
            occasion: request.occasion,
            gender: request.gender,
            location: self.effective_location(&request.location),
        };

        let content = self.writer.generate_outfit_details(&brief).await?;

        let image_url = match self
            .illustrator
            .generate_outfit_image(&content, &brief, request.realism)
            .await
        {
            Ok(uri) => Some(uri),
            Err(e) => {
                warn!("Image generation failed, continuing without image: {}", e);
                None
            }
        };

        let recommendation = OutfitRecommendation::assemble(
            uuid::Uuid::new_v4().to_string(),
            self.next_timestamp(),
            &brief,
            content,
            image_url,
        );
        info!(
            id = %recommendation.id,
            has_image = recommendation.has_image(),
            "recommendation ready"
        );

        Ok(recommendation)
    }

    /// Epoch milliseconds, strictly increasing across calls on this instance
    fn next_timestamp(&self) -> i64 {
        let now = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
        let previous = self
            .last_timestamp
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        now.max(previous + 1)
    }
}
