//! Lifecycle of a single recommendation request
//!
//! `Idle -> Pending -> Succeeded | Failed`. There is no retrying or
//! cancelled state: starting a new request just replaces the old state.

use fit_core::{GenerationError, OutfitRecommendation};

#[derive(Debug, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded(Box<OutfitRecommendation>),
    Failed(String),
}

impl RequestState {
    pub fn begin(&mut self) {
        *self = Self::Pending;
    }

    pub fn finish(&mut self, result: Result<OutfitRecommendation, GenerationError>) {
        *self = match result {
            Ok(recommendation) => Self::Succeeded(Box::new(recommendation)),
            Err(e) => Self::Failed(e.to_string()),
        };
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn recommendation(&self) -> Option<&OutfitRecommendation> {
        match self {
            Self::Succeeded(recommendation) => Some(recommendation.as_ref()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Image presence is independent of success
    pub fn has_image(&self) -> bool {
        self.recommendation().is_some_and(OutfitRecommendation::has_image)
    }
}
