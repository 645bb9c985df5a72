//! Recommendation pipeline
//!
//! `Stylist` sequences weather lookup, text generation and image generation
//! for one request. `RequestState` is the explicit lifecycle a front end
//! keeps around those calls.

pub mod state;
pub mod stylist;

pub use state::RequestState;
pub use stylist::{DEFAULT_LOCATION, RecommendationRequest, Stylist, StylistSettings};
