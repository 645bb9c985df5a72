//! Owned client for the generative AI `generateContent` endpoint
//!
//! Constructed once from an explicit API key and shared by the text and
//! image generators. A missing key is rejected here, before any request.

use fit_core::GenerationError;
use serde::Deserialize;
use tracing::debug;

use crate::types::{GenerateContentRequest, GenerateContentResponse};

pub struct GenAiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl GenAiClient {
    pub fn new(api_key: Option<String>, api_base: impl Into<String>) -> fit_core::Result<Self> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(GenerationError::MissingCredential)?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("fitfortoday/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenerationError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn endpoint_for_model(&self, model: &str) -> String {
        let model = model.trim();
        let model_path = if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{}", model)
        };
        format!("{}/{}:generateContent", self.api_base, model_path)
    }

    /// Issue one `generateContent` call. No retries.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> fit_core::Result<GenerateContentResponse> {
        let endpoint = self.endpoint_for_model(model);
        debug!(%endpoint, "sending generation request");

        let response = self
            .http
            .post(&endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| body.chars().take(500).collect());
            return Err(GenerationError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
