//! Current weather lookup over the Open-Meteo forecast API
//!
//! Lookups never fail outward: any transport, status or decoding problem
//! is logged and replaced by [`WeatherReading::fallback`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use fit_core::{Condition, WeatherReading, WeatherSource};
use serde::Deserialize;
use tracing::{debug, warn};

/// Fields requested in the `current` query parameter
pub const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,is_day,weather_code,wind_speed_10m";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    wind_speed_10m: f64,
    is_day: u8,
    weather_code: i64,
}

pub struct WeatherClient {
    http: reqwest::Client,
    api_url: String,
}

impl WeatherClient {
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("fitfortoday/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_client(http, api_url))
    }

    pub fn with_client(http: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
        }
    }

    /// Look up current conditions, falling back to a fixed reading on any failure
    pub async fn fetch_weather(&self, latitude: f64, longitude: f64) -> WeatherReading {
        match self.try_fetch(latitude, longitude).await {
            Ok(reading) => reading,
            Err(e) => {
                warn!("Weather fetch error: {:#}", e);
                WeatherReading::fallback()
            }
        }
    }

    async fn try_fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherReading> {
        debug!(latitude, longitude, "fetching current weather");

        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
            ])
            .send()
            .await
            .context("Failed to fetch weather data")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Weather API returned HTTP {}", status.as_u16());
        }

        let body: ForecastResponse = response
            .json()
            .await
            .context("Failed to decode weather response")?;
        let current = body.current;

        Ok(WeatherReading {
            temperature: current.temperature_2m,
            condition: Condition::from_wmo_code(current.weather_code),
            humidity: current.relative_humidity_2m,
            wind_speed: current.wind_speed_10m,
            is_day: current.is_day == 1,
            location_name: Some(WeatherReading::coordinate_label(latitude, longitude)),
        })
    }
}

#[async_trait]
impl WeatherSource for WeatherClient {
    async fn fetch_weather(&self, latitude: f64, longitude: f64) -> WeatherReading {
        WeatherClient::fetch_weather(self, latitude, longitude).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Query,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
    };
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    async fn spawn_upstream(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/v1/forecast", addr)
    }

    async fn forecast(Query(params): Query<HashMap<String, String>>) -> Response {
        if params.get("current").map(String::as_str) != Some(CURRENT_FIELDS)
            || !params.contains_key("latitude")
            || !params.contains_key("longitude")
        {
            return StatusCode::BAD_REQUEST.into_response();
        }

        Json(serde_json::json!({
            "latitude": 48.86,
            "current": {
                "time": "2026-10-18T09:00",
                "temperature_2m": 11.4,
                "relative_humidity_2m": 87,
                "is_day": 1,
                "weather_code": 63,
                "wind_speed_10m": 14.2
            }
        }))
        .into_response()
    }

    #[tokio::test]
    async fn test_fetch_maps_current_conditions() {
        let url = spawn_upstream(Router::new().route("/v1/forecast", get(forecast))).await;
        let client = WeatherClient::new(url).unwrap();

        let reading = client.fetch_weather(48.8566, 2.3522).await;

        assert_eq!(reading.temperature, 11.4);
        assert_eq!(reading.condition, Condition::Rainy);
        assert_eq!(reading.humidity, 87.0);
        assert_eq!(reading.wind_speed, 14.2);
        assert!(reading.is_day);
        assert_eq!(reading.location_name.as_deref(), Some("48.86, 2.35"));
    }

    #[tokio::test]
    async fn test_night_flag() {
        let app = Router::new().route(
            "/v1/forecast",
            get(|| async {
                Json(serde_json::json!({
                    "current": {
                        "temperature_2m": -3.0,
                        "relative_humidity_2m": 70.0,
                        "is_day": 0,
                        "weather_code": 73,
                        "wind_speed_10m": 5.0
                    }
                }))
            }),
        );
        let client = WeatherClient::new(spawn_upstream(app).await).unwrap();

        let reading = client.fetch_weather(59.33, 18.07).await;
        assert!(!reading.is_day);
        assert_eq!(reading.condition, Condition::Snowy);
    }

    #[tokio::test]
    async fn test_error_status_returns_fallback() {
        let app = Router::new().route(
            "/v1/forecast",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let client = WeatherClient::new(spawn_upstream(app).await).unwrap();

        assert_eq!(client.fetch_weather(0.0, 0.0).await, WeatherReading::fallback());
    }

    #[tokio::test]
    async fn test_malformed_body_returns_fallback() {
        let app = Router::new().route(
            "/v1/forecast",
            get(|| async { Json(serde_json::json!({ "hourly": {} })) }),
        );
        let client = WeatherClient::new(spawn_upstream(app).await).unwrap();

        assert_eq!(client.fetch_weather(0.0, 0.0).await, WeatherReading::fallback());
    }

    #[tokio::test]
    async fn test_network_failure_returns_fallback() {
        // Bind and drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = WeatherClient::new(format!("http://{}/v1/forecast", addr)).unwrap();
        let reading = client.fetch_weather(51.5, -0.12).await;

        assert_eq!(reading.temperature, 22.0);
        assert_eq!(reading.condition, Condition::Sunny);
        assert_eq!(reading.humidity, 50.0);
        assert_eq!(reading.wind_speed, 10.0);
        assert!(reading.is_day);
        assert_eq!(reading.location_name.as_deref(), Some("Unknown Location"));
    }
}
