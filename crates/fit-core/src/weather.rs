//! Weather domain model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable sky condition derived from a WMO weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Clear sky")]
    ClearSky,
    #[serde(rename = "Partly cloudy")]
    PartlyCloudy,
    #[serde(rename = "Foggy")]
    Foggy,
    #[serde(rename = "Drizzle")]
    Drizzle,
    #[serde(rename = "Rainy")]
    Rainy,
    #[serde(rename = "Snowy")]
    Snowy,
    #[serde(rename = "Rain showers")]
    RainShowers,
    #[serde(rename = "Thunderstorm")]
    Thunderstorm,
    #[serde(rename = "Cloudy")]
    Cloudy,
    /// Only produced by the fallback reading
    #[serde(rename = "Sunny")]
    Sunny,
}

impl Condition {
    /// Map a WMO interpretation code to a condition.
    ///
    /// Codes outside every known band are reported as `Cloudy`.
    pub fn from_wmo_code(code: i64) -> Self {
        match code {
            0 => Self::ClearSky,
            1..=3 => Self::PartlyCloudy,
            45..=48 => Self::Foggy,
            51..=55 => Self::Drizzle,
            61..=67 => Self::Rainy,
            71..=77 => Self::Snowy,
            80..=82 => Self::RainShowers,
            95..=99 => Self::Thunderstorm,
            _ => Self::Cloudy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Foggy => "Foggy",
            Self::Drizzle => "Drizzle",
            Self::Rainy => "Rainy",
            Self::Snowy => "Snowy",
            Self::RainShowers => "Rain showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::Cloudy => "Cloudy",
            Self::Sunny => "Sunny",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current conditions used to generate a recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    /// Degrees Celsius
    pub temperature: f64,
    pub condition: Condition,
    /// Relative humidity, percent
    pub humidity: f64,
    /// km/h
    pub wind_speed: f64,
    pub is_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
}

impl WeatherReading {
    /// Reading substituted when the live lookup fails
    pub fn fallback() -> Self {
        Self {
            temperature: 22.0,
            condition: Condition::Sunny,
            humidity: 50.0,
            wind_speed: 10.0,
            is_day: true,
            location_name: Some("Unknown Location".to_string()),
        }
    }

    /// Label for a coordinate pair, e.g. `51.50, -0.12`
    pub fn coordinate_label(latitude: f64, longitude: f64) -> String {
        format!("{:.2}, {:.2}", latitude, longitude)
    }

    /// One-line summary, e.g. `14°C, Rainy`
    pub fn headline(&self) -> String {
        format!("{}°C, {}", self.temperature, self.condition)
    }
}
