//! Outfit domain model

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseChoiceError;
use crate::weather::WeatherReading;

/// What the outfit is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occasion {
    #[serde(rename = "Casual Outing", alias = "Casual")]
    Casual,
    #[serde(rename = "Office/Work")]
    Office,
    #[serde(rename = "Gym/Fitness")]
    Gym,
    #[serde(rename = "Date Night")]
    DateNight,
    #[serde(rename = "Party/Club")]
    Party,
    #[serde(rename = "Wedding")]
    Wedding,
    #[serde(rename = "Travel")]
    Travel,
    #[serde(rename = "Outdoor Event")]
    Outdoor,
    #[serde(rename = "Rainy Day")]
    RainyDay,
    #[serde(rename = "Cold Weather Event")]
    ColdWeather,
}

impl Occasion {
    pub const ALL: [Occasion; 10] = [
        Self::Casual,
        Self::Office,
        Self::Gym,
        Self::DateNight,
        Self::Party,
        Self::Wedding,
        Self::Travel,
        Self::Outdoor,
        Self::RainyDay,
        Self::ColdWeather,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Casual => "Casual Outing",
            Self::Office => "Office/Work",
            Self::Gym => "Gym/Fitness",
            Self::DateNight => "Date Night",
            Self::Party => "Party/Club",
            Self::Wedding => "Wedding",
            Self::Travel => "Travel",
            Self::Outdoor => "Outdoor Event",
            Self::RainyDay => "Rainy Day",
            Self::ColdWeather => "Cold Weather Event",
        }
    }

    /// Short command-line name
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Office => "office",
            Self::Gym => "gym",
            Self::DateNight => "date-night",
            Self::Party => "party",
            Self::Wedding => "wedding",
            Self::Travel => "travel",
            Self::Outdoor => "outdoor",
            Self::RainyDay => "rainy",
            Self::ColdWeather => "cold",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Occasion {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("occasion", s, &Self::ALL, |o| o.label(), |o| o.slug())
    }
}

/// Gender or age category of the wearer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    Unisex,
    Kids,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Self::Female, Self::Male, Self::Unisex, Self::Kids];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Unisex => "Unisex",
            Self::Kids => "Kids",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Unisex => "unisex",
            Self::Kids => "kids",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("gender", s, &Self::ALL, |g| g.label(), |g| g.slug())
    }
}

/// Photographic style of the generated outfit image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RealismLevel {
    #[default]
    EverydayRealistic,
    HighFashion,
}

impl RealismLevel {
    pub const ALL: [RealismLevel; 2] = [Self::EverydayRealistic, Self::HighFashion];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::EverydayRealistic => "everyday-realistic",
            Self::HighFashion => "high-fashion",
        }
    }

    /// Style phrase inserted into the image prompt
    pub fn style_phrase(&self) -> &'static str {
        match self {
            Self::EverydayRealistic => "Street style, candid, natural lighting",
            Self::HighFashion => "High fashion editorial",
        }
    }
}

impl fmt::Display for RealismLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for RealismLevel {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "everyday" => Ok(Self::EverydayRealistic),
            "editorial" => Ok(Self::HighFashion),
            _ => parse_choice("realism level", s, &Self::ALL, |r| r.slug(), |r| r.slug()),
        }
    }
}

fn parse_choice<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    label: impl Fn(&T) -> &'static str,
    slug: impl Fn(&T) -> &'static str,
) -> Result<T, ParseChoiceError> {
    let wanted = value.trim();
    all.iter()
        .find(|c| label(*c).eq_ignore_ascii_case(wanted) || slug(*c).eq_ignore_ascii_case(wanted))
        .copied()
        .ok_or_else(|| ParseChoiceError {
            kind,
            value: value.to_string(),
            expected: all.iter().map(&slug).collect::<Vec<_>>().join(", "),
        })
}

/// Inputs shared by the text and image generation calls
#[derive(Debug, Clone, PartialEq)]
pub struct OutfitBrief {
    pub weather: WeatherReading,
    pub occasion: Occasion,
    pub gender: Gender,
    /// Effective location context (never blank)
    pub location: String,
}

/// Structured output of the text generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationContent {
    pub title: String,
    pub description: String,
    pub items: Vec<String>,
    pub color_palette: Vec<String>,
    pub why_it_works: String,
    pub accessories: Vec<String>,
    pub styling_tips: Vec<String>,
}

/// A complete outfit recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitRecommendation {
    pub id: String,
    /// Creation instant, epoch milliseconds
    pub timestamp: i64,
    pub occasion: Occasion,
    pub gender: Gender,
    pub weather: WeatherReading,
    #[serde(flatten)]
    pub content: RecommendationContent,
    /// `data:<mime>;base64,<payload>` when an image was generated
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub image_url: Option<String>,
}

impl OutfitRecommendation {
    pub fn assemble(
        id: String,
        timestamp: i64,
        brief: &OutfitBrief,
        content: RecommendationContent,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id,
            timestamp,
            occasion: brief.occasion,
            gender: brief.gender,
            weather: brief.weather.clone(),
            content,
            image_url,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}

// Older archives stored a missing image as "".
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
