use fit_core::RealismLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variables checked for the generation API key, in order
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Configuration for fitfortoday (~/.config/fitfortoday/config.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub genai: GenAiConfig,

    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub recommend: RecommendConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenAiConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_text_model")]
    pub text_model: String,

    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Prefer the GEMINI_API_KEY environment variable over storing this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_url")]
    pub api_url: String,

    /// Used when no coordinates are given
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,

    #[serde(default = "default_longitude")]
    pub default_longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Location context used when the location input is blank
    #[serde(default = "default_location")]
    pub default_location: String,

    #[serde(default)]
    pub realism: RealismLevel,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// Keep at most this many saved outfits (unbounded when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_saved: Option<usize>,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            api_key: None,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_url: default_weather_url(),
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
        }
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_location: default_location(),
            realism: RealismLevel::default(),
        }
    }
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_weather_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_latitude() -> f64 {
    51.50
}

fn default_longitude() -> f64 {
    -0.12
}

fn default_location() -> String {
    "General Urban City".to_string()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, writing the defaults there if it does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(path, content)?;
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = Self::project_dirs() {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.fitfortoday/config.toml")
        }
    }

    /// Database path from config, or the platform data directory
    pub fn db_path(&self) -> PathBuf {
        if let Some(path) = &self.storage.db_path {
            return path.clone();
        }
        if let Some(dirs) = Self::project_dirs() {
            dirs.data_dir().join("fitfortoday.db")
        } else {
            PathBuf::from("~/.fitfortoday/fitfortoday.db")
        }
    }

    /// Resolve the generation API key from the environment, then the config file
    pub fn api_key(&self) -> Option<String> {
        self.api_key_with(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::api_key`] with an explicit environment lookup
    pub fn api_key_with(&self, env: impl Fn(&str) -> Option<String>) -> Option<String> {
        API_KEY_VARS
            .iter()
            .filter_map(|name| env(name))
            .chain(self.genai.api_key.clone())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }

    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("com", "fitfortoday", "fitfortoday")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.genai.text_model, "gemini-2.5-flash");
        assert_eq!(config.genai.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.weather.api_url, "https://api.open-meteo.com/v1/forecast");
        assert_eq!(config.weather.default_latitude, 51.50);
        assert_eq!(config.weather.default_longitude, -0.12);
        assert_eq!(config.recommend.default_location, "General Urban City");
        assert_eq!(config.recommend.realism, RealismLevel::EverydayRealistic);
        assert!(config.storage.max_saved.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.genai.api_base, config.genai.api_base);
        assert_eq!(parsed.recommend.realism, config.recommend.realism);
    }

    #[test]
    fn test_partial_config_parse() {
        let toml_str = r#"
[genai]
text_model = "gemini-2.0-flash"

[recommend]
realism = "high-fashion"

[storage]
max_saved = 50
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.genai.text_model, "gemini-2.0-flash");
        assert_eq!(config.genai.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.recommend.realism, RealismLevel::HighFashion);
        assert_eq!(config.storage.max_saved, Some(50));
        assert_eq!(config.weather.default_latitude, 51.50);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.recommend.default_location, "General Urban City");

        std::fs::write(&path, "[weather]\ndefault_latitude = 48.85\n").unwrap();
        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.weather.default_latitude, 48.85);
    }

    #[test]
    fn test_api_key_resolution_order() {
        let mut config = Config::default();
        config.genai.api_key = Some("from-file".to_string());

        let key = config.api_key_with(|name| match name {
            "GEMINI_API_KEY" => Some("from-gemini-env".to_string()),
            "API_KEY" => Some("from-generic-env".to_string()),
            _ => None,
        });
        assert_eq!(key.as_deref(), Some("from-gemini-env"));

        let key = config.api_key_with(|name| match name {
            "API_KEY" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(key.as_deref(), Some("from-file"));

        config.genai.api_key = None;
        assert_eq!(config.api_key_with(|_| None), None);
    }

    #[test]
    fn test_db_path_override() {
        let mut config = Config::default();
        config.storage.db_path = Some(PathBuf::from("/tmp/fit.db"));
        assert_eq!(config.db_path(), PathBuf::from("/tmp/fit.db"));
    }
}
