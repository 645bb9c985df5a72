//! Saved outfit archive
//!
//! The whole archive is one JSON array, most recent first, stored under
//! [`ARCHIVE_KEY`]. The only mutations are "prepend one" and "clear all".

use fit_core::OutfitRecommendation;
use tracing::info;

use crate::{Result, Storage};

pub const ARCHIVE_KEY: &str = "fitfortoday_saved";

#[derive(Clone)]
pub struct Archive {
    storage: Storage,
    max_entries: Option<usize>,
}

impl Archive {
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            max_entries: None,
        }
    }

    /// Drop the oldest entries beyond `max` on save. `None` or `Some(0)` keeps everything.
    pub fn with_limit(mut self, max: Option<usize>) -> Self {
        self.max_entries = max.filter(|&m| m > 0);
        self
    }

    /// All saved outfits, most recent first
    pub async fn list_saved(&self) -> Result<Vec<OutfitRecommendation>> {
        let Some(raw) = self.storage.get_item(ARCHIVE_KEY).await? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let saved: Option<Vec<OutfitRecommendation>> = serde_json::from_str(&raw)?;
        Ok(saved.unwrap_or_default())
    }

    /// Prepend `recommendation` and persist the whole list.
    ///
    /// No deduplication: saving the same record twice stores it twice.
    /// Returns the number of saved outfits afterwards.
    pub async fn save(&self, recommendation: &OutfitRecommendation) -> Result<usize> {
        let mut saved = self.list_saved().await?;
        saved.insert(0, recommendation.clone());

        if let Some(max) = self.max_entries {
            saved.truncate(max);
        }

        let raw = serde_json::to_string(&saved)?;
        self.storage.set_item(ARCHIVE_KEY, &raw).await?;

        info!(id = %recommendation.id, total = saved.len(), "outfit saved");
        Ok(saved.len())
    }

    pub async fn clear_all(&self) -> Result<()> {
        self.storage.remove_item(ARCHIVE_KEY).await?;
        info!("saved outfits cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorageError;
    use fit_core::{
        Condition, Gender, Occasion, OutfitBrief, RecommendationContent, WeatherReading,
    };
    use tempfile::TempDir;

    async fn open_archive() -> (TempDir, Archive) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(&dir.path().join("archive.db")).await.unwrap();
        (dir, Archive::new(storage))
    }

    fn recommendation(id: &str, timestamp: i64) -> OutfitRecommendation {
        let brief = OutfitBrief {
            weather: WeatherReading {
                temperature: -2.5,
                condition: Condition::Snowy,
                humidity: 91.0,
                wind_speed: 18.3,
                is_day: false,
                location_name: Some("59.33, 18.07".to_string()),
            },
            occasion: Occasion::ColdWeather,
            gender: Gender::Female,
            location: "Stockholm".to_string(),
        };
        let content = RecommendationContent {
            title: format!("Look {}", id),
            description: "Warm and sleek.".to_string(),
            items: vec![
                "Charcoal Boiled Wool Coat".to_string(),
                "Black Merino Turtleneck".to_string(),
            ],
            color_palette: vec!["#36454F".to_string(), "#F0EAD6".to_string()],
            why_it_works: "Wool traps heat.".to_string(),
            accessories: vec!["Cashmere Scarf".to_string()],
            styling_tips: vec!["Tuck the scarf inside the collar.".to_string()],
        };
        OutfitRecommendation::assemble(
            id.to_string(),
            timestamp,
            &brief,
            content,
            Some("data:image/png;base64,QUJD".to_string()),
        )
    }

    #[tokio::test]
    async fn test_empty_archive() {
        let (_dir, archive) = open_archive().await;
        assert!(archive.list_saved().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_prepends() {
        let (_dir, archive) = open_archive().await;

        for (i, id) in ["a", "b", "c"].iter().enumerate() {
            let count = archive.save(&recommendation(id, i as i64)).await.unwrap();
            assert_eq!(count, i + 1);
            assert_eq!(archive.list_saved().await.unwrap()[0].id, *id);
        }

        let ids: Vec<String> = archive
            .list_saved()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_round_trip_is_field_for_field() {
        let (_dir, archive) = open_archive().await;
        let original = recommendation("round-trip", 1_760_000_000_123);

        archive.save(&original).await.unwrap();
        let loaded = archive.list_saved().await.unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], original);
    }

    #[tokio::test]
    async fn test_saving_twice_keeps_both() {
        let (_dir, archive) = open_archive().await;
        let rec = recommendation("dup", 5);

        archive.save(&rec).await.unwrap();
        archive.save(&rec).await.unwrap();

        let saved = archive.list_saved().await.unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0], saved[1]);
    }

    #[tokio::test]
    async fn test_clear_all() {
        let (_dir, archive) = open_archive().await;
        archive.save(&recommendation("x", 1)).await.unwrap();
        archive.save(&recommendation("y", 2)).await.unwrap();

        archive.clear_all().await.unwrap();
        assert!(archive.list_saved().await.unwrap().is_empty());

        // Clearing an empty archive is fine
        archive.clear_all().await.unwrap();
    }

    #[tokio::test]
    async fn test_limit_drops_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(&dir.path().join("archive.db")).await.unwrap();
        let archive = Archive::new(storage).with_limit(Some(2));

        for (i, id) in ["old", "mid", "new"].iter().enumerate() {
            archive.save(&recommendation(id, i as i64)).await.unwrap();
        }

        let ids: Vec<String> = archive
            .list_saved()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["new", "mid"]);
    }

    #[tokio::test]
    async fn test_reads_archive_written_by_web_app() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(&dir.path().join("archive.db")).await.unwrap();
        let legacy = r##"[{
            "id": "0b7e3c1a-1111-4c2b-9a5e-2f1f0c3d4e5f",
            "timestamp": 1735689600000,
            "occasion": "Casual Outing",
            "gender": "Unisex",
            "weather": {
                "temperature": 22,
                "condition": "Sunny",
                "humidity": 50,
                "windSpeed": 10,
                "isDay": true,
                "locationName": "Unknown Location"
            },
            "title": "Easy Sunday",
            "description": "Light layers.",
            "items": ["White Cotton Tee"],
            "colorPalette": ["#FFFFFF"],
            "whyItWorks": "Simple.",
            "accessories": [],
            "stylingTips": [],
            "imageUrl": ""
        }]"##;
        storage.set_item(ARCHIVE_KEY, legacy).await.unwrap();

        let saved = Archive::new(storage).list_saved().await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].occasion, Occasion::Casual);
        assert_eq!(saved[0].weather.condition, Condition::Sunny);
        assert_eq!(saved[0].image_url, None);
        assert!(saved[0].content.accessories.is_empty());
    }

    #[tokio::test]
    async fn test_null_value_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(&dir.path().join("archive.db")).await.unwrap();
        storage.set_item(ARCHIVE_KEY, "null").await.unwrap();

        assert!(Archive::new(storage).list_saved().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_archive_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(&dir.path().join("archive.db")).await.unwrap();
        storage.set_item(ARCHIVE_KEY, "{not json").await.unwrap();

        let err = Archive::new(storage).list_saved().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
