use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use fit_config::Config;
use fit_core::{Gender, Occasion, OutfitRecommendation, RealismLevel};
use fit_engine::{RecommendationRequest, RequestState, Stylist, StylistSettings};
use fit_genai::{GenAiClient, OutfitImageGenerator, OutfitTextGenerator};
use fit_storage::Archive;
use fit_weather::WeatherClient;

use crate::cli::OutputFormat;

pub struct RecommendArgs {
    pub occasion: Occasion,
    pub gender: Gender,
    pub location: String,
    pub coordinates: Option<(f64, f64)>,
    pub realism: RealismLevel,
    pub save: bool,
    pub image_out: Option<PathBuf>,
    pub format: OutputFormat,
}

pub async fn handle(args: RecommendArgs, config: &Config) -> Result<()> {
    let stylist = build_stylist(config)?;

    let mut request = RecommendationRequest::new(args.occasion, args.gender, args.location)
        .with_realism(args.realism);
    if let Some((latitude, longitude)) = args.coordinates {
        request = request.with_coordinates(latitude, longitude);
    }

    let mut state = RequestState::default();
    state.begin();
    if args.format == OutputFormat::Text {
        eprintln!("Styling your {} look...", args.occasion);
    }
    state.finish(stylist.produce_recommendation(&request).await);

    let recommendation = match &state {
        RequestState::Succeeded(recommendation) => recommendation,
        RequestState::Failed(message) => anyhow::bail!("{}", message),
        RequestState::Idle | RequestState::Pending => {
            anyhow::bail!("Recommendation did not complete")
        }
    };

    match args.format {
        OutputFormat::Text => print!("{}", render_card(recommendation)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(recommendation)?),
    }

    let archive = if args.save {
        Some(super::open_archive(config).await?)
    } else {
        None
    };
    keep_outputs(recommendation, archive.as_ref(), args.image_out.as_deref()).await
}

/// Archive first, then write the image file
async fn keep_outputs(
    recommendation: &OutfitRecommendation,
    archive: Option<&Archive>,
    image_out: Option<&Path>,
) -> Result<()> {
    if let Some(archive) = archive {
        let total = archive.save(recommendation).await?;
        eprintln!("✓ Saved outfit ({} in archive)", total);
    }

    if let Some(path) = image_out {
        match &recommendation.image_url {
            Some(uri) => {
                let (_, bytes) = decode_data_uri(uri)?;
                std::fs::write(path, bytes)
                    .with_context(|| format!("Failed to write image to {}", path.display()))?;
                eprintln!("✓ Image written to {}", path.display());
            }
            None => eprintln!("No image to write."),
        }
    }

    Ok(())
}

fn build_stylist(config: &Config) -> Result<Stylist> {
    let client = Arc::new(GenAiClient::new(config.api_key(), &config.genai.api_base)?);
    let writer = OutfitTextGenerator::new(client.clone(), &config.genai.text_model);
    let illustrator = OutfitImageGenerator::new(client, &config.genai.image_model);
    let weather = WeatherClient::new(&config.weather.api_url)?;

    let settings = StylistSettings {
        default_latitude: config.weather.default_latitude,
        default_longitude: config.weather.default_longitude,
        default_location: config.recommend.default_location.clone(),
    };

    Ok(Stylist::new(Arc::new(weather), Arc::new(writer), Arc::new(illustrator))
        .with_settings(settings))
}

/// Split a `data:<mime>;base64,<payload>` URI into its MIME type and decoded bytes
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>)> {
    let rest = uri
        .strip_prefix("data:")
        .context("Image is not a data URI")?;
    let (meta, payload) = rest
        .split_once(',')
        .context("Data URI has no payload")?;
    let mime = meta
        .strip_suffix(";base64")
        .context("Data URI is not base64 encoded")?;

    let bytes = STANDARD
        .decode(payload.trim())
        .context("Invalid base64 image payload")?;
    Ok((mime.to_string(), bytes))
}

/// Plain-text outfit card
pub fn render_card(rec: &OutfitRecommendation) -> String {
    let content = &rec.content;
    let mut out = format!(
        "{}\n{} · {} · {}\n\n{}\n",
        content.title,
        rec.occasion,
        rec.gender,
        weather_line(rec),
        content.description
    );

    out.push_str(&section("Key pieces", &content.items));
    out.push_str(&section("Palette", &content.color_palette));
    out.push_str(&section("Accessories", &content.accessories));
    out.push_str(&section("Styling tips", &content.styling_tips));

    out.push_str(&format!("\nWhy it works:\n  {}\n\n", content.why_it_works));
    out.push_str(if rec.has_image() {
        "Image: generated (use --image-out to save it)\n"
    } else {
        "Image generation unavailable\n"
    });
    out
}

fn weather_line(rec: &OutfitRecommendation) -> String {
    match &rec.weather.location_name {
        Some(name) => format!("{} in {}", rec.weather.headline(), name),
        None => rec.weather.headline(),
    }
}

/// Blank line, heading, one bullet per entry. Empty lists render nothing.
fn section(heading: &str, entries: &[String]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let bullets: String = entries.iter().map(|e| format!("  - {}\n", e)).collect();
    format!("\n{}:\n{}", heading, bullets)
}
