use anyhow::Result;
use fit_config::Config;
use fit_core::OutfitRecommendation;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::cli::{OutputFormat, SavedCommands};

pub async fn handle(cmd: SavedCommands, config: &Config) -> Result<()> {
    match cmd {
        SavedCommands::List { format } => list(config, format).await,
        SavedCommands::Clear { force } => clear(config, force).await,
    }
}

async fn list(config: &Config, format: OutputFormat) -> Result<()> {
    let archive = super::open_archive(config).await?;
    let saved = archive.list_saved().await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
        return Ok(());
    }

    if saved.is_empty() {
        println!("No saved outfits.");
        return Ok(());
    }

    println!("Saved outfits ({}):", saved.len());
    for rec in &saved {
        println!("{}", summary_line(rec));
    }

    Ok(())
}

async fn clear(config: &Config, force: bool) -> Result<()> {
    let archive = super::open_archive(config).await?;

    if !force {
        let count = archive.list_saved().await?.len();
        if count == 0 {
            println!("No saved outfits.");
            return Ok(());
        }

        print!("Delete all {} saved outfits? [y/N] ", count);
        std::io::Write::flush(&mut std::io::stdout())?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    archive.clear_all().await?;
    println!("✓ Cleared saved outfits");

    Ok(())
}

fn summary_line(rec: &OutfitRecommendation) -> String {
    let image = if rec.has_image() { " [image]" } else { "" };
    format!(
        "  {}  {} ({}, {}) {}{}",
        saved_at(rec.timestamp),
        rec.content.title,
        rec.occasion,
        rec.gender,
        rec.weather.headline(),
        image
    )
}

fn saved_at(timestamp_ms: i64) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(timestamp_ms) * 1_000_000)
        .ok()
        .and_then(|t| t.format(format).ok())
        .unwrap_or_else(|| timestamp_ms.to_string())
}
