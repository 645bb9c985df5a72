mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use fit_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Quiet by default so the outfit card is all that reaches the terminal
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = Config::load()?;
    tracing::debug!(path = %Config::config_path().display(), "config loaded");

    match cli.command {
        cli::Commands::Recommend {
            occasion,
            gender,
            location,
            lat,
            lon,
            realism,
            save,
            image_out,
            format,
        } => {
            let args = commands::recommend::RecommendArgs {
                occasion,
                gender,
                location,
                coordinates: lat.zip(lon),
                realism: realism.unwrap_or(config.recommend.realism),
                save,
                image_out,
                format,
            };
            commands::recommend::handle(args, &config).await
        }
        cli::Commands::Weather { lat, lon } => {
            commands::weather::handle(lat.zip(lon), &config).await
        }
        cli::Commands::Saved(cmd) => commands::saved::handle(cmd, &config).await,
        cli::Commands::Config(cmd) => commands::config::handle(cmd, &config),
        cli::Commands::Options => {
            commands::options::handle();
            Ok(())
        }
    }
}
