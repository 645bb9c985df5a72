use clap::{Parser, Subcommand, ValueEnum};
use fit_core::{Gender, Occasion, RealismLevel};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fit")]
#[command(about = "Weather-aware outfit recommendations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate an outfit for the current weather
    Recommend {
        /// Occasion, by label or slug (see `fit options`)
        #[arg(long, short)]
        occasion: Occasion,

        /// Female, Male, Unisex or Kids
        #[arg(long, short)]
        gender: Gender,

        /// Free-text location context, blank for a generic city
        #[arg(long, short, default_value = "")]
        location: String,

        /// Latitude to look weather up at (requires --lon)
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude to look weather up at (requires --lat)
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Image style: everyday-realistic or high-fashion
        #[arg(long)]
        realism: Option<RealismLevel>,

        /// Add the result to the saved archive
        #[arg(long)]
        save: bool,

        /// Write the generated image to this file
        #[arg(long)]
        image_out: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show current weather
    Weather {
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// Manage saved outfits
    #[command(subcommand)]
    Saved(SavedCommands),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// List accepted occasions, genders and realism levels
    Options,
}

#[derive(Subcommand)]
pub enum SavedCommands {
    /// List saved outfits, most recent first
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Delete every saved outfit
    Clear {
        /// Skip confirmation
        #[arg(long, short)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_args() {
        let cli = Cli::try_parse_from([
            "fit",
            "recommend",
            "--occasion",
            "date-night",
            "--gender",
            "kids",
            "--lat",
            "-33.87",
            "--lon",
            "151.21",
            "--save",
        ])
        .unwrap();

        match cli.command {
            Commands::Recommend {
                occasion,
                gender,
                location,
                lat,
                lon,
                save,
                format,
                ..
            } => {
                assert_eq!(occasion, Occasion::DateNight);
                assert_eq!(gender, Gender::Kids);
                assert_eq!(location, "");
                assert_eq!(lat, Some(-33.87));
                assert_eq!(lon, Some(151.21));
                assert!(save);
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn test_occasion_label_accepted() {
        let cli = Cli::try_parse_from([
            "fit",
            "recommend",
            "--occasion",
            "Casual Outing",
            "--gender",
            "Unisex",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Recommend {
                occasion: Occasion::Casual,
                ..
            }
        ));
    }

    #[test]
    fn test_lat_requires_lon() {
        let result = Cli::try_parse_from([
            "fit", "weather", "--lat", "10.0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_occasion_rejected() {
        let result = Cli::try_parse_from([
            "fit",
            "recommend",
            "--occasion",
            "funeral",
            "--gender",
            "Male",
        ]);
        assert!(result.is_err());
    }
}
