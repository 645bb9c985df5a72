use anyhow::Result;
use fit_config::Config;

use crate::cli::ConfigCommands;

pub fn handle(cmd: ConfigCommands, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommands::Path => {
            println!("{}", Config::config_path().display());
            Ok(())
        }
        ConfigCommands::Show => show(config),
    }
}

fn show(config: &Config) -> Result<()> {
    let mut shown = config.clone();
    shown.genai.api_key = shown.genai.api_key.as_deref().map(mask_key);

    print!("{}", toml::to_string_pretty(&shown)?);
    println!();
    println!("# database: {}", config.db_path().display());
    match config.api_key() {
        Some(key) => println!("# effective API key: {}", mask_key(&key)),
        None => println!("# effective API key: not set"),
    }

    Ok(())
}

/// Keep the last four characters, hide the rest
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}
