pub mod config;
pub mod options;
pub mod recommend;
pub mod saved;
pub mod weather;

use anyhow::Result;
use fit_config::Config;
use fit_storage::{Archive, Storage};

/// Open the saved-outfit archive at the configured database path
pub async fn open_archive(config: &Config) -> Result<Archive> {
    let storage = Storage::new(&config.db_path()).await?;
    Ok(Archive::new(storage).with_limit(config.storage.max_saved))
}
