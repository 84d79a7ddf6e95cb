mod config;
pub mod store;

pub use config::Config;
pub use store::{
    reset_selected_data, DataResetOptions, DataResetSummary, JsonFileStore, KeyValueStore,
    MemoryStore,
};

use std::path::PathBuf;

/// Returns `~/.config/habitforge[-dev]/` based on HABITFORGE_ENV.
///
/// Set HABITFORGE_ENV=dev to use the development data directory, or
/// HABITFORGE_DATA_DIR to override the location entirely (integration
/// tests point this at a temp dir).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(dir) = std::env::var("HABITFORGE_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HABITFORGE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habitforge-dev")
    } else {
        base_dir.join("habitforge")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
