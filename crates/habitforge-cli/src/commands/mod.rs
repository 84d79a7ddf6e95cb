//! CLI command implementations.

pub mod achievements;
pub mod checkin;
pub mod config;
pub mod data;
pub mod habit;
pub mod profile;
pub mod stats;

use habitforge_core::{Config, HabitTracker, JsonFileStore, SystemClock};

/// Load config, open the file store, and hydrate the tracker.
pub(crate) fn open_tracker() -> Result<(JsonFileStore, HabitTracker), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let settings = config.tracker_settings()?;
    let mut store = JsonFileStore::open()?;
    let tracker = HabitTracker::load(&mut store, Box::new(SystemClock), settings)?;
    Ok((store, tracker))
}
