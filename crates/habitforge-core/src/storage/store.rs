//! Key-value persistence boundary.
//!
//! The tracker reads and writes JSON blobs through the `KeyValueStore`
//! trait. `JsonFileStore` keeps one pretty-printed JSON file per key in the
//! data directory; `MemoryStore` backs tests and embedding. Reads never
//! fail: a missing or unparseable value is `None`, and `load_or` turns that
//! into the caller's fallback, so a corrupted file costs at most that one
//! key's data.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::StoreError;

/// Keys the tracker persists under.
pub mod keys {
    /// User profile (name, xp, level).
    pub const USER: &str = "user";
    /// Habit list, in display order.
    pub const HABITS: &str = "habits";
    /// Date-indexed entry log.
    pub const ENTRIES: &str = "entries";
    /// Unlocked achievement codes.
    pub const ACHIEVEMENTS: &str = "achievements";

    /// Every key the tracker owns.
    pub const ALL: [&str; 4] = [USER, HABITS, ENTRIES, ACHIEVEMENTS];
}

/// String-keyed JSON blob storage.
///
/// Writes are independent per key; nothing spans keys transactionally.
pub trait KeyValueStore {
    /// Raw JSON value under `key`, or `None` when missing or unreadable.
    fn get(&self, key: &str) -> Option<Value>;

    /// Overwrite the value under `key`.
    ///
    /// # Errors
    /// Returns an error if the value cannot be written.
    fn set(&mut self, key: &str, value: &Value) -> Result<(), StoreError>;

    /// Drop the value under `key`; absent keys are fine.
    ///
    /// # Errors
    /// Returns an error if an existing value cannot be removed.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Whether any value is stored under `key`.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Decode the value under `key`, falling back when the key is missing or
/// the stored value does not decode. Persistence corruption is non-fatal
/// by design.
pub fn load_or<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, fallback: T) -> T {
    match store.get(key) {
        Some(value) => serde_json::from_value(value).unwrap_or(fallback),
        None => fallback,
    }
}

/// Encode `value` and store it under `key`.
///
/// # Errors
/// Returns an error if encoding or the write fails.
pub fn save<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let encoded = serde_json::to_value(value).map_err(|source| StoreError::EncodeFailed {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &encoded)
}

/// File-backed store: `<data_dir>/<key>.json` per key.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open the store over the default data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be resolved.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            dir: super::data_dir()?,
        })
    }

    /// Open the store over an explicit directory.
    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        let content = std::fs::read_to_string(self.path(key)).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<(), StoreError> {
        let content =
            serde_json::to_string_pretty(value).map_err(|source| StoreError::EncodeFailed {
                key: key.to_string(),
                source,
            })?;
        std::fs::write(self.path(key), content).map_err(|e| StoreError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::RemoveFailed {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Selects which persisted entities a reset clears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataResetOptions {
    pub habits: bool,
    pub entries: bool,
    pub profile: bool,
    pub achievements: bool,
}

impl DataResetOptions {
    /// Everything.
    pub fn all() -> Self {
        Self {
            habits: true,
            entries: true,
            profile: true,
            achievements: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.habits || self.entries || self.profile || self.achievements)
    }
}

/// What a reset actually cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DataResetSummary {
    pub cleared_habits: usize,
    pub cleared_entry_days: usize,
    pub cleared_achievements: usize,
    pub reset_profile: bool,
}

/// Remove the selected keys from the store, reporting what was there.
///
/// Removing the habits key (rather than writing an empty list) means the
/// next load re-seeds the starter habits, matching a fresh install.
///
/// # Errors
/// Returns an error if a removal fails; earlier removals are not rolled
/// back (writes are independent per key).
pub fn reset_selected_data(
    store: &mut dyn KeyValueStore,
    options: DataResetOptions,
) -> Result<DataResetSummary, StoreError> {
    use crate::entry::EntryLog;
    use crate::habit::Habit;

    let mut summary = DataResetSummary::default();

    if options.habits {
        summary.cleared_habits = load_or::<Vec<Habit>>(store, keys::HABITS, Vec::new()).len();
        store.remove(keys::HABITS)?;
    }
    if options.entries {
        summary.cleared_entry_days =
            load_or::<EntryLog>(store, keys::ENTRIES, EntryLog::new()).day_count();
        store.remove(keys::ENTRIES)?;
    }
    if options.achievements {
        summary.cleared_achievements =
            load_or::<Vec<String>>(store, keys::ACHIEVEMENTS, Vec::new()).len();
        store.remove(keys::ACHIEVEMENTS)?;
    }
    if options.profile {
        summary.reset_profile = store.contains(keys::USER);
        store.remove(keys::USER)?;
    }

    Ok(summary)
}
