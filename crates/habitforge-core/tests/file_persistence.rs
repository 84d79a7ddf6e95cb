//! Tracker persistence over the file-backed store.

use chrono::NaiveDate;
use habitforge_core::storage::store::keys;
use habitforge_core::{
    FixedClock, Frequency, HabitDraft, HabitKind, HabitTracker, JsonFileStore, KeyValueStore,
    TrackerSettings,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

fn load(store: &mut JsonFileStore) -> HabitTracker {
    HabitTracker::load(
        store,
        Box::new(FixedClock(today())),
        TrackerSettings::default(),
    )
    .unwrap()
}

#[test]
fn state_survives_a_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::at(dir.path().to_path_buf());
    store.set(keys::HABITS, &serde_json::json!([])).unwrap();

    let mut tracker = load(&mut store);
    let id = tracker
        .add_habit(HabitDraft {
            name: "Journal".to_string(),
            description: "One page".to_string(),
            kind: HabitKind::Perform,
            frequency: Frequency::Daily,
            scheduled_days: Vec::new(),
            icon: "📓".to_string(),
            color: "#7BE0B8".to_string(),
        })
        .id
        .clone();
    tracker.toggle(&id).unwrap();
    tracker.save(&mut store).unwrap();

    for key in keys::ALL {
        assert!(dir.path().join(format!("{key}.json")).exists(), "{key}");
    }

    let reloaded = load(&mut store);
    assert_eq!(reloaded.habits().len(), 1);
    assert_eq!(reloaded.streak(&id).unwrap(), 1);
    assert_eq!(reloaded.profile().xp, 10);
}

#[test]
fn a_corrupt_file_only_costs_that_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::at(dir.path().to_path_buf());
    store.set(keys::HABITS, &serde_json::json!([])).unwrap();

    let mut tracker = load(&mut store);
    let id = tracker
        .add_habit(HabitDraft {
            name: "Journal".to_string(),
            description: String::new(),
            kind: HabitKind::Perform,
            frequency: Frequency::Daily,
            scheduled_days: Vec::new(),
            icon: String::new(),
            color: String::new(),
        })
        .id
        .clone();
    tracker.toggle(&id).unwrap();
    tracker.save(&mut store).unwrap();

    std::fs::write(dir.path().join("user.json"), "{ truncated").unwrap();

    let reloaded = load(&mut store);
    // Profile fell back to default; habits and entries are intact.
    assert_eq!(reloaded.profile().xp, 0);
    assert_eq!(reloaded.habits().len(), 1);
    assert_eq!(reloaded.streak(&id).unwrap(), 1);
}
