//! # HabitForge Core Library
//!
//! This library provides the core business logic for the HabitForge habit
//! tracker. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any richer frontend being a
//! thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Tracker**: an explicit context object holding habits, the entry
//!   log, the user profile, and unlocked achievements; all date math runs
//!   against an injected [`Clock`]
//! - **Storage**: JSON-blob persistence behind a [`KeyValueStore`]
//!   boundary and TOML-based configuration
//! - **Derivations**: streaks, day-completion percentage, XP/levels,
//!   achievement unlocks, and next-goal projection, all recomputed on
//!   demand from the entry log
//!
//! ## Key Components
//!
//! - [`HabitTracker`]: mutations (add/edit/delete/toggle) and derived queries
//! - [`JsonFileStore`] / [`MemoryStore`]: key-value store implementations
//! - [`Config`]: application configuration management

pub mod achievements;
pub mod clock;
pub mod entry;
pub mod error;
pub mod goal;
pub mod habit;
pub mod progress;
pub mod schedule;
pub mod storage;
pub mod streak;
pub mod tracker;

pub use achievements::{Achievement, CATALOG};
pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::{EntryLog, EntryStatus};
pub use error::{CoreError, Result, StoreError, ValidationError};
pub use goal::{next_goal, NextGoal, MILESTONE_LADDER};
pub use habit::{Frequency, Habit, HabitDraft, HabitKind};
pub use progress::Profile;
pub use storage::{
    reset_selected_data, Config, DataResetOptions, DataResetSummary, JsonFileStore, KeyValueStore,
    MemoryStore,
};
pub use tracker::{HabitTracker, ToggleOutcome, TrackerSettings};
