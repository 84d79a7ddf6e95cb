//! Date-indexed entry log with an explicit three-valued status.
//!
//! The log maps calendar dates to per-habit statuses. Absence of a record
//! is itself a state (`Unset`) rather than an emergent lookup miss: avoid
//! habits treat an unset day as "still succeeding", so the distinction is
//! load-bearing and modeled as a visible enum variant.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status of a single (habit, day) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// No record for the day. For avoid habits this is the default-success
    /// state; for perform habits it breaks the streak.
    Unset,
    /// Explicitly checked off.
    Done,
    /// Explicitly marked missed.
    Missed,
}

/// Log of per-day, per-habit statuses.
///
/// Only `Done` and `Missed` are stored; looking up an absent cell yields
/// `EntryStatus::Unset`, and setting a cell to `Unset` removes it. Dates
/// serialize as `YYYY-MM-DD` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryLog {
    days: BTreeMap<NaiveDate, BTreeMap<String, EntryStatus>>,
}

impl EntryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of `habit_id` on `date`.
    pub fn status(&self, date: NaiveDate, habit_id: &str) -> EntryStatus {
        self.days
            .get(&date)
            .and_then(|day| day.get(habit_id))
            .copied()
            .unwrap_or(EntryStatus::Unset)
    }

    /// Record a status. `Unset` removes the cell (and the day once empty).
    pub fn set_status(&mut self, date: NaiveDate, habit_id: &str, status: EntryStatus) {
        match status {
            EntryStatus::Unset => {
                if let Some(day) = self.days.get_mut(&date) {
                    day.remove(habit_id);
                    if day.is_empty() {
                        self.days.remove(&date);
                    }
                }
            }
            _ => {
                self.days
                    .entry(date)
                    .or_default()
                    .insert(habit_id.to_string(), status);
            }
        }
    }

    /// Remove every record for `habit_id` across all dates.
    ///
    /// Returns the number of cells removed. Days left without records are
    /// dropped entirely.
    pub fn purge_habit(&mut self, habit_id: &str) -> usize {
        let mut removed = 0;
        self.days.retain(|_, day| {
            if day.remove(habit_id).is_some() {
                removed += 1;
            }
            !day.is_empty()
        });
        removed
    }

    /// Drop records whose habit id is not accepted by `is_known`.
    ///
    /// Guards reads against orphans left behind when a crash lands between
    /// a habit delete and its entry purge.
    pub fn prune_unknown<F>(&mut self, is_known: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        let mut removed = 0;
        self.days.retain(|_, day| {
            day.retain(|habit_id, _| {
                let keep = is_known(habit_id);
                if !keep {
                    removed += 1;
                }
                keep
            });
            !day.is_empty()
        });
        removed
    }

    /// Number of dates with at least one record.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
