//! The tracker context object.
//!
//! `HabitTracker` owns the profile, habit collection, entry log, and
//! unlocked achievement set, and exposes every mutation and derived query
//! the presentation layer needs. There is no ambient singleton: the caller
//! constructs (or loads) a tracker, drives it, and persists it through the
//! key-value store boundary.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::achievements::{self, Achievement};
use crate::clock::{Clock, SystemClock};
use crate::entry::{EntryLog, EntryStatus};
use crate::error::{CoreError, Result, StoreError};
use crate::goal::{next_goal, NextGoal};
use crate::habit::{starter_habits, Habit, HabitDraft};
use crate::progress::{day_completion_percent, level_for_xp, Profile};
use crate::schedule::is_scheduled;
use crate::storage::store::{self, keys, KeyValueStore};
use crate::streak::{compute_streak, DEFAULT_HORIZON_DAYS};

/// Tunable tracker behavior.
#[derive(Debug, Clone)]
pub struct TrackerSettings {
    /// XP granted on each transition to `Done`.
    pub xp_per_check: u32,
    /// XP per level step.
    pub xp_per_level: u32,
    /// Streak walk horizon, in days.
    pub streak_horizon_days: u32,
    /// Milestones the achievement evaluator awards.
    pub evaluated_milestones: Vec<&'static Achievement>,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            xp_per_check: crate::progress::DEFAULT_XP_PER_CHECK,
            xp_per_level: crate::progress::DEFAULT_XP_PER_LEVEL,
            streak_horizon_days: DEFAULT_HORIZON_DAYS,
            evaluated_milestones: achievements::default_evaluated(),
        }
    }
}

/// What a toggle did: the new status plus any side effects.
#[derive(Debug, Clone, Serialize)]
pub struct ToggleOutcome {
    pub date: NaiveDate,
    pub status: EntryStatus,
    /// XP granted by this toggle (0 unless the transition was to `Done`).
    pub xp_awarded: u32,
    /// Achievement codes newly unlocked by this toggle.
    pub unlocked: Vec<String>,
}

/// In-memory domain model: habits, entries, profile, achievements.
pub struct HabitTracker {
    settings: TrackerSettings,
    clock: Box<dyn Clock>,
    profile: Profile,
    habits: Vec<Habit>,
    entries: EntryLog,
    unlocked: BTreeSet<String>,
}

impl HabitTracker {
    /// Fresh, empty tracker on the system clock.
    pub fn new(settings: TrackerSettings) -> Self {
        Self::with_clock(settings, Box::new(SystemClock))
    }

    /// Fresh, empty tracker on an explicit clock.
    pub fn with_clock(settings: TrackerSettings, clock: Box<dyn Clock>) -> Self {
        Self {
            settings,
            clock,
            profile: Profile::default(),
            habits: Vec::new(),
            entries: EntryLog::new(),
            unlocked: BTreeSet::new(),
        }
    }

    /// Load tracker state from the store.
    ///
    /// Missing or malformed values fall back to their defaults; a first run
    /// with no persisted habit list is seeded with the starter habits (and
    /// the seed is written back immediately). The level is rederived from
    /// xp, unlocked codes are filtered against the catalog, and entries for
    /// unknown habit ids (orphans of a partial delete) are pruned.
    ///
    /// # Errors
    /// Returns an error only if seeding the starter habits cannot be
    /// persisted; reads never fail.
    pub fn load(
        store: &mut dyn KeyValueStore,
        clock: Box<dyn Clock>,
        settings: TrackerSettings,
    ) -> Result<Self> {
        let mut profile: Profile = store::load_or(store, keys::USER, Profile::default());
        profile.level = level_for_xp(profile.xp, settings.xp_per_level);

        let habits: Vec<Habit> = if store.contains(keys::HABITS) {
            store::load_or(store, keys::HABITS, Vec::new())
        } else {
            let seeded = starter_habits();
            store::save(store, keys::HABITS, &seeded)?;
            seeded
        };

        let mut entries: EntryLog = store::load_or(store, keys::ENTRIES, EntryLog::new());
        entries.prune_unknown(|id| habits.iter().any(|h| h.id == id));

        let mut unlocked: BTreeSet<String> = store::load_or(store, keys::ACHIEVEMENTS, Vec::new())
            .into_iter()
            .collect();
        unlocked.retain(|code| achievements::find(code).is_some());

        Ok(Self {
            settings,
            clock,
            profile,
            habits,
            entries,
            unlocked,
        })
    }

    /// Persist the full tracker state.
    ///
    /// Each key is an independent write; there is no transaction spanning
    /// them.
    ///
    /// # Errors
    /// Returns the first write error; earlier writes stay in place.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        store::save(store, keys::USER, &self.profile)?;
        store::save(store, keys::HABITS, &self.habits)?;
        store::save(store, keys::ENTRIES, &self.entries)?;
        let codes: Vec<&String> = self.unlocked.iter().collect();
        store::save(store, keys::ACHIEVEMENTS, &codes)?;
        Ok(())
    }

    // ---- mutations ----

    /// Create a habit from a draft, assigning a fresh id.
    pub fn add_habit(&mut self, draft: HabitDraft) -> &Habit {
        let idx = self.habits.len();
        self.habits.push(Habit::from_draft(draft));
        &self.habits[idx]
    }

    /// Replace every field of the habit except its id.
    ///
    /// # Errors
    /// `HabitNotFound` if the id is not in the collection.
    pub fn edit_habit(&mut self, habit_id: &str, draft: HabitDraft) -> Result<&Habit> {
        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id == habit_id)
            .ok_or_else(|| CoreError::HabitNotFound {
                id: habit_id.to_string(),
            })?;
        *habit = Habit::with_id(habit.id.clone(), draft);
        Ok(habit)
    }

    /// Delete a habit and purge its entries across every date.
    ///
    /// Returns the number of entry cells removed.
    ///
    /// # Errors
    /// `HabitNotFound` if the id is not in the collection.
    pub fn delete_habit(&mut self, habit_id: &str) -> Result<usize> {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != habit_id);
        if self.habits.len() == before {
            return Err(CoreError::HabitNotFound {
                id: habit_id.to_string(),
            });
        }
        Ok(self.entries.purge_habit(habit_id))
    }

    /// Toggle today's cell for a habit.
    ///
    /// `Done` flips to `Missed`; `Unset` or `Missed` flips to `Done`. Only
    /// a transition to `Done` grants XP and re-evaluates achievements.
    /// This is the only mutation path into the entry log.
    ///
    /// # Errors
    /// `HabitNotFound` if the id is not in the collection.
    pub fn toggle(&mut self, habit_id: &str) -> Result<ToggleOutcome> {
        if !self.habits.iter().any(|h| h.id == habit_id) {
            return Err(CoreError::HabitNotFound {
                id: habit_id.to_string(),
            });
        }

        let today = self.clock.today();
        let next = match self.entries.status(today, habit_id) {
            EntryStatus::Done => EntryStatus::Missed,
            EntryStatus::Unset | EntryStatus::Missed => EntryStatus::Done,
        };
        self.entries.set_status(today, habit_id, next);

        let mut outcome = ToggleOutcome {
            date: today,
            status: next,
            xp_awarded: 0,
            unlocked: Vec::new(),
        };

        if next == EntryStatus::Done {
            self.profile
                .add_xp(self.settings.xp_per_check, self.settings.xp_per_level);
            outcome.xp_awarded = self.settings.xp_per_check;
            outcome.unlocked = achievements::evaluate(
                &self.habits,
                &self.entries,
                today,
                self.settings.streak_horizon_days,
                &self.settings.evaluated_milestones,
                &mut self.unlocked,
            );
        }

        Ok(outcome)
    }

    /// Rename the profile.
    pub fn set_name(&mut self, name: &str) {
        self.profile.name = name.to_string();
    }

    // ---- queries ----

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn habit(&self, habit_id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == habit_id)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn unlocked(&self) -> &BTreeSet<String> {
        &self.unlocked
    }

    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    /// Current streak for a habit id.
    ///
    /// # Errors
    /// `HabitNotFound` if the id is not in the collection.
    pub fn streak(&self, habit_id: &str) -> Result<u32> {
        let habit = self.habit(habit_id).ok_or_else(|| CoreError::HabitNotFound {
            id: habit_id.to_string(),
        })?;
        Ok(self.streak_of(habit))
    }

    /// Current streak for a habit already in hand.
    pub fn streak_of(&self, habit: &Habit) -> u32 {
        compute_streak(
            habit,
            &self.entries,
            self.clock.today(),
            self.settings.streak_horizon_days,
        )
    }

    /// Longest current streak across all habits (0 with no habits).
    pub fn top_streak(&self) -> u32 {
        self.habits
            .iter()
            .map(|h| self.streak_of(h))
            .max()
            .unwrap_or(0)
    }

    /// The next milestone ahead of the top streak.
    pub fn next_goal(&self) -> Option<NextGoal> {
        next_goal(self.top_streak())
    }

    /// Today's completion percentage over scheduled habits.
    pub fn day_completion_percent(&self) -> u8 {
        self.day_completion_percent_on(self.clock.today())
    }

    /// Completion percentage for an arbitrary date.
    pub fn day_completion_percent_on(&self, date: NaiveDate) -> u8 {
        day_completion_percent(&self.habits, &self.entries, date)
    }

    /// Habits scheduled today, in display order.
    pub fn scheduled_today(&self) -> Vec<&Habit> {
        let today = self.clock.today();
        self.habits
            .iter()
            .filter(|h| is_scheduled(h, today))
            .collect()
    }

    /// Today's status for a habit id (`Unset` for unknown ids).
    pub fn status_today(&self, habit_id: &str) -> EntryStatus {
        self.entries.status(self.clock.today(), habit_id)
    }
}
