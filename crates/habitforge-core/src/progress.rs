//! XP, levels, and the day-completion percentage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::{EntryLog, EntryStatus};
use crate::habit::Habit;
use crate::schedule::is_scheduled;

/// XP granted per completed check-in.
pub const DEFAULT_XP_PER_CHECK: u32 = 10;

/// XP required per level.
pub const DEFAULT_XP_PER_LEVEL: u32 = 200;

/// Singleton user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Non-negative, monotonically non-decreasing.
    pub xp: u32,
    /// Derived from xp; never stored as an independent authority.
    pub level: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "You".to_string(),
            xp: 0,
            level: 1,
        }
    }
}

impl Profile {
    /// Grant XP and rederive the level.
    pub fn add_xp(&mut self, amount: u32, xp_per_level: u32) {
        self.xp += amount;
        self.level = level_for_xp(self.xp, xp_per_level);
    }
}

/// Level for a given XP total: `max(1, xp / per_level)` in integer division.
pub fn level_for_xp(xp: u32, xp_per_level: u32) -> u32 {
    (xp / xp_per_level.max(1)).max(1)
}

/// Percentage (0..=100, rounded) of habits scheduled on `date` whose status
/// is exactly `Done`. Returns 0 when nothing is scheduled.
///
/// An `Unset` status never counts here, even for avoid habits where unset
/// means "still succeeding": the completion percentage moves only on
/// explicit check-ins, unlike the streak walk.
pub fn day_completion_percent(habits: &[Habit], entries: &EntryLog, date: NaiveDate) -> u8 {
    let scheduled: Vec<&Habit> = habits.iter().filter(|h| is_scheduled(h, date)).collect();
    if scheduled.is_empty() {
        return 0;
    }
    let done = scheduled
        .iter()
        .filter(|h| entries.status(date, &h.id) == EntryStatus::Done)
        .count();
    ((done as f64 / scheduled.len() as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::{Frequency, HabitDraft, HabitKind};

    fn habit(id: &str, kind: HabitKind, frequency: Frequency, days: Vec<u8>) -> Habit {
        Habit::with_id(
            id.to_string(),
            HabitDraft {
                name: id.to_string(),
                description: String::new(),
                kind,
                frequency,
                scheduled_days: days,
                icon: String::new(),
                color: String::new(),
            },
        )
    }

    fn today() -> NaiveDate {
        // A Thursday.
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn level_is_one_at_zero_xp() {
        assert_eq!(level_for_xp(0, 200), 1);
    }

    #[test]
    fn level_steps_every_per_level_xp() {
        assert_eq!(level_for_xp(199, 200), 1);
        assert_eq!(level_for_xp(200, 200), 1);
        assert_eq!(level_for_xp(400, 200), 2);
        assert_eq!(level_for_xp(1000, 200), 5);
    }

    #[test]
    fn add_xp_rederives_level() {
        let mut profile = Profile::default();
        for _ in 0..40 {
            profile.add_xp(10, 200);
        }
        assert_eq!(profile.xp, 400);
        assert_eq!(profile.level, 2);
    }

    #[test]
    fn percent_is_zero_with_nothing_scheduled() {
        let habits = vec![habit("h1", HabitKind::Perform, Frequency::Custom, vec![0])];
        let mut entries = EntryLog::new();
        // An entry exists, but the habit is not scheduled on a Thursday.
        entries.set_status(today(), "h1", EntryStatus::Done);
        assert_eq!(day_completion_percent(&habits, &entries, today()), 0);
    }

    #[test]
    fn percent_counts_only_done() {
        let habits = vec![
            habit("h1", HabitKind::Perform, Frequency::Daily, Vec::new()),
            habit("h2", HabitKind::Perform, Frequency::Daily, Vec::new()),
        ];
        let mut entries = EntryLog::new();
        entries.set_status(today(), "h1", EntryStatus::Done);
        entries.set_status(today(), "h2", EntryStatus::Missed);
        assert_eq!(day_completion_percent(&habits, &entries, today()), 50);
    }

    #[test]
    fn unset_avoid_habit_does_not_count_toward_percent() {
        // The streak engine treats an unset avoid day as success; the
        // completion percentage intentionally does not.
        let habits = vec![habit("h1", HabitKind::Avoid, Frequency::Daily, Vec::new())];
        let entries = EntryLog::new();
        assert_eq!(day_completion_percent(&habits, &entries, today()), 0);
    }

    #[test]
    fn percent_rounds_to_nearest() {
        let habits = vec![
            habit("h1", HabitKind::Perform, Frequency::Daily, Vec::new()),
            habit("h2", HabitKind::Perform, Frequency::Daily, Vec::new()),
            habit("h3", HabitKind::Perform, Frequency::Daily, Vec::new()),
        ];
        let mut entries = EntryLog::new();
        entries.set_status(today(), "h1", EntryStatus::Done);
        // 1/3 -> 33
        assert_eq!(day_completion_percent(&habits, &entries, today()), 33);
        entries.set_status(today(), "h2", EntryStatus::Done);
        // 2/3 -> 67
        assert_eq!(day_completion_percent(&habits, &entries, today()), 67);
    }

    #[test]
    fn percent_ignores_unscheduled_habits() {
        let habits = vec![
            habit("daily", HabitKind::Perform, Frequency::Daily, Vec::new()),
            // Sunday-only; today is Thursday.
            habit("sunday", HabitKind::Perform, Frequency::Custom, vec![0]),
        ];
        let mut entries = EntryLog::new();
        entries.set_status(today(), "daily", EntryStatus::Done);
        assert_eq!(day_completion_percent(&habits, &entries, today()), 100);
    }
}
