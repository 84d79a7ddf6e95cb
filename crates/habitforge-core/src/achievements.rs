//! Achievement catalog and milestone-based unlock evaluation.
//!
//! The catalog is static; which milestones the evaluator actually awards is
//! an explicit list (`DEFAULT_EVALUATED` by default, overridable through
//! configuration). Only the three lowest milestones are awarded out of the
//! box while all six are displayed, and the split lives in the list rather
//! than being buried in the evaluator loop.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::entry::EntryLog;
use crate::habit::Habit;
use crate::streak::compute_streak;

/// A badge definition in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub code: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Streak length in days that earns the badge.
    pub milestone_days: u32,
    pub icon: &'static str,
}

/// The full static catalog, in milestone order.
pub static CATALOG: [Achievement; 6] = [
    Achievement {
        code: "FIRST_CHECK",
        title: "First Step",
        description: "Your first check-in.",
        milestone_days: 1,
        icon: "🥉",
    },
    Achievement {
        code: "WEEK_STREAK",
        title: "Weekly",
        description: "7 days in a row.",
        milestone_days: 7,
        icon: "🥈",
    },
    Achievement {
        code: "MONTH_STREAK",
        title: "Monthly",
        description: "30 days in a row.",
        milestone_days: 30,
        icon: "🥇",
    },
    Achievement {
        code: "NINJA_90",
        title: "Quarter Ninja",
        description: "90 days in a row.",
        milestone_days: 90,
        icon: "🏆",
    },
    Achievement {
        code: "HALF_YEAR",
        title: "Six Months",
        description: "180 days in a row.",
        milestone_days: 180,
        icon: "💎",
    },
    Achievement {
        code: "YEAR_LEGEND",
        title: "Legendary Year",
        description: "365 days in a row.",
        milestone_days: 365,
        icon: "👑",
    },
];

/// Codes the evaluator awards by default.
pub const DEFAULT_EVALUATED: [&str; 3] = ["FIRST_CHECK", "WEEK_STREAK", "MONTH_STREAK"];

/// Look up a catalog entry by code.
pub fn find(code: &str) -> Option<&'static Achievement> {
    CATALOG.iter().find(|a| a.code == code)
}

/// Evaluate the given milestones against every habit's current streak and
/// extend `unlocked` with any newly earned codes.
///
/// Unlocking is permanent: codes are only ever added, never removed, even
/// when the streak that earned them later breaks. Returns the codes added
/// by this evaluation, in catalog order.
pub fn evaluate(
    habits: &[Habit],
    entries: &EntryLog,
    today: NaiveDate,
    horizon: u32,
    evaluated: &[&'static Achievement],
    unlocked: &mut BTreeSet<String>,
) -> Vec<String> {
    let mut added = Vec::new();
    for habit in habits {
        let streak = compute_streak(habit, entries, today, horizon);
        for achievement in evaluated {
            if streak >= achievement.milestone_days
                && unlocked.insert(achievement.code.to_string())
            {
                added.push(achievement.code.to_string());
            }
        }
    }
    added.sort_by_key(|code| find(code).map_or(u32::MAX, |a| a.milestone_days));
    added
}

/// The default evaluated subset resolved against the catalog.
pub fn default_evaluated() -> Vec<&'static Achievement> {
    DEFAULT_EVALUATED
        .iter()
        .filter_map(|&code| find(code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryStatus;
    use crate::habit::{Frequency, HabitDraft, HabitKind};
    use chrono::Duration;

    fn habit(id: &str) -> Habit {
        Habit::with_id(
            id.to_string(),
            HabitDraft {
                name: id.to_string(),
                description: String::new(),
                kind: HabitKind::Perform,
                frequency: Frequency::Daily,
                scheduled_days: Vec::new(),
                icon: String::new(),
                color: String::new(),
            },
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn check_in_for(entries: &mut EntryLog, id: &str, days: i64) {
        for i in 0..days {
            entries.set_status(today() - Duration::days(i), id, EntryStatus::Done);
        }
    }

    #[test]
    fn catalog_codes_are_unique() {
        let codes: BTreeSet<_> = CATALOG.iter().map(|a| a.code).collect();
        assert_eq!(codes.len(), CATALOG.len());
    }

    #[test]
    fn default_evaluated_is_the_first_three_milestones() {
        let evaluated = default_evaluated();
        let days: Vec<u32> = evaluated.iter().map(|a| a.milestone_days).collect();
        assert_eq!(days, vec![1, 7, 30]);
    }

    #[test]
    fn one_day_streak_unlocks_first_check_only() {
        let habits = vec![habit("h1")];
        let mut entries = EntryLog::new();
        check_in_for(&mut entries, "h1", 1);
        let mut unlocked = BTreeSet::new();
        let added = evaluate(
            &habits,
            &entries,
            today(),
            400,
            &default_evaluated(),
            &mut unlocked,
        );
        assert_eq!(added, vec!["FIRST_CHECK".to_string()]);
        assert!(!unlocked.contains("WEEK_STREAK"));
    }

    #[test]
    fn week_streak_unlocks_both_lower_milestones() {
        let habits = vec![habit("h1")];
        let mut entries = EntryLog::new();
        check_in_for(&mut entries, "h1", 7);
        let mut unlocked = BTreeSet::new();
        evaluate(
            &habits,
            &entries,
            today(),
            400,
            &default_evaluated(),
            &mut unlocked,
        );
        assert!(unlocked.contains("FIRST_CHECK"));
        assert!(unlocked.contains("WEEK_STREAK"));
        assert!(!unlocked.contains("MONTH_STREAK"));
    }

    #[test]
    fn already_unlocked_codes_are_not_reported_again() {
        let habits = vec![habit("h1")];
        let mut entries = EntryLog::new();
        check_in_for(&mut entries, "h1", 1);
        let mut unlocked = BTreeSet::new();
        evaluate(&habits, &entries, today(), 400, &default_evaluated(), &mut unlocked);
        let added = evaluate(&habits, &entries, today(), 400, &default_evaluated(), &mut unlocked);
        assert!(added.is_empty());
        assert!(unlocked.contains("FIRST_CHECK"));
    }

    #[test]
    fn unlocks_survive_a_broken_streak() {
        let habits = vec![habit("h1")];
        let mut entries = EntryLog::new();
        check_in_for(&mut entries, "h1", 7);
        let mut unlocked = BTreeSet::new();
        evaluate(&habits, &entries, today(), 400, &default_evaluated(), &mut unlocked);
        // Break the streak and re-evaluate.
        entries.set_status(today(), "h1", EntryStatus::Missed);
        evaluate(&habits, &entries, today(), 400, &default_evaluated(), &mut unlocked);
        assert!(unlocked.contains("WEEK_STREAK"));
    }

    #[test]
    fn custom_evaluated_list_can_wire_higher_milestones() {
        let habits = vec![habit("h1")];
        let mut entries = EntryLog::new();
        check_in_for(&mut entries, "h1", 90);
        let evaluated: Vec<&'static Achievement> =
            CATALOG.iter().collect();
        let mut unlocked = BTreeSet::new();
        evaluate(&habits, &entries, today(), 400, &evaluated, &mut unlocked);
        assert!(unlocked.contains("NINJA_90"));
        assert!(!unlocked.contains("HALF_YEAR"));
    }

    #[test]
    fn best_habit_drives_the_unlock() {
        let habits = vec![habit("h1"), habit("h2")];
        let mut entries = EntryLog::new();
        check_in_for(&mut entries, "h2", 7);
        let mut unlocked = BTreeSet::new();
        evaluate(&habits, &entries, today(), 400, &default_evaluated(), &mut unlocked);
        assert!(unlocked.contains("WEEK_STREAK"));
    }
}
