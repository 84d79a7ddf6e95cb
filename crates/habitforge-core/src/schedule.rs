//! Schedule resolution: which habits are active on a given date.

use chrono::{Datelike, NaiveDate};

use crate::habit::{Frequency, Habit};

/// Weekday index with Sunday = 0 .. Saturday = 6, matching the encoding
/// stored in `Habit::scheduled_days`.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Whether `habit` is active (displayed and counted) on `date`.
pub fn is_scheduled(habit: &Habit, date: NaiveDate) -> bool {
    match habit.frequency {
        Frequency::Daily => true,
        Frequency::Weekdays => (1..=5).contains(&weekday_index(date)),
        Frequency::Custom => habit.scheduled_days.contains(&weekday_index(date)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::{HabitDraft, HabitKind};

    fn habit(frequency: Frequency, scheduled_days: Vec<u8>) -> Habit {
        Habit::with_id(
            "h1".to_string(),
            HabitDraft {
                name: "Habit".to_string(),
                description: String::new(),
                kind: HabitKind::Perform,
                frequency,
                scheduled_days,
                icon: String::new(),
                color: String::new(),
            },
        )
    }

    // 2026-08-02 is a Sunday.
    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 2).unwrap()
    }

    #[test]
    fn weekday_index_starts_at_sunday() {
        assert_eq!(weekday_index(sunday()), 0);
        assert_eq!(weekday_index(sunday() + chrono::Duration::days(1)), 1);
        assert_eq!(weekday_index(sunday() + chrono::Duration::days(6)), 6);
    }

    #[test]
    fn daily_is_always_scheduled() {
        let h = habit(Frequency::Daily, Vec::new());
        for offset in 0..7 {
            assert!(is_scheduled(&h, sunday() + chrono::Duration::days(offset)));
        }
    }

    #[test]
    fn weekdays_excludes_weekend() {
        let h = habit(Frequency::Weekdays, Vec::new());
        assert!(!is_scheduled(&h, sunday()));
        assert!(!is_scheduled(&h, sunday() + chrono::Duration::days(6)));
        for offset in 1..=5 {
            assert!(is_scheduled(&h, sunday() + chrono::Duration::days(offset)));
        }
    }

    #[test]
    fn custom_matches_listed_days_only() {
        let h = habit(Frequency::Custom, vec![1, 3, 5]);
        assert!(is_scheduled(&h, sunday() + chrono::Duration::days(1))); // Mon
        assert!(!is_scheduled(&h, sunday() + chrono::Duration::days(2))); // Tue
        assert!(is_scheduled(&h, sunday() + chrono::Duration::days(3))); // Wed
        assert!(!is_scheduled(&h, sunday())); // Sun
    }

    #[test]
    fn custom_with_no_days_is_never_scheduled() {
        let h = habit(Frequency::Custom, Vec::new());
        for offset in 0..7 {
            assert!(!is_scheduled(&h, sunday() + chrono::Duration::days(offset)));
        }
    }
}
