//! Consecutive-day streak computation.

use chrono::{Duration, NaiveDate};

use crate::entry::{EntryLog, EntryStatus};
use crate::habit::{Habit, HabitKind};

/// Default number of days the streak walk looks back, today included.
///
/// An unbroken run longer than the horizon reports the horizon itself;
/// the cap is a deliberate finite bound, not an "infinite" marker.
pub const DEFAULT_HORIZON_DAYS: u32 = 400;

/// Current consecutive-day streak for `habit`, ending at `today`.
///
/// Walks backward one day at a time, at most `horizon` days:
///
/// - Perform habits count a day only when its status is `Done`; a `Missed`
///   or `Unset` day stops the walk.
/// - Avoid habits count `Done` and `Unset` days alike: success is the
///   default until an explicit `Missed`, which stops the walk without
///   counting that day. An avoid habit with no entries at all therefore
///   streaks all the way to the horizon.
pub fn compute_streak(habit: &Habit, entries: &EntryLog, today: NaiveDate, horizon: u32) -> u32 {
    let mut streak = 0;
    for i in 0..horizon {
        let day = today - Duration::days(i64::from(i));
        let status = entries.status(day, &habit.id);
        match habit.kind {
            HabitKind::Avoid => match status {
                EntryStatus::Missed => break,
                EntryStatus::Done | EntryStatus::Unset => streak += 1,
            },
            HabitKind::Perform => match status {
                EntryStatus::Done => streak += 1,
                EntryStatus::Missed | EntryStatus::Unset => break,
            },
        }
    }
    streak
}
