//! Next streak milestone projection.

use serde::Serialize;

/// Streak milestone ladder, in days.
pub const MILESTONE_LADDER: [u32; 6] = [1, 7, 30, 90, 180, 365];

/// The next milestone ahead of the current top streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextGoal {
    pub milestone_days: u32,
    pub remaining_days: u32,
}

/// First ladder milestone strictly greater than `top_streak`, or `None`
/// once the top streak has passed the whole ladder.
pub fn next_goal(top_streak: u32) -> Option<NextGoal> {
    MILESTONE_LADDER
        .iter()
        .find(|&&m| m > top_streak)
        .map(|&m| NextGoal {
            milestone_days: m,
            remaining_days: m - top_streak,
        })
}
