//! Statistics commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use serde::Serialize;

use super::open_tracker;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Streak overview across habits
    Summary {
        /// Compute completion for a specific date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Per-habit streaks as JSON
    Streaks,
}

#[derive(Serialize)]
struct StreakRow<'a> {
    id: &'a str,
    name: &'a str,
    streak: u32,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let (_store, tracker) = open_tracker()?;

    match action {
        StatsAction::Summary { date } => {
            let on = date.unwrap_or_else(|| tracker.today());
            for habit in tracker.habits() {
                println!(
                    "{} {}: {} day(s)",
                    habit.icon,
                    habit.name,
                    tracker.streak_of(habit)
                );
            }
            let top = tracker.top_streak();
            if top > 0 {
                println!("Top active streak: {top} day(s)");
            } else {
                println!("No active streak yet.");
            }
            println!("Completion on {on}: {}%", tracker.day_completion_percent_on(on));
            match tracker.next_goal() {
                Some(goal) => println!(
                    "{} day(s) to the {} day milestone",
                    goal.remaining_days, goal.milestone_days
                ),
                None => println!("No further milestone."),
            }
        }
        StatsAction::Streaks => {
            let rows: Vec<StreakRow> = tracker
                .habits()
                .iter()
                .map(|h| StreakRow {
                    id: &h.id,
                    name: &h.name,
                    streak: tracker.streak_of(h),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}
