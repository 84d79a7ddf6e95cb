//! Daily check-in commands for CLI.

use clap::Subcommand;
use habitforge_core::{achievements, EntryStatus};

use super::open_tracker;

#[derive(Subcommand)]
pub enum CheckinAction {
    /// Toggle today's check-in for a habit
    Toggle {
        /// Habit ID
        id: String,
    },
    /// Show today's scheduled habits and completion
    Today,
}

fn status_mark(status: EntryStatus) -> &'static str {
    match status {
        EntryStatus::Done => "[x]",
        EntryStatus::Missed => "[-]",
        EntryStatus::Unset => "[ ]",
    }
}

pub fn run(action: CheckinAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, mut tracker) = open_tracker()?;

    match action {
        CheckinAction::Toggle { id } => {
            let outcome = tracker.toggle(&id)?;
            tracker.save(&mut store)?;

            let name = tracker.habit(&id).map(|h| h.name.clone()).unwrap_or_default();
            match outcome.status {
                EntryStatus::Done => {
                    let streak = tracker.streak(&id)?;
                    println!("Checked in: {name} (streak {streak}d)");
                    if outcome.xp_awarded > 0 {
                        println!(
                            "+{} xp (level {}, {} xp total)",
                            outcome.xp_awarded,
                            tracker.profile().level,
                            tracker.profile().xp
                        );
                    }
                    for code in &outcome.unlocked {
                        if let Some(a) = achievements::find(code) {
                            println!("Achievement unlocked: {} {} ({})", a.icon, a.title, a.code);
                        }
                    }
                }
                _ => println!("Marked missed: {name}"),
            }
        }
        CheckinAction::Today => {
            println!("{}", tracker.today());
            for habit in tracker.scheduled_today() {
                println!(
                    "{} {} {} (streak {}d)",
                    status_mark(tracker.status_today(&habit.id)),
                    habit.icon,
                    habit.name,
                    tracker.streak_of(habit)
                );
            }
            println!("Completed: {}%", tracker.day_completion_percent());
            match tracker.next_goal() {
                Some(goal) => println!(
                    "Next goal: {} day streak ({} to go)",
                    goal.milestone_days, goal.remaining_days
                ),
                None => println!("Next goal: none, the ladder is complete"),
            }
        }
    }
    Ok(())
}
