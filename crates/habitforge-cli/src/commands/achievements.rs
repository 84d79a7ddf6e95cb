//! Achievement commands for CLI.

use clap::Subcommand;
use habitforge_core::CATALOG;

use super::open_tracker;

#[derive(Subcommand)]
pub enum AchievementsAction {
    /// List catalog badges with unlock state
    List {
        /// Only show unlocked badges
        #[arg(long)]
        unlocked: bool,
    },
}

pub fn run(action: AchievementsAction) -> Result<(), Box<dyn std::error::Error>> {
    let (_store, tracker) = open_tracker()?;

    match action {
        AchievementsAction::List { unlocked } => {
            for achievement in &CATALOG {
                let is_unlocked = tracker.unlocked().contains(achievement.code);
                if unlocked && !is_unlocked {
                    continue;
                }
                let state = if is_unlocked { "unlocked" } else { "locked" };
                println!(
                    "{} {} ({}d) - {} [{state}]",
                    achievement.icon,
                    achievement.title,
                    achievement.milestone_days,
                    achievement.description
                );
            }
        }
    }
    Ok(())
}
