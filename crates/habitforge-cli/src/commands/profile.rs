//! Profile commands for CLI.

use clap::Subcommand;

use super::open_tracker;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the user profile
    Show,
    /// Rename the user profile
    Rename {
        /// New display name
        name: String,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, mut tracker) = open_tracker()?;

    match action {
        ProfileAction::Show => {
            let profile = tracker.profile();
            println!("{}", profile.name);
            println!("Level {} ({} xp)", profile.level, profile.xp);
            println!("{}", serde_json::to_string_pretty(profile)?);
        }
        ProfileAction::Rename { name } => {
            tracker.set_name(&name);
            tracker.save(&mut store)?;
            println!("Profile renamed: {name}");
        }
    }
    Ok(())
}
