//! Stored-data commands for CLI.

use clap::Subcommand;
use habitforge_core::storage::data_dir;
use habitforge_core::{reset_selected_data, DataResetOptions, JsonFileStore};

#[derive(Subcommand)]
pub enum DataAction {
    /// Clear stored data; select what with flags
    Reset {
        /// Clear the habit list (the next run re-seeds the starters)
        #[arg(long)]
        habits: bool,
        /// Clear the entry log
        #[arg(long)]
        entries: bool,
        /// Reset the user profile
        #[arg(long)]
        profile: bool,
        /// Clear unlocked achievements
        #[arg(long)]
        achievements: bool,
        /// Clear everything
        #[arg(long)]
        all: bool,
    },
    /// Print the data directory path
    Dir,
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DataAction::Reset {
            habits,
            entries,
            profile,
            achievements,
            all,
        } => {
            let options = if all {
                DataResetOptions::all()
            } else {
                DataResetOptions {
                    habits,
                    entries,
                    profile,
                    achievements,
                }
            };
            if options.is_empty() {
                return Err(
                    "nothing selected: pass --all or at least one of --habits, --entries, \
                     --profile, --achievements"
                        .into(),
                );
            }

            let mut store = JsonFileStore::open()?;
            let summary = reset_selected_data(&mut store, options)?;
            if options.habits {
                println!("cleared {} habit(s)", summary.cleared_habits);
            }
            if options.entries {
                println!("cleared {} entry day(s)", summary.cleared_entry_days);
            }
            if options.achievements {
                println!("cleared {} achievement(s)", summary.cleared_achievements);
            }
            if options.profile {
                println!("profile reset");
            }
        }
        DataAction::Dir => {
            println!("{}", data_dir()?.display());
        }
    }
    Ok(())
}
