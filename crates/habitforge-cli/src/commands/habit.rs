//! Habit management commands for CLI.

use clap::Subcommand;
use habitforge_core::{EntryStatus, Frequency, HabitDraft, HabitKind};
use serde::Serialize;

use super::open_tracker;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Add {
        /// Habit name
        name: String,
        /// Habit description
        #[arg(long, default_value = "")]
        description: String,
        /// Habit kind: perform or avoid
        #[arg(long, default_value = "perform")]
        kind: String,
        /// Frequency: daily, weekdays, or custom
        #[arg(long, default_value = "daily")]
        frequency: String,
        /// Comma-separated weekday indices (0=Sunday..6=Saturday), for custom frequency
        #[arg(long)]
        days: Option<String>,
        /// Icon shown next to the habit
        #[arg(long, default_value = "✅")]
        icon: String,
        /// Accent color
        #[arg(long, default_value = "#7BE0B8")]
        color: String,
    },
    /// List habits with current streaks
    List,
    /// Show a habit
    Show {
        /// Habit ID
        id: String,
    },
    /// Edit a habit; omitted flags keep the current values
    Edit {
        /// Habit ID
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New kind: perform or avoid
        #[arg(long)]
        kind: Option<String>,
        /// New frequency: daily, weekdays, or custom
        #[arg(long)]
        frequency: Option<String>,
        /// New comma-separated weekday indices
        #[arg(long)]
        days: Option<String>,
        /// New icon
        #[arg(long)]
        icon: Option<String>,
        /// New color
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete a habit and purge its entries
    Delete {
        /// Habit ID
        id: String,
    },
}

/// One row of `habit list` output.
#[derive(Serialize)]
struct HabitRow<'a> {
    id: &'a str,
    name: &'a str,
    kind: HabitKind,
    frequency: Frequency,
    streak: u32,
    today: EntryStatus,
}

fn parse_kind(value: &str) -> Result<HabitKind, Box<dyn std::error::Error>> {
    match value {
        "perform" => Ok(HabitKind::Perform),
        "avoid" => Ok(HabitKind::Avoid),
        other => Err(format!("unknown kind '{other}' (expected perform or avoid)").into()),
    }
}

fn parse_frequency(value: &str) -> Result<Frequency, Box<dyn std::error::Error>> {
    match value {
        "daily" => Ok(Frequency::Daily),
        "weekdays" => Ok(Frequency::Weekdays),
        "custom" => Ok(Frequency::Custom),
        other => {
            Err(format!("unknown frequency '{other}' (expected daily, weekdays, or custom)").into())
        }
    }
}

fn parse_days(value: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut days = Vec::new();
    for part in value.split(',') {
        let day: u8 = part.trim().parse()?;
        if day > 6 {
            return Err(format!("weekday index {day} out of range (0=Sunday..6=Saturday)").into());
        }
        days.push(day);
    }
    Ok(days)
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, mut tracker) = open_tracker()?;

    match action {
        HabitAction::Add {
            name,
            description,
            kind,
            frequency,
            days,
            icon,
            color,
        } => {
            let draft = HabitDraft {
                name,
                description,
                kind: parse_kind(&kind)?,
                frequency: parse_frequency(&frequency)?,
                scheduled_days: days.as_deref().map(parse_days).transpose()?.unwrap_or_default(),
                icon,
                color,
            };
            let habit = tracker.add_habit(draft).clone();
            tracker.save(&mut store)?;
            println!("Habit created: {}", habit.id);
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::List => {
            let rows: Vec<HabitRow> = tracker
                .habits()
                .iter()
                .map(|h| HabitRow {
                    id: &h.id,
                    name: &h.name,
                    kind: h.kind,
                    frequency: h.frequency,
                    streak: tracker.streak_of(h),
                    today: tracker.status_today(&h.id),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        HabitAction::Show { id } => match tracker.habit(&id) {
            Some(habit) => println!("{}", serde_json::to_string_pretty(habit)?),
            None => println!("Habit not found: {id}"),
        },
        HabitAction::Edit {
            id,
            name,
            description,
            kind,
            frequency,
            days,
            icon,
            color,
        } => {
            let current = tracker
                .habit(&id)
                .ok_or(format!("Habit not found: {id}"))?;
            let mut draft = current.to_draft();

            if let Some(n) = name {
                draft.name = n;
            }
            if let Some(d) = description {
                draft.description = d;
            }
            if let Some(k) = kind {
                draft.kind = parse_kind(&k)?;
            }
            if let Some(f) = frequency {
                draft.frequency = parse_frequency(&f)?;
            }
            if let Some(d) = days {
                draft.scheduled_days = parse_days(&d)?;
            }
            if let Some(i) = icon {
                draft.icon = i;
            }
            if let Some(c) = color {
                draft.color = c;
            }

            let habit = tracker.edit_habit(&id, draft)?.clone();
            tracker.save(&mut store)?;
            println!("Habit updated:");
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::Delete { id } => {
            let purged = tracker.delete_habit(&id)?;
            tracker.save(&mut store)?;
            println!("Habit deleted: {id} ({purged} entries purged)");
        }
    }
    Ok(())
}
