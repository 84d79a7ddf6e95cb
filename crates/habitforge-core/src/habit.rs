//! Habit definitions: perform/avoid polarity, schedule frequency, cosmetics.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Polarity of a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitKind {
    /// A day counts as done only when explicitly checked.
    Perform,
    /// A day counts as done by default unless explicitly marked missed.
    Avoid,
}

/// How often a habit is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Every day.
    Daily,
    /// Monday through Friday.
    Weekdays,
    /// Only the weekdays listed in `scheduled_days`.
    Custom,
}

/// A trackable recurring behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    /// Opaque unique id, assigned at creation, immutable.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: HabitKind,
    pub frequency: Frequency,
    /// Weekday indices (0 = Sunday .. 6 = Saturday); only meaningful with
    /// `Frequency::Custom`.
    #[serde(default)]
    pub scheduled_days: Vec<u8>,
    /// Cosmetic only.
    #[serde(default)]
    pub icon: String,
    /// Cosmetic only.
    #[serde(default)]
    pub color: String,
}

/// User-supplied fields for creating or editing a habit.
///
/// An edit replaces every field of the habit except its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: HabitKind,
    pub frequency: Frequency,
    #[serde(default)]
    pub scheduled_days: Vec<u8>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl Habit {
    /// Materialize a draft under a freshly generated id.
    pub fn from_draft(draft: HabitDraft) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), draft)
    }

    /// Materialize a draft under an existing id.
    pub fn with_id(id: String, draft: HabitDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            kind: draft.kind,
            frequency: draft.frequency,
            scheduled_days: draft.scheduled_days,
            icon: draft.icon,
            color: draft.color,
        }
    }

    /// The current field values as a draft, for partial edits.
    pub fn to_draft(&self) -> HabitDraft {
        HabitDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            kind: self.kind,
            frequency: self.frequency,
            scheduled_days: self.scheduled_days.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
        }
    }
}

/// Habits seeded on a first run with no persisted habit list.
pub fn starter_habits() -> Vec<Habit> {
    vec![
        Habit::from_draft(HabitDraft {
            name: "Meditate".to_string(),
            description: "5-10 minutes".to_string(),
            kind: HabitKind::Perform,
            frequency: Frequency::Daily,
            scheduled_days: Vec::new(),
            icon: "🧘".to_string(),
            color: "#7BE0B8".to_string(),
        }),
        Habit::from_draft(HabitDraft {
            name: "Read".to_string(),
            description: "10 pages".to_string(),
            kind: HabitKind::Perform,
            frequency: Frequency::Custom,
            scheduled_days: vec![1, 3, 5],
            icon: "📚".to_string(),
            color: "#FFD166".to_string(),
        }),
        Habit::from_draft(HabitDraft {
            name: "No sugar".to_string(),
            description: "Days without".to_string(),
            kind: HabitKind::Avoid,
            frequency: Frequency::Daily,
            scheduled_days: Vec::new(),
            icon: "🚫".to_string(),
            color: "#88B1FF".to_string(),
        }),
    ]
}
