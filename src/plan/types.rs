//! Core data model: exercises, workout days, and the persisted dataset.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of exercises a single day may hold.
pub const MAX_DAY_EXERCISES: usize = 5;

/// Default reps for a new exercise draft.
pub const DEFAULT_REPS: &str = "8-10";

/// Default rest for a new exercise draft.
pub const DEFAULT_REST: &str = "90s";

/// A named movement with default reps/rest/notes, reusable across days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique, stable, opaque identifier
    pub id: String,
    /// Display name (required, non-empty after trimming)
    pub name: String,
    /// Free-text rep scheme, e.g. "5x5"
    pub reps: String,
    /// Free-text rest prescription, e.g. "90s"
    pub rest: String,
    /// Free-text notes
    pub notes: String,
}

/// An ordered, bounded list of exercise references, printable as one sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDay {
    /// Unique, stable identifier
    pub id: String,
    /// Display title, e.g. "Day 1"
    pub title: String,
    /// Ordered exercise references; no duplicates within one day
    #[serde(rename = "exerciseIds")]
    pub exercise_ids: Vec<String>,
}

/// The full in-memory dataset. This is the unit of persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppData {
    /// All defined exercises, unique by id, in insertion order
    pub exercises: Vec<Exercise>,
    /// All defined days, unique by id, in insertion order
    pub days: Vec<ExerciseDay>,
}

/// Generate a fresh opaque id for a new exercise or day.
///
/// Ids never change once assigned. Collision probability only needs to be
/// negligible for hand-entered data volumes.
pub fn make_id() -> String {
    Uuid::new_v4().to_string()
}

/// Default title for the next day, derived from the current day count.
pub fn make_day_title(day_count: usize) -> String {
    format!("Day {}", day_count + 1)
}
