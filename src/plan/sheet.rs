//! Printable sheet view model.
//!
//! A sheet is built fresh from a day and the exercise collection each time
//! it is rendered. A day may reference an exercise that no longer exists
//! (only between a delete and its cascade, or in never-cleaned imports);
//! such rows render as removed-item placeholders instead of failing.

use super::types::{Exercise, ExerciseDay};

/// Tracking blocks printed side by side: (label, starting week).
pub const WEEK_BLOCKS: [(&str, u32); 2] = [("A", 1), ("B", 4)];

/// Weeks covered by one tracking block.
pub const WEEKS_PER_BLOCK: u32 = 3;

/// Blank tracking rows printed under each exercise.
pub const TRACKING_ROWS: usize = 3;

/// One exercise line on the printed sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    /// Exercise name, or a placeholder for a dangling reference
    pub name: String,
    /// Notes, empty when none
    pub notes: String,
    /// Upper-cased reps, "-" when empty
    pub reps: String,
    /// Upper-cased rest, "-" when empty
    pub rest: String,
}

impl SheetRow {
    fn removed(index: usize) -> Self {
        Self {
            name: format!("[Removed exercise {}]", index + 1),
            notes: String::new(),
            reps: "-".to_string(),
            rest: "-".to_string(),
        }
    }
}

/// A fully resolved printable sheet for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintSheet {
    /// Day title
    pub title: String,
    /// One row per referenced exercise, in day order
    pub rows: Vec<SheetRow>,
}

/// Resolve a day against the exercise collection into a printable sheet.
pub fn build_sheet(day: &ExerciseDay, exercises: &[Exercise]) -> PrintSheet {
    let rows = day
        .exercise_ids
        .iter()
        .enumerate()
        .map(|(index, id)| match exercises.iter().find(|e| &e.id == id) {
            Some(exercise) => SheetRow {
                name: exercise.name.clone(),
                notes: exercise.notes.clone(),
                reps: upper_or_dash(&exercise.reps),
                rest: upper_or_dash(&exercise.rest),
            },
            None => SheetRow::removed(index),
        })
        .collect();

    PrintSheet {
        title: day.title.clone(),
        rows,
    }
}

fn upper_or_dash(text: &str) -> String {
    if text.is_empty() {
        "-".to_string()
    } else {
        text.to_uppercase()
    }
}
