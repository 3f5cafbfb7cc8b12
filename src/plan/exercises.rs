//! Exercise editor draft state.

use super::types::{make_id, Exercise, DEFAULT_REPS, DEFAULT_REST};

/// In-progress exercise form: field values plus editing/modal state.
#[derive(Debug, Clone)]
pub struct ExerciseDraft {
    /// Name field
    pub name: String,
    /// Reps field
    pub reps: String,
    /// Rest field
    pub rest: String,
    /// Notes field
    pub notes: String,
    /// Id of the exercise being edited, if any
    pub editing_id: Option<String>,
    /// Whether the editor modal is open
    pub open: bool,
}

impl Default for ExerciseDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            reps: DEFAULT_REPS.to_string(),
            rest: DEFAULT_REST.to_string(),
            notes: String::new(),
            editing_id: None,
            open: false,
        }
    }
}

impl ExerciseDraft {
    /// Reset to the empty default and close the modal.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Open the modal with a fresh draft for creating a new exercise.
    pub fn open_create(&mut self) {
        self.reset();
        self.open = true;
    }

    /// Open the modal pre-filled from an existing exercise.
    pub fn open_edit(&mut self, exercise: &Exercise) {
        self.editing_id = Some(exercise.id.clone());
        self.name = exercise.name.clone();
        self.reps = exercise.reps.clone();
        self.rest = exercise.rest.clone();
        self.notes = exercise.notes.clone();
        self.open = true;
    }

    /// Whether this draft is currently editing the given exercise.
    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_id.as_deref() == Some(id)
    }

    /// Build a trimmed exercise from the draft.
    ///
    /// `None` if the trimmed name is empty. Keeps the editing id when
    /// present, otherwise generates a fresh one.
    pub fn build(&self) -> Option<Exercise> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }

        Some(Exercise {
            id: self.editing_id.clone().unwrap_or_else(make_id),
            name: name.to_string(),
            reps: self.reps.trim().to_string(),
            rest: self.rest.trim().to_string(),
            notes: self.notes.trim().to_string(),
        })
    }
}
