//! Day editor draft state.

use super::types::{make_day_title, make_id, ExerciseDay, MAX_DAY_EXERCISES};

/// In-progress day form: title, picked exercises, and editing/modal state.
#[derive(Debug, Clone, Default)]
pub struct DayDraft {
    /// Title field
    pub title: String,
    /// Ordered exercise ids picked so far
    pub exercise_ids: Vec<String>,
    /// Id currently highlighted in the exercise picker
    pub selected_exercise_id: String,
    /// Id of the day being edited, if any
    pub editing_id: Option<String>,
    /// Whether the editor modal is open
    pub open: bool,
}

impl DayDraft {
    /// Fresh draft titled after the next day number.
    pub fn for_day_count(day_count: usize) -> Self {
        Self {
            title: make_day_title(day_count),
            ..Default::default()
        }
    }

    /// Reset to a fresh draft and close the modal.
    pub fn reset(&mut self, next_day_count: usize) {
        *self = Self::for_day_count(next_day_count);
    }

    /// Open the modal with a fresh draft for creating a new day.
    pub fn open_create(&mut self, day_count: usize) {
        self.reset(day_count);
        self.open = true;
    }

    /// Open the modal pre-filled from an existing day.
    pub fn open_edit(&mut self, day: &ExerciseDay) {
        self.editing_id = Some(day.id.clone());
        self.title = day.title.clone();
        self.exercise_ids = day.exercise_ids.clone();
        self.selected_exercise_id = String::new();
        self.open = true;
    }

    /// Whether this draft is currently editing the given day.
    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_id.as_deref() == Some(id)
    }

    /// Append the picked exercise to the draft.
    ///
    /// No-op when nothing is picked, the id is already present, or the
    /// draft is full. Clears the picker on success.
    pub fn add_selected_exercise(&mut self) {
        if self.selected_exercise_id.is_empty() {
            return;
        }
        if self.exercise_ids.contains(&self.selected_exercise_id) {
            return;
        }
        if self.exercise_ids.len() >= MAX_DAY_EXERCISES {
            return;
        }

        self.exercise_ids
            .push(std::mem::take(&mut self.selected_exercise_id));
    }

    /// Remove every occurrence of the given exercise id from the draft.
    pub fn remove_exercise(&mut self, exercise_id: &str) {
        self.exercise_ids.retain(|id| id != exercise_id);
    }

    /// Build a day from the draft.
    ///
    /// `None` if the trimmed title is empty or no exercises were picked.
    /// Keeps the editing id when present, otherwise generates a fresh one.
    pub fn build(&self) -> Option<ExerciseDay> {
        let title = self.title.trim();
        if title.is_empty() || self.exercise_ids.is_empty() {
            return None;
        }

        Some(ExerciseDay {
            id: self.editing_id.clone().unwrap_or_else(make_id),
            title: title.to_string(),
            exercise_ids: self.exercise_ids.clone(),
        })
    }
}
