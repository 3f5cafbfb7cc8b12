//! The workout template: authoritative in-memory state and its operations.
//!
//! Owns the dataset, both editor drafts, and the print selection. Every
//! mutation that changes exercises or days persists synchronously through
//! the injected storage adapter. Exercise deletion cascades into days and
//! drafts inside one call, so no caller ever observes a dangling reference
//! mid-delete.

use tracing::{debug, info};

use super::days::DayDraft;
use super::exercises::ExerciseDraft;
use super::types::{AppData, Exercise, ExerciseDay};
use crate::storage::slot::StorageSlot;
use crate::storage::store::TemplateStore;

/// Authoritative application state over an injected storage adapter.
pub struct WorkoutTemplate<S: StorageSlot> {
    data: AppData,
    store: TemplateStore<S>,
    /// Exercise editor form state
    pub exercise_draft: ExerciseDraft,
    /// Day editor form state
    pub day_draft: DayDraft,
    selected_print_day_id: String,
}

impl<S: StorageSlot> WorkoutTemplate<S> {
    /// Load persisted state through the adapter and initialize drafts.
    pub fn new(mut store: TemplateStore<S>) -> Self {
        let data = store.load();
        let day_draft = DayDraft::for_day_count(data.days.len());
        let selected_print_day_id = data
            .days
            .first()
            .map(|day| day.id.clone())
            .unwrap_or_default();

        Self {
            data,
            store,
            exercise_draft: ExerciseDraft::default(),
            day_draft,
            selected_print_day_id,
        }
    }

    /// All exercises in insertion order.
    pub fn exercises(&self) -> &[Exercise] {
        &self.data.exercises
    }

    /// All days in insertion order.
    pub fn days(&self) -> &[ExerciseDay] {
        &self.data.days
    }

    /// Exercises sorted by name, case-insensitive. A view: the underlying
    /// collection keeps insertion order.
    pub fn sorted_exercises(&self) -> Vec<&Exercise> {
        let mut sorted: Vec<&Exercise> = self.data.exercises.iter().collect();
        sorted.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        sorted
    }

    /// Look up an exercise by id.
    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.data.exercises.iter().find(|e| e.id == id)
    }

    /// Look up a day by id.
    pub fn day(&self, id: &str) -> Option<&ExerciseDay> {
        self.data.days.iter().find(|d| d.id == id)
    }

    // --- Exercise operations ---

    /// Save the exercise draft: replace in place when editing, append
    /// otherwise. Rejects an empty trimmed name and leaves the draft
    /// untouched. Returns whether anything was saved.
    pub fn save_exercise(&mut self) -> bool {
        let Some(exercise) = self.exercise_draft.build() else {
            return false;
        };

        if self.exercise_draft.editing_id.is_some() {
            if let Some(existing) = self
                .data
                .exercises
                .iter_mut()
                .find(|e| e.id == exercise.id)
            {
                *existing = exercise;
            }
        } else {
            debug!(name = %exercise.name, "created exercise");
            self.data.exercises.push(exercise);
        }

        self.exercise_draft.reset();
        self.persist();
        true
    }

    /// Delete an exercise and cascade the deletion.
    ///
    /// In order: remove from the collection, prune the id from every day
    /// (days are kept even when emptied), prune it from the day draft, and
    /// reset the exercise draft if it was editing this exercise. All of it
    /// happens before this call returns, followed by a single persist.
    pub fn delete_exercise(&mut self, id: &str) {
        self.data.exercises.retain(|e| e.id != id);

        for day in &mut self.data.days {
            day.exercise_ids.retain(|eid| eid != id);
        }
        self.day_draft.remove_exercise(id);

        if self.exercise_draft.is_editing(id) {
            self.exercise_draft.reset();
        }

        debug!(%id, "deleted exercise");
        self.persist();
    }

    // --- Day operations ---

    /// Save the day draft: replace in place when editing, append otherwise.
    /// Rejects an empty trimmed title or an empty exercise list and leaves
    /// the draft untouched. On success the draft resets to "Day N+1".
    /// Returns whether anything was saved.
    pub fn save_day(&mut self) -> bool {
        let Some(day) = self.day_draft.build() else {
            return false;
        };

        if self.day_draft.editing_id.is_some() {
            if let Some(existing) = self.data.days.iter_mut().find(|d| d.id == day.id) {
                *existing = day;
            }
        } else {
            debug!(title = %day.title, "created day");
            self.data.days.push(day);
        }

        self.day_draft.reset(self.data.days.len());
        self.refresh_print_selection();
        self.persist();
        true
    }

    /// Delete a day. Resets the day draft if it was editing this day.
    pub fn delete_day(&mut self, id: &str) {
        self.data.days.retain(|d| d.id != id);

        if self.day_draft.is_editing(id) {
            self.day_draft.reset(self.data.days.len());
        }

        self.refresh_print_selection();
        self.persist();
    }

    // --- Print selection ---

    /// The currently selected printable day id, empty when none.
    pub fn selected_print_day_id(&self) -> &str {
        &self.selected_print_day_id
    }

    /// Select a day for printing. A selection that does not resolve snaps
    /// to the first day.
    pub fn select_print_day(&mut self, id: String) {
        self.selected_print_day_id = id;
        self.refresh_print_selection();
    }

    /// The day currently selected for printing, if it resolves.
    pub fn printable_day(&self) -> Option<&ExerciseDay> {
        self.day(&self.selected_print_day_id)
    }

    fn refresh_print_selection(&mut self) {
        if self.data.days.is_empty() {
            self.selected_print_day_id.clear();
            return;
        }

        let resolves = self
            .data
            .days
            .iter()
            .any(|d| d.id == self.selected_print_day_id);
        if !resolves {
            self.selected_print_day_id = self.data.days[0].id.clone();
        }
    }

    // --- Import / export / clear ---

    /// Serialize the current dataset for export.
    pub fn export_json(&self) -> String {
        self.store.serialize(&self.data)
    }

    /// Replace the full dataset from an imported document.
    ///
    /// On success both collections are replaced (never merged) and the
    /// result is persisted. On failure nothing changes, in memory or on
    /// disk, and `false` is reported.
    pub fn import_json(&mut self, raw: &str) -> bool {
        let Some(data) = self.store.parse_imported(raw) else {
            return false;
        };

        info!(
            exercises = data.exercises.len(),
            days = data.days.len(),
            "imported data"
        );
        self.data = data;
        self.refresh_print_selection();
        self.persist();
        true
    }

    /// Erase persisted data and reset everything to empty. Irreversible.
    pub fn clear_all(&mut self) {
        info!("clearing all data");
        self.store.clear();
        self.data = AppData::default();
        self.exercise_draft.reset();
        self.day_draft.reset(0);
        self.refresh_print_selection();
    }

    fn persist(&mut self) {
        self.store.save(&self.data);
    }
}
