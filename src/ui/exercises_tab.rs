//! Exercises tab: exercise list and the exercise editor modal.

use egui::{RichText, ScrollArea, Ui};

use crate::plan::WorkoutTemplate;
use crate::storage::StorageSlot;

/// Render the exercises tab.
pub fn show<S: StorageSlot>(ui: &mut Ui, template: &mut WorkoutTemplate<S>) {
    ui.horizontal(|ui| {
        ui.heading("Exercises");
        if ui.button("Add Exercise").clicked() {
            template.exercise_draft.open_create();
        }
    });

    ui.add_space(8.0);

    if template.exercises().is_empty() {
        ui.label(RichText::new("No exercises yet. Add one to get started.").weak());
    }

    // Actions are collected while rendering and applied afterwards, so the
    // list is never mutated mid-iteration.
    let mut edit_id: Option<String> = None;
    let mut delete_id: Option<String> = None;

    ScrollArea::vertical().show(ui, |ui| {
        for exercise in template.sorted_exercises() {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&exercise.name).strong());
                        ui.horizontal(|ui| {
                            if !exercise.reps.is_empty() {
                                ui.label(RichText::new(format!("Reps: {}", exercise.reps)).weak());
                            }
                            if !exercise.rest.is_empty() {
                                ui.label(RichText::new(format!("Rest: {}", exercise.rest)).weak());
                            }
                        });
                        if !exercise.notes.is_empty() {
                            ui.label(RichText::new(&exercise.notes).weak().italics());
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Delete").clicked() {
                            delete_id = Some(exercise.id.clone());
                        }
                        if ui.button("Edit").clicked() {
                            edit_id = Some(exercise.id.clone());
                        }
                    });
                });
            });
        }
    });

    if let Some(id) = edit_id {
        if let Some(exercise) = template.exercise(&id).cloned() {
            template.exercise_draft.open_edit(&exercise);
        }
    }
    if let Some(id) = delete_id {
        template.delete_exercise(&id);
    }

    if template.exercise_draft.open {
        show_editor(ui, template);
    }
}

/// Render the exercise editor modal.
fn show_editor<S: StorageSlot>(ui: &mut Ui, template: &mut WorkoutTemplate<S>) {
    let title = if template.exercise_draft.editing_id.is_some() {
        "Edit Exercise"
    } else {
        "New Exercise"
    };

    let mut save_clicked = false;
    let mut cancel_clicked = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            let draft = &mut template.exercise_draft;

            egui::Grid::new("exercise_form")
                .num_columns(2)
                .spacing([8.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.add(
                        egui::TextEdit::singleline(&mut draft.name)
                            .hint_text("e.g. Barbell Squat"),
                    );
                    ui.end_row();

                    ui.label("Reps");
                    ui.add(egui::TextEdit::singleline(&mut draft.reps).hint_text("e.g. 5x5"));
                    ui.end_row();

                    ui.label("Rest");
                    ui.add(egui::TextEdit::singleline(&mut draft.rest).hint_text("e.g. 90 sec"));
                    ui.end_row();

                    ui.label("Notes");
                    ui.text_edit_singleline(&mut draft.notes);
                    ui.end_row();
                });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    save_clicked = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel_clicked = true;
                }
            });
        });

    if save_clicked {
        // Rejected drafts (empty name) stay open for correction.
        template.save_exercise();
    }
    if cancel_clicked {
        template.exercise_draft.reset();
    }
}
