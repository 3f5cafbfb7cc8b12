//! Days tab: day list and the day editor modal.

use egui::{RichText, ScrollArea, Ui};

use crate::plan::types::MAX_DAY_EXERCISES;
use crate::plan::WorkoutTemplate;
use crate::storage::StorageSlot;

/// Render the days tab.
pub fn show<S: StorageSlot>(ui: &mut Ui, template: &mut WorkoutTemplate<S>) {
    ui.horizontal(|ui| {
        ui.heading("Workout Days");
        if ui.button("Add Day").clicked() {
            let count = template.days().len();
            template.day_draft.open_create(count);
        }
    });

    ui.add_space(8.0);

    if template.days().is_empty() {
        ui.label(RichText::new("No days yet. Group exercises into a day to print it.").weak());
    }

    let mut edit_id: Option<String> = None;
    let mut delete_id: Option<String> = None;

    ScrollArea::vertical().show(ui, |ui| {
        for day in template.days() {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&day.title).strong());
                        let names: Vec<&str> = day
                            .exercise_ids
                            .iter()
                            .map(|id| {
                                template
                                    .exercise(id)
                                    .map(|e| e.name.as_str())
                                    .unwrap_or("[removed]")
                            })
                            .collect();
                        ui.label(RichText::new(names.join(", ")).weak());
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Delete").clicked() {
                            delete_id = Some(day.id.clone());
                        }
                        if ui.button("Edit").clicked() {
                            edit_id = Some(day.id.clone());
                        }
                    });
                });
            });
        }
    });

    if let Some(id) = edit_id {
        if let Some(day) = template.day(&id).cloned() {
            template.day_draft.open_edit(&day);
        }
    }
    if let Some(id) = delete_id {
        template.delete_day(&id);
    }

    if template.day_draft.open {
        show_editor(ui, template);
    }
}

/// Render the day editor modal.
fn show_editor<S: StorageSlot>(ui: &mut Ui, template: &mut WorkoutTemplate<S>) {
    let title = if template.day_draft.editing_id.is_some() {
        "Edit Day"
    } else {
        "New Day"
    };

    // Snapshots taken up front so the picker can render while the draft is
    // borrowed mutably.
    let options: Vec<(String, String)> = template
        .sorted_exercises()
        .iter()
        .map(|e| (e.id.clone(), e.name.clone()))
        .collect();
    let picked: Vec<(String, String)> = template
        .day_draft
        .exercise_ids
        .iter()
        .map(|id| {
            let name = template
                .exercise(id)
                .map(|e| e.name.clone())
                .unwrap_or_else(|| "[removed]".to_string());
            (id.clone(), name)
        })
        .collect();
    let mut save_clicked = false;
    let mut cancel_clicked = false;
    let mut add_clicked = false;
    let mut remove_id: Option<String> = None;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            let draft = &mut template.day_draft;

            ui.horizontal(|ui| {
                ui.label("Title");
                ui.text_edit_singleline(&mut draft.title);
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let selected_name = options
                    .iter()
                    .find(|(id, _)| *id == draft.selected_exercise_id)
                    .map(|(_, name)| name.as_str())
                    .unwrap_or("Pick an exercise");

                egui::ComboBox::from_id_salt("day_exercise_picker")
                    .selected_text(selected_name)
                    .show_ui(ui, |ui| {
                        for (id, name) in &options {
                            ui.selectable_value(
                                &mut draft.selected_exercise_id,
                                id.clone(),
                                name,
                            );
                        }
                    });

                let full = draft.exercise_ids.len() >= MAX_DAY_EXERCISES;
                if ui
                    .add_enabled(!full, egui::Button::new("Add"))
                    .clicked()
                {
                    add_clicked = true;
                }
                if full {
                    ui.label(
                        RichText::new(format!("max {MAX_DAY_EXERCISES}")).weak(),
                    );
                }
            });

            ui.add_space(8.0);

            for (id, name) in &picked {
                ui.horizontal(|ui| {
                    ui.label(name);
                    if ui.small_button("Remove").clicked() {
                        remove_id = Some(id.clone());
                    }
                });
            }

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

    if add_clicked {
        template.day_draft.add_selected_exercise();
    }
    if let Some(id) = remove_id {
        template.day_draft.remove_exercise(&id);
    }
    if save_clicked {
        // Rejected drafts (empty title or no exercises) stay open.
        template.save_day();
    }
    if cancel_clicked {
        let count = template.days().len();
        template.day_draft.reset(count);
    }
}
