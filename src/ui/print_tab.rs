//! Print tab: day selection and the printable sheet preview.
//!
//! The sheet mirrors the paper layout: two tracking blocks (weeks 1-3 and
//! 4-6) per day, each exercise with its reps/rest and blank week cells to
//! fill in at the gym.

use egui::{RichText, ScrollArea, Ui};

use crate::plan::sheet::{build_sheet, PrintSheet, TRACKING_ROWS, WEEKS_PER_BLOCK, WEEK_BLOCKS};
use crate::plan::WorkoutTemplate;
use crate::storage::StorageSlot;

/// Render the print tab.
pub fn show<S: StorageSlot>(ui: &mut Ui, template: &mut WorkoutTemplate<S>) {
    ui.heading("Printable View");
    ui.add_space(8.0);

    if template.days().is_empty() {
        ui.label(RichText::new("Create and select a day to view a printable sheet.").weak());
        return;
    }

    let day_options: Vec<(String, String)> = template
        .days()
        .iter()
        .map(|d| (d.id.clone(), d.title.clone()))
        .collect();

    let mut selection = template.selected_print_day_id().to_string();
    let selected_title = day_options
        .iter()
        .find(|(id, _)| *id == selection)
        .map(|(_, title)| title.as_str())
        .unwrap_or("Select a day");

    egui::ComboBox::from_id_salt("print_day_picker")
        .selected_text(selected_title)
        .show_ui(ui, |ui| {
            for (id, title) in &day_options {
                ui.selectable_value(&mut selection, id.clone(), title);
            }
        });

    if selection != template.selected_print_day_id() {
        template.select_print_day(selection);
    }

    ui.add_space(12.0);
    ui.separator();
    ui.add_space(12.0);

    let sheet = template
        .printable_day()
        .map(|day| build_sheet(day, template.exercises()));

    match sheet {
        Some(sheet) => {
            ScrollArea::vertical().show(ui, |ui| {
                for (label, start_week) in WEEK_BLOCKS {
                    show_block(ui, &sheet, label, start_week);
                    ui.add_space(16.0);
                }
            });
        }
        None => {
            ui.label(RichText::new("Create and select a day to view a printable sheet.").weak());
        }
    }
}

/// Render one tracking block of the sheet.
fn show_block(ui: &mut Ui, sheet: &PrintSheet, label: &str, start_week: u32) {
    ui.label(
        RichText::new(format!("{} — copy {}", sheet.title, label))
            .size(20.0)
            .strong(),
    );
    ui.add_space(8.0);

    for (row_index, row) in sheet.rows.iter().enumerate() {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&row.name).strong());
            if !row.notes.is_empty() {
                ui.label(RichText::new(&row.notes).weak());
            }
        });

        egui::Grid::new(format!("sheet_{label}_{row_index}"))
            .num_columns(2 + WEEKS_PER_BLOCK as usize)
            .spacing([12.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                ui.label(RichText::new("REPS").small().strong());
                ui.label(RichText::new("REST").small().strong());
                for week in start_week..start_week + WEEKS_PER_BLOCK {
                    ui.label(RichText::new(format!("WEEK {week}")).small().strong());
                }
                ui.end_row();

                for _ in 0..TRACKING_ROWS {
                    ui.label(&row.reps);
                    ui.label(&row.rest);
                    for _ in 0..WEEKS_PER_BLOCK {
                        ui.label("______");
                    }
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
    }
}
