//! Main application state and egui integration.

use eframe::egui;

use repsheet::plan::WorkoutTemplate;
use repsheet::storage::{FileSlot, TemplateStore};
use repsheet::ui::{days_tab, exercises_tab, print_tab, Tab};

/// Main application state.
pub struct RepSheetApp {
    /// Authoritative template state over the file-backed slot
    template: WorkoutTemplate<FileSlot>,
    /// Active tab
    active_tab: Tab,
    /// Last import failure message, shown in the footer
    import_error: Option<String>,
    /// Whether the clear button is awaiting confirmation
    confirm_clear: bool,
}

impl RepSheetApp {
    /// Create a new application instance, loading persisted data.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let slot = FileSlot::in_data_dir();
        tracing::info!(path = %slot.path().display(), "using storage slot");

        let template = WorkoutTemplate::new(TemplateStore::new(slot));

        Self {
            template,
            active_tab: Tab::default(),
            import_error: None,
            confirm_clear: false,
        }
    }

    /// Render the export/import/clear footer.
    fn show_footer(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Export").clicked() {
                self.export_data();
            }

            if ui.button("Import").clicked() {
                self.import_data();
            }

            if self.confirm_clear {
                ui.label("Delete everything?");
                if ui.button("Yes, clear").clicked() {
                    self.template.clear_all();
                    self.confirm_clear = false;
                }
                if ui.button("Keep data").clicked() {
                    self.confirm_clear = false;
                }
            } else if ui.button("Clear All").clicked() {
                self.confirm_clear = true;
            }

            if let Some(error) = &self.import_error {
                ui.label(egui::RichText::new(error).color(egui::Color32::from_rgb(234, 67, 53)));
            }
        });
    }

    fn export_data(&mut self) {
        let file_name = format!(
            "workout-template-data-{}.json",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(file_name)
            .save_file()
        else {
            return;
        };

        if let Err(e) = std::fs::write(&path, self.template.export_json()) {
            tracing::warn!("export failed: {e}");
            self.import_error = Some("Export failed.".to_string());
        }
    }

    fn import_data(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("import read failed: {e}");
                self.import_error = Some("Could not read the selected file.".to_string());
                return;
            }
        };

        if self.template.import_json(&raw) {
            self.import_error = None;
        } else {
            self.import_error =
                Some("Invalid file: not a recognized workout data export.".to_string());
        }
    }
}

impl eframe::App for RepSheetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("RepSheet").strong());
                ui.separator();
                for tab in Tab::all() {
                    ui.selectable_value(&mut self.active_tab, tab, tab.label());
                }
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            self.show_footer(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.active_tab {
            Tab::Exercises => exercises_tab::show(ui, &mut self.template),
            Tab::Days => days_tab::show(ui, &mut self.template),
            Tab::Print => print_tab::show(ui, &mut self.template),
        });
    }
}
