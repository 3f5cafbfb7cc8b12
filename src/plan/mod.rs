//! Workout template domain: data model, editor drafts, and state.

pub mod days;
pub mod exercises;
pub mod sheet;
pub mod template;
pub mod types;

pub use days::DayDraft;
pub use exercises::ExerciseDraft;
pub use sheet::{build_sheet, PrintSheet, SheetRow};
pub use template::WorkoutTemplate;
pub use types::{AppData, Exercise, ExerciseDay, MAX_DAY_EXERCISES};
