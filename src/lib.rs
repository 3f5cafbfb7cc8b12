//! RepSheet - Printable Workout Sheet Builder
//!
//! Define exercises, group them into workout days, and print a sheet to
//! take to the gym. All data persists as a single versioned JSON document
//! on disk, with migration and self-healing on load.

pub mod plan;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use plan::template::WorkoutTemplate;
pub use plan::types::{AppData, Exercise, ExerciseDay};
pub use storage::slot::{FileSlot, MemorySlot, StorageSlot};
pub use storage::store::TemplateStore;
