//! UI module for the egui-based user interface.

pub mod days_tab;
pub mod exercises_tab;
pub mod print_tab;

/// Top-level application tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Exercise catalog
    #[default]
    Exercises,
    /// Workout day builder
    Days,
    /// Printable sheet preview
    Print,
}

impl Tab {
    /// Display label for the tab bar.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Exercises => "Exercises",
            Tab::Days => "Days",
            Tab::Print => "Print",
        }
    }

    /// All tabs in display order.
    pub fn all() -> [Tab; 3] {
        [Tab::Exercises, Tab::Days, Tab::Print]
    }
}
