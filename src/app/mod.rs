mod events;
mod mouse_click;
mod mouse_hover;
mod render;
mod state;

// Re-export public types
pub use render::{ColumnWidths, row_cells, split_clear_button};
pub use state::{App, FIELD_LABELS};


#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
