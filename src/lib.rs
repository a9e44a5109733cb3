//! City and airport autocomplete fields for a terminal travel-search form
//!
//! Each form input is a [`field::FieldController`]: typing schedules a
//! debounced lookup against the places API, results are mirrored into the
//! form's node [`dom::Tree`], and the keyboard or mouse picks one of them.
//! The [`app::App`] host lays out two such fields and renders them with
//! ratatui.

pub mod app;
pub mod config;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod field;
pub mod layout;
pub mod places;
pub mod suggest;
pub mod widgets;
