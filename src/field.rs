//! Suggest field
//!
//! One [`FieldController`] per form input. It owns the text input, the
//! suggestion list, the selection cursor and a debounced fetcher, and reacts
//! to events through the named handlers in `field_events`.

mod controller;
mod field_events;

pub use controller::{CLEAR_GLYPH, FieldController, FieldNodes};

#[cfg(test)]
#[path = "field/controller_tests.rs"]
mod controller_tests;
