//! Suggestion dropdown state
//!
//! [`SuggestionList`] mirrors the loaded suggestions into the form tree and
//! [`SelectionCursor`] tracks the highlighted entry.

mod cursor;
mod list;

pub use cursor::SelectionCursor;
pub use list::{COPY_GLYPH, SuggestionList};
