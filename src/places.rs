//! Places API access
//!
//! Queries the travel autocomplete endpoint for cities and airports and
//! normalizes each returned record into a [`SuggestionItem`].

mod client;
mod item;

pub use client::PlacesClient;
pub use item::{SuggestionItem, parse_places};
