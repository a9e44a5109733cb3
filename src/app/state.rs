use std::time::{Duration, Instant};

use serde_json::{Map, Value};

use crate::config::Config;
use crate::dom::{NodeId, Tree};
use crate::field::FieldController;
use crate::layout::LayoutRegions;
use crate::places::PlacesClient;

/// Inputs of the search form, top to bottom
pub const FIELD_LABELS: [&str; 2] = ["From", "To"];

/// Application state
pub struct App {
    pub tree: Tree,
    pub fields: Vec<FieldController>,
    /// Node that last received focus
    pub focus: Option<NodeId>,
    /// Where nodes were painted by the last render
    pub regions: LayoutRegions,
    pub should_quit: bool,
    /// JSON printed after exit, set only on submit
    pub output: Option<String>,
}

impl App {
    /// Build the form with one suggest field per label and focus the first
    pub fn new(config: &Config) -> Self {
        let client = PlacesClient::new(config.api.clone());
        let debounce = Duration::from_millis(config.suggest.debounce_ms);

        let mut tree = Tree::new();
        let fields = FIELD_LABELS
            .iter()
            .map(|label| FieldController::attach(&mut tree, *label, client.clone(), debounce))
            .collect();

        let mut app = Self {
            tree,
            fields,
            focus: None,
            regions: LayoutRegions::new(),
            should_quit: false,
            output: None,
        };

        if let Some(first) = app.fields.first().map(|field| field.nodes().input) {
            app.focus(first);
        }
        app
    }

    /// Put `text` into field `index` as if it had been typed
    pub fn prefill(&mut self, index: usize, text: &str) {
        if let Some(field) = self.fields.get_mut(index) {
            field.set_value(text);
            field.on_input(&mut self.tree);
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Move focus to `target` and let every field react to it
    pub fn focus(&mut self, target: NodeId) {
        self.focus = Some(target);
        for field in &mut self.fields {
            field.on_focus_in(&mut self.tree, target);
        }
    }

    pub fn focused_field_index(&self) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| Some(field.nodes().input) == self.focus)
    }

    /// Focus the next or previous input, wrapping around
    pub fn cycle_focus(&mut self, forward: bool) {
        let count = self.fields.len();
        if count == 0 {
            return;
        }

        let next = match self.focused_field_index() {
            Some(i) if forward => (i + 1) % count,
            Some(i) => (i + count - 1) % count,
            None if forward => 0,
            None => count - 1,
        };
        let input = self.fields[next].nodes().input;
        self.focus(input);
    }

    /// Committed places keyed by lowercase field label, null where none
    pub fn submission(&self) -> Value {
        let mut places = Map::new();
        for field in &self.fields {
            let place = field
                .committed()
                .and_then(|item| serde_json::to_value(item).ok())
                .unwrap_or(Value::Null);
            places.insert(field.label().to_lowercase(), place);
        }
        Value::Object(places)
    }

    pub fn submit(&mut self) {
        self.output = Some(self.submission().to_string());
        self.should_quit = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance every field's debounce and apply finished fetches
    pub fn tick(&mut self, now: Instant) {
        for field in &mut self.fields {
            field.on_tick(&mut self.tree, now);
        }
    }
}
