use std::time::Duration;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::dom::{NodeId, Role, Tree};
use crate::fetch::SuggestFetcher;
use crate::places::{PlacesClient, SuggestionItem};
use crate::suggest::{SelectionCursor, SuggestionList};

/// Clear affordance label
pub const CLEAR_GLYPH: &str = "×";

/// Tree nodes that make up one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldNodes {
    pub field: NodeId,
    pub input: NodeId,
    pub clear: NodeId,
    pub list: NodeId,
}

pub struct FieldController {
    pub(super) label: String,
    pub(super) nodes: FieldNodes,
    pub(super) textarea: TextArea<'static>,
    pub(super) list: SuggestionList,
    pub(super) cursor: SelectionCursor,
    pub(super) fetcher: SuggestFetcher,
    pub(super) focused: bool,
    pub(super) committed: Option<SuggestionItem>,
}

impl FieldController {
    /// Build the field's nodes under the form root and attach to them
    ///
    /// Starts with no suggestions, the list hidden and the clear
    /// affordance hidden.
    pub fn attach(
        tree: &mut Tree,
        label: impl Into<String>,
        client: PlacesClient,
        debounce: Duration,
    ) -> Self {
        let label = label.into();
        let field = tree.append(tree.root(), Role::Field, label.clone());
        let input = tree.append(field, Role::Input, "");
        let clear = tree.append(field, Role::Clear, CLEAR_GLYPH);
        let list = tree.append(field, Role::SuggestList, "");
        tree.set_hidden(clear, true);
        tree.set_hidden(list, true);

        let nodes = FieldNodes {
            field,
            input,
            clear,
            list,
        };

        Self {
            textarea: new_textarea(&label, String::new(), false),
            label,
            nodes,
            list: SuggestionList::new(list),
            cursor: SelectionCursor::new(),
            fetcher: SuggestFetcher::new(client, debounce),
            focused: false,
            committed: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn nodes(&self) -> FieldNodes {
        self.nodes
    }

    /// Text currently displayed in the input
    pub fn value(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Replace the displayed text, leaving the caret at the end
    pub fn set_value(&mut self, text: &str) {
        self.textarea = new_textarea(&self.label, text.to_string(), self.focused);
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn list(&self) -> &SuggestionList {
        &self.list
    }

    pub fn cursor(&self) -> &SelectionCursor {
        &self.cursor
    }

    pub fn fetcher(&self) -> &SuggestFetcher {
        &self.fetcher
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Place committed by click or Enter since the last edit
    pub fn committed(&self) -> Option<&SuggestionItem> {
        self.committed.as_ref()
    }

    /// Replace the suggestions and drop the highlight
    pub fn load_suggestions(&mut self, tree: &mut Tree, items: Vec<SuggestionItem>) {
        self.list.load(tree, items);
        self.cursor.reset();
    }

    pub(super) fn clear_suggestions(&mut self, tree: &mut Tree) {
        self.list.clear(tree);
        self.cursor.reset();
    }

    /// Hover highlight: marker only, the input keeps its text
    pub fn set_active(&mut self, tree: &mut Tree, index: Option<usize>) {
        self.cursor.set_active(index);
        self.list.mark_active(tree, self.cursor.index());
    }

    /// Keyboard/click highlight that previews the city in the input
    pub fn select_active(&mut self, tree: &mut Tree, index: Option<usize>) {
        let current = self.value().to_string();
        let shown = self
            .cursor
            .select_active(index, &current, self.list.items());
        self.apply_preview(tree, &shown);
    }

    pub fn select_next(&mut self, tree: &mut Tree) {
        let current = self.value().to_string();
        let shown = self.cursor.next(&current, self.list.items());
        self.apply_preview(tree, &shown);
    }

    pub fn select_previous(&mut self, tree: &mut Tree) {
        let current = self.value().to_string();
        let shown = self.cursor.previous(&current, self.list.items());
        self.apply_preview(tree, &shown);
    }

    fn apply_preview(&mut self, tree: &mut Tree, shown: &str) {
        if shown != self.value() {
            self.set_value(shown);
        }
        self.list.mark_active(tree, self.cursor.index());
    }

    /// Finalize `index` as the field's value and close the dropdown
    pub fn commit(&mut self, tree: &mut Tree, index: Option<usize>) {
        self.select_active(tree, index);
        self.committed = self.cursor.index().and_then(|i| self.list.get(i)).cloned();

        let shown = self.value().to_string();
        self.cursor.save_text(&shown);
        self.clear_suggestions(tree);
    }

    /// Re-query suggestions for the displayed text without committing
    pub fn refine(&mut self) {
        let shown = self.value().to_string();
        self.fetcher.fetch(&shown);
    }

    pub(super) fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.textarea.set_block(input_block(&self.label, focused));
            self.textarea.set_cursor_style(caret_style(focused));
        }
    }
}

fn input_block(label: &str, focused: bool) -> Block<'static> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", label))
        .border_style(Style::default().fg(border))
}

/// Only the focused input draws a caret
fn caret_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}

fn new_textarea(label: &str, text: String, focused: bool) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text]);
    textarea.set_block(input_block(label, focused));
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(caret_style(focused));
    textarea.move_cursor(CursorMove::End);
    textarea
}
