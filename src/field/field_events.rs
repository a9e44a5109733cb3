//! Field event handlers
//!
//! | Event                      | Guard                          | Action                                          |
//! |----------------------------|--------------------------------|-------------------------------------------------|
//! | input changed              |                                | fetch text, toggle clear, forget committed place |
//! | clear clicked              |                                | hide clear, clear list, empty input; refocus    |
//! | Enter                      | highlight set and field focused | Shift/Alt: refine, else commit; save text       |
//! | Up / Down                  |                                | previous / next                                 |
//! | focus on own input         |                                | focused, show list                              |
//! | focus outside own subtree  |                                | unfocused, hide list                            |
//! | hover over list            | node inside an item            | move highlight only                             |
//! | click on list              | node inside an item            | copy affordance: refine, else commit; refocus   |
//! | tick                       |                                | fire due fetch, apply finished fetches          |

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::controller::FieldController;
use crate::debounce::Completion;
use crate::dom::{NodeId, Role, Tree};

impl FieldController {
    /// The input's text changed through editing
    pub fn on_input(&mut self, tree: &mut Tree) -> Completion {
        let text = self.value().to_string();
        self.committed = None;
        tree.set_hidden(self.nodes.clear, text.is_empty());
        self.fetcher.fetch(&text)
    }

    /// Handle a key pressed while the input has focus
    ///
    /// Returns false only for an Enter the field did not claim, so the host
    /// can apply its default action.
    pub fn on_key(&mut self, tree: &mut Tree, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => {
                let Some(index) = self.cursor.index() else {
                    return false;
                };
                if !self.focused {
                    return false;
                }

                // Alt+Enter for terminals that report Shift+Enter as Enter
                if key
                    .modifiers
                    .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT)
                {
                    self.refine();
                    let shown = self.value().to_string();
                    self.cursor.save_text(&shown);
                } else {
                    self.commit(tree, Some(index));
                }
                true
            }
            KeyCode::Up => {
                self.select_previous(tree);
                true
            }
            KeyCode::Down => {
                self.select_next(tree);
                true
            }
            _ => {
                if self.textarea.input(key) {
                    self.on_input(tree);
                }
                true
            }
        }
    }

    /// Insert pasted text as a single line
    pub fn on_paste(&mut self, tree: &mut Tree, text: &str) {
        let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if !line.is_empty() && self.textarea.insert_str(line) {
            self.on_input(tree);
        }
    }

    pub fn on_clear_click(&mut self, tree: &mut Tree) {
        tree.set_hidden(self.nodes.clear, true);
        self.clear_suggestions(tree);
        self.set_value("");
        self.committed = None;
    }

    /// Focus moved to `target` somewhere in the form
    pub fn on_focus_in(&mut self, tree: &mut Tree, target: NodeId) {
        if target == self.nodes.input {
            self.set_focused(true);
            self.list.show(tree);
        } else if !tree.contains(self.nodes.field, target) {
            self.set_focused(false);
            self.list.hide(tree);
        }
    }

    pub fn on_hover(&mut self, tree: &mut Tree, target: NodeId) {
        if let Some(index) = self.list.item_index(tree, target) {
            self.set_active(tree, Some(index));
        }
    }

    /// Handle a click on `target`
    ///
    /// Returns the node that should receive focus afterwards.
    pub fn on_click(&mut self, tree: &mut Tree, target: NodeId) -> Option<NodeId> {
        if tree.contains(self.nodes.clear, target) {
            self.on_clear_click(tree);
            return Some(self.nodes.input);
        }

        let index = self.list.item_index(tree, target)?;
        if tree.role(target) == Some(Role::Copy) {
            self.select_active(tree, Some(index));
            self.refine();
        } else {
            self.commit(tree, Some(index));
        }
        Some(self.nodes.input)
    }

    pub fn on_tick(&mut self, tree: &mut Tree, now: Instant) {
        if let Some(items) = self.fetcher.poll(now) {
            self.load_suggestions(tree, items);
        }
    }
}
