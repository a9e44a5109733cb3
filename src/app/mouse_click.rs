//! Mouse click handling
//!
//! Handles click events to change focus and activate field parts.

use super::state::App;
use crate::dom::{NodeId, Role};

/// Handle left mouse button click on `target`
///
/// A click on nothing moves focus to the form itself, closing every
/// dropdown. Inputs take focus; other nodes are routed to the fields, which
/// may ask for their input to be refocused.
pub fn handle_click(app: &mut App, target: Option<NodeId>) {
    let Some(target) = target else {
        let root = app.tree.root();
        app.focus(root);
        return;
    };

    if app.tree.role(target) == Some(Role::Input) {
        app.focus(target);
    }

    let mut refocus = None;
    for field in &mut app.fields {
        if let Some(input) = field.on_click(&mut app.tree, target) {
            refocus = Some(input);
        }
    }

    if let Some(input) = refocus {
        app.focus(input);
    }
}
