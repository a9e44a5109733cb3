//! Mouse hover handling

use super::state::App;
use crate::dom::NodeId;

/// Let every field react to the pointer resting on `target`
pub fn handle_hover(app: &mut App, target: Option<NodeId>) {
    let Some(target) = target else {
        return;
    };

    for field in &mut app.fields {
        field.on_hover(&mut app.tree, target);
    }
}
