use crate::dom::{NodeId, Role, Tree};
use crate::places::SuggestionItem;

/// Label of the select-to-refine affordance rendered on every item
pub const COPY_GLYPH: &str = "✈";

/// Loaded suggestions and the tree nodes that render them
///
/// Every item becomes a `SuggestItem` node with `City`, `Country`, `Code`
/// and `Copy` children under the list container.
#[derive(Debug)]
pub struct SuggestionList {
    container: NodeId,
    items: Vec<SuggestionItem>,
    item_nodes: Vec<NodeId>,
}

impl SuggestionList {
    pub fn new(container: NodeId) -> Self {
        Self {
            container,
            items: Vec::new(),
            item_nodes: Vec::new(),
        }
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn items(&self) -> &[SuggestionItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&SuggestionItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_nodes(&self) -> &[NodeId] {
        &self.item_nodes
    }

    /// Replace every rendered item
    pub fn load(&mut self, tree: &mut Tree, items: Vec<SuggestionItem>) {
        self.clear(tree);

        for item in &items {
            let node = tree.append(self.container, Role::SuggestItem, "");
            tree.append(node, Role::City, item.city());
            tree.append(node, Role::Country, item.country());
            tree.append(node, Role::Code, item.code());
            tree.append(node, Role::Copy, COPY_GLYPH);
            self.item_nodes.push(node);
        }
        self.items = items;
    }

    /// Empty the list; the container keeps its visibility
    pub fn clear(&mut self, tree: &mut Tree) {
        tree.remove_children(self.container);
        self.items.clear();
        self.item_nodes.clear();
    }

    pub fn show(&self, tree: &mut Tree) {
        tree.set_hidden(self.container, false);
    }

    pub fn hide(&self, tree: &mut Tree) {
        tree.set_hidden(self.container, true);
    }

    pub fn is_visible(&self, tree: &Tree) -> bool {
        !tree.is_hidden(self.container)
    }

    /// Index of the item that `node` belongs to, if it is part of this list
    pub fn item_index(&self, tree: &Tree, node: NodeId) -> Option<usize> {
        let item = tree.ancestor_with_role(node, Role::SuggestItem)?;
        self.item_nodes.iter().position(|&candidate| candidate == item)
    }

    /// Move the active marker; `None` leaves no item marked
    pub fn mark_active(&self, tree: &mut Tree, index: Option<usize>) {
        for (i, &node) in self.item_nodes.iter().enumerate() {
            tree.set_active(node, Some(i) == index);
        }
    }

    #[cfg(test)]
    pub fn active_index(&self, tree: &Tree) -> Option<usize> {
        self.item_nodes.iter().position(|&node| tree.is_active(node))
    }
}
