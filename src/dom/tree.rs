/// Handle to a node stored in a [`Tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// What part of the form a node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Form,
    Field,
    Input,
    Clear,
    SuggestList,
    SuggestItem,
    City,
    Country,
    Code,
    Copy,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub role: Role,
    pub text: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub hidden: bool,
    pub active: bool,
}

impl Node {
    fn new(role: Role, text: String, parent: Option<NodeId>) -> Self {
        Self {
            role,
            text,
            parent,
            children: Vec::new(),
            hidden: false,
            active: false,
        }
    }
}

/// Arena of nodes rooted at a single `Form` node
///
/// Slots of removed nodes are recycled, so a `NodeId` is only meaningful
/// while the node it was issued for is still attached.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
    root: NodeId,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(Node::new(Role::Form, String::new(), None))],
            free: Vec::new(),
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn role(&self, id: NodeId) -> Option<Role> {
        self.get(id).map(|node| node.role)
    }

    pub fn text(&self, id: NodeId) -> &str {
        self.get(id).map(|node| node.text.as_str()).unwrap_or("")
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// Append a new child at the end of `parent`'s children
    pub fn append(&mut self, parent: NodeId, role: Role, text: impl Into<String>) -> NodeId {
        let node = Node::new(role, text.into(), Some(parent));
        let id = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        };

        if let Some(parent_node) = self.get_mut(parent) {
            parent_node.children.push(id);
        }
        id
    }

    /// Detach and free every descendant of `id`
    pub fn remove_children(&mut self, id: NodeId) {
        let children = match self.get_mut(id) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };

        let mut stack = children;
        while let Some(child) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(child.0).and_then(Option::take) {
                stack.extend(node.children);
                self.free.push(child.0);
            }
        }
    }

    /// Nearest node with the given role, starting at `id` itself and walking up
    pub fn ancestor_with_role(&self, id: NodeId, role: Role) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id)?;
            if node.role == role {
                return Some(node_id);
            }
            current = node.parent;
        }
        None
    }

    /// Whether `id` is `ancestor` or lies in its subtree
    pub fn contains(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == ancestor {
                return true;
            }
            current = self.parent(node_id);
        }
        false
    }

    /// First descendant of `id` (depth-first, document order) with the given role
    pub fn find_descendant(&self, id: NodeId, role: Role) -> Option<NodeId> {
        for &child in self.children(id) {
            if self.role(child) == Some(role) {
                return Some(child);
            }
            if let Some(found) = self.find_descendant(child, role) {
                return Some(found);
            }
        }
        None
    }

    /// Position of `id` among its parent's children
    #[cfg(test)]
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&child| child == id)
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.get(id).is_none_or(|node| node.hidden)
    }

    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        if let Some(node) = self.get_mut(id) {
            node.hidden = hidden;
        }
    }

    pub fn is_active(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|node| node.active)
    }

    pub fn set_active(&mut self, id: NodeId, active: bool) {
        if let Some(node) = self.get_mut(id) {
            node.active = active;
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}
