//! Structural node tree for the search form
//!
//! The form is described as a tree of role-tagged nodes. Widgets locate
//! their parts by role rather than by position, and event targets are
//! resolved back to the widget that owns them with [`Tree::ancestor_with_role`]
//! and [`Tree::contains`].

mod tree;

pub use tree::{Node, NodeId, Role, Tree};
