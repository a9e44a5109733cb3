//! Tests for FieldController state operations

use crate::dom::{Role, Tree};
use crate::test_utils::test_helpers::{offline_client, sample_places, test_field};

#[test]
fn test_attach_builds_field_subtree() {
    let mut tree = Tree::new();
    let field = test_field(&mut tree, offline_client());
    let nodes = field.nodes();

    assert_eq!(tree.role(nodes.field), Some(Role::Field));
    assert_eq!(tree.parent(nodes.field), Some(tree.root()));
    assert_eq!(tree.children(nodes.field), &[nodes.input, nodes.clear, nodes.list]);
    assert_eq!(tree.role(nodes.input), Some(Role::Input));
    assert_eq!(tree.role(nodes.clear), Some(Role::Clear));
    assert_eq!(tree.role(nodes.list), Some(Role::SuggestList));
}

#[test]
fn test_initial_state() {
    let mut tree = Tree::new();
    let field = test_field(&mut tree, offline_client());

    assert_eq!(field.label(), "From");
    assert_eq!(field.value(), "");
    assert_eq!(field.cursor().index(), None);
    assert!(field.list().is_empty());
    assert!(!field.list().is_visible(&tree));
    assert!(tree.is_hidden(field.nodes().clear));
    assert!(!field.is_focused());
    assert!(field.committed().is_none());
    assert!(field.fetcher().is_idle());
}

#[test]
fn test_set_value_moves_caret_to_end() {
    let mut tree = Tree::new();
    let mut field = test_field(&mut tree, offline_client());

    field.set_value("Odesa");

    assert_eq!(field.value(), "Odesa");
    assert_eq!(field.textarea().cursor(), (0, 5));
}

#[test]
fn test_load_suggestions_resets_highlight() {
    let mut tree = Tree::new();
    let mut field = test_field(&mut tree, offline_client());
    field.load_suggestions(&mut tree, sample_places());
    field.select_active(&mut tree, Some(1));

    field.load_suggestions(&mut tree, sample_places());

    assert_eq!(field.cursor().index(), None);
    assert_eq!(field.list().active_index(&tree), None);
    assert_eq!(field.list().len(), 3);
}

#[test]
fn test_select_active_previews_city() {
    let mut tree = Tree::new();
    let mut field = test_field(&mut tree, offline_client());
    field.set_value("Ky");
    field.load_suggestions(&mut tree, sample_places());

    field.select_active(&mut tree, Some(2));

    assert_eq!(field.value(), "Kyiv-Zhuliany");
    assert_eq!(field.cursor().saved_text(), "Ky");
    assert_eq!(field.list().active_index(&tree), Some(2));
}

#[test]
fn test_set_active_does_not_touch_input() {
    let mut tree = Tree::new();
    let mut field = test_field(&mut tree, offline_client());
    field.set_value("Ky");
    field.load_suggestions(&mut tree, sample_places());

    field.set_active(&mut tree, Some(1));

    assert_eq!(field.value(), "Ky");
    assert_eq!(field.cursor().index(), Some(1));
    assert_eq!(field.cursor().saved_text(), "");
    assert_eq!(field.list().active_index(&tree), Some(1));
}

#[test]
fn test_commit_sets_value_and_clears_list() {
    let mut tree = Tree::new();
    let mut field = test_field(&mut tree, offline_client());
    field.set_value("Ky");
    field.load_suggestions(&mut tree, sample_places());

    field.commit(&mut tree, Some(1));

    assert_eq!(field.value(), "Kyivska");
    assert_eq!(field.cursor().saved_text(), "Kyivska");
    assert_eq!(field.cursor().index(), None);
    assert!(field.list().is_empty());
    assert!(tree.children(field.nodes().list).is_empty());
    assert_eq!(field.committed().map(|item| item.code()), Some("KBP"));
}

#[test]
fn test_navigation_after_commit_keeps_committed_text() {
    let mut tree = Tree::new();
    let mut field = test_field(&mut tree, offline_client());
    field.load_suggestions(&mut tree, sample_places());
    field.commit(&mut tree, Some(0));

    field.select_next(&mut tree);

    assert_eq!(field.value(), "Kyiv");
    assert_eq!(field.cursor().index(), None);
}

#[test]
fn test_refine_schedules_fetch_without_clearing() {
    let mut tree = Tree::new();
    let mut field = test_field(&mut tree, offline_client());
    field.load_suggestions(&mut tree, sample_places());

    field.refine();

    assert!(!field.fetcher().is_idle());
    assert_eq!(field.list().len(), 3);
}
