//! Tests for App event dispatch

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::App;
use crate::dom::Role;
use crate::test_utils::test_helpers::{key, key_with_mods, sample_places, test_app};

fn press(app: &mut App, code: KeyCode) {
    app.handle_event(Event::Key(key(code)));
}

fn render(app: &mut App) {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

fn click(app: &mut App, column: u16, row: u16) {
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
}

/// App with the From dropdown open and rendered
fn app_with_dropdown() -> App {
    let mut app = test_app();
    app.fields[0].set_value("Kyi");
    app.fields[0].load_suggestions(&mut app.tree, sample_places());
    render(&mut app);
    app
}

fn cell_center(app: &App, node: crate::dom::NodeId) -> (u16, u16) {
    let rect = app.regions.rect_of(node).unwrap();
    (rect.x + rect.width / 2, rect.y)
}

mod key_tests {
    use super::*;

    #[test]
    fn test_esc_quits_without_output() {
        let mut app = test_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
        assert_eq!(app.output(), None);
    }

    #[test]
    fn test_ctrl_c_quits_without_output() {
        let mut app = test_app();
        app.handle_event(Event::Key(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(app.should_quit());
        assert_eq!(app.output(), None);
    }

    #[test]
    fn test_ctrl_s_submits() {
        let mut app = test_app();
        app.handle_event(Event::Key(key_with_mods(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        assert!(app.should_quit());
        assert!(app.output().is_some());
    }

    #[test]
    fn test_tab_and_backtab_move_focus() {
        let mut app = test_app();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_field_index(), Some(1));

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_field_index(), Some(0));
    }

    #[test]
    fn test_typing_reaches_only_focused_field() {
        let mut app = test_app();

        press(&mut app, KeyCode::Char('K'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('L'));

        assert_eq!(app.fields[0].value(), "K");
        assert_eq!(app.fields[1].value(), "L");
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = test_app();
        let mut release = key(KeyCode::Char('K'));
        release.kind = KeyEventKind::Release;

        app.handle_event(Event::Key(release));

        assert_eq!(app.fields[0].value(), "");
    }

    #[test]
    fn test_enter_without_highlight_submits() {
        let mut app = app_with_dropdown();

        press(&mut app, KeyCode::Enter);

        assert!(app.should_quit());
        assert!(app.output().is_some());
    }

    #[test]
    fn test_enter_with_highlight_commits_and_stays() {
        let mut app = app_with_dropdown();

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(!app.should_quit());
        assert_eq!(app.fields[0].value(), "Kyiv");
        assert_eq!(app.fields[0].committed().map(|item| item.code()), Some("IEV"));
    }

    #[test]
    fn test_keys_without_focus_are_dropped() {
        let mut app = test_app();
        let root = app.tree.root();
        app.focus(root);

        press(&mut app, KeyCode::Char('K'));

        assert!(app.fields.iter().all(|field| field.value().is_empty()));
        assert!(!app.should_quit());
    }

    #[test]
    fn test_paste_goes_to_focused_field() {
        let mut app = test_app();
        press(&mut app, KeyCode::Tab);

        app.handle_event(Event::Paste("Odesa".to_string()));

        assert_eq!(app.fields[1].value(), "Odesa");
        assert_eq!(app.fields[0].value(), "");
    }

    #[test]
    fn test_unrelated_events_are_ignored() {
        let mut app = test_app();
        app.handle_event(Event::FocusGained);
        app.handle_event(Event::Resize(100, 40));
        assert!(!app.should_quit());
    }

    #[test]
    fn test_raw_key_event_construction() {
        let mut app = test_app();
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert_eq!(app.fields[0].value(), "x");
    }
}

mod mouse_tests {
    use super::*;

    #[test]
    fn test_hover_highlights_without_preview() {
        let mut app = app_with_dropdown();
        let item = app.fields[0].list().item_nodes()[1];
        let (x, y) = cell_center(&app, item);

        app.handle_event(mouse(MouseEventKind::Moved, x, y));

        assert_eq!(app.fields[0].cursor().index(), Some(1));
        assert_eq!(app.fields[0].value(), "Kyi");
    }

    #[test]
    fn test_click_city_commits_and_keeps_focus() {
        let mut app = app_with_dropdown();
        let item = app.fields[0].list().item_nodes()[2];
        let city = app.tree.find_descendant(item, Role::City).unwrap();
        let (x, y) = cell_center(&app, city);

        click(&mut app, x, y);

        assert_eq!(app.fields[0].value(), "Kyiv-Zhuliany");
        assert!(app.fields[0].list().is_empty());
        assert_eq!(app.focused_field_index(), Some(0));
    }

    #[test]
    fn test_click_copy_affordance_refines() {
        let mut app = app_with_dropdown();
        let item = app.fields[0].list().item_nodes()[1];
        let copy = app.tree.find_descendant(item, Role::Copy).unwrap();
        let (x, y) = cell_center(&app, copy);

        click(&mut app, x, y);

        assert_eq!(app.fields[0].value(), "Kyivska");
        assert_eq!(app.fields[0].list().len(), 3);
        assert!(!app.fields[0].fetcher().is_idle());
    }

    #[test]
    fn test_click_other_input_moves_focus() {
        let mut app = test_app();
        render(&mut app);
        let to_input = app.fields[1].nodes().input;
        let (x, y) = cell_center(&app, to_input);

        click(&mut app, x, y);

        assert_eq!(app.focused_field_index(), Some(1));
        assert!(!app.fields[0].list().is_visible(&app.tree));
    }

    #[test]
    fn test_click_empty_space_closes_dropdowns() {
        let mut app = app_with_dropdown();

        click(&mut app, 40, 20);

        assert_eq!(app.focus, Some(app.tree.root()));
        assert!(!app.fields[0].list().is_visible(&app.tree));
        assert_eq!(app.fields[0].list().len(), 3);
    }

    #[test]
    fn test_click_clear_affordance() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('K'));
        render(&mut app);
        let clear = app.fields[0].nodes().clear;
        let (x, y) = cell_center(&app, clear);

        click(&mut app, x, y);

        assert_eq!(app.fields[0].value(), "");
        assert!(app.tree.is_hidden(clear));
    }

    #[test]
    fn test_click_other_fields_clear_moves_focus_there() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('K'));
        app.prefill(1, "Lv");
        render(&mut app);
        let to_clear = app.fields[1].nodes().clear;
        let (x, y) = cell_center(&app, to_clear);

        click(&mut app, x, y);

        assert_eq!(app.fields[1].value(), "");
        assert_eq!(app.focused_field_index(), Some(1));
        assert!(!app.fields[0].is_focused());
        assert!(!app.fields[0].list().is_visible(&app.tree));

        press(&mut app, KeyCode::Char('O'));
        assert_eq!(app.fields[1].value(), "O");
        assert_eq!(app.fields[0].value(), "K");
    }

    #[test]
    fn test_scroll_is_ignored() {
        let mut app = app_with_dropdown();
        app.handle_event(mouse(MouseEventKind::ScrollDown, 5, 5));
        assert_eq!(app.fields[0].cursor().index(), None);
    }
}
