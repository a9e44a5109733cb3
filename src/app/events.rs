use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::mouse_click;
use super::mouse_hover;
use super::state::App;
use crate::layout::node_at;

impl App {
    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste(&text),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        let Some(index) = self.focused_field_index() else {
            return;
        };

        // An Enter the field leaves alone submits the form
        if !self.fields[index].on_key(&mut self.tree, key) {
            self.submit();
        }
    }

    /// Handle keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Esc => self.quit(),
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            _ => return false,
        }
        true
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let target = node_at(&self.regions, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => mouse_hover::handle_hover(self, target),
            MouseEventKind::Down(MouseButton::Left) => mouse_click::handle_click(self, target),
            _ => {}
        }
    }

    fn handle_paste(&mut self, text: &str) {
        if let Some(index) = self.focused_field_index() {
            self.fields[index].on_paste(&mut self.tree, text);
        }
    }
}
