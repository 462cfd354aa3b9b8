use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;
use super::mouse::handle_mouse;
use crate::keybindings::gesture_for_key;

impl App {
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => handle_mouse(self, mouse),
            Event::Paste(text) => self.handle_paste(&text),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.handle_scroll_key(key) {
            return;
        }

        if let Some(gesture) = gesture_for_key(key) {
            self.dispatch(gesture);
            return;
        }

        if self.input.handle_key(key) {
            self.controller.set_query(self.input.query());
        }
    }

    fn handle_paste(&mut self, text: &str) {
        if self.input.insert_paste(text) {
            self.controller.set_query(self.input.query());
        }
    }

    fn handle_scroll_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::PageUp => self.output_view.page_up(),
            KeyCode::PageDown => self.output_view.page_down(),
            KeyCode::Home if ctrl => self.output_view.jump_to_top(),
            KeyCode::End if ctrl => self.output_view.jump_to_bottom(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
