//! Keyboard bindings
//!
//! Translates terminal key events into abstract gestures. Keys that are not
//! bound here belong to the query text field.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::gesture::Gesture;

/// Map a key press onto a gesture, if it has one
///
/// Ctrl+Enter is not reported by many terminals, so Alt+Enter and Ctrl+J are
/// accepted as fallbacks for "run now".
pub fn gesture_for_key(key: KeyEvent) -> Option<Gesture> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let meta = key.modifiers.contains(KeyModifiers::SUPER);

    match key.code {
        KeyCode::Down => Some(Gesture::MoveDown),
        KeyCode::Up => Some(Gesture::MoveUp),
        KeyCode::Enter if ctrl || alt || meta => Some(Gesture::ForceRun),
        KeyCode::Char('j') if ctrl => Some(Gesture::ForceRun),
        KeyCode::Enter => Some(Gesture::Commit),
        KeyCode::Tab if !ctrl => Some(Gesture::Complete),
        KeyCode::Char('s') if ctrl => Some(Gesture::SuggestAction),
        KeyCode::Char('r') if ctrl => Some(Gesture::RunAction),
        _ => None,
    }
}

#[cfg(test)]
#[path = "keybindings_tests.rs"]
mod keybindings_tests;
