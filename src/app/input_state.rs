use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

const PLACEHOLDER: &str = "Describe what you want to do";

/// Single-line query field
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Request ")
                .border_style(Style::default().fg(Color::Cyan)),
        );

        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);

        Self { textarea }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_str()
    }

    /// Replace the whole field, cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(single_line(text));
    }

    /// Feed an editing key to the field; true if the text changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+M would insert a line break
        if key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        self.textarea.input(key)
    }

    /// Insert pasted text at the cursor; true if the text changed
    pub fn insert_paste(&mut self, text: &str) -> bool {
        self.textarea.insert_str(single_line(text))
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
