//! Screen regions recorded during render, used for mouse hit testing

use ratatui::layout::{Position, Rect};

/// Clickable or scrollable area of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Output,
    SuggestionRow(usize),
    Input,
    SuggestButton,
    RunButton,
}

/// Where each component was drawn in the last frame
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub output: Option<Rect>,
    /// Visible rows with the suggestion index each one shows
    pub suggestion_rows: Vec<(Rect, usize)>,
    pub input: Option<Rect>,
    pub suggest_button: Option<Rect>,
    pub run_button: Option<Rect>,
}

impl LayoutRegions {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn region_at(&self, column: u16, row: u16) -> Option<Region> {
        let pos = Position::new(column, row);
        let hit = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(pos));

        if let Some(&(_, index)) = self.suggestion_rows.iter().find(|(r, _)| r.contains(pos)) {
            return Some(Region::SuggestionRow(index));
        }
        if hit(self.suggest_button) {
            return Some(Region::SuggestButton);
        }
        if hit(self.run_button) {
            return Some(Region::RunButton);
        }
        if hit(self.input) {
            return Some(Region::Input);
        }
        if hit(self.output) {
            return Some(Region::Output);
        }
        None
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
