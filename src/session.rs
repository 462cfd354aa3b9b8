//! Session state
//!
//! The single owned value holding everything the console knows about the
//! current interaction: query text, ranked suggestions, the active-selection
//! cursor and the two busy flags. Rendering reads it through the getters;
//! only the controller mutates it.

use crate::suggestion::Suggestion;

/// Direction of a selection move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn delta(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Interaction state of one console session
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    query: String,
    suggestions: Vec<Suggestion>,
    /// Active row (None = no selection). Always a valid index when Some.
    active: Option<usize>,
    suggest_busy: bool,
    run_busy: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text typed by the user or committed by an accepted suggestion
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_suggestion(&self) -> Option<&Suggestion> {
        self.active.and_then(|index| self.suggestions.get(index))
    }

    pub fn is_suggest_busy(&self) -> bool {
        self.suggest_busy
    }

    pub fn is_run_busy(&self) -> bool {
        self.run_busy
    }

    /// True while either operation is in flight
    pub fn is_busy(&self) -> bool {
        self.suggest_busy || self.run_busy
    }

    pub(crate) fn set_query(&mut self, query: &str) {
        self.query.clear();
        self.query.push_str(query);
    }

    /// Replace the whole list; the selection never survives a replacement
    pub(crate) fn replace_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.active = None;
    }

    pub(crate) fn clear_suggestions(&mut self) {
        self.replace_suggestions(Vec::new());
    }

    /// Point the cursor at `index`, or at nothing if `index` is out of range
    pub(crate) fn select(&mut self, index: usize) {
        self.active = (index < self.suggestions.len()).then_some(index);
    }

    /// Move the cursor one step with cyclic wraparound
    ///
    /// Forward from no selection lands on the first row. Every other move is
    /// `(current + delta + len) mod len` with "no selection" counting as -1,
    /// so Backward from no selection lands on `len - 2` (or 0 for lists
    /// shorter than two rows).
    pub(crate) fn move_active(&mut self, direction: Direction) {
        let len = self.suggestions.len();
        if len == 0 {
            return;
        }

        let next = match (self.active, direction) {
            (None, Direction::Forward) => 0,
            (current, _) => {
                let current = current.map_or(-1, |index| index as i64);
                let len = len as i64;
                (current + direction.delta() + len).rem_euclid(len) as usize
            }
        };
        self.active = Some(next);
    }

    pub(crate) fn set_suggest_busy(&mut self, busy: bool) {
        self.suggest_busy = busy;
    }

    pub(crate) fn set_run_busy(&mut self, busy: bool) {
        self.run_busy = busy;
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
