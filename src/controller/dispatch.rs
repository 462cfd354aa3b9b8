//! Gesture dispatch
//!
//! Maps each abstract gesture onto controller operations. Gestures are never
//! gated by the busy flags; only the pointer controls are disabled while an
//! operation is in flight, and that check belongs to the UI layer.

use super::Controller;
use crate::gesture::Gesture;
use crate::session::Direction;

impl Controller {
    pub fn dispatch(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::MoveDown => self.move_active(Direction::Forward),
            Gesture::MoveUp => self.move_active(Direction::Backward),
            Gesture::Commit => self.commit(),
            Gesture::ForceRun => self.force_run(),
            Gesture::Complete => self.complete(),
            Gesture::SelectRow(index) => self.select_row(index),
            Gesture::SuggestAction => self.fetch_current_query(),
            Gesture::RunAction => self.run_action(),
        }
    }

    /// Fetch when no list is shown, otherwise accept the active row
    ///
    /// With a list shown but nothing selected this is a silent no-op.
    fn commit(&mut self) {
        if self.state.suggestions().is_empty() {
            self.fetch_current_query();
        } else {
            self.accept_active();
        }
    }

    /// Run the top suggestion, or the raw query if there is no list
    fn force_run(&mut self) {
        if self.state.suggestions().is_empty() {
            let query = self.state.query().to_string();
            self.run_command(&query);
        } else {
            self.state.select(0);
            self.accept_active();
        }
    }

    /// Run the active suggestion's command, or the raw query without one
    ///
    /// Unlike acceptance, the list and the query are left untouched.
    fn run_action(&mut self) {
        let command = match self.state.active_suggestion() {
            Some(suggestion) => suggestion.command.clone(),
            None => self.state.query().to_string(),
        };
        self.run_command(&command);
    }

    fn fetch_current_query(&mut self) {
        let query = self.state.query().to_string();
        self.fetch_suggestions(&query);
    }
}
