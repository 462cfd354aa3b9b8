//! Terminal application
//!
//! Wires the controller to the terminal: the query text field, the scrolling
//! output pane, the suggestion list and the two action buttons.

mod display_text;
mod events;
mod input_state;
mod layout;
mod mouse;
mod output_view;
mod render;

pub use input_state::InputState;
pub use layout::{LayoutRegions, Region};
pub use output_view::OutputView;

use crate::config::{Config, DisplayConfig};
use crate::controller::Controller;
use crate::gesture::Gesture;

const GREETING: [&str; 2] = [
    "Type a request and press Enter to get suggestions,",
    "then use Arrow keys to choose, Tab to autocomplete, and Ctrl+Enter to run.",
];

/// Application state
pub struct App {
    pub controller: Controller,
    pub input: InputState,
    pub output_view: OutputView,
    pub regions: LayoutRegions,
    display: DisplayConfig,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut controller = Controller::new(config.suggest.ordering);
        if config.display.greeting {
            for line in GREETING {
                controller.log_mut().normal(line);
            }
        }

        Self {
            controller,
            input: InputState::new(),
            output_view: OutputView::new(),
            regions: LayoutRegions::default(),
            display: config.display.clone(),
            should_quit: false,
        }
    }

    /// Surface a startup warning (e.g. an unreadable config file) in the log
    pub fn report_warning(&mut self, warning: &str) {
        self.controller.log_mut().error(format!("[config] {}", warning));
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply any finished remote operations; true if state changed
    pub fn tick(&mut self) -> bool {
        self.controller.poll_responses()
    }

    /// Dispatch a gesture and mirror a controller-written query into the field
    pub fn dispatch(&mut self, gesture: Gesture) {
        self.controller.dispatch(gesture);
        self.sync_input();
    }

    fn sync_input(&mut self) {
        let query = self.controller.state().query();
        if self.input.query() != query {
            self.input.set_text(query);
        }
    }
}
