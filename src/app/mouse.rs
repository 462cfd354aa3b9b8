//! Mouse handling
//!
//! Clicks on suggestion rows select and commit them, clicks on the buttons
//! trigger their action, and the wheel scrolls the output pane.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::App;
use super::layout::Region;
use crate::gesture::Gesture;

const WHEEL_LINES: usize = 3;

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let region = app.regions.region_at(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, region),
        MouseEventKind::ScrollUp if region == Some(Region::Output) => {
            app.output_view.scroll_up(WHEEL_LINES)
        }
        MouseEventKind::ScrollDown if region == Some(Region::Output) => {
            app.output_view.scroll_down(WHEEL_LINES)
        }
        _ => {}
    }
}

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    let busy = app.controller.state().is_busy();

    match region {
        Some(Region::SuggestionRow(index)) => app.dispatch(Gesture::SelectRow(index)),
        Some(Region::SuggestButton) if !busy => app.dispatch(Gesture::SuggestAction),
        Some(Region::RunButton) if !busy => app.dispatch(Gesture::RunAction),
        _ => {}
    }
}

#[cfg(test)]
#[path = "mouse_tests.rs"]
mod mouse_tests;
