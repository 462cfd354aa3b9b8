use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::App;
use super::display_text::log_line;
use crate::suggestion::Suggestion;

/// Most suggestion rows shown at once; the window follows the selection
pub const MAX_VISIBLE_ROWS: usize = 8;

const BUTTON_WIDTH: u16 = 14;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.regions.clear();

        let count = self.controller.state().suggestions().len();
        let list_height = if count == 0 {
            0
        } else {
            count.min(MAX_VISIBLE_ROWS) as u16 + 2
        };

        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(list_height),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_output(frame, layout[0]);
        if list_height > 0 {
            self.render_suggestions(frame, layout[1]);
        }
        self.render_input_row(frame, layout[2]);
        self.render_status(frame, layout[3]);
    }

    fn render_output(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Output ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);

        let lines = self.controller.log().lines();
        self.output_view.update_bounds(lines.len(), inner.height);

        // Only convert what is on screen
        let start = self.output_view.offset().min(lines.len());
        let end = (start + inner.height as usize).min(lines.len());
        let visible: Vec<Line> = lines[start..end]
            .iter()
            .map(|line| log_line(line, &self.display))
            .collect();

        frame.render_widget(Paragraph::new(visible).block(block), area);
        self.regions.output = Some(area);
    }

    fn render_suggestions(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.controller.state();
        let suggestions = state.suggestions();
        let active = state.active_index();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Suggestions ({}) ", suggestions.len()))
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = (inner.height as usize).min(suggestions.len());
        let start = window_start(active, rows);

        for (offset, (index, suggestion)) in suggestions
            .iter()
            .enumerate()
            .skip(start)
            .take(rows)
            .enumerate()
        {
            let row = Rect {
                x: inner.x,
                y: inner.y + offset as u16,
                width: inner.width,
                height: 1,
            };
            let line = suggestion_line(suggestion, active == Some(index), inner.width);
            frame.render_widget(Paragraph::new(line), row);
            self.regions.suggestion_rows.push((row, index));
        }
    }

    fn render_input_row(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, suggest_area, run_area] = Layout::horizontal([
            Constraint::Min(10),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .areas(area);

        frame.render_widget(&self.input.textarea, input_area);
        self.regions.input = Some(input_area);

        let state = self.controller.state();
        let disabled = state.is_busy();

        let suggest_label = if state.is_suggest_busy() {
            "Suggesting…"
        } else {
            "Suggest"
        };
        let run_label = if state.is_run_busy() {
            "Running…"
        } else {
            "Run"
        };

        render_button(frame, suggest_area, suggest_label, Color::Yellow, disabled);
        render_button(frame, run_area, run_label, Color::Green, disabled);
        self.regions.suggest_button = Some(suggest_area);
        self.regions.run_button = Some(run_area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let key = Style::default().fg(Color::Cyan);
        let text = Style::default().fg(Color::DarkGray);

        let mut spans = vec![
            Span::styled("Enter", key),
            Span::styled(" suggest/accept  ", text),
            Span::styled("↑↓", key),
            Span::styled(" select  ", text),
            Span::styled("Tab", key),
            Span::styled(" complete  ", text),
            Span::styled("Ctrl+Enter", key),
            Span::styled(" run  ", text),
            Span::styled("Ctrl+C", key),
            Span::styled(" quit", text),
        ];
        if !self.output_view.is_following() {
            spans.push(Span::styled("  [scrolled]", Style::default().fg(Color::Yellow)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// First row index shown so that the active row stays visible
fn window_start(active: Option<usize>, rows: usize) -> usize {
    match active {
        Some(index) if rows > 0 && index >= rows => index + 1 - rows,
        _ => 0,
    }
}

fn suggestion_line(suggestion: &Suggestion, is_active: bool, width: u16) -> Line<'static> {
    let marker = if is_active { "> " } else { "  " };

    let mut spans = vec![
        Span::raw(marker),
        Span::styled(
            suggestion.command.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if !suggestion.description.is_empty() {
        spans.push(Span::styled(
            format!("  {}", suggestion.description),
            Style::default().fg(Color::Gray),
        ));
    }

    // Right-align the score when there is room for it
    if let Some(score) = suggestion.score_label() {
        let used: usize = spans.iter().map(|span| span.content.width()).sum();
        let room = (width as usize).saturating_sub(used);
        let gap = room.saturating_sub(score.width()).max(2);
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::styled(score, Style::default().fg(Color::DarkGray)));
    }

    let line = Line::from(spans);
    if is_active {
        line.style(Style::default().bg(Color::DarkGray))
    } else {
        line
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, color: Color, disabled: bool) {
    let style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    };

    let button = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
