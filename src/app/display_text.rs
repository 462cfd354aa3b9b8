//! Turning raw log text into terminal lines
//!
//! Log text arrives straight from the server and may carry tabs, carriage
//! returns, ANSI color sequences or arbitrary control bytes. Nothing reaches
//! the terminal without passing through here.

use ansi_to_tui::IntoText;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::config::DisplayConfig;
use crate::output::{LineKind, LogLine};

const TAB: &str = "    ";

/// Replace characters the terminal would interpret
///
/// Tabs become spaces, carriage returns are dropped and every other control
/// character becomes U+FFFD. With `keep_escapes` the ESC byte survives so an
/// ANSI parser can consume the sequence afterwards.
pub fn sanitize(text: &str, keep_escapes: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => out.push_str(TAB),
            '\r' => {}
            '\u{1b}' if keep_escapes => out.push(c),
            c if c.is_control() => out.push(char::REPLACEMENT_CHARACTER),
            c => out.push(c),
        }
    }
    out
}

/// Parse ANSI colors in one line of text, falling back to stripped text
fn colored_line(text: &str) -> Line<'static> {
    let kept = sanitize(text, true);
    match kept.into_text() {
        Ok(parsed) => {
            let spans: Vec<Span<'static>> =
                parsed.lines.into_iter().flat_map(|line| line.spans).collect();
            Line::from(spans)
        }
        Err(err) => {
            log::debug!("ANSI parse failed: {}", err);
            Line::raw(sanitize(text, false))
        }
    }
}

fn body_line(text: &str, display: &DisplayConfig) -> Line<'static> {
    if display.ansi_colors {
        colored_line(text)
    } else {
        Line::raw(sanitize(text, false))
    }
}

pub fn log_line(line: &LogLine, display: &DisplayConfig) -> Line<'static> {
    match line.kind {
        LineKind::Normal => body_line(&line.text, display),
        LineKind::Error => body_line(&line.text, display).style(Style::default().fg(Color::Red)),
        LineKind::EchoedCommand => Line::from(vec![
            Span::styled(
                format!("{} ", display.prompt),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                sanitize(&line.text, false),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    }
}

#[cfg(test)]
#[path = "display_text_tests.rs"]
mod display_text_tests;
