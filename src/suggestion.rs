//! Suggestion entity
//!
//! One ranked command candidate as delivered by the suggestion service, plus
//! the permissive decoding used for the service's JSON response.

use serde_json::Value;

/// A ranked command candidate
///
/// Immutable once received. The ranking itself is computed remotely, the
/// score is carried for display only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Suggestion {
    /// Command text submitted for execution (may be empty)
    pub command: String,
    /// Human readable description (may be empty)
    pub description: String,
    /// Ranking score, None when the service did not supply a number
    pub score: Option<f64>,
}

impl Suggestion {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: String::new(),
            score: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Score formatted for display, e.g. `score: 0.920`
    pub fn score_label(&self) -> Option<String> {
        self.score.map(|score| format!("score: {:.3}", score))
    }

    /// Decode one list element
    ///
    /// Wrong-shaped fields fall back to their empty value instead of failing:
    /// a non-string `command`/`description` becomes `""`, a non-numeric
    /// `score` becomes `None`, and a non-object element yields an empty
    /// suggestion.
    fn from_value(value: &Value) -> Self {
        let text_field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            command: text_field("command"),
            description: text_field("description"),
            score: value.get("score").and_then(Value::as_f64),
        }
    }
}

/// Decode a suggestion service response body
///
/// Anything other than a JSON array is treated as an empty list. Order is
/// preserved as received since it carries the remote ranking.
pub fn parse_suggestions(value: &Value) -> Vec<Suggestion> {
    match value {
        Value::Array(items) => items.iter().map(Suggestion::from_value).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
