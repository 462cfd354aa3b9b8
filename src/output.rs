//! Output log
//!
//! Append-only record of what the console printed: echoed commands, command
//! output and error lines, in arrival order. Text is stored raw; making it
//! safe to display is the renderer's job.

/// What a log line represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Normal,
    Error,
    /// The exact command text submitted for execution
    EchoedCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub text: String,
    pub kind: LineKind,
}

#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    lines: Vec<LogLine>,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, kind: LineKind) {
        self.lines.push(LogLine {
            text: text.into(),
            kind,
        });
    }

    pub fn normal(&mut self, text: impl Into<String>) {
        self.push(text, LineKind::Normal);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(text, LineKind::Error);
    }

    pub fn echo(&mut self, command: impl Into<String>) {
        self.push(command, LineKind::EchoedCommand);
    }

    /// Append a captured stream, one entry per `\n`-separated segment
    ///
    /// An empty stream appends nothing. Otherwise the split is literal, so a
    /// trailing newline produces a trailing empty entry.
    pub fn push_stream(&mut self, text: &str, kind: LineKind) {
        if text.is_empty() {
            return;
        }
        for line in text.split('\n') {
            self.push(line, kind);
        }
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.kind == LineKind::Error)
            .count()
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod output_tests;
