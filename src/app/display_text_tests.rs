use super::*;

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn plain_display() -> DisplayConfig {
    DisplayConfig {
        ansi_colors: false,
        ..DisplayConfig::default()
    }
}

fn colored_display() -> DisplayConfig {
    DisplayConfig {
        ansi_colors: true,
        ..DisplayConfig::default()
    }
}

fn normal(text: &str) -> LogLine {
    LogLine {
        text: text.to_string(),
        kind: LineKind::Normal,
    }
}

#[test]
fn test_sanitize_leaves_plain_text_alone() {
    assert_eq!(sanitize("total 12 <b>&amp;</b>", false), "total 12 <b>&amp;</b>");
}

#[test]
fn test_sanitize_expands_tabs_and_drops_carriage_returns() {
    assert_eq!(sanitize("a\tb\r", false), "a    b");
}

#[test]
fn test_sanitize_replaces_control_characters() {
    assert_eq!(sanitize("bell\u{7}", false), "bell\u{fffd}");
    assert_eq!(sanitize("\u{1b}[2J", false), "\u{fffd}[2J");
}

#[test]
fn test_sanitize_can_keep_escape() {
    assert_eq!(sanitize("\u{1b}[31mred", true), "\u{1b}[31mred");
}

#[test]
fn test_plain_mode_never_emits_escape() {
    let line = log_line(&normal("\u{1b}[31mred\u{1b}[0m"), &plain_display());
    assert!(!line_text(&line).contains('\u{1b}'));
}

#[test]
fn test_colored_mode_strips_sequences_and_keeps_color() {
    let line = log_line(&normal("\u{1b}[31mred\u{1b}[0m plain"), &colored_display());

    assert_eq!(line_text(&line), "red plain");
    let red = line
        .spans
        .iter()
        .find(|span| span.content.as_ref() == "red")
        .map(|span| span.style.fg);
    assert_eq!(red, Some(Some(Color::Red)));
}

#[test]
fn test_echo_line_has_prompt() {
    let line = LogLine {
        text: "dir /s".to_string(),
        kind: LineKind::EchoedCommand,
    };
    let rendered = log_line(&line, &DisplayConfig::default());
    assert_eq!(line_text(&rendered), "PS C:\\Users\\You> dir /s");
}

#[test]
fn test_echo_uses_configured_prompt() {
    let display = DisplayConfig {
        prompt: "$".to_string(),
        ..DisplayConfig::default()
    };
    let line = LogLine {
        text: "ls".to_string(),
        kind: LineKind::EchoedCommand,
    };
    assert_eq!(line_text(&log_line(&line, &display)), "$ ls");
}

#[test]
fn test_error_line_is_red() {
    let line = LogLine {
        text: "[run] boom".to_string(),
        kind: LineKind::Error,
    };
    let rendered = log_line(&line, &plain_display());
    assert_eq!(rendered.style.fg, Some(Color::Red));
    assert_eq!(line_text(&rendered), "[run] boom");
}

#[test]
fn test_empty_line_renders_empty() {
    let rendered = log_line(&normal(""), &colored_display());
    assert_eq!(line_text(&rendered), "");
}
