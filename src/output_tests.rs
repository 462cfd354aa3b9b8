//! Tests for the output log

use super::*;
use insta::assert_snapshot;

fn dump(log: &OutputLog) -> String {
    log.lines()
        .iter()
        .map(|line| {
            let tag = match line.kind {
                LineKind::Normal => "out",
                LineKind::Error => "err",
                LineKind::EchoedCommand => "cmd",
            };
            format!("{}|{}", tag, line.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_new_log_is_empty() {
    let log = OutputLog::new();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
}

#[test]
fn test_lines_keep_arrival_order() {
    let mut log = OutputLog::new();
    log.echo("ls -la");
    log.normal("total 0");
    log.error("[run] connection refused");

    assert_snapshot!(dump(&log), @r"
    cmd|ls -la
    out|total 0
    err|[run] connection refused
    ");
}

#[test]
fn test_stream_trailing_newline_keeps_empty_segment() {
    let mut log = OutputLog::new();
    log.push_stream("a\nb\n", LineKind::Normal);

    let texts: Vec<&str> = log.lines().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", ""]);
}

#[test]
fn test_empty_stream_appends_nothing() {
    let mut log = OutputLog::new();
    log.push_stream("", LineKind::Normal);
    assert!(log.is_empty());
}

#[test]
fn test_single_newline_stream_emits_two_empty_segments() {
    let mut log = OutputLog::new();
    log.push_stream("\n", LineKind::Error);

    assert_eq!(log.len(), 2);
    assert!(log.lines().iter().all(|l| l.text.is_empty()));
    assert_eq!(log.error_count(), 2);
}

#[test]
fn test_stream_kind_is_applied_to_every_segment() {
    let mut log = OutputLog::new();
    log.push_stream("warn: x\nwarn: y", LineKind::Error);

    assert_eq!(log.error_count(), 2);
}
