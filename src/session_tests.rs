//! Tests for session state and navigation arithmetic

use super::*;
use proptest::prelude::*;

fn state_with(count: usize) -> SessionState {
    let mut state = SessionState::new();
    state.replace_suggestions(
        (0..count)
            .map(|i| Suggestion::new(format!("cmd{}", i)))
            .collect(),
    );
    state
}

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn test_new_state_is_idle_and_empty() {
    let state = SessionState::new();
    assert_eq!(state.query(), "");
    assert!(state.suggestions().is_empty());
    assert_eq!(state.active_index(), None);
    assert!(!state.is_suggest_busy());
    assert!(!state.is_run_busy());
    assert!(!state.is_busy());
}

#[test]
fn test_busy_flags_are_independent() {
    let mut state = SessionState::new();
    state.set_suggest_busy(true);
    state.set_run_busy(true);
    assert!(state.is_suggest_busy() && state.is_run_busy());

    state.set_suggest_busy(false);
    assert!(!state.is_suggest_busy());
    assert!(state.is_run_busy());
    assert!(state.is_busy());
}

#[test]
fn test_replace_suggestions_resets_selection() {
    let mut state = state_with(3);
    state.select(2);

    state.replace_suggestions(vec![Suggestion::new("x")]);

    assert_eq!(state.active_index(), None);
    assert_eq!(state.suggestions().len(), 1);
}

#[test]
fn test_clear_suggestions_resets_selection() {
    let mut state = state_with(3);
    state.select(1);

    state.clear_suggestions();

    assert!(state.suggestions().is_empty());
    assert_eq!(state.active_index(), None);
}

#[test]
fn test_select_out_of_range_clears_selection() {
    let mut state = state_with(2);
    state.select(1);
    state.select(5);
    assert_eq!(state.active_index(), None);
}

#[test]
fn test_active_suggestion() {
    let mut state = state_with(3);
    assert!(state.active_suggestion().is_none());

    state.select(1);
    assert_eq!(state.active_suggestion().map(|s| s.command.as_str()), Some("cmd1"));
}

#[test]
fn test_move_on_empty_list_is_noop() {
    let mut state = SessionState::new();
    state.move_active(Direction::Forward);
    assert_eq!(state.active_index(), None);
    state.move_active(Direction::Backward);
    assert_eq!(state.active_index(), None);
}

#[test]
fn test_forward_from_none_selects_first() {
    let mut state = state_with(5);
    state.move_active(Direction::Forward);
    assert_eq!(state.active_index(), Some(0));
}

#[test]
fn test_forward_wraps_to_first() {
    let mut state = state_with(5);
    state.select(4);
    state.move_active(Direction::Forward);
    assert_eq!(state.active_index(), Some(0));
}

#[test]
fn test_backward_wraps_to_last() {
    let mut state = state_with(5);
    state.select(0);
    state.move_active(Direction::Backward);
    assert_eq!(state.active_index(), Some(4));
}

#[test]
fn test_backward_from_none_uses_modular_formula() {
    // (-1 - 1 + len) mod len
    let mut state = state_with(3);
    state.move_active(Direction::Backward);
    assert_eq!(state.active_index(), Some(1));

    let mut state = state_with(5);
    state.move_active(Direction::Backward);
    assert_eq!(state.active_index(), Some(3));
}

#[test]
fn test_backward_from_none_on_short_lists() {
    let mut state = state_with(1);
    state.move_active(Direction::Backward);
    assert_eq!(state.active_index(), Some(0));

    let mut state = state_with(2);
    state.move_active(Direction::Backward);
    assert_eq!(state.active_index(), Some(0));
}

#[test]
fn test_set_query_overwrites() {
    let mut state = SessionState::new();
    state.set_query("list files");
    state.set_query("ls");
    assert_eq!(state.query(), "ls");
}

// =========================================================================
// Property-Based Tests
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // One forward step followed by `len` more returns to the same row.
    #[test]
    fn prop_forward_cycle_returns_to_start(len in 1usize..20, start in proptest::option::of(0usize..20)) {
        let mut state = state_with(len);
        if let Some(start) = start {
            state.select(start % len);
        }

        state.move_active(Direction::Forward);
        let first = state.active_index();
        for _ in 0..len {
            state.move_active(Direction::Forward);
        }

        prop_assert_eq!(state.active_index(), first);
    }

    #[test]
    fn prop_backward_cycle_returns_to_start(len in 1usize..20, start in 0usize..20) {
        let mut state = state_with(len);
        state.select(start % len);

        for _ in 0..len {
            state.move_active(Direction::Backward);
        }

        prop_assert_eq!(state.active_index(), Some(start % len));
    }

    #[test]
    fn prop_active_index_always_in_range(len in 1usize..20, moves in prop::collection::vec(any::<bool>(), 0..50)) {
        let mut state = state_with(len);
        for forward in moves {
            let direction = if forward { Direction::Forward } else { Direction::Backward };
            state.move_active(direction);
            prop_assert!(state.active_index().is_some_and(|i| i < len));
        }
    }
}
