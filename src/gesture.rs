//! Abstract user gestures
//!
//! What the user meant, independent of the key or click that produced it.
//! The controller consumes only these; `keybindings` and the mouse handler
//! translate raw terminal events into them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Move the selection one row down
    MoveDown,
    /// Move the selection one row up
    MoveUp,
    /// Fetch suggestions when none are shown, otherwise accept the active one
    Commit,
    /// Run the top suggestion, or the raw query when no suggestions are shown
    ForceRun,
    /// Copy the active suggestion into the query without running it
    Complete,
    /// Pointer confirm on a rendered suggestion row
    SelectRow(usize),
    /// Explicit "Suggest" control
    SuggestAction,
    /// Explicit "Run" control
    RunAction,
}
