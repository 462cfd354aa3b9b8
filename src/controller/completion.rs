//! Completion handling
//!
//! Applies gateway results to the session state and the output log. This is
//! the only place asynchronous work touches state, and it runs on the UI
//! thread between frames.

use std::sync::mpsc::TryRecvError;

use super::Controller;
use crate::config::SuggestOrdering;
use crate::gateway::{GatewayError, GatewayResponse, RunOutput};
use crate::output::LineKind;
use crate::suggestion::Suggestion;

impl Controller {
    /// Drain the response channel and apply every completion
    ///
    /// Returns true if state changed. A disconnected channel means the worker
    /// is gone: both busy flags are cleared so the UI cannot stay stuck, and
    /// later operations report the gateway as unavailable.
    pub fn poll_responses(&mut self) -> bool {
        let Some(rx) = &self.response_rx else {
            return false;
        };

        let mut responses = Vec::new();
        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let applied = !responses.is_empty();
        for response in responses {
            self.apply_response(response);
        }

        if disconnected {
            log::warn!("Gateway worker disconnected");
            self.response_rx = None;
            self.request_tx = None;
            self.state.set_suggest_busy(false);
            self.state.set_run_busy(false);
        }

        applied || disconnected
    }

    pub(crate) fn apply_response(&mut self, response: GatewayResponse) {
        match response {
            GatewayResponse::Suggestions { ticket, result } => self.finish_suggest(ticket, result),
            GatewayResponse::RunFinished { ticket, result } => self.finish_run(ticket, result),
        }
    }

    fn finish_suggest(&mut self, ticket: u64, result: Result<Vec<Suggestion>, GatewayError>) {
        let is_current = match self.ordering {
            SuggestOrdering::LastCompleted => true,
            SuggestOrdering::LatestIssued => self.latest_suggest == Some(ticket),
        };

        match result {
            Ok(suggestions) if is_current => self.state.replace_suggestions(suggestions),
            Ok(_) => log::debug!(
                "Dropping stale suggestions for ticket {} (latest: {:?})",
                ticket,
                self.latest_suggest
            ),
            Err(e) => self.log.error(suggest_error_line(&e)),
        }

        if is_current {
            self.state.set_suggest_busy(false);
        }
    }

    fn finish_run(&mut self, ticket: u64, result: Result<RunOutput, GatewayError>) {
        log::debug!("Run {} finished (ok: {})", ticket, result.is_ok());

        match result {
            Ok(output) => {
                self.log.push_stream(&output.stdout, LineKind::Normal);
                self.log.push_stream(&output.stderr, LineKind::Error);
            }
            Err(e) => self.log.error(run_error_line(&e)),
        }

        self.state.set_run_busy(false);
    }
}

/// Log line for a failed suggest call
pub(crate) fn suggest_error_line(error: &GatewayError) -> String {
    match error {
        GatewayError::Server { status, .. } => format!("[suggest] Suggest failed: {}", status),
        other => format!("[suggest] {}", other),
    }
}

/// Log line for a failed run call
///
/// A server refusal is shown as the server's own message; anything that
/// kept the call from completing is tagged with `[run]`.
pub(crate) fn run_error_line(error: &GatewayError) -> String {
    match error {
        GatewayError::Server { .. } => error.to_string(),
        other => format!("[run] {}", other),
    }
}
