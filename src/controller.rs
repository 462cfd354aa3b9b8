//! Interaction controller
//!
//! Owns the session state and the output log, turns gestures into state
//! transitions, and issues the two remote operations through the gateway
//! worker. Completions are applied when the UI loop polls the response
//! channel, so every mutation happens on the UI thread.

use std::sync::mpsc::Receiver;

use tokio::sync::mpsc::UnboundedSender;

use crate::config::SuggestOrdering;
use crate::gateway::{GatewayRequest, GatewayResponse};
use crate::output::OutputLog;
use crate::session::{Direction, SessionState};

mod completion;
mod dispatch;

/// Interaction controller state
pub struct Controller {
    state: SessionState,
    log: OutputLog,
    ordering: SuggestOrdering,
    /// Channel to send requests to the gateway worker
    request_tx: Option<UnboundedSender<GatewayRequest>>,
    /// Channel to receive completions from the gateway worker
    response_rx: Option<Receiver<GatewayResponse>>,
    /// Last ticket handed out, shared by suggest and run requests
    last_ticket: u64,
    /// Ticket of the most recently issued suggest request
    latest_suggest: Option<u64>,
}

impl Controller {
    pub fn new(ordering: SuggestOrdering) -> Self {
        Self {
            state: SessionState::new(),
            log: OutputLog::new(),
            ordering,
            request_tx: None,
            response_rx: None,
            last_ticket: 0,
            latest_suggest: None,
        }
    }

    /// Set the channel handles for communication with the gateway worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<GatewayRequest>,
        response_rx: Receiver<GatewayResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn log(&self) -> &OutputLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut OutputLog {
        &mut self.log
    }

    pub fn ordering(&self) -> SuggestOrdering {
        self.ordering
    }

    /// Record text the user typed into the query field
    pub fn set_query(&mut self, query: &str) {
        self.state.set_query(query);
    }

    /// Fetch suggestions for `query`
    ///
    /// A blank query clears the list on the spot without a network call.
    /// Otherwise the request is issued and the list stays as it is until the
    /// response is applied by `poll_responses`.
    pub fn fetch_suggestions(&mut self, query: &str) {
        if query.trim().is_empty() {
            self.state.clear_suggestions();
            return;
        }

        let ticket = self.next_ticket();
        self.latest_suggest = Some(ticket);
        self.state.set_suggest_busy(true);

        let request = GatewayRequest::Suggest {
            query: query.to_string(),
            ticket,
        };
        if !self.send(request) {
            self.log.error("[suggest] gateway unavailable");
            self.state.set_suggest_busy(false);
        }
    }

    /// Run `command`
    ///
    /// The command is echoed to the log before the request is issued, so it
    /// shows up even when the call is slow or fails. A blank command does
    /// nothing at all.
    pub fn run_command(&mut self, command: &str) {
        if command.trim().is_empty() {
            return;
        }

        self.log.echo(command);

        let ticket = self.next_ticket();
        self.state.set_run_busy(true);

        let request = GatewayRequest::Run {
            command: command.to_string(),
            ticket,
        };
        if !self.send(request) {
            self.log.error("[run] gateway unavailable");
            self.state.set_run_busy(false);
        }
    }

    /// Move the selection one row (no-op on an empty list)
    pub fn move_active(&mut self, direction: Direction) {
        self.state.move_active(direction);
    }

    /// Run the active suggestion and dismiss the list
    ///
    /// Does nothing without a valid selection. The chosen command is written
    /// into the query before it runs, and the list is cleared whatever the
    /// outcome of the run.
    pub fn accept_active(&mut self) {
        let Some(suggestion) = self.state.active_suggestion() else {
            return;
        };
        let command = suggestion.command.clone();

        self.state.set_query(&command);
        self.run_command(&command);
        self.state.clear_suggestions();
    }

    /// Copy the active suggestion into the query without running it
    pub fn complete(&mut self) {
        if let Some(suggestion) = self.state.active_suggestion() {
            let command = suggestion.command.clone();
            self.state.set_query(&command);
        }
    }

    /// Select a rendered row and accept it
    pub fn select_row(&mut self, index: usize) {
        self.state.select(index);
        self.accept_active();
    }

    fn next_ticket(&mut self) -> u64 {
        self.last_ticket = self.last_ticket.wrapping_add(1);
        self.last_ticket
    }

    /// Send a request to the worker; false if there is no live worker
    fn send(&mut self, request: GatewayRequest) -> bool {
        let Some(tx) = &self.request_tx else {
            return false;
        };

        log::debug!("Issuing {:?}", request);
        if tx.send(request).is_err() {
            log::warn!("Gateway worker is gone");
            self.request_tx = None;
            return false;
        }
        true
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(SuggestOrdering::default())
    }
}
