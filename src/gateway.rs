//! Network gateway
//!
//! The two remote operations the console depends on (suggest, run), the
//! messages exchanged with the background worker that performs them, and the
//! error type every failure is reported through.

use std::future::Future;

use thiserror::Error;

use crate::suggestion::Suggestion;

pub mod http;
pub mod worker;

pub use http::HttpGateway;
pub use worker::spawn_worker;

/// Errors that can occur during a remote call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request never completed (connect failure, timeout, reset)
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("{}", server_message(.status, .message))]
    Server { status: u16, message: Option<String> },

    /// The response body could not be decoded
    #[error("invalid response body: {0}")]
    Malformed(String),
}

/// Server-supplied message, or a generic one built from the status
fn server_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("HTTP {}", status),
    }
}

/// Captured output of a command run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Request messages sent to the gateway worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayRequest {
    Suggest {
        query: String,
        /// Issue-order ticket, echoed back in the response
        ticket: u64,
    },
    Run {
        command: String,
        ticket: u64,
    },
}

impl GatewayRequest {
    pub fn ticket(&self) -> u64 {
        match self {
            GatewayRequest::Suggest { ticket, .. } | GatewayRequest::Run { ticket, .. } => *ticket,
        }
    }
}

/// Response messages received from the gateway worker
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayResponse {
    Suggestions {
        ticket: u64,
        result: Result<Vec<Suggestion>, GatewayError>,
    },
    RunFinished {
        ticket: u64,
        result: Result<RunOutput, GatewayError>,
    },
}

/// The remote suggestion and command-execution service
pub trait Gateway: Send + Sync + 'static {
    /// Ranked suggestions for a natural-language query
    fn suggest(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Suggestion>, GatewayError>> + Send;

    /// Execute a command and capture its output
    fn run(&self, command: &str) -> impl Future<Output = Result<RunOutput, GatewayError>> + Send;
}
