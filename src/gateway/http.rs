//! HTTP gateway
//!
//! Talks to the suggestion service over JSON:
//! - `POST {base}/suggest` with `{"query": ...}`, answered by an array of
//!   `{command, description, score}`
//! - `POST {base}/run` with `{"command": ...}`, answered by
//!   `{stdout, stderr}` or, on failure, an object with an `error` field

use std::time::Duration;

use serde_json::{Value, json};

use super::{Gateway, GatewayError, RunOutput};
use crate::suggestion::{Suggestion, parse_suggestions};

const SUGGEST_PATH: &str = "suggest";
const RUN_PATH: &str = "run";

/// reqwest-backed gateway
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a gateway for the service at `base_url`
    ///
    /// `timeout` bounds each whole request; None waits indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(network_error)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl Gateway for HttpGateway {
    async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, GatewayError> {
        let response = self
            .client
            .post(self.endpoint(SUGGEST_PATH))
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Server {
                status: status.as_u16(),
                message: None,
            });
        }

        let body = response.bytes().await.map_err(network_error)?;
        decode_suggest_body(&body)
    }

    async fn run(&self, command: &str) -> Result<RunOutput, GatewayError> {
        let response = self
            .client
            .post(self.endpoint(RUN_PATH))
            .json(&json!({ "command": command }))
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(network_error)?;
        decode_run_body(status, &body)
    }
}

fn network_error(e: reqwest::Error) -> GatewayError {
    GatewayError::Network(e.to_string())
}

fn parse_json(body: &[u8]) -> Result<Value, GatewayError> {
    serde_json::from_slice(body).map_err(|e| GatewayError::Malformed(e.to_string()))
}

/// Decode a successful `/suggest` body
///
/// The body must be JSON; its shape is handled permissively.
pub fn decode_suggest_body(body: &[u8]) -> Result<Vec<Suggestion>, GatewayError> {
    parse_json(body).map(|value| parse_suggestions(&value))
}

/// Decode a `/run` body of any status
///
/// The body is decoded before the status is looked at, so an undecodable
/// error page is reported as `Malformed` rather than `Server`.
pub fn decode_run_body(status: u16, body: &[u8]) -> Result<RunOutput, GatewayError> {
    let value = parse_json(body)?;

    if !(200..300).contains(&status) {
        let message = value.get("error").and_then(error_message);
        return Err(GatewayError::Server { status, message });
    }

    let stream = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Ok(RunOutput {
        stdout: stream("stdout"),
        stderr: stream("stderr"),
    })
}

/// Text of a server-supplied `error` field
///
/// Empty strings, `null`, `false` and zero count as no message. Any other
/// non-string value is shown as JSON.
fn error_message(error: &Value) -> Option<String> {
    match error {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
