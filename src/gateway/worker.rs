//! Gateway worker thread
//!
//! Performs remote calls in a background thread so the UI never blocks.
//! Requests arrive on a tokio channel; each one runs as its own task on a
//! current-thread runtime, so calls overlap and complete in whatever order
//! the service answers. Results go back over a std channel that the UI loop
//! drains every tick.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinSet;

use super::{Gateway, GatewayRequest, GatewayResponse};

/// Spawn the gateway worker thread
///
/// The worker exits once every request sender is dropped and all in-flight
/// calls have finished. Nothing is cancelled: a dispatched call always runs
/// to completion.
pub fn spawn_worker<G: Gateway>(
    gateway: G,
    request_rx: UnboundedReceiver<GatewayRequest>,
    response_tx: Sender<GatewayResponse>,
) -> std::io::Result<JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    std::thread::Builder::new()
        .name("cmdhint-gateway".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(Arc::new(gateway), request_rx, response_tx));
        })
}

/// Main worker loop - dispatches requests until the channel is closed
async fn worker_loop<G: Gateway>(
    gateway: Arc<G>,
    mut request_rx: UnboundedReceiver<GatewayRequest>,
    response_tx: Sender<GatewayResponse>,
) {
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            request = request_rx.recv() => {
                let Some(request) = request else {
                    break;
                };
                log::debug!("Dispatching {:?}", request);

                let gateway = Arc::clone(&gateway);
                let response_tx = response_tx.clone();
                in_flight.spawn(async move {
                    let response = handle_request(gateway.as_ref(), request).await;
                    if response_tx.send(response).is_err() {
                        log::debug!("UI disconnected, dropping gateway response");
                    }
                });
            }
            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                if let Err(e) = joined {
                    log::warn!("Gateway task failed: {}", e);
                }
            }
        }
    }

    while let Some(joined) = in_flight.join_next().await {
        if let Err(e) = joined {
            log::warn!("Gateway task failed: {}", e);
        }
    }

    log::debug!("Gateway worker shutting down");
}

async fn handle_request<G: Gateway>(gateway: &G, request: GatewayRequest) -> GatewayResponse {
    match request {
        GatewayRequest::Suggest { query, ticket } => GatewayResponse::Suggestions {
            ticket,
            result: gateway.suggest(&query).await,
        },
        GatewayRequest::Run { command, ticket } => GatewayResponse::RunFinished {
            ticket,
            result: gateway.run(&command).await,
        },
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
