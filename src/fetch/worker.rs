//! Fetch worker thread
//!
//! Runs a current-thread tokio runtime and spawns one task per request, so a
//! slow request never holds up the next one. Requests are not cancelled;
//! the UI side drops responses that belong to an older generation.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;

use super::{FetchRequest, FetchResponse};
use crate::error::SuggestError;
use crate::places::PlacesClient;

/// Spawn the fetch worker thread
///
/// The thread exits once every request sender has been dropped.
pub fn spawn_worker(
    client: PlacesClient,
    request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log::error!("Failed to start fetch runtime: {}", e);
                return;
            }
        };

        runtime.block_on(worker_loop(client, request_rx, response_tx));
    });
}

async fn worker_loop(
    client: PlacesClient,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    while let Some(request) = request_rx.recv().await {
        let client = client.clone();
        let response_tx = response_tx.clone();
        tokio::spawn(async move {
            handle_search(&client, request, &response_tx).await;
        });
    }

    log::debug!("Fetch worker shutting down");
}

async fn handle_search(
    client: &PlacesClient,
    request: FetchRequest,
    response_tx: &Sender<FetchResponse>,
) {
    let FetchRequest {
        term,
        generation,
        waiters,
    } = request;

    let response = match client.search(&term).await {
        Ok(items) => FetchResponse::Loaded {
            generation,
            items,
            waiters,
        },
        Err(e) => {
            let stage = match e {
                SuggestError::Parse(_) => "Error while parsing data from API",
                SuggestError::Network(_) | SuggestError::Status { .. } => {
                    "Error while getting API response"
                }
            };
            log::error!("{}: {}, {}", stage, client.request_url(&term), e);
            FetchResponse::Failed {
                generation,
                waiters,
            }
        }
    };

    // UI thread disconnected
    let _ = response_tx.send(response);
}
