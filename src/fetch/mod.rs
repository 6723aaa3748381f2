use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::state::LatestData;
use crate::transport::{Transport, TransportError};

/// Failure modes of one fetch iteration.
///
/// Display strings are the operator-facing console lines, so the report
/// site prints the error as-is. None of these stop the cycle.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Error during data fetching: {status}")]
    Status { status: u16 },

    #[error("Error during query execution: {0}")]
    Transport(#[from] TransportError),

    #[error("Error during query execution: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One fetch: GET the URL, decode the body, publish into the cell.
///
/// The cell is only written on a 200 response with a well-formed JSON body;
/// every failure leaves the previous value in place.
pub async fn fetch_once<T: Transport>(
    transport: &T,
    url: &str,
    cell: &LatestData,
) -> Result<(), FetchError> {
    let response = transport.get(url).await?;

    if !response.is_ok() {
        return Err(FetchError::Status {
            status: response.status,
        });
    }

    let value: Value = serde_json::from_slice(&response.body)?;
    cell.set(value).await;

    debug!(event = "fetch.payload_stored", url = url);
    Ok(())
}

/// Run the fetch cycle until the token is cancelled.
///
/// Each iteration spawns the request as its own task so the period timer is
/// never blocked by a slow endpoint, then aborts whatever is still in flight
/// at the period boundary. Aborting a finished task is a no-op; a live abort
/// is logged so a chronically slow endpoint shows up in the diagnostics.
pub async fn run<T: Transport>(
    transport: Arc<T>,
    url: String,
    cell: LatestData,
    period: Duration,
    shutdown: CancellationToken,
) {
    info!(event = "fetch.cycle_started", url = %url);

    loop {
        let handle = tokio::spawn(fetch_and_report(
            transport.clone(),
            url.clone(),
            cell.clone(),
        ));

        tokio::select! {
            _ = tokio::time::sleep(period) => {
                abort_in_flight(&handle);
            }
            _ = shutdown.cancelled() => {
                abort_in_flight(&handle);
                break;
            }
        }
    }

    info!(event = "fetch.cycle_stopped");
}

async fn fetch_and_report<T: Transport>(transport: Arc<T>, url: String, cell: LatestData) {
    if let Err(e) = fetch_once(transport.as_ref(), &url, &cell).await {
        println!("{e}");
        warn!(event = "fetch.request_failed", url = %url, error = %e);
    }
}

/// Best-effort cancellation of the current fetch task.
fn abort_in_flight(handle: &JoinHandle<()>) {
    if !handle.is_finished() {
        warn!(
            event = "fetch.aborted_in_flight",
            "fetch still running at period boundary"
        );
    }
    handle.abort();
}
