use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::state::LatestData;

/// Line printed while no payload has been fetched yet.
pub const NO_DATA_MESSAGE: &str = "No data available.";

/// Rendering failures. Recovered locally; the cycle keeps running.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("Error occurred during data display: {message}")]
    Render { message: String },
}

impl DisplayError {
    pub fn render(msg: impl std::fmt::Display) -> Self {
        Self::Render {
            message: msg.to_string(),
        }
    }
}

/// Render a payload as human-readable JSON, indented four spaces per level.
pub fn render(value: &Value) -> Result<String, DisplayError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(DisplayError::render)?;
    String::from_utf8(buf).map_err(DisplayError::render)
}

/// Produce one display iteration's console text.
///
/// Never mutates the cell and never fails: a render error becomes its own
/// console line instead of crashing the cycle.
pub async fn frame(cell: &LatestData) -> String {
    match cell.get().await {
        Some(value) => match render(&value) {
            Ok(text) => text,
            Err(e) => {
                warn!(event = "display.render_failed", error = %e);
                e.to_string()
            }
        },
        None => NO_DATA_MESSAGE.to_string(),
    }
}

/// Run the display cycle until the token is cancelled.
///
/// The first tick fires immediately, so the operator sees output (or the
/// no-data line) right at startup.
pub async fn run(cell: LatestData, period: Duration, shutdown: CancellationToken) {
    info!(event = "display.cycle_started");

    let mut ticker = tokio::time::interval(period);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                println!("{}", frame(&cell).await);
            }
            _ = shutdown.cancelled() => break,
        }
    }

    info!(event = "display.cycle_stopped");
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_render_indents_four_spaces() {
        let rendered = render(&json!({"a": 1})).unwrap();
        assert_eq!(rendered, "{\n    \"a\": 1\n}");
    }

    #[test]
    fn test_render_nested_payload() {
        let rendered = render(&json!([{"key1": "value1", "key2": "value2"}])).unwrap();
        let expected = "[\n    {\n        \"key1\": \"value1\",\n        \"key2\": \"value2\"\n    }\n]";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_display_error_line_carries_the_cause() {
        let err = DisplayError::render("broken pipe");
        assert_eq!(
            err.to_string(),
            "Error occurred during data display: broken pipe"
        );
    }

    #[tokio::test]
    async fn test_frame_without_data_is_the_no_data_line() {
        let cell = LatestData::new();
        assert_eq!(frame(&cell).await, "No data available.");
    }

    #[tokio::test]
    async fn test_frame_with_data_matches_render() {
        let cell = LatestData::new();
        let value = json!({"post": {"id": 1, "title": "hello"}});
        cell.set(value.clone()).await;

        assert_eq!(frame(&cell).await, render(&value).unwrap());
    }

    #[tokio::test]
    async fn test_frame_does_not_consume_the_value() {
        let cell = LatestData::new();
        cell.set(json!({"a": 1})).await;

        let first = frame(&cell).await;
        let second = frame(&cell).await;
        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cycle_stops_on_cancellation() {
        let cell = LatestData::new();
        let shutdown = CancellationToken::new();

        let handle = tokio::spawn(run(
            cell.clone(),
            Duration::from_secs(1),
            shutdown.clone(),
        ));

        tokio::time::sleep(Duration::from_secs(3)).await;
        shutdown.cancel();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("display cycle did not observe cancellation")
            .unwrap();
    }
}
