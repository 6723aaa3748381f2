use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::core::config::PollConfig;
use crate::core::errors::AppError;
use crate::state::LatestData;
use crate::transport::Transport;
use crate::{display, fetch};

/// Prompt text, kept verbatim from the service this tool replaces.
pub const EXIT_PROMPT: &str = "To end the programm enter E:";

/// Whether an input line is the shutdown command.
pub fn is_exit_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("e")
}

/// Launch the fetch and display cycles under one cancellation token.
pub fn spawn_cycles<T: Transport>(
    config: &PollConfig,
    transport: Arc<T>,
    cell: LatestData,
    shutdown: CancellationToken,
) -> (JoinHandle<()>, JoinHandle<()>) {
    let fetch_handle = tokio::spawn(fetch::run(
        transport,
        config.url.clone(),
        cell.clone(),
        config.fetch_interval,
        shutdown.clone(),
    ));

    let display_handle = tokio::spawn(display::run(cell, config.display_interval, shutdown));

    (fetch_handle, display_handle)
}

/// Prompt the operator until they ask to stop.
///
/// The blocking stdin read runs on the blocking pool so it never stalls the
/// cycles. A closed stdin counts as a shutdown request; anything other than
/// `e` re-prompts.
async fn prompt_loop(shutdown: &CancellationToken) -> Result<(), AppError> {
    loop {
        let (bytes, line) = tokio::task::spawn_blocking(read_command).await??;

        if bytes == 0 {
            info!(event = "app.stdin_closed");
            shutdown.cancel();
            return Ok(());
        }

        if is_exit_command(&line) {
            info!(event = "app.shutdown_requested");
            shutdown.cancel();
            return Ok(());
        }

        debug!(event = "app.input_ignored", input = %line.trim());
    }
}

fn read_command() -> io::Result<(usize, String)> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{EXIT_PROMPT}\n")?;
    stdout.flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    Ok((bytes, line))
}

/// Run the whole application: cycles plus operator prompt.
///
/// Shutdown is cooperative: after cancellation each cycle exits at its next
/// loop-top check. Joining both handles before returning also drops the last
/// transport clone, releasing its connections before process exit.
pub async fn run<T: Transport>(config: PollConfig, transport: Arc<T>) -> Result<(), AppError> {
    info!(event = "app.started", url = %config.url);

    let cell = LatestData::new();
    let shutdown = CancellationToken::new();
    let (fetch_handle, display_handle) =
        spawn_cycles(&config, transport, cell, shutdown.clone());

    let prompt_result = prompt_loop(&shutdown).await;
    // If the prompt failed, still take the cycles down before reporting it.
    shutdown.cancel();

    fetch_handle.await?;
    display_handle.await?;

    info!(event = "app.shutdown_complete");
    prompt_result
}
