/// Errors from the supervisor path itself.
///
/// Fetch and display failures are recovered inside their cycles and never
/// surface here; the only fatal paths are the operator prompt losing stdin
/// access or a cycle task panicking.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to read operator input: {0}")]
    Io(#[from] std::io::Error),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
