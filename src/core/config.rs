use std::time::Duration;

/// Endpoint polled when no URL is given on the command line.
pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";

/// Period between fetch iterations.
pub const FETCH_INTERVAL: Duration = Duration::from_secs(5);

/// Period between display iterations. Always shorter than [`FETCH_INTERVAL`]
/// so every fetched payload is rendered at least once.
pub const DISPLAY_INTERVAL: Duration = Duration::from_secs(1);

/// Runtime configuration assembled at startup.
///
/// The intervals are fixed constants; only the URL varies per invocation.
#[derive(Debug, Clone)]
pub struct PollConfig {
    pub url: String,
    pub fetch_interval: Duration,
    pub display_interval: Duration,
}

impl PollConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            fetch_interval: FETCH_INTERVAL,
            display_interval: DISPLAY_INTERVAL,
        }
    }
}
