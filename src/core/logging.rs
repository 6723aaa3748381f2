use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured JSON logging to stderr.
///
/// Stdout is reserved for the rendered payload and the operator prompt, so
/// diagnostics must never write there. Filtering comes from `RUST_LOG`;
/// with the variable unset nothing is emitted.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(EnvFilter::from_default_env())
        .init();
}
