pub mod app;
pub mod cli;
pub mod core;
pub mod display;
pub mod fetch;
pub mod state;
pub mod transport;

pub use crate::cli::build_cli;
pub use crate::core::config::PollConfig;
pub use crate::core::logging::init_logging;
