pub mod config;
pub mod errors;
pub mod logging;

// Re-export commonly used types
pub use self::config::PollConfig;
pub use self::errors::AppError;
