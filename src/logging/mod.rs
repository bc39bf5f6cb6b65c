// Logging module for structured logging using the tracing crate

use std::error::Error;

use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Initialize the tracing subscriber for structured logging
///
/// The subscriber is configured with:
/// - JSON formatting for easy parsing by log aggregation systems
/// - Filtering from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`]
///
/// The library itself never installs a subscriber; hosts call this once at
/// startup if they do not already have one.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed or the
/// filter directive cannot be parsed.
///
/// # Examples
///
/// ```
/// use image_cdn::logging::init_subscriber;
///
/// let _ = init_subscriber();
/// tracing::info!("image cdn ready");
/// ```
pub fn init_subscriber() -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(DEFAULT_LOG_FILTER)?,
    };

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}
