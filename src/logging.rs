//! Diagnostics setup shared by the demo binaries.
//!
//! Events go to stderr so stdout carries only the demo output. The filter is
//! read from `RUST_LOG` and falls back to [`DEFAULT_FILTER`].

use crate::error::ReportError;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

pub fn init_logging() -> Result<(), ReportError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|err| ReportError::Logging(err.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| ReportError::Logging(err.to_string()))
}
