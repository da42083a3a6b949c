use std::io;

use tagver_core::{Error, Result};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. Logs go to stderr so stdout carries only
/// the version.
pub fn init(filter: &str) -> Result {
	let filter = EnvFilter::try_new(filter).map_err(|e| Error::Logging(e.to_string()))?;

	fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(false)
		.try_init()
		.map_err(|e| Error::Logging(e.to_string()))
}
