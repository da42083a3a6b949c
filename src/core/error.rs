use std::io;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error(transparent)]
	Describe(#[from] DescribeError),

	#[error("configuration: {0}")]
	Config(#[from] figment::Error),

	#[error("abbrev must be between {min} and {max}, got {0}", min = ABBREV_MIN, max = ABBREV_MAX)]
	Abbrev(u8),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error("logging: {0}")]
	Logging(String),
}

/// Why a describe could not be turned into a version. Every variant is
/// recovered by the resolver, which then reports the baseline.
#[derive(thiserror::Error, Debug)]
pub enum DescribeError {
	#[error("git could not be started: {0}")]
	ToolUnavailable(#[source] io::Error),

	#[error("no describe available (exit code {code:?})")]
	NotARepository { code: Option<i32> },

	#[error("describe output is not a version: {0:?}")]
	MalformedOutput(String),
}

pub(crate) const ABBREV_MIN: u8 = 4;
pub(crate) const ABBREV_MAX: u8 = 40;
