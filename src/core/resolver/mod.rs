//! Resolution of the version identifier for a source checkout.
//!
//! Release builds report the baseline as is. Development checkouts ask one or
//! more [`DescribeSource`]s for a `git describe` text and derive a
//! development version from the first one that answers. Nothing here fails:
//! every problem ends in a [`Resolution::Fallback`] carrying the baseline.

mod source;

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

pub use self::source::{Captured, DEFAULT_ABBREV, DescribeSource, GitDescribe};
use crate::{describe::Describe, error::DescribeError, policy};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Resolution {
	/// Derived from describe output.
	Described { version: String, describe: String },

	/// The baseline, and why it was kept.
	Fallback { version: String, reason: Fallback },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
	Release,
	ToolUnavailable,
	NotARepository,
	MalformedOutput,
}

#[derive(Clone, Debug)]
pub struct Resolver {
	baseline: String,
	release: bool,
}

/// Version for the checkout at `repo_path`; the baseline when `is_release`
/// or when git cannot describe it.
#[must_use]
pub fn resolve(baseline: &str, is_release: bool, repo_path: &Path) -> String {
	Resolver::new(baseline, is_release)
		.resolve(&[&GitDescribe::new(repo_path)])
		.into_version()
}

impl Resolver {
	#[must_use]
	pub fn new(baseline: &str, release: bool) -> Self {
		Self { baseline: baseline.to_owned(), release }
	}

	#[inline]
	#[must_use]
	pub fn baseline(&self) -> &str { &self.baseline }

	#[inline]
	#[must_use]
	pub fn is_release(&self) -> bool { self.release }

	/// Sources are tried in order until one yields a describe text. A text
	/// that does not parse ends resolution; later sources are not consulted.
	pub fn resolve(&self, sources: &[&dyn DescribeSource]) -> Resolution {
		if self.release {
			debug!(baseline = %self.baseline, "release build");
			return self.fallback(Fallback::Release);
		}

		let mut reason = Fallback::NotARepository;
		for source in sources {
			match source.describe() {
				| Ok(text) => return self.derive(&text),
				| Err(e) => {
					debug!("describe unavailable: {e}");
					reason = Fallback::from(&e);
				},
			}
		}

		self.fallback(reason)
	}

	fn derive(&self, text: &str) -> Resolution {
		match Describe::parse(text).and_then(|describe| policy::dev_version(&describe)) {
			| Ok(version) => {
				info!(%version, describe = text.trim(), "derived version");
				Resolution::Described { version, describe: text.trim().to_owned() }
			},
			| Err(e) => {
				warn!(baseline = %self.baseline, "ignoring describe output: {e}");
				self.fallback(Fallback::from(&e))
			},
		}
	}

	fn fallback(&self, reason: Fallback) -> Resolution {
		Resolution::Fallback { version: self.baseline.clone(), reason }
	}
}

impl Resolution {
	#[inline]
	#[must_use]
	pub fn version(&self) -> &str {
		match self {
			| Self::Described { version, .. } | Self::Fallback { version, .. } => version,
		}
	}

	#[must_use]
	pub fn into_version(self) -> String {
		match self {
			| Self::Described { version, .. } | Self::Fallback { version, .. } => version,
		}
	}

	#[inline]
	#[must_use]
	pub fn is_fallback(&self) -> bool { matches!(self, Self::Fallback { .. }) }
}

impl From<&DescribeError> for Fallback {
	fn from(e: &DescribeError) -> Self {
		match e {
			| DescribeError::ToolUnavailable(_) => Self::ToolUnavailable,
			| DescribeError::NotARepository { .. } => Self::NotARepository,
			| DescribeError::MalformedOutput(_) => Self::MalformedOutput,
		}
	}
}
