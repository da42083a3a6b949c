//! Integration with `clap`

use std::path::PathBuf;

use clap::Parser;
use tagver_core::config::{Overrides, SourceKind};

/// Commandline arguments
#[derive(Parser, Debug)]
#[command(
	about,
	long_about = None,
	name = "tagver",
	version = tagver_core::version(),
)]
pub struct Args {
	/// Path to a TOML config file; `TAGVER_*` environment variables apply on
	/// top of it.
	#[arg(short, long)]
	pub config: Option<PathBuf>,

	/// Repository to describe (default: the working directory).
	#[arg(long, value_name = "PATH")]
	pub repo: Option<PathBuf>,

	/// Version reported when the checkout cannot be described.
	#[arg(long, value_name = "VERSION")]
	pub baseline: Option<String>,

	/// Treat this as a release build and report the baseline unchanged.
	#[arg(long)]
	pub release: bool,

	/// Minimum abbreviated hash length passed to `git describe`.
	#[arg(long, value_name = "N")]
	pub abbrev: Option<u8>,

	/// Where describe output comes from: git (default), auto or build.
	#[arg(long, value_name = "SOURCE")]
	pub source: Option<SourceKind>,

	/// Print a JSON report instead of the bare version.
	#[arg(long)]
	pub json: bool,

	/// Log filter directives, e.g. `debug` or `tagver_core=trace`.
	#[arg(long, env = "TAGVER_LOG", default_value = "warn")]
	pub log: String,
}

/// Parse commandline arguments into structured data
#[must_use]
pub fn parse() -> Args { Args::parse() }

impl Args {
	#[must_use]
	pub fn overrides(&self) -> Overrides {
		Overrides {
			baseline: self.baseline.clone(),
			release: self.release.then_some(true),
			repo_path: self.repo.clone(),
			abbrev: self.abbrev,
			source: self.source,
		}
	}
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn verify() { Args::command().debug_assert(); }

	#[test]
	fn overrides() {
		let args = Args::parse_from([
			"tagver",
			"--repo",
			"/src/project",
			"--release",
			"--abbrev",
			"9",
			"--source",
			"build",
		]);
		let overrides = args.overrides();
		assert_eq!(overrides.repo_path, Some(PathBuf::from("/src/project")));
		assert_eq!(overrides.release, Some(true));
		assert_eq!(overrides.abbrev, Some(9));
		assert_eq!(overrides.source, Some(SourceKind::Build));
		assert_eq!(overrides.baseline, None);
	}

	#[test]
	fn unset_flags_do_not_override() {
		let overrides = Args::parse_from(["tagver"]).overrides();
		assert_eq!(overrides.release, None);
		assert_eq!(overrides.source, None);
		assert!(!Args::parse_from(["tagver"]).json);
	}

	#[test]
	fn bad_source() {
		assert!(Args::try_parse_from(["tagver", "--source", "svn"]).is_err());
	}
}
