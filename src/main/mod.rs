pub mod clap;
pub mod logging;
pub mod output;

use tagver_core::{Config, Result};
use tracing::debug;

/// Resolves the version described by `args` and renders it for stdout.
pub fn run(args: &clap::Args) -> Result<String> {
	let config = Config::load(args.config.as_deref(), &args.overrides())?;
	debug!(?config, "loaded configuration");

	let resolution = config.resolve();
	output::render(&config, &resolution, args.json)
}

#[cfg(test)]
mod tests {
	use ::clap::Parser;

	use super::{clap::Args, run};

	fn run_with(argv: &[&str]) -> String {
		let args = Args::parse_from(std::iter::once("tagver").chain(argv.iter().copied()));
		run(&args).unwrap()
	}

	#[test]
	fn release_prints_baseline() {
		assert_eq!(run_with(&["--release", "--baseline", "2.0.0"]), "2.0.0");
	}

	#[test]
	fn not_a_repository() {
		let dir = tempfile::tempdir().unwrap();
		let repo = dir.path().to_str().unwrap();
		assert_eq!(run_with(&["--repo", repo, "--source", "git", "--baseline", "2.0.0"]), "2.0.0");
	}

	#[test]
	fn default_source_outside_repository() {
		let dir = tempfile::tempdir().unwrap();
		let repo = dir.path().to_str().unwrap();
		assert_eq!(run_with(&["--repo", repo, "--baseline", "2.0.0"]), "2.0.0");
		assert_eq!(run_with(&["--repo", repo, "--source", "auto", "--baseline", "2.0.0"]), "2.0.0");

		let text = run_with(&["--repo", repo, "--baseline", "2.0.0", "--json"]);
		let report: serde_json::Value = serde_json::from_str(&text).unwrap();
		assert_eq!(report["source"], "fallback");
		assert_eq!(report["reason"], "not_a_repository");
	}

	#[test]
	fn json_report() {
		let text = run_with(&["--release", "--baseline", "2.0.0", "--json"]);
		let report: serde_json::Value = serde_json::from_str(&text).unwrap();
		assert_eq!(report["version"], "2.0.0");
		assert_eq!(report["baseline"], "2.0.0");
		assert_eq!(report["release"], true);
		assert_eq!(report["source"], "fallback");
		assert_eq!(report["reason"], "release");
	}

	#[test]
	fn bad_abbrev() {
		let args = Args::parse_from(["tagver", "--abbrev", "41"]);
		assert!(run(&args).is_err());
	}
}
