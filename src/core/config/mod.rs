//! Layered configuration: built-in defaults, an optional TOML file,
//! `TAGVER_*` environment variables, then command-line overrides.

use std::{
	fmt,
	path::{Path, PathBuf},
	str::FromStr,
};

use figment::{
	Figment,
	providers::{Env, Format, Serialized, Toml},
};
use serde::{
	Deserialize, Deserializer, Serialize,
	de::{self, Unexpected},
};
use tagver_build_metadata as build;

use crate::{
	Result,
	error::{ABBREV_MAX, ABBREV_MIN, Error},
	resolver::{Captured, DEFAULT_ABBREV, DescribeSource, GitDescribe, Resolution, Resolver},
};

pub const ENV_PREFIX: &str = "TAGVER_";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
	/// Version reported whenever no describe output can be used.
	pub baseline: String,

	#[serde(deserialize_with = "flag")]
	pub release: bool,

	/// Repository to describe; the working directory when unset.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub repo_path: Option<PathBuf>,

	pub abbrev: u8,

	pub source: SourceKind,
}

/// Where describe output comes from.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
	/// Live git, then the describe captured at build time when the repository
	/// is the one tagver was built from.
	Auto,
	/// Live git on the configured repository only.
	#[default]
	Git,
	Build,
}

/// Values given on the command line; unset fields leave lower layers alone.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Overrides {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub baseline: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub release: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub repo_path: Option<PathBuf>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub abbrev: Option<u8>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub source: Option<SourceKind>,
}

impl Config {
	pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
		let mut figment = Figment::from(Serialized::defaults(Self::default()));
		if let Some(path) = path {
			figment = figment.merge(Toml::file_exact(path));
		}

		let config: Self = figment
			.merge(Env::prefixed(ENV_PREFIX))
			.merge(Serialized::defaults(overrides))
			.extract()?;

		config.check()?;
		Ok(config)
	}

	pub fn check(&self) -> Result {
		if !(ABBREV_MIN..=ABBREV_MAX).contains(&self.abbrev) {
			return Err(Error::Abbrev(self.abbrev));
		}

		Ok(())
	}

	#[must_use]
	pub fn resolver(&self) -> Resolver { Resolver::new(&self.baseline, self.release) }

	#[must_use]
	pub fn sources(&self) -> Vec<Box<dyn DescribeSource>> {
		let repo = self
			.repo_path
			.clone()
			.unwrap_or_else(|| PathBuf::from("."));

		let own_checkout = is_source_dir(&repo);
		let git = GitDescribe::new(repo).with_abbrev(self.abbrev);
		let captured = Captured::new(build::describe());
		match self.source {
			| SourceKind::Auto if own_checkout => vec![Box::new(git), Box::new(captured)],
			| SourceKind::Auto => vec![Box::new(git)],
			| SourceKind::Git => vec![Box::new(git)],
			| SourceKind::Build => vec![Box::new(captured)],
		}
	}

	#[must_use]
	pub fn resolve(&self) -> Resolution {
		let sources = self.sources();
		let sources: Vec<&dyn DescribeSource> = sources.iter().map(|source| &**source).collect();
		self.resolver().resolve(&sources)
	}
}

/// Whether `repo` is the checkout tagver itself was built from; the
/// describe captured at build time only speaks for that one.
fn is_source_dir(repo: &Path) -> bool {
	match (repo.canonicalize(), Path::new(build::SOURCE_DIR).canonicalize()) {
		| (Ok(repo), Ok(source)) => repo == source,
		| _ => false,
	}
}

/// Accepts booleans, integers and the strings `1`/`true`/`yes`,
/// `0`/`false`/`no`, the same set the build script honours for
/// `TAGVER_RELEASE`.
fn flag<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Flag {
		Bool(bool),
		Int(i64),
		Str(String),
	}

	match Flag::deserialize(de)? {
		| Flag::Bool(value) => Ok(value),
		| Flag::Int(value) => Ok(value != 0),
		| Flag::Str(value) => match value.trim().to_ascii_lowercase().as_str() {
			| "1" | "true" | "yes" => Ok(true),
			| "" | "0" | "false" | "no" => Ok(false),
			| _ => Err(de::Error::invalid_value(Unexpected::Str(&value), &"a boolean")),
		},
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			baseline: build::BASELINE.to_owned(),
			release: build::RELEASE,
			repo_path: None,
			abbrev: DEFAULT_ABBREV,
			source: SourceKind::default(),
		}
	}
}

impl FromStr for SourceKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			| "auto" => Ok(Self::Auto),
			| "git" => Ok(Self::Git),
			| "build" => Ok(Self::Build),
			| other => Err(format!("unknown describe source {other:?}, expected auto, git or build")),
		}
	}
}

impl fmt::Display for SourceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			| Self::Auto => "auto",
			| Self::Git => "git",
			| Self::Build => "build",
		})
	}
}

#[cfg(test)]
mod tests {
	use figment::Jail;

	use super::*;

	fn load(path: Option<&str>, overrides: &Overrides) -> figment::error::Result<Config> {
		Config::load(path.map(Path::new), overrides).map_err(|e| e.to_string().into())
	}

	#[test]
	fn defaults() {
		Jail::expect_with(|_jail| {
			let config = load(None, &Overrides::default())?;
			assert_eq!(config, Config::default());
			assert_eq!(config.abbrev, 7);
			assert_eq!(config.baseline, build::BASELINE);
			Ok(())
		});
	}

	#[test]
	fn layers() {
		Jail::expect_with(|jail| {
			jail.create_file("tagver.toml", r#"
				baseline = "1.0.0"
				abbrev = 9
				source = "build"
			"#)?;
			jail.set_env("TAGVER_ABBREV", "10");

			let config = load(Some("tagver.toml"), &Overrides::default())?;
			assert_eq!(config.baseline, "1.0.0");
			assert_eq!(config.abbrev, 10);
			assert_eq!(config.source, SourceKind::Build);

			let overrides = Overrides {
				abbrev: Some(12),
				release: Some(true),
				..Overrides::default()
			};
			let config = load(Some("tagver.toml"), &overrides)?;
			assert_eq!(config.abbrev, 12);
			assert!(config.release);
			assert_eq!(config.baseline, "1.0.0");
			Ok(())
		});
	}

	#[test]
	fn missing_file() {
		Jail::expect_with(|_jail| {
			assert!(load(Some("absent.toml"), &Overrides::default()).is_err());
			Ok(())
		});
	}

	#[test]
	fn abbrev_range() {
		Jail::expect_with(|_jail| {
			let overrides = Overrides { abbrev: Some(2), ..Overrides::default() };
			let err = Config::load(None, &overrides).unwrap_err();
			assert!(matches!(err, Error::Abbrev(2)));
			Ok(())
		});
	}

	#[test]
	fn release_from_env() {
		Jail::expect_with(|jail| {
			for (value, expected) in
				[("1", true), ("yes", true), ("TRUE", true), ("0", false), ("no", false)]
			{
				jail.set_env("TAGVER_RELEASE", value);
				assert_eq!(load(None, &Overrides::default())?.release, expected, "{value}");
			}

			jail.set_env("TAGVER_RELEASE", "maybe");
			assert!(load(None, &Overrides::default()).is_err());
			Ok(())
		});
	}

	#[test]
	fn release_from_file() {
		Jail::expect_with(|jail| {
			jail.create_file("tagver.toml", "release = true")?;
			assert!(load(Some("tagver.toml"), &Overrides::default())?.release);
			Ok(())
		});
	}

	#[test]
	fn other_repository_ignores_build_capture() {
		let dir = tempfile::tempdir().unwrap();
		for source in [SourceKind::Git, SourceKind::Auto] {
			let config = Config {
				baseline: "2.0.0".to_owned(),
				release: false,
				repo_path: Some(dir.path().to_owned()),
				source,
				..Config::default()
			};
			assert_eq!(config.sources().len(), 1);
			assert_eq!(config.resolve().version(), "2.0.0");
		}
	}

	#[test]
	fn own_checkout_keeps_build_capture() {
		let config = Config {
			repo_path: Some(PathBuf::from(build::SOURCE_DIR)),
			source: SourceKind::Auto,
			..Config::default()
		};
		assert_eq!(config.sources().len(), 2);
	}

	#[test]
	fn release_resolves_to_baseline() {
		let config = Config {
			baseline: "3.1.4".to_owned(),
			release: true,
			repo_path: Some(PathBuf::from("/nonexistent")),
			..Config::default()
		};
		assert_eq!(config.resolve(), Resolution::Fallback {
			version: "3.1.4".to_owned(),
			reason: crate::resolver::Fallback::Release,
		});
	}

	#[test]
	fn source_kind() {
		assert_eq!("GIT".parse::<SourceKind>(), Ok(SourceKind::Git));
		assert_eq!(SourceKind::Build.to_string(), "build");
		assert!("svn".parse::<SourceKind>().is_err());
		assert_eq!(SourceKind::default(), SourceKind::Git);
		assert_eq!(Config::default().sources().len(), 1);
	}
}
