use std::{
	path::{Path, PathBuf},
	process::{Command, Stdio},
};

use tracing::debug;

use crate::error::DescribeError;

pub const DEFAULT_ABBREV: u8 = 7;

/// Somewhere a raw `git describe` text can be obtained from.
pub trait DescribeSource {
	fn describe(&self) -> Result<String, DescribeError>;
}

/// Runs `git describe --abbrev=N` inside a repository.
#[derive(Clone, Debug)]
pub struct GitDescribe {
	repo: PathBuf,
	abbrev: u8,
}

impl GitDescribe {
	#[must_use]
	pub fn new<P: Into<PathBuf>>(repo: P) -> Self { Self { repo: repo.into(), abbrev: DEFAULT_ABBREV } }

	#[must_use]
	pub fn with_abbrev(self, abbrev: u8) -> Self { Self { abbrev, ..self } }

	#[inline]
	#[must_use]
	pub fn repo(&self) -> &Path { &self.repo }
}

impl DescribeSource for GitDescribe {
	#[tracing::instrument(name = "git_describe", level = "debug", skip_all, fields(repo = %self.repo.display()))]
	fn describe(&self) -> Result<String, DescribeError> {
		if !self.repo.is_dir() {
			debug!("repository path is not a directory");
			return Err(DescribeError::NotARepository { code: None });
		}

		let output = Command::new("git")
			.arg("describe")
			.arg(format!("--abbrev={}", self.abbrev))
			.current_dir(&self.repo)
			.stdin(Stdio::null())
			.stderr(Stdio::null())
			.output()
			.map_err(DescribeError::ToolUnavailable)?;

		if !output.status.success() {
			debug!(status = %output.status, "git describe failed");
			return Err(DescribeError::NotARepository { code: output.status.code() });
		}

		let text = String::from_utf8(output.stdout).map_err(|e| {
			DescribeError::MalformedOutput(String::from_utf8_lossy(e.as_bytes()).into_owned())
		})?;

		debug!(describe = text.trim(), "git describe");
		Ok(text)
	}
}

/// A describe text obtained earlier, typically while the crate was built.
#[derive(Clone, Debug, Default)]
pub struct Captured(Option<String>);

impl Captured {
	#[must_use]
	pub fn new(text: Option<&str>) -> Self {
		Self(
			text.map(str::trim)
				.filter(|text| !text.is_empty())
				.map(ToOwned::to_owned),
		)
	}
}

impl DescribeSource for Captured {
	fn describe(&self) -> Result<String, DescribeError> {
		self.0
			.clone()
			.ok_or(DescribeError::NotARepository { code: None })
	}
}
