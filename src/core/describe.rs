//! Parsing of `git describe` output.
//!
//! Two shapes are produced by `git describe --abbrev=N`:
//!
//! - `v1.2.3` when HEAD is exactly at an annotated tag;
//! - `v1.2.3-5-gabc1234` when HEAD is five commits past that tag.
//!
//! The distance suffix is matched from the right so tags that themselves
//! contain `-` are kept whole.

use std::fmt;

use crate::error::DescribeError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Describe {
	/// Tag name with one leading `v` removed.
	pub tag: String,
	pub distance: Option<Distance>,
}

/// Position of HEAD relative to `Describe::tag`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Distance {
	pub commits: u64,
	/// Abbreviated commit hash, without git's `g` prefix.
	pub hash: String,
}

impl Describe {
	pub fn parse(raw: &str) -> Result<Self, DescribeError> {
		let text = raw.trim();
		let text = text.strip_prefix('v').unwrap_or(text);
		if text.is_empty() {
			return Err(DescribeError::MalformedOutput(raw.to_owned()));
		}

		let describe = match split_distance(text) {
			| Some((tag, distance)) => Self { tag: tag.to_owned(), distance: Some(distance) },
			| None => Self { tag: text.to_owned(), distance: None },
		};

		Ok(describe)
	}

	#[inline]
	#[must_use]
	pub fn is_exact(&self) -> bool { self.distance.is_none() }

	#[inline]
	#[must_use]
	pub fn commits_since_tag(&self) -> u64 {
		self.distance
			.as_ref()
			.map_or(0, |distance| distance.commits)
	}

	#[inline]
	#[must_use]
	pub fn commit_hash(&self) -> Option<&str> {
		self.distance
			.as_ref()
			.map(|distance| distance.hash.as_str())
	}
}

impl fmt::Display for Describe {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.distance {
			| Some(Distance { commits, hash }) => write!(f, "v{}-{commits}-g{hash}", self.tag),
			| None => write!(f, "v{}", self.tag),
		}
	}
}

fn split_distance(text: &str) -> Option<(&str, Distance)> {
	let (head, hash) = text.rsplit_once("-g")?;
	let (tag, commits) = head.rsplit_once('-')?;
	if tag.is_empty() || hash.is_empty() || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
		return None;
	}

	if !commits.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}

	let commits = commits.parse().ok()?;
	Some((tag, Distance { commits, hash: hash.to_owned() }))
}
