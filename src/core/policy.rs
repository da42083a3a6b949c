//! Turns a parsed describe into a version identifier.
//!
//! At a tag the tag is the version. Past a tag the last numeric component is
//! bumped and the result marked as a development release of that next
//! version, carrying the commit hash as a local label:
//! `1.2.3` < `1.2.4.dev5+gabc1234` < `1.2.4`.

use crate::{
	describe::{Describe, Distance},
	error::DescribeError,
};

pub fn dev_version(describe: &Describe) -> Result<String, DescribeError> {
	let Some(Distance { commits, hash }) = &describe.distance else {
		return Ok(describe.tag.clone());
	};

	let next = next_release(&describe.tag)?;
	Ok(format!("{next}.dev{commits}+{}", local_label(hash)))
}

/// `tag` with its last `.`-separated component incremented. A tag without
/// any `.` is incremented as a whole.
pub fn next_release(tag: &str) -> Result<String, DescribeError> {
	let (head, tail) = match tag.rsplit_once('.') {
		| Some((head, tail)) => (Some(head), tail),
		| None => (None, tag),
	};

	let bumped = Some(tail)
		.filter(|tail| !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()))
		.and_then(|tail| tail.parse::<u64>().ok())
		.and_then(|tail| tail.checked_add(1))
		.ok_or_else(|| DescribeError::MalformedOutput(tag.to_owned()))?;

	Ok(match head {
		| Some(head) => format!("{head}.{bumped}"),
		| None => bumped.to_string(),
	})
}

#[inline]
#[must_use]
pub fn local_label(hash: &str) -> String { format!("g{hash}") }
