//! Facts fixed when the crate is built: the baseline version, whether this is
//! a release build, and the describe text of the checkout it was built from.

/// Last released version. `TAGVER_BASELINE` in the build environment
/// overrides the package version.
pub static BASELINE: &str = env!("TAGVER_BASELINE");

/// True only when built with `TAGVER_RELEASE` set to `1`, `true` or `yes`.
pub const RELEASE: bool = option_env!("TAGVER_RELEASE_FLAG").is_some();

/// `git describe` output captured while building, if any.
pub static GIT_DESCRIBE: Option<&str> = option_env!("GIT_DESCRIBE");

/// Directory of this crate's sources; the default repository to describe.
pub static SOURCE_DIR: &str = env!("CARGO_MANIFEST_DIR");

#[must_use]
pub fn describe() -> Option<&'static str> { GIT_DESCRIBE.filter(|s| !s.is_empty()) }
