use std::{
	path::Path,
	process::{Command, Stdio},
};

/// Minimum abbreviated hash length requested from `git describe`.
pub(crate) const ABBREV: u8 = 7;

/// Raw `git describe` output for the repository enclosing `dir`, without any
/// reformatting. `None` when git is missing, `dir` is not inside a repository,
/// or no annotated tag is reachable.
pub(crate) fn describe(dir: &Path) -> Option<String> {
	Command::new("git")
		.arg("describe")
		.arg(format!("--abbrev={ABBREV}"))
		.current_dir(dir)
		.stderr(Stdio::null())
		.output()
		.ok()
		.filter(|output| output.status.success())
		.and_then(|output| String::from_utf8(output.stdout).ok())
		.map(|s| s.trim().to_owned())
		.filter(|s| !s.is_empty())
}
