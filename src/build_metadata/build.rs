#[path = "src/git.rs"]
mod git;
use std::{env, path::Path, process::Command};

fn run_git_command(args: &[&str]) -> Option<String> {
	Command::new("git")
		.args(args)
		.output()
		.ok()
		.filter(|output| output.status.success())
		.and_then(|output| String::from_utf8(output.stdout).ok())
		.map(|s| s.trim().to_owned())
		.filter(|s| !s.is_empty())
}

fn get_env(env_var: &str) -> Option<String> {
	match env::var(env_var) {
		| Ok(val) if !val.is_empty() => Some(val),
		| _ => None,
	}
}

fn is_truthy(val: &str) -> bool {
	matches!(val.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

fn main() {
	// --- Baseline ---
	let baseline = get_env("TAGVER_BASELINE")
		.or_else(|| get_env("CARGO_PKG_VERSION"))
		.unwrap_or_else(|| "0.0.0".to_owned());
	println!("cargo:rustc-env=TAGVER_BASELINE={baseline}");

	// --- Release flag ---
	if get_env("TAGVER_RELEASE").is_some_and(|val| is_truthy(&val)) {
		println!("cargo:rustc-env=TAGVER_RELEASE_FLAG=1");
	}

	// --- Describe ---
	let manifest_dir = get_env("CARGO_MANIFEST_DIR").unwrap_or_else(|| ".".to_owned());
	if let Some(desc) =
		get_env("GIT_DESCRIBE").or_else(|| git::describe(Path::new(&manifest_dir)))
	{
		println!("cargo:rustc-env=GIT_DESCRIBE={desc}");
	}

	// --- Rerun Triggers ---
	for arg in ["HEAD", "packed-refs", "refs/tags"] {
		if let Some(p) = run_git_command(&["rev-parse", "--git-path", arg]) {
			println!("cargo:rerun-if-changed={p}");
		}
	}
	if let Some(ref_path) = run_git_command(&["symbolic-ref", "--quiet", "HEAD"]) {
		if let Some(p) = run_git_command(&["rev-parse", "--git-path", &ref_path]) {
			println!("cargo:rerun-if-changed={p}");
		}
	}

	println!("cargo:rerun-if-env-changed=GIT_DESCRIBE");
	println!("cargo:rerun-if-env-changed=TAGVER_BASELINE");
	println!("cargo:rerun-if-env-changed=TAGVER_RELEASE");
}
