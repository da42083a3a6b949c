//! one true function for returning the tagver version
//!
//! Release builds report the baseline the crate was built with. Development
//! builds describe the checkout the sources live in, falling back to the
//! describe captured at build time and then to the baseline.

use std::sync::OnceLock;

use tagver_build_metadata as build;

use crate::resolver::{Captured, GitDescribe, Resolver};

static BRANDING: &str = "tagver";

static VERSION: OnceLock<String> = OnceLock::new();
static USER_AGENT: OnceLock<String> = OnceLock::new();

#[inline]
#[must_use]
pub fn name() -> &'static str { BRANDING }

#[inline]
#[must_use]
pub fn version() -> &'static str { VERSION.get_or_init(init_version) }

#[inline]
#[must_use]
pub fn user_agent() -> &'static str { USER_AGENT.get_or_init(init_user_agent) }

fn init_user_agent() -> String { format!("{}/{}", name(), version()) }

fn init_version() -> String {
	let git = GitDescribe::new(build::SOURCE_DIR);
	let captured = Captured::new(build::describe());

	Resolver::new(build::BASELINE, build::RELEASE)
		.resolve(&[&git, &captured])
		.into_version()
}
