use serde::Serialize;
use tagver_core::{Config, Resolution, Result};

#[derive(Serialize)]
struct Report<'a> {
	baseline: &'a str,
	release: bool,
	#[serde(flatten)]
	resolution: &'a Resolution,
}

/// Text printed for a resolution: the bare version, or a JSON report.
pub fn render(config: &Config, resolution: &Resolution, json: bool) -> Result<String> {
	if !json {
		return Ok(resolution.version().to_owned());
	}

	let report = Report {
		baseline: &config.baseline,
		release: config.release,
		resolution,
	};

	Ok(serde_json::to_string(&report)?)
}
