use std::process::ExitCode;

use tagver::{clap, logging};

fn main() -> ExitCode {
	let args = clap::parse();
	if let Err(e) = logging::init(&args.log) {
		eprintln!("tagver: {e}");
		return ExitCode::FAILURE;
	}

	match tagver::run(&args) {
		| Ok(text) => {
			println!("{text}");
			ExitCode::SUCCESS
		},
		| Err(e) => {
			eprintln!("tagver: {e}");
			ExitCode::FAILURE
		},
	}
}
