#[path = "../git.rs"]
mod git;

use std::{env, path::PathBuf};

fn main() {
	let dir = env::args_os()
		.nth(1)
		.map_or_else(|| PathBuf::from("."), PathBuf::from);

	match git::describe(&dir) {
		| Some(description) => println!("{description}"),
		| None => println!("unknown"),
	}
}
