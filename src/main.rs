use clap::Parser;
use toylang::{Session, cli::{Cli, Mode}};

fn main() {
	let mut session = Session::new();

	match Cli::parse().mode {
		Mode::File { path } => {
			if let Err(e) = session.run_file(&path) {
				eprintln!("{e}");
				std::process::exit(1);
			}
			println!("{}", session.environment());
		}
		Mode::Repl => session.run_prompt(),
	}
}
