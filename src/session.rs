use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{ToyError, environment::Environment, evaluator::Evaluator, parser::Parser, scanner::Scanner};

/// One evaluation session: a long-lived [`Environment`] plus the lines
/// evaluated against it. Each session owns its environment outright, so
/// several sessions can coexist and tests run in isolation.
pub struct Session {
	environment: Environment,
}

impl Session {
	/// Create a session with an empty environment.
	pub fn new() -> Self { Self { environment: Environment::new() } }

	/// Read access to the session's variable bindings.
	pub fn environment(&self) -> &Environment { &self.environment }

	/// Read a whole source file and evaluate it as one program.
	pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ToyError> {
		let source = read_to_string(path).context("failed to open source file")?;
		self.run_line(&source)
	}

	/// Run the interactive prompt until end of input.
	///
	/// An empty line re-prompts without touching the evaluator. After each
	/// successful line the whole environment is printed. A failed line is
	/// reported on stderr and aborts only that line; the session keeps every
	/// binding the last successful statement left behind.
	pub fn run_prompt(&mut self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("toy-lang> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("failed to flush prompt: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!();
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("failed to read line: {e}");
					continue;
				}
			}
			let line = input.trim();
			if line.is_empty() {
				continue;
			}
			match self.run_line(line) {
				Ok(()) => println!("{}", self.environment),
				Err(e) => eprintln!("{e}"),
			}
		}
	}
}

impl Session {
	/// Evaluate one line of source against the live environment.
	pub fn run_line(&mut self, source: &str) -> Result<(), ToyError> {
		let scanner = Scanner::new(source);
		let mut parser = Parser::new(scanner)?;
		let program = parser.parse()?;
		Evaluator::new(&mut self.environment).evaluate(&program)?;
		Ok(())
	}
}

impl Default for Session {
	fn default() -> Self { Self::new() }
}
