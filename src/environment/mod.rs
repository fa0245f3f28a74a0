use std::collections::HashMap;

use num_bigint::BigInt;

/// The mutable name→integer mapping holding all session-visible variable
/// state. One environment is created per session and lives for the whole
/// session; assignments mutate it in place, reads never create entries.
#[derive(Debug, Default)]
pub struct Environment {
	variables: HashMap<String, BigInt>,
}

impl Environment {
	pub fn new() -> Self { Self { variables: HashMap::new() } }

	/// Look up a variable. Absent names are the caller's error to report.
	pub fn get(&self, name: &str) -> Option<&BigInt> { self.variables.get(name) }

	/// Bind a value to a name, overwriting any prior binding.
	pub fn set(&mut self, name: String, value: BigInt) { self.variables.insert(name, value); }

	pub fn is_empty(&self) -> bool { self.variables.is_empty() }

	pub fn len(&self) -> usize { self.variables.len() }
}

impl std::fmt::Display for Environment {
	/// Render every binding as `{a: 1, b: 2}`, name-sorted so the printout is
	/// stable.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut bindings: Vec<_> = self.variables.iter().collect();
		bindings.sort_by(|(a, _), (b, _)| a.cmp(b));
		let bindings =
			bindings.iter().map(|(name, value)| format!("{name}: {value}")).collect::<Vec<String>>().join(", ");
		write!(f, "{{{bindings}}}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn set_and_get() {
		let mut environment = Environment::new();
		assert!(environment.get("x").is_none());
		environment.set("x".to_string(), BigInt::from(5));
		assert_eq!(environment.get("x"), Some(&BigInt::from(5)));
	}

	#[test]
	fn set_overwrites() {
		let mut environment = Environment::new();
		environment.set("x".to_string(), BigInt::from(1));
		environment.set("x".to_string(), BigInt::from(2));
		assert_eq!(environment.get("x"), Some(&BigInt::from(2)));
		assert_eq!(environment.len(), 1);
	}

	#[test]
	fn get_never_inserts() {
		let environment = Environment::new();
		assert!(environment.get("missing").is_none());
		assert!(environment.is_empty());
	}

	#[test]
	fn display_is_name_sorted() {
		let mut environment = Environment::new();
		environment.set("b".to_string(), BigInt::from(2));
		environment.set("a".to_string(), BigInt::from(1));
		assert_eq!(environment.to_string(), "{a: 1, b: 2}");
		assert_eq!(Environment::new().to_string(), "{}");
	}
}
