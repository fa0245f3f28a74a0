use num_bigint::BigInt;
use toylang::{EvalError, Session, ToyError};

fn value(session: &Session, name: &str) -> BigInt {
	session.environment().get(name).cloned().unwrap_or_else(|| panic!("'{name}' is unbound"))
}

#[test]
fn leading_zero() {
	let mut session = Session::new();
	session.run_line("x = 0;").unwrap();
	assert_eq!(value(&session, "x"), BigInt::from(0));

	let error = session.run_line("x = 007;").unwrap_err();
	assert!(matches!(error, ToyError::Syntax(_)), "expected a syntax error, got: {error}");
	// The failed line left the earlier binding untouched.
	assert_eq!(value(&session, "x"), BigInt::from(0));
}

#[test]
fn precedence() {
	let mut session = Session::new();
	session.run_line("x = 2 + 3 * 4;").unwrap();
	assert_eq!(value(&session, "x"), BigInt::from(14));
}

#[test]
fn two_operand_chains() {
	let mut session = Session::new();
	session.run_line("x = 1 + 2; y = 2 * 5;").unwrap();
	assert_eq!(value(&session, "x"), BigInt::from(3));
	assert_eq!(value(&session, "y"), BigInt::from(10));
}

#[test]
fn longer_chains_fold_left() {
	let mut session = Session::new();
	session.run_line("x = 2 * 3 * 4; y = 10 - 3 - 2;").unwrap();
	assert_eq!(value(&session, "x"), BigInt::from(24));
	assert_eq!(value(&session, "y"), BigInt::from(5));
}

#[test]
fn unary_chains() {
	let mut session = Session::new();
	session.run_line("x = --5; y = -+5;").unwrap();
	assert_eq!(value(&session, "x"), BigInt::from(5));
	assert_eq!(value(&session, "y"), BigInt::from(-5));
}

#[test]
fn grouping() {
	let mut session = Session::new();
	session.run_line("x = (2 + 3) * 4;").unwrap();
	assert_eq!(value(&session, "x"), BigInt::from(20));
}

#[test]
fn undefined_variable() {
	let mut session = Session::new();
	let error = session.run_line("x = y;").unwrap_err();
	match error {
		ToyError::Eval(EvalError::UndefinedVariable(name)) => assert_eq!(name, "y"),
		other => panic!("expected an undefined-variable error, got: {other}"),
	}
	assert!(session.environment().is_empty());
}

#[test]
fn bindings_persist_across_lines() {
	let mut session = Session::new();
	session.run_line("x = 5;").unwrap();
	session.run_line("y = x + 1;").unwrap();
	assert_eq!(value(&session, "y"), BigInt::from(6));
	assert_eq!(session.environment().to_string(), "{x: 5, y: 6}");
}

#[test]
fn sessions_are_isolated() {
	let mut first = Session::new();
	let mut second = Session::new();
	first.run_line("x = 1;").unwrap();
	assert!(second.run_line("y = x;").is_err());
	assert!(second.environment().is_empty());
}

#[test]
fn empty_line_is_a_no_op() {
	let mut session = Session::new();
	session.run_line("x = 1;").unwrap();
	session.run_line("").unwrap();
	session.run_line("   \t  ").unwrap();
	assert_eq!(session.environment().len(), 1);
}

#[test]
fn failed_statement_is_atomic() {
	let mut session = Session::new();
	assert!(session.run_line("a = 1; b = missing; c = 3;").is_err());
	// Completed statements stay; the failed one and everything after leave
	// no trace.
	assert_eq!(value(&session, "a"), BigInt::from(1));
	assert!(session.environment().get("b").is_none());
	assert!(session.environment().get("c").is_none());
}

#[test]
fn unrecognized_character() {
	let mut session = Session::new();
	let error = session.run_line("x = 1 / 2;").unwrap_err();
	assert!(matches!(error, ToyError::Lex(_)), "expected a lex error, got: {error}");
}

#[test]
fn unbounded_integers() {
	let mut session = Session::new();
	session.run_line("big = 99999999999999999999999999999999999999 * 99999999999999999999999999999999999999;").unwrap();
	assert_eq!(
		value(&session, "big").to_string(),
		"9999999999999999999999999999999999999800000000000000000000000000000000000001"
	);
}

#[test]
fn run_file_evaluates_a_script() {
	use std::io::Write;

	let dir = std::env::temp_dir();
	let path = dir.join("toylang_session_test.toy");
	let mut file = std::fs::File::create(&path).unwrap();
	writeln!(file, "x = 5;\ny = x * x - 5;").unwrap();

	let mut session = Session::new();
	session.run_file(&path).unwrap();
	assert_eq!(value(&session, "y"), BigInt::from(20));

	std::fs::remove_file(&path).ok();
}
