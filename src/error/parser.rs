use crate::{error::scanner::LexError, scanner::TokenKind};

/// Umbrella error for the parsing stage. Pulling a token can fail in the
/// scanner, so lexical errors surface through the parser as well.
#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	/// Internal error, should never happen
	#[error("{0}")]
	Internal(#[from] anyhow::Error),
	#[error(transparent)]
	Lex(#[from] LexError),
	#[error(transparent)]
	Syntax(#[from] SyntaxError),
}

/// A grammar expectation that the current token failed to meet.
#[derive(thiserror::Error, Debug)]
pub enum SyntaxError {
	/// A specific token kind was required and something else was found.
	#[error("expected {expected} but found {found} at position {position}")]
	UnexpectedToken {
		expected: TokenKind,
		found:    TokenKind,
		position: usize,
	},
	/// An expression was required and the current token cannot start one.
	#[error("expected an expression but found {found} at position {position}")]
	ExpectedExpression { found: TokenKind, position: usize },
}
