//! The scanner turns raw source text into tokens.
//!
//! Unlike most lexical grammars this one is deliberately tiny: every token is
//! exactly one character. Digits and letters come out one at a time and the
//! parser glues them back together into numbers and identifiers, so the
//! scanner never needs more than a single character of context. Tokens are
//! pulled on demand with [`Scanner::next_token`]; the parser keeps one token
//! of lookahead and asks for the next only when it consumes the current one.

mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenKind::*;
pub(crate) use token::Token;
pub use token::TokenKind;

use crate::error::scanner::LexError;

/// A pull-based scanner over one line of source code
pub(crate) struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter }
	}

	/// Produce the next token, skipping any whitespace in front of it.
	///
	/// Once the source is exhausted this returns the `EndOfInput` sentinel,
	/// and keeps returning it on every further call.
	pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
		while let Some(&(position, c)) = self.source_iter.peek() {
			if c.is_whitespace() {
				self.source_iter.next();
				continue;
			}

			let kind = match c {
				'*' => Mult,
				'+' => Plus,
				'-' => Minus,
				';' => Semicolon,
				'(' => LParen,
				')' => RParen,
				'=' => Equal,
				c if c.is_ascii_digit() => Digit,
				c if c.is_ascii_alphabetic() || c == '_' => Letter,
				c => return Err(LexError::new(position, c)),
			};

			self.source_iter.next();
			let lexeme = &self.source[position..position + c.len_utf8()];
			return Ok(Token::new(kind, lexeme, position));
		}

		Ok(Token::new(EndOfInput, "", self.source.len()))
	}
}
