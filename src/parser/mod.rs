//! Recursive-descent parser for the assignment language.
//!
//! Grammar:
//!
//! ``` EBNF
//! Program      := Assignment* EndOfInput
//! Assignment   := Identifier '=' Exp ';'
//! Identifier   := Letter (Letter | Digit)*
//! Exp          := Term (('+' | '-') Term)*      // left-associative
//! Term         := Fact ('*' Fact)*              // left-associative
//! Fact         := '(' Exp ')' | ('-' | '+') Fact | Literal | Identifier
//! Literal      := '0' | NonZeroDigit Digit*
//! ```
//!
//! The parser keeps exactly one token of lookahead (`current`) and pulls the
//! next token from the scanner only when it consumes the current one, so the
//! token stream is never materialized. Because the scanner emits letters and
//! digits one character at a time, multi-character identifiers and integer
//! literals are assembled here, token by token.
//!
//! `Exp` and `Term` fold their operator chains with an accumulating loop, so
//! chains of any length are left-associative: `10 - 3 - 2` parses as
//! `(10 - 3) - 2`. Unary prefix is right-recursive, so `--5` nests two unary
//! nodes.

use TokenKind::*;
use anyhow::Context;
use num_bigint::BigInt;

use crate::{ast::{Assignment, BinaryOperator, Expression, Program, UnaryOperator}, error::parser::{ParserError, SyntaxError}, scanner::{Scanner, Token, TokenKind}};

pub(crate) struct Parser<'a> {
	scanner: Scanner<'a>,
	/// The single token of lookahead.
	current: Token<'a>,
}

impl<'a> Parser<'a> {
	/// Create a parser over a scanner, pulling the first token.
	pub fn new(mut scanner: Scanner<'a>) -> Result<Self, ParserError> {
		let current = scanner.next_token()?;
		Ok(Self { scanner, current })
	}

	/// Parse a whole program: `Assignment* EndOfInput`.
	pub fn parse(&mut self) -> Result<Program, ParserError> {
		let mut statements = Vec::new();
		while self.current.kind != EndOfInput {
			statements.push(self.assignment()?);
		}
		Ok(Program { statements })
	}

	/// Parse `Identifier '=' Exp ';'`.
	fn assignment(&mut self) -> Result<Assignment, ParserError> {
		let target = self.identifier()?;
		self.expect(Equal)?;
		let expression = self.expression()?;
		self.expect(Semicolon)?;
		Ok(Assignment { target, expression })
	}

	/// Parse `Letter (Letter | Digit)*`, concatenating the one-character
	/// lexemes into a name.
	fn identifier(&mut self) -> Result<String, ParserError> {
		let mut name = String::from(self.expect(Letter)?.lexeme);
		while matches!(self.current.kind, Letter | Digit) {
			name.push_str(self.current.lexeme);
			self.advance()?;
		}
		Ok(name)
	}

	/// Parse `Term (('+' | '-') Term)*`.
	fn expression(&mut self) -> Result<Expression, ParserError> {
		let mut expression = self.term()?;
		while matches!(self.current.kind, Plus | Minus) {
			let operator =
				if self.current.kind == Plus { BinaryOperator::Add } else { BinaryOperator::Subtract };
			self.advance()?;
			expression = Expression::binary(expression, operator, self.term()?);
		}
		Ok(expression)
	}

	/// Parse `Fact ('*' Fact)*`.
	fn term(&mut self) -> Result<Expression, ParserError> {
		let mut expression = self.fact()?;
		while self.current.kind == Mult {
			self.advance()?;
			expression = Expression::binary(expression, BinaryOperator::Multiply, self.fact()?);
		}
		Ok(expression)
	}

	/// Parse `'(' Exp ')' | ('-' | '+') Fact | Literal | Identifier`.
	fn fact(&mut self) -> Result<Expression, ParserError> {
		match self.current.kind {
			LParen => {
				self.advance()?; // consume '('
				let expression = self.expression()?;
				self.expect(RParen)?;
				Ok(expression)
			}
			Minus => {
				self.advance()?;
				Ok(Expression::unary(UnaryOperator::Minus, self.fact()?))
			}
			Plus => {
				self.advance()?;
				Ok(Expression::unary(UnaryOperator::Plus, self.fact()?))
			}
			Digit => self.literal(),
			Letter => Ok(Expression::variable(self.identifier()?)),
			found => Err(SyntaxError::ExpectedExpression { found, position: self.current.position }.into()),
		}
	}

	/// Parse `'0' | NonZeroDigit Digit*`.
	///
	/// A leading `'0'` is a complete literal on its own: any digits right
	/// behind it are left unconsumed, so `007` fails at the following
	/// statement-delimiter expectation rather than here.
	fn literal(&mut self) -> Result<Expression, ParserError> {
		if self.current.lexeme == "0" {
			self.advance()?;
			return Ok(Expression::literal(BigInt::from(0)));
		}

		let mut digits = String::from(self.expect(Digit)?.lexeme);
		while self.current.kind == Digit {
			digits.push_str(self.current.lexeme);
			self.advance()?;
		}
		let value = digits.parse::<BigInt>().context("failed to parse integer literal")?;
		Ok(Expression::literal(value))
	}

	/// Consume the current token if it has the expected kind, pulling the
	/// next one from the scanner; otherwise fail with a syntax error.
	fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, ParserError> {
		if self.current.kind == kind {
			self.advance()
		} else {
			Err(SyntaxError::UnexpectedToken {
				expected: kind,
				found:    self.current.kind,
				position: self.current.position,
			}
			.into())
		}
	}

	/// Replace the lookahead with the next token, returning the consumed one.
	fn advance(&mut self) -> Result<Token<'a>, ParserError> {
		let next = self.scanner.next_token()?;
		Ok(std::mem::replace(&mut self.current, next))
	}
}
