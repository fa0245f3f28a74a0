/// A token produced by the scanner
#[derive(Debug, Clone)]
pub(crate) struct Token<'a> {
	pub kind:     TokenKind,
	pub lexeme:   &'a str,
	/// Byte offset of the lexeme within the scanned line.
	pub position: usize,
}

impl<'a> Token<'a> {
	pub fn new(kind: TokenKind, lexeme: &'a str, position: usize) -> Self { Self { kind, lexeme, position } }
}

/// The different kinds of tokens in the language. Every token is a single
/// source character; the parser assembles multi-character identifiers and
/// literals itself, one token at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
	/// A single decimal digit `0`-`9`.
	Digit,
	/// A single identifier-seed character `[A-Za-z_]`.
	Letter,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Asterisk `*`.
	Mult,
	/// Semicolon `;`, the statement delimiter.
	Semicolon,
	/// Left parenthesis `(`.
	LParen,
	/// Right parenthesis `)`.
	RParen,
	/// Equal `=`.
	Equal,
	/// End of input sentinel, safe to pull repeatedly.
	EndOfInput,
}

impl std::fmt::Display for TokenKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use TokenKind::*;
		let text = match self {
			Digit => "a digit",
			Letter => "a letter",
			Plus => "'+'",
			Minus => "'-'",
			Mult => "'*'",
			Semicolon => "';'",
			LParen => "'('",
			RParen => "')'",
			Equal => "'='",
			EndOfInput => "end of input",
		};
		write!(f, "{text}")
	}
}
