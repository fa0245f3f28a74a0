pub mod evaluator;
pub mod parser;
pub mod scanner;

/// ToyError is the top-level error type for the evaluator pipeline.
#[derive(thiserror::Error, Debug)]
pub enum ToyError {
	/// Internal error, should never happen
	#[error("InternalError: {0}")]
	Internal(#[from] anyhow::Error),
	/// An unrecognized character was encountered while scanning
	#[error(transparent)]
	Lex(#[from] scanner::LexError),
	/// A grammar expectation failed while parsing
	#[error(transparent)]
	Syntax(#[from] parser::SyntaxError),
	/// Evaluation of a well-formed statement failed
	#[error(transparent)]
	Eval(#[from] evaluator::EvalError),
}

impl From<parser::ParserError> for ToyError {
	fn from(error: parser::ParserError) -> Self {
		match error {
			parser::ParserError::Internal(e) => ToyError::Internal(e),
			parser::ParserError::Lex(e) => ToyError::Lex(e),
			parser::ParserError::Syntax(e) => ToyError::Syntax(e),
		}
	}
}
