/// Errors that can occur while evaluating a well-formed program
#[derive(thiserror::Error, Debug)]
pub enum EvalError {
	/// An identifier was read before any assignment gave it a value
	#[error("undefined variable '{0}'")]
	UndefinedVariable(String),
	/// Internal error, should never happen
	#[error("{0}")]
	Internal(#[from] anyhow::Error),
}
