/// A scanning error: the source contained a character the language has no
/// token for.
#[derive(thiserror::Error, Debug)]
#[error("unrecognized character '{character}' at position {position}")]
pub struct LexError {
	/// Byte offset of the offending character within the line.
	position:  usize,
	/// The character the scanner could not classify.
	character: char,
}

impl LexError {
	pub(crate) fn new(position: usize, character: char) -> Self { Self { position, character } }
}
