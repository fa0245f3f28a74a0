//! An interactive evaluator for a minimal imperative expression language:
//! integer literals, identifiers, unary `+`/`-`, binary `+ - *`,
//! parenthesised grouping, and `;`-terminated assignment statements.
//!
//! ``` text
//! toy-lang> x = (2 + 3) * 4;
//! {x: 20}
//! toy-lang> y = x - 1;
//! {x: 20, y: 19}
//! ```
//!
//! The pipeline is the classic three stages:
//!
//! - the scanner turns source text into single-character tokens, pulled
//!   lazily one at a time;
//! - the parser consumes them with one token of lookahead and builds an AST,
//!   assembling multi-character identifiers and integer literals itself;
//! - the evaluator walks the tree against a [`Session`]'s persistent
//!   [`Environment`], so later lines observe all prior bindings.
//!
//! Values are exact, unbounded-precision integers. Errors come in three
//! kinds, one per stage: [`LexError`], [`SyntaxError`] and
//! [`EvalError::UndefinedVariable`]; a failing statement never leaves a
//! partial binding behind.

pub mod cli;

mod ast;
mod environment;
mod error;
mod evaluator;
mod parser;
mod scanner;
mod session;

pub use environment::Environment;
pub use error::{ToyError, evaluator::EvalError, parser::SyntaxError, scanner::LexError};
pub use scanner::TokenKind;
pub use session::Session;
