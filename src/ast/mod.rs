//! AST nodes produced by the parser and consumed by the evaluator.
//!
//! The tree is a closed sum: every node variant is known here, the evaluator
//! matches exhaustively, and each node exclusively owns its children. Nodes
//! are immutable once built; `Display` renders parenthesised prefix form,
//! which the parser tests assert against.

use num_bigint::BigInt;

/// An expression node
#[derive(Debug, PartialEq)]
pub(crate) enum Expression {
	/// Epsilon placeholder for a grammar production that matched nothing.
	/// No current production emits it; a well-formed tree never contains one.
	NoOp,
	/// An integer literal, unbounded in magnitude.
	Literal(BigInt),
	/// A variable read.
	Variable(String),
	Unary { operator: UnaryOperator, operand: Box<Expression> },
	Binary { left: Box<Expression>, operator: BinaryOperator, right: Box<Expression> },
}

impl Expression {
	pub fn literal(value: BigInt) -> Self { Expression::Literal(value) }

	pub fn variable(name: String) -> Self { Expression::Variable(name) }

	pub fn unary(operator: UnaryOperator, operand: Self) -> Self {
		Expression::Unary { operator, operand: Box::new(operand) }
	}

	pub fn binary(left: Self, operator: BinaryOperator, right: Self) -> Self {
		Expression::Binary { left: Box::new(left), operator, right: Box::new(right) }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnaryOperator {
	Plus,
	Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOperator {
	Add,
	Subtract,
	Multiply,
}

/// An assignment statement: `Identifier '=' Exp ';'`
#[derive(Debug, PartialEq)]
pub(crate) struct Assignment {
	pub target:     String,
	pub expression: Expression,
}

/// A whole program: an ordered sequence of assignments
#[derive(Debug, PartialEq)]
pub(crate) struct Program {
	pub statements: Vec<Assignment>,
}

impl std::fmt::Display for UnaryOperator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			UnaryOperator::Plus => write!(f, "+"),
			UnaryOperator::Minus => write!(f, "-"),
		}
	}
}

impl std::fmt::Display for BinaryOperator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			BinaryOperator::Add => write!(f, "+"),
			BinaryOperator::Subtract => write!(f, "-"),
			BinaryOperator::Multiply => write!(f, "*"),
		}
	}
}

impl std::fmt::Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Expression::NoOp => write!(f, "(nop)"),
			Expression::Literal(value) => write!(f, "{value}"),
			Expression::Variable(name) => write!(f, "{name}"),
			Expression::Unary { operator, operand } => write!(f, "({operator} {operand})"),
			Expression::Binary { left, operator, right } => write!(f, "({operator} {left} {right})"),
		}
	}
}

impl std::fmt::Display for Assignment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "(= {} {})", self.target, self.expression)
	}
}

impl std::fmt::Display for Program {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let statements =
			self.statements.iter().map(|s| s.to_string()).collect::<Vec<String>>().join(" ");
		write!(f, "{statements}")
	}
}
