//! Tree-walking evaluator.
//!
//! Walks the AST produced by the parser, threading the session's environment
//! through every statement. The match over [`Expression`] is exhaustive, so a
//! new node variant fails to compile until it learns to evaluate.
//!
//! Evaluation order is the language's only sequencing rule: statements run
//! strictly left to right, an assignment evaluates its expression fully
//! before binding (so a failing expression never touches the environment),
//! and binary operands evaluate left before right. All arithmetic is exact
//! `BigInt` arithmetic; there is no division, so no division-by-zero case.

use anyhow::anyhow;
use num_bigint::BigInt;

use crate::{ast::{Assignment, BinaryOperator, Expression, Program, UnaryOperator}, environment::Environment, error::evaluator::EvalError};

/// Evaluates one program against a borrowed environment. The environment is
/// session state and outlives every evaluator created for it.
pub(crate) struct Evaluator<'a> {
	environment: &'a mut Environment,
}

impl<'a> Evaluator<'a> {
	pub fn new(environment: &'a mut Environment) -> Self { Self { environment } }

	/// Run every statement in source order. Produces no value, only
	/// environment mutations; the first failing statement stops the run with
	/// everything before it still in effect.
	pub fn evaluate(&mut self, program: &Program) -> Result<(), EvalError> {
		for statement in &program.statements {
			self.evaluate_statement(statement)?;
		}
		Ok(())
	}

	fn evaluate_statement(&mut self, statement: &Assignment) -> Result<(), EvalError> {
		let value = self.evaluate_expression(&statement.expression)?;
		self.environment.set(statement.target.clone(), value);
		Ok(())
	}

	fn evaluate_expression(&mut self, expression: &Expression) -> Result<BigInt, EvalError> {
		Ok(match expression {
			Expression::Literal(value) => value.clone(),
			Expression::Variable(name) => self
				.environment
				.get(name)
				.cloned()
				.ok_or_else(|| EvalError::UndefinedVariable(name.clone()))?,
			Expression::Unary { operator, operand } => {
				let value = self.evaluate_expression(operand)?;
				match operator {
					UnaryOperator::Plus => value,
					UnaryOperator::Minus => -value,
				}
			}
			Expression::Binary { left, operator, right } => {
				let left_value = self.evaluate_expression(left)?;
				let right_value = self.evaluate_expression(right)?;
				match operator {
					BinaryOperator::Add => left_value + right_value,
					BinaryOperator::Subtract => left_value - right_value,
					BinaryOperator::Multiply => left_value * right_value,
				}
			}
			// No production emits NoOp; a well-formed tree never reaches here.
			Expression::NoOp => return Err(anyhow!("evaluated a no-op placeholder node").into()),
		})
	}
}
