//! An abstraction for something which can be evaluated into a number.
//!
//! This is implemented for [ExpressionTree](crate::ExpressionTree). It exists so that the standalone
//! postfix and prefix evaluators in [notation](crate::notation) can be checked against the tree
//! through the same interface.

use alloc::vec::Vec;

use crate::{Number, error::MathsError, node::tree::{ExpressionTree, Node}, number::operand_value};

/// Something which can be evaluated into a number.
pub trait Evaluable {
    /// Evaluates this expression and returns either a [Number] with the result, or a [MathsError]
    /// if evaluation was not successful.
    fn evaluate(&self) -> Result<Number, MathsError>;
}

impl Evaluable for ExpressionTree {
    /// Walks the tree in post-order, so the whole left subtree of an operator is evaluated before
    /// its right subtree, and both are evaluated before the operator is applied. An empty tree
    /// evaluates to 0.
    fn evaluate(&self) -> Result<Number, MathsError> {
        let mut values: Vec<Number> = Vec::new();

        for index in self.post_order() {
            let value = match self[index] {
                Node::Operand(operand) => operand_value(operand)?,
                Node::Operator { op, .. } => {
                    // Post-order guarantees both children were pushed just before this node
                    let right = values.pop().unwrap_or_default();
                    let left = values.pop().unwrap_or_default();
                    op.apply(left, right)?
                }
            };
            values.push(value);
        }

        Ok(values.pop().unwrap_or(0))
    }
}
