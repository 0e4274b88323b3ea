use alloc::vec::Vec;
use tracing::trace;

use crate::error::{ExpressionFault, NodeError};

use super::{token::{Operator, Token, TokenOrder}, tree::{ExpressionTree, Node, NodeIndex}};

/// Something waiting on the operator stack, along with the position it was read at.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator, usize),
    LeftParenthesis(usize),
}

/// Converts infix text into an [ExpressionTree] using an operand stack and an operator stack.
/// Used to implement [ExpressionTree::parse].
///
/// Operators of equal precedence are reduced as soon as the next one arrives, so `8-4-2` groups as
/// `(8-4)-2`. Each token is checked against the one before it, so misplaced operators are rejected
/// even when the stacks would happen to balance.
pub struct Parser<'a> {
    infix: &'a str,
    tree: ExpressionTree,
    operands: Vec<NodeIndex>,
    pending: Vec<Pending>,
    order: TokenOrder,
}

impl<'a> Parser<'a> {
    pub fn new(infix: &'a str) -> Self {
        Parser {
            infix,
            tree: ExpressionTree::default(),
            operands: Vec::new(),
            pending: Vec::new(),
            order: TokenOrder::new(),
        }
    }

    pub fn parse(mut self) -> Result<ExpressionTree, NodeError> {
        for (position, ch) in self.infix.chars().enumerate() {
            let token = Token::from_char(ch).ok_or(ExpressionFault::UnsupportedCharacter(ch, position))?;
            self.order.accept(token, position)?;

            match token {
                Token::Operand(value) => {
                    let leaf = self.tree.push(Node::Operand(value));
                    self.operands.push(leaf);
                }
                Token::LeftParenthesis => self.pending.push(Pending::LeftParenthesis(position)),
                Token::RightParenthesis => self.close_parenthesis(position)?,
                Token::Operator(op) => {
                    // Anything already waiting which binds at least as tightly is complete
                    while let Some(&Pending::Operator(top, top_position)) = self.pending.last() {
                        if op.precedence() > top.precedence() {
                            break;
                        }
                        self.pending.pop();
                        self.reduce(top, top_position)?;
                    }
                    self.pending.push(Pending::Operator(op, position));
                }
            }
        }
        self.order.finish()?;

        while let Some(pending) = self.pending.pop() {
            match pending {
                Pending::Operator(op, position) => self.reduce(op, position)?,
                Pending::LeftParenthesis(position) => {
                    return Err(ExpressionFault::UnclosedParenthesis(position).into());
                }
            }
        }

        match self.operands[..] {
            [] => Err(ExpressionFault::Empty.into()),
            [root] => {
                self.tree.set_root(root);
                Ok(self.tree)
            }
            _ => Err(ExpressionFault::MissingOperator.into()),
        }
    }

    /// Reduces operators until the matching `(` is found and discarded.
    fn close_parenthesis(&mut self, position: usize) -> Result<(), NodeError> {
        loop {
            match self.pending.pop() {
                Some(Pending::Operator(op, op_position)) => self.reduce(op, op_position)?,
                Some(Pending::LeftParenthesis(_)) => return Ok(()),
                None => return Err(ExpressionFault::UnopenedParenthesis(position).into()),
            }
        }
    }

    /// Pops two operands and replaces them with a single operator node. The operand on top of the
    /// stack becomes the right child.
    fn reduce(&mut self, op: Operator, position: usize) -> Result<(), NodeError> {
        let (right, left) = match (self.operands.pop(), self.operands.pop()) {
            (Some(right), Some(left)) => (right, left),
            _ => return Err(ExpressionFault::MissingOperand(op.symbol(), position).into()),
        };

        let node = self.tree.push(Node::Operator { op, left, right });
        self.operands.push(node);
        trace!(operator = %op.symbol(), left, right, node, "reduced operator");
        Ok(())
    }
}
