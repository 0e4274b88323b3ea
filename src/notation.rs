//! Conversions from infix text into postfix and prefix notation, and evaluators for the results.
//!
//! Both converters reject text which [ExpressionTree::parse] would reject, with the same fault for
//! misplaced operands and operators.
//!
//! The converters scan the text directly rather than reading an [ExpressionTree], so they always
//! reflect the current text of an edited expression. For a tree-derived prefix, see
//! [ExpressionTree::pre_order_notation].
//!
//! Prefix conversion reverses the text, swaps the roles of the parentheses, runs the postfix scan
//! and reverses the output. Because the reversed scan still reduces equal precedence operators
//! eagerly, chains such as `1-2-3` come out grouped from the right (`-1-23`). The value is
//! unchanged for `+` and `*`, but not for `-` and `/`.

use alloc::{string::String, vec::Vec};

use crate::{
    Number,
    error::{Error, ExpressionFault, NodeError},
    node::{token::{Operator, check_order, is_operand, precedence}, tree::ExpressionTree},
    number::operand_value,
};

/// Converts infix text into postfix notation, e.g. `(3+4)*2` into `34+2*`.
pub fn to_postfix(infix: &str) -> Result<String, NodeError> {
    check_order(infix)?;
    shunt(infix.chars().enumerate(), '(', ')')
}

/// Converts infix text into prefix notation, e.g. `(3+4)*2` into `*+342`.
pub fn to_prefix(infix: &str) -> Result<String, NodeError> {
    check_order(infix)?;
    let indexed = infix.chars().enumerate().collect::<Vec<_>>();
    let output = shunt(indexed.into_iter().rev(), ')', '(')?;
    Ok(output.chars().rev().collect())
}

/// Describes a parenthesis with no partner, by which character it is.
fn unmatched(parenthesis: char, position: usize) -> ExpressionFault {
    if parenthesis == '(' {
        ExpressionFault::UnclosedParenthesis(position)
    } else {
        ExpressionFault::UnopenedParenthesis(position)
    }
}

/// Runs the operator-stack scan over `(position, char)` pairs. `open` is pushed onto the stack, and
/// `close` unwinds the stack back to it.
fn shunt<I>(chars: I, open: char, close: char) -> Result<String, NodeError>
where I: Iterator<Item = (usize, char)>
{
    let mut output = String::new();
    let mut stack: Vec<(char, usize)> = Vec::new();

    for (position, ch) in chars {
        if ch == open {
            stack.push((ch, position));
        } else if ch == close {
            loop {
                match stack.pop() {
                    Some((top, _)) if top == open => break,
                    Some((top, _)) => output.push(top),
                    None => return Err(unmatched(ch, position).into()),
                }
            }
        } else if is_operand(ch) {
            output.push(ch);
        } else if let Some(op) = Operator::from_char(ch) {
            // The open parenthesis ranks lowest, so this also stops there
            while let Some(&(top, _)) = stack.last() {
                if op.precedence() > precedence(top) {
                    break;
                }
                output.push(top);
                stack.pop();
            }
            stack.push((ch, position));
        } else {
            return Err(ExpressionFault::UnsupportedCharacter(ch, position).into());
        }
    }

    while let Some((top, position)) = stack.pop() {
        if top == open {
            return Err(unmatched(top, position).into());
        }
        output.push(top);
    }

    Ok(output)
}

/// Evaluates a postfix expression such as `34+2*`, with the same arithmetic as evaluating a tree.
pub fn evaluate_postfix(postfix: &str) -> Result<Number, Error> {
    evaluate_stack(postfix.chars().enumerate(), false)
}

/// Evaluates a prefix expression such as `*+342`, with the same arithmetic as evaluating a tree.
pub fn evaluate_prefix(prefix: &str) -> Result<Number, Error> {
    let indexed = prefix.chars().enumerate().collect::<Vec<_>>();
    evaluate_stack(indexed.into_iter().rev(), true)
}

/// Evaluates operands and operators with a value stack. When scanning prefix text from the end,
/// the left operand is the one on top of the stack.
fn evaluate_stack<I>(chars: I, left_on_top: bool) -> Result<Number, Error>
where I: Iterator<Item = (usize, char)>
{
    let mut values: Vec<Number> = Vec::new();

    for (position, ch) in chars {
        if is_operand(ch) {
            values.push(operand_value(ch)?);
        } else if let Some(op) = Operator::from_char(ch) {
            let (first, second) = match (values.pop(), values.pop()) {
                (Some(first), Some(second)) => (first, second),
                _ => return Err(ExpressionFault::MissingOperand(ch, position).into()),
            };
            let (left, right) = if left_on_top { (first, second) } else { (second, first) };
            values.push(op.apply(left, right)?);
        } else {
            return Err(ExpressionFault::UnsupportedCharacter(ch, position).into());
        }
    }

    match values[..] {
        [] => Err(ExpressionFault::Empty.into()),
        [value] => Ok(value),
        _ => Err(ExpressionFault::MissingOperator.into()),
    }
}

impl ExpressionTree {
    /// Converts `infix` into postfix notation. This reads the text, not the tree, so callers should
    /// pass the text the tree currently corresponds to.
    pub fn to_postfix(&self, infix: &str) -> Result<String, NodeError> {
        to_postfix(infix)
    }

    /// Converts `infix` into prefix notation. This reads the text, not the tree, so callers should
    /// pass the text the tree currently corresponds to.
    pub fn to_prefix(&self, infix: &str) -> Result<String, NodeError> {
        to_prefix(infix)
    }
}
