use num_traits::Zero;

use crate::{Number, error::{ExpressionFault, MathsError}};

/// Rank returned by [precedence] for anything which is not an operator, including `(` and operands.
pub const NO_PRECEDENCE: i32 = -1;

/// Returns the precedence rank of an operator character. Higher ranks bind tighter. Characters
/// which are not operators rank lowest, which is what stops a reduction at an open parenthesis.
pub fn precedence(ch: char) -> i32 {
    match ch {
        '+' | '-' => 1,
        '*' | '/' => 2,
        _ => NO_PRECEDENCE,
    }
}

#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// The character this operator is written as.
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn precedence(&self) -> i32 {
        precedence(self.symbol())
    }

    /// Applies this operator to two evaluated operands. Division truncates toward zero.
    pub fn apply(&self, left: Number, right: Number) -> Result<Number, MathsError> {
        let result = match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide => {
                if right.is_zero() {
                    return Err(MathsError::DivisionByZero);
                }
                left.checked_div(right)
            }
        };

        result.ok_or(MathsError::Overflow)
    }
}

/// One character of infix input, classified.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Token {
    Operand(char),
    Operator(Operator),
    LeftParenthesis,
    RightParenthesis,
}

impl Token {
    /// Classifies a character, or returns `None` if it has no meaning in an infix expression.
    /// Operands are single letters or digits.
    pub fn from_char(ch: char) -> Option<Token> {
        match ch {
            '(' => Some(Token::LeftParenthesis),
            ')' => Some(Token::RightParenthesis),
            _ if ch.is_alphanumeric() => Some(Token::Operand(ch)),
            _ => Operator::from_char(ch).map(Token::Operator),
        }
    }
}

/// Returns true if `ch` may be stored in a leaf.
pub fn is_operand(ch: char) -> bool {
    matches!(Token::from_char(ch), Some(Token::Operand(_)))
}

/// The token most recently accepted by a [TokenOrder].
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
enum Previous {
    Start,
    LeftParenthesis,
    Operator(Operator, usize),
    Operand,
}

/// Checks that tokens alternate between operands and operators, read from left to right.
///
/// An operand or `(` must come at the start, after an operator, or after `(`. An operator or `)`
/// must come after an operand or `)`. Parenthesis balance is left to the caller.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct TokenOrder {
    previous: Previous,
}

impl Default for TokenOrder {
    fn default() -> Self {
        TokenOrder { previous: Previous::Start }
    }
}

impl TokenOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts the next token, read at `position`, or describes why it cannot appear here.
    pub fn accept(&mut self, token: Token, position: usize) -> Result<(), ExpressionFault> {
        let expecting_operand = self.previous != Previous::Operand;

        let fault = match (token, self.previous) {
            (Token::Operand(_), _) if expecting_operand => {
                self.previous = Previous::Operand;
                return Ok(());
            }
            (Token::LeftParenthesis, _) if expecting_operand => {
                self.previous = Previous::LeftParenthesis;
                return Ok(());
            }
            (Token::Operator(op), Previous::Operand) => {
                self.previous = Previous::Operator(op, position);
                return Ok(());
            }
            (Token::RightParenthesis, Previous::Operand) => return Ok(()),

            (Token::Operand(_), _) | (Token::LeftParenthesis, _) => ExpressionFault::MissingOperator,
            // The operator before this one has nothing on its right
            (_, Previous::Operator(op, op_position)) => ExpressionFault::MissingOperand(op.symbol(), op_position),
            (Token::Operator(op), _) => ExpressionFault::MissingOperand(op.symbol(), position),
            (Token::RightParenthesis, Previous::LeftParenthesis) => ExpressionFault::Empty,
            (Token::RightParenthesis, Previous::Start) => ExpressionFault::UnopenedParenthesis(position),
        };

        Err(fault)
    }

    /// Checks that the input did not stop straight after an operator.
    pub fn finish(&self) -> Result<(), ExpressionFault> {
        match self.previous {
            Previous::Operator(op, position) => Err(ExpressionFault::MissingOperand(op.symbol(), position)),
            _ => Ok(()),
        }
    }
}

/// Checks the operand and operator order of a whole infix text, without building anything.
pub fn check_order(infix: &str) -> Result<(), ExpressionFault> {
    let mut order = TokenOrder::new();
    for (position, ch) in infix.chars().enumerate() {
        let token = Token::from_char(ch).ok_or(ExpressionFault::UnsupportedCharacter(ch, position))?;
        order.accept(token, position)?;
    }
    order.finish()
}
