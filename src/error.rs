/// The reason an infix expression could not be turned into a tree. Positions are character
/// offsets into the text being scanned.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionFault {
    #[error("the expression is empty")]
    Empty,

    #[error("'(' at position {0} is never closed")]
    UnclosedParenthesis(usize),

    #[error("')' at position {0} has no matching '('")]
    UnopenedParenthesis(usize),

    #[error("operator '{0}' at position {1} is missing an operand")]
    MissingOperand(char, usize),

    #[error("two operands are not joined by an operator")]
    MissingOperator,

    #[error("unsupported character '{0}' at position {1}")]
    UnsupportedCharacter(char, usize),
}

/// Errors raised while building or editing a node tree.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeError {
    #[error("invalid expression: {0}")]
    InvalidExpression(#[from] ExpressionFault),

    #[error("leaf index {index} is out of range, the tree has {len} leaves")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("'{0}' cannot be used as an operand")]
    InvalidOperand(char),
}

/// Errors raised while evaluating a node tree.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathsError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("operand '{0}' is not a digit")]
    NonNumericOperand(char),

    #[error("arithmetic overflow")]
    Overflow,
}

/// Any error which this crate can produce, for callers which handle building and evaluating in one
/// place.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Node(#[from] NodeError),

    #[error(transparent)]
    Maths(#[from] MathsError),
}

impl From<ExpressionFault> for Error {
    fn from(fault: ExpressionFault) -> Self {
        Error::Node(fault.into())
    }
}
