//! The numeric type which expression trees evaluate into.

use num_traits::FromPrimitive;

use crate::error::MathsError;

/// Every operand is a single digit and every operator is an integer operation, so evaluation never
/// leaves the integers.
pub type Number = i64;

/// Returns the value of an operand character. Only decimal digits carry a value; letters are valid
/// operands structurally but cannot be evaluated.
pub fn operand_value(operand: char) -> Result<Number, MathsError> {
    operand
        .to_digit(10)
        .and_then(Number::from_u32)
        .ok_or(MathsError::NonNumericOperand(operand))
}
