//! Unary minus and transposition.

use crate::errors::{integer_overflow, invalid_unary_operand, EvalErrorKind};
use crate::Value;

/// `-value`, uniformly for scalars and arrays.
pub fn evaluate_neg(value: &Value) -> Result<Value, EvalErrorKind> {
    match value {
        Value::Int(n) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        Value::Float(x) => Ok(Value::Float(-x)),
        Value::Array(array) => Ok(Value::Array(array.neg())),
        Value::Str(_) | Value::Null => Err(invalid_unary_operand("-", value.type_name())),
    }
}

/// `value'`. Vectors transpose to themselves.
pub fn evaluate_transpose(value: &Value) -> Result<Value, EvalErrorKind> {
    match value {
        Value::Array(array) => Ok(Value::Array(array.transpose())),
        _ => Err(invalid_unary_operand("'", value.type_name())),
    }
}
