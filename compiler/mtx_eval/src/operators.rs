//! Binary and relational operators on runtime values.
//!
//! Direct enum dispatch on the operand pair. Shapes and kinds are not
//! re-validated against the static rules; a combination with no meaning
//! at run time is a fault.

use mtx_ir::{BinaryOp, RelOp};

use crate::array::{Array, ElementOp};
use crate::errors::{division_by_zero, integer_overflow, invalid_operands, EvalErrorKind};
use crate::Value;

fn checked_arith(result: Option<i64>, operation: &'static str) -> Result<Value, EvalErrorKind> {
    result
        .map(Value::Int)
        .ok_or_else(|| integer_overflow(operation))
}

fn as_f64(value: &Value) -> Option<f64> {
    value.as_number().map(crate::Number::as_f64)
}

/// Evaluate `left op right`.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> Result<Value, EvalErrorKind> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Array(a), Value::Array(b)) => eval_array_binary(a, b, op),
        _ => match (as_f64(left), as_f64(right)) {
            (Some(a), Some(b)) => eval_float_binary(a, b, op),
            _ => Err(invalid_operands(
                op.as_symbol(),
                left.type_name(),
                right.type_name(),
            )),
        },
    }
}

/// Integer division truncates toward zero.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Add | BinaryOp::DotAdd => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub | BinaryOp::DotSub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul | BinaryOp::DotMul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div | BinaryOp::DotDiv => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(a.checked_div(b), "division")
            }
        }
    }
}

fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> Result<Value, EvalErrorKind> {
    let result = match op {
        BinaryOp::Add | BinaryOp::DotAdd => a + b,
        BinaryOp::Sub | BinaryOp::DotSub => a - b,
        BinaryOp::Mul | BinaryOp::DotMul => a * b,
        BinaryOp::Div | BinaryOp::DotDiv => {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            a / b
        }
    };
    Ok(Value::Float(result))
}

/// `*` on two matrices is the matrix product; everything else is
/// elementwise.
fn eval_array_binary(a: &Array, b: &Array, op: BinaryOp) -> Result<Value, EvalErrorKind> {
    let result = match op {
        BinaryOp::Mul if a.rank() == 2 && b.rank() == 2 => a.matmul(b)?,
        BinaryOp::Add | BinaryOp::DotAdd => a.elementwise(b, ElementOp::Add)?,
        BinaryOp::Sub | BinaryOp::DotSub => a.elementwise(b, ElementOp::Sub)?,
        BinaryOp::Mul | BinaryOp::DotMul => a.elementwise(b, ElementOp::Mul)?,
        BinaryOp::Div | BinaryOp::DotDiv => a.elementwise(b, ElementOp::Div)?,
    };
    Ok(Value::Array(result))
}

/// Evaluate `left op right`, producing `Int(1)` or `Int(0)`.
pub fn evaluate_relational(left: &Value, right: &Value, op: RelOp) -> Result<Value, EvalErrorKind> {
    let holds = match (left, right) {
        (Value::Int(a), Value::Int(b)) => compare(a, b, op),
        _ => match (as_f64(left), as_f64(right)) {
            (Some(a), Some(b)) => compare(&a, &b, op),
            _ => {
                return Err(invalid_operands(
                    op.as_symbol(),
                    left.type_name(),
                    right.type_name(),
                ))
            }
        },
    };
    Ok(Value::Int(i64::from(holds)))
}

fn compare<T: PartialOrd>(a: &T, b: &T, op: RelOp) -> bool {
    match op {
        RelOp::Eq => a == b,
        RelOp::NotEq => a != b,
        RelOp::Lt => a < b,
        RelOp::Gt => a > b,
        RelOp::LtEq => a <= b,
        RelOp::GtEq => a >= b,
    }
}
