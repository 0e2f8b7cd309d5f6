//! Binary operator compatibility table.
//!
//! Direct enum dispatch over `(operator, left kind, right kind)`. Any
//! combination not listed is invalid.
//!
//! | Operands        | `+ - .+ .- .* ./` | `*`            | `/`    |
//! |-----------------|-------------------|----------------|--------|
//! | numeric scalars | scalar            | scalar         | scalar |
//! | vector, vector  | vector, same shape| -              | -      |
//! | matrix, matrix  | matrix, same shape| matrix product | -      |
//!
//! Scalar results are `int` only when both operands are `int`.

use mtx_diagnostic::ErrorCode;
use mtx_ir::{AssignOp, BinaryOp};

use crate::kinds::shape_text;
use crate::{Kind, Shape, TypeInfo};

/// Extra requirement a table entry places on operand shapes.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Constraint {
    None,
    /// Both shapes must be equal; the result has that shape.
    SameShape,
    /// `left.cols == right.rows`; the result is `(left.rows, right.cols)`.
    MatMul,
}

/// Look up the result kind and shape constraint for `left op right`.
pub fn binary_rule(op: BinaryOp, left: Kind, right: Kind) -> Option<(Kind, Constraint)> {
    match (left, right) {
        (Kind::Int, Kind::Int) => Some((Kind::Int, Constraint::None)),
        (l, r) if l.is_numeric() && r.is_numeric() => Some((Kind::Float, Constraint::None)),
        (Kind::Vector, Kind::Vector) => match op {
            BinaryOp::Mul | BinaryOp::Div => None,
            _ => Some((Kind::Vector, Constraint::SameShape)),
        },
        (Kind::Matrix, Kind::Matrix) => match op {
            BinaryOp::Mul => Some((Kind::Matrix, Constraint::MatMul)),
            BinaryOp::Div => None,
            _ => Some((Kind::Matrix, Constraint::SameShape)),
        },
        _ => None,
    }
}

/// Error from checking an operator application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeOpError {
    pub code: ErrorCode,
    pub message: String,
}

impl TypeOpError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        TypeOpError {
            code,
            message: message.into(),
        }
    }
}

/// Type of `left op right`.
pub fn check_binary(
    op: BinaryOp,
    left: &TypeInfo,
    right: &TypeInfo,
) -> Result<TypeInfo, TypeOpError> {
    let Some((kind, constraint)) = binary_rule(op, left.kind, right.kind) else {
        return Err(TypeOpError::new(
            ErrorCode::E2002,
            format!("Invalid operands for {op}: {} and {}", left.kind, right.kind),
        ));
    };
    apply_constraint(op.as_symbol(), kind, constraint, left.shape, right.shape)
}

/// Type of `target op= value`, checked as `target base_op value`.
///
/// A plain `=` always succeeds with the value's type. Array targets keep
/// their shape, so `*=` on matrices is elementwise rather than a product.
pub fn check_compound(
    op: AssignOp,
    target: &TypeInfo,
    value: &TypeInfo,
) -> Result<TypeInfo, TypeOpError> {
    let Some(base) = op.base_op() else {
        return Ok(*value);
    };
    let Some((kind, constraint)) = binary_rule(base, target.kind, value.kind) else {
        return Err(TypeOpError::new(
            ErrorCode::E2006,
            format!(
                "Invalid compound assignment {op}: {} and {}",
                target.kind, value.kind
            ),
        ));
    };
    let constraint = match constraint {
        Constraint::MatMul => Constraint::SameShape,
        other => other,
    };
    apply_constraint(op.as_symbol(), kind, constraint, target.shape, value.shape)
}

fn apply_constraint(
    symbol: &str,
    kind: Kind,
    constraint: Constraint,
    left: Option<Shape>,
    right: Option<Shape>,
) -> Result<TypeInfo, TypeOpError> {
    match constraint {
        Constraint::None => Ok(TypeInfo::scalar(kind)),
        Constraint::SameShape => match (left, right) {
            (Some(l), Some(r)) if l != r => Err(TypeOpError::new(
                ErrorCode::E2003,
                format!(
                    "Incompatible shapes for {symbol}: {} and {}",
                    shape_text(left),
                    shape_text(right)
                ),
            )),
            _ => Ok(TypeInfo {
                kind,
                shape: left.or(right),
            }),
        },
        Constraint::MatMul => match (left, right) {
            (Some(Shape::Matrix(rows, inner)), Some(Shape::Matrix(inner_r, cols))) => {
                if inner == inner_r {
                    Ok(TypeInfo::matrix(rows, cols))
                } else {
                    Err(TypeOpError::new(
                        ErrorCode::E2004,
                        format!(
                            "Matrix multiplication: incompatible dimensions {} and {}",
                            shape_text(left),
                            shape_text(right)
                        ),
                    ))
                }
            }
            _ => Ok(TypeInfo::unshaped(kind)),
        },
    }
}
