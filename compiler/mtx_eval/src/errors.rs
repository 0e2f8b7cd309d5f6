//! Runtime faults.
//!
//! Operations return an [`EvalErrorKind`]; the interpreter attaches the line
//! of the statement or expression being evaluated to form an [`EvalError`].
//! The constructors below are the single place fault messages are built.

use mtx_ir::Line;
use thiserror::Error;

use crate::array::ArrayError;

/// Result of a runtime operation.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("unsupported operand types for {op}: {left} and {right}")]
    InvalidOperands {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("bad operand type for {op}: {operand}")]
    InvalidUnaryOperand {
        op: &'static str,
        operand: &'static str,
    },
    #[error("variable '{name}' is not defined")]
    UndefinedVariable { name: String },
    #[error("'{name}' is {type_name} and cannot be indexed")]
    NotIndexable {
        name: String,
        type_name: &'static str,
    },
    #[error("cannot store {type_name} in an array element")]
    InvalidElement { type_name: &'static str },
    #[error("condition must be a number, found {type_name}")]
    InvalidCondition { type_name: &'static str },
    #[error("range bound must be a number, found {type_name}")]
    InvalidRangeBound { type_name: &'static str },
    #[error("vector elements must be numbers, found {type_name}")]
    NonNumericElement { type_name: &'static str },
    #[error("matrix rows must be vectors, found {type_name}")]
    NonVectorRow { type_name: &'static str },
    #[error("negative dimensions are not allowed: {dims}")]
    NegativeDimensions { dims: String },
    #[error(transparent)]
    Array(#[from] ArrayError),
}

/// A runtime fault and the line it happened on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Line {line}: {kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub line: Line,
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind, line: Line) -> Self {
        EvalError { kind, line }
    }
}

#[cold]
pub fn division_by_zero() -> EvalErrorKind {
    EvalErrorKind::DivisionByZero
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalErrorKind {
    EvalErrorKind::IntegerOverflow { operation }
}

#[cold]
pub fn invalid_operands(op: &'static str, left: &'static str, right: &'static str) -> EvalErrorKind {
    EvalErrorKind::InvalidOperands { op, left, right }
}

#[cold]
pub fn invalid_unary_operand(op: &'static str, operand: &'static str) -> EvalErrorKind {
    EvalErrorKind::InvalidUnaryOperand { op, operand }
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalErrorKind {
    EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    }
}

#[cold]
pub fn not_indexable(name: &str, type_name: &'static str) -> EvalErrorKind {
    EvalErrorKind::NotIndexable {
        name: name.to_string(),
        type_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_with_line() {
        let err = EvalError::new(division_by_zero(), 3);
        assert_eq!(err.to_string(), "Line 3: division by zero");
    }

    #[test]
    fn array_faults_are_transparent() {
        let kind = EvalErrorKind::from(ArrayError::TooManyIndices);
        assert_eq!(
            kind.to_string(),
            "too many indices for array: array is 1-dimensional, but 2 were indexed"
        );
    }

    #[test]
    fn operand_messages() {
        assert_eq!(
            invalid_operands("+", "int", "string").to_string(),
            "unsupported operand types for +: int and string"
        );
        assert_eq!(
            not_indexable("x", "int").to_string(),
            "'x' is int and cannot be indexed"
        );
    }
}
