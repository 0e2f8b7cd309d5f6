//! Expression nodes.

use std::fmt;

use super::{BinaryOp, RelOp};
use crate::Line;

/// An expression together with the line it starts on.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: Line,
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// Integer literal: `42`
    Int(i64),
    /// Float literal: `4.2`, `1e-3`
    Float(f64),
    /// String literal, escapes already decoded.
    Str(String),
    /// Variable reference: `x`
    Variable(String),
    /// `v[i]`: element of a vector, or a row of a matrix.
    VectorElement(VectorRef),
    /// `m[i, j]`: element of a matrix.
    MatrixElement(MatrixRef),
    /// Arithmetic: `left op right`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Comparison: `left op right`
    Relational {
        op: RelOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Vector literal: `[1, 2, 3]`
    Vector(Vec<Expr>),
    /// Matrix literal: `[[1, 2], [3, 4]]`. Rows are expected to be vector literals.
    Matrix(Vec<Expr>),
    /// Matrix constructor call: `zeros(3)`, `eye(2, 3)`
    MatrixFn { func: MatrixFn, dims: Dims },
    /// Unary minus: `-expr`
    Neg(Box<Expr>),
    /// Transposition: `expr'`
    Transpose(Box<Expr>),
}

impl Expr {
    pub fn new(kind: ExprKind, line: Line) -> Self {
        Expr { kind, line }
    }

    pub fn int(value: i64, line: Line) -> Self {
        Expr::new(ExprKind::Int(value), line)
    }

    pub fn float(value: f64, line: Line) -> Self {
        Expr::new(ExprKind::Float(value), line)
    }

    pub fn string(value: impl Into<String>, line: Line) -> Self {
        Expr::new(ExprKind::Str(value.into()), line)
    }

    pub fn variable(name: impl Into<String>, line: Line) -> Self {
        Expr::new(ExprKind::Variable(name.into()), line)
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr, line: Line) -> Self {
        Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            line,
        )
    }

    pub fn relational(op: RelOp, left: Expr, right: Expr, line: Line) -> Self {
        Expr::new(
            ExprKind::Relational {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            line,
        )
    }

    /// Returns `true` if this is a vector literal (a valid matrix row).
    pub fn is_vector_literal(&self) -> bool {
        matches!(self.kind, ExprKind::Vector(_))
    }
}

/// Reference to `name[index]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VectorRef {
    pub name: String,
    pub index: i64,
}

/// Reference to `name[row, col]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixRef {
    pub name: String,
    pub row: i64,
    pub col: i64,
}

/// Built-in matrix constructors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MatrixFn {
    Zeros,
    Ones,
    Eye,
}

impl MatrixFn {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zeros => "zeros",
            Self::Ones => "ones",
            Self::Eye => "eye",
        }
    }
}

impl fmt::Display for MatrixFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Literal dimensions passed to a matrix constructor.
///
/// Values are taken verbatim from the source and may be non-positive;
/// the checker rejects those.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Dims {
    /// `zeros(n)`: an `n x n` matrix.
    Square(i64),
    /// `zeros(m, n)`: an `m x n` matrix.
    Rect(i64, i64),
}

impl Dims {
    /// `(rows, cols)`, squaring a single dimension.
    pub const fn rows_cols(self) -> (i64, i64) {
        match self {
            Dims::Square(n) => (n, n),
            Dims::Rect(rows, cols) => (rows, cols),
        }
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dims::Square(n) => write!(f, "{n}"),
            Dims::Rect(rows, cols) => write!(f, "({rows}, {cols})"),
        }
    }
}
