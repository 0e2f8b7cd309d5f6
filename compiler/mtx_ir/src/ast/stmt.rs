//! Statement nodes.

use super::{AssignOp, Expr, MatrixRef, VectorRef};
use crate::Line;

/// Root of the syntax tree: the top-level instruction list.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub body: Block,
}

impl Program {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Program {
            body: Block { stmts, line: 1 },
        }
    }
}

/// A sequence of instructions, either the program body or `{ ... }`.
///
/// Blocks do not introduce scopes in either pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub line: Line,
}

/// A statement together with the line it starts on.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: Line,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: Line) -> Self {
        Stmt { kind, line }
    }
}

/// Statement variants.
#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `{ stmts }`
    Block(Block),
    /// `target op value;`
    Assign {
        op: AssignOp,
        target: AssignTarget,
        value: Expr,
    },
    /// `if (cond) then_branch [else else_branch]`
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    /// `while (cond) body`
    While { cond: Expr, body: Box<Stmt> },
    /// `for var = start:end body`, both bounds inclusive.
    For {
        var: String,
        range: Range,
        body: Box<Stmt>,
    },
    Break,
    Continue,
    /// `return expr;`
    Return(Expr),
    /// `print a, b, c;`
    Print(Vec<Expr>),
}

/// Left-hand side of an assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssignTarget {
    Variable(String),
    VectorElement(VectorRef),
    MatrixElement(MatrixRef),
}

impl AssignTarget {
    /// The variable the assignment reads or writes.
    pub fn name(&self) -> &str {
        match self {
            AssignTarget::Variable(name) => name,
            AssignTarget::VectorElement(r) => &r.name,
            AssignTarget::MatrixElement(r) => &r.name,
        }
    }
}

/// `start:end` in a `for` header.
#[derive(Clone, Debug, PartialEq)]
pub struct Range {
    pub start: Expr,
    pub end: Expr,
    pub line: Line,
}
