//! Syntax tree nodes.
//!
//! # Module Structure
//!
//! - `expr.rs`: expressions, element references, matrix constructors
//! - `stmt.rs`: statements, blocks, assignment targets, ranges
//! - `operators.rs`: binary, relational and assignment operators

mod expr;
mod operators;
mod stmt;

pub use expr::{Dims, Expr, ExprKind, MatrixFn, MatrixRef, VectorRef};
pub use operators::{AssignOp, BinaryOp, RelOp};
pub use stmt::{AssignTarget, Block, Program, Range, Stmt, StmtKind};
