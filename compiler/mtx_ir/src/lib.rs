//! mtx IR - syntax tree types shared by every pass.
//!
//! This crate contains:
//! - The syntax tree (`Program`, `Block`, `Stmt`, `Expr`) produced by
//!   `mtx_parse` and consumed read-only by the checker and the interpreter
//! - Operator enums (`BinaryOp`, `RelOp`, `AssignOp`)
//! - The tree printer used by `mtx parse`
//!
//! # Design Philosophy
//!
//! - **Closed variant set**: every node kind is an enum variant, so each pass
//!   matches exhaustively and the compiler proves every kind is handled.
//! - **Owned tree**: children are boxed or held in `Vec`s; the tree is a single
//!   value rooted at `Program` and is never mutated after parsing.
//! - **Line numbers**: every node carries the 1-based source line used verbatim
//!   in diagnostics.

pub mod ast;
mod number;
mod tree_printer;

pub use ast::{
    AssignOp, AssignTarget, BinaryOp, Block, Dims, Expr, ExprKind, MatrixFn, MatrixRef, Program,
    Range, RelOp, Stmt, StmtKind, VectorRef,
};
pub use number::format_float;
pub use tree_printer::print_tree;

/// 1-based source line number.
pub type Line = u32;
