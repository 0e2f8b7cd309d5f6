//! Static type and shape checker for mtx.
//!
//! Infers a `(kind, shape)` pair for every expression, enforces the operator
//! compatibility table, bounds-checks literal indices against known shapes
//! and reports every problem it finds. The walk never stops early.
//!
//! # Main Entry Points
//!
//! - [`check`]: check a program, returning its diagnostics
//! - [`TypeChecker`]: the checker itself, for inspecting symbols afterwards
//!
//! # Module Organization
//!
//! - `kinds`: [`Kind`], [`Shape`], [`TypeInfo`]
//! - `symbol_table`: the static scope chain
//! - `operators`: the binary operator compatibility table
//! - `checker`: the tree walk
//!
//! # Unknown types
//!
//! When an error makes a type meaningless (an undefined variable, invalid
//! operands) the expression's type is `None`. Unknown types propagate
//! silently: no diagnostic is ever reported against an unknown operand, so
//! one mistake produces one diagnostic.

mod checker;
mod kinds;
pub mod operators;
mod symbol_table;

pub use checker::TypeChecker;
pub use kinds::{Kind, Shape, TypeInfo};
pub use symbol_table::{Scope, Symbol, SymbolTable};

use mtx_diagnostic::Diagnostic;
use mtx_ir::Program;

/// Check `program`, returning every diagnostic in source order of discovery.
///
/// Checking succeeded exactly when the result is empty.
#[tracing::instrument(level = "debug", skip_all)]
pub fn check(program: &Program) -> Vec<Diagnostic> {
    let mut checker = TypeChecker::new();
    checker.check_program(program);
    let diagnostics = checker.into_diagnostics();
    tracing::debug!(errors = diagnostics.len(), "checked");
    diagnostics
}
