//! Grammar productions, split by syntactic category.
//!
//! - `stmt.rs`: instructions, blocks, conditions
//! - `expr.rs`: the arithmetic precedence chain and primaries

mod expr;
mod stmt;
