//! Parser tests.
//!
//! - `grammar.rs`: shapes of parsed trees, precedence and associativity
//! - `errors.rs`: syntax error reporting

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod errors;
mod grammar;

use crate::{parse, ParseOutput};
use mtx_ir::{Expr, Stmt, StmtKind};

fn parse_source(source: &str) -> ParseOutput {
    let lexed = mtx_lexer::lex(source);
    assert!(!lexed.has_errors(), "lex errors: {:?}", lexed.errors);
    parse(&lexed.tokens)
}

/// Parse a single statement, asserting the parse is clean.
fn parse_stmt(source: &str) -> Stmt {
    let output = parse_source(source);
    assert!(!output.has_errors(), "parse errors: {:?}", output.errors);
    assert_eq!(output.program.body.stmts.len(), 1);
    output.program.body.stmts.into_iter().next().unwrap()
}

/// Parse `x = <source>;` and return the right-hand side.
fn parse_rhs(source: &str) -> Expr {
    match parse_stmt(&format!("x = {source};")).kind {
        StmtKind::Assign { value, .. } => value,
        other => panic!("expected assignment, got {other:?}"),
    }
}
