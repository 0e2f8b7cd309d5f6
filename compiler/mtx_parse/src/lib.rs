//! Recursive descent parser for mtx.
//!
//! One method per precedence level, lowest first:
//! `+ -`, then `.+ .-`, then `* /`, then `.* ./`, then unary `-`, then
//! postfix `'`. Relational operators only appear in `if`/`while` conditions.
//!
//! Parsing stops at the first syntax error. The statements parsed before it
//! are still returned so that `mtx parse` can show how far it got.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use mtx_diagnostic::Diagnostic;
use mtx_ir::{Line, Program, Stmt};
use mtx_lexer::{Token, TokenKind};

/// Parser result.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    #[inline]
    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_line(&self) -> Line {
        self.cursor.current_line()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> Option<&'a Token> {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind) -> Result<Line, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn unexpected(&self) -> ParseError {
        self.cursor.unexpected()
    }

    /// Parse a whole program.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut stmts: Vec<Stmt> = Vec::new();
        let mut errors = Vec::new();

        while !self.cursor.is_at_end() {
            match self.parse_stmt() {
                Ok(stmt) => stmts.push(stmt),
                Err(error) => {
                    errors.push(error.to_diagnostic());
                    break;
                }
            }
        }

        ParseOutput {
            program: Program::new(stmts),
            errors,
        }
    }
}

/// Parse a token stream into a program.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(tokens: &[Token]) -> ParseOutput {
    let output = Parser::new(tokens).parse_program();
    tracing::debug!(
        stmts = output.program.body.stmts.len(),
        errors = output.errors.len(),
        "parsed"
    );
    output
}

#[cfg(test)]
mod tests;
