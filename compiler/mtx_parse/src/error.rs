//! Parse error type.

use mtx_diagnostic::{syntax_error, unexpected_eof, Diagnostic};
use mtx_ir::Line;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A token that cannot appear here, by its source text.
    UnexpectedToken(String),
    UnexpectedEof,
}

/// The first syntax error in a token stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: Line,
}

impl ParseError {
    pub fn unexpected_token(line: Line, found: impl Into<String>) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken(found.into()),
            line,
        }
    }

    pub fn unexpected_eof(line: Line) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedEof,
            line,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match &self.kind {
            ParseErrorKind::UnexpectedToken(found) => syntax_error(self.line, found),
            ParseErrorKind::UnexpectedEof => unexpected_eof(self.line),
        }
    }
}
