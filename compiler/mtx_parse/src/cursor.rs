//! Token cursor for navigating the token stream.

use mtx_ir::Line;
use mtx_lexer::{Token, TokenKind};

use crate::ParseError;

/// Position in a token slice whose last token is always `Eof`.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Get the current token. Past the end this is the final `Eof`.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos).or_else(|| self.tokens.last())
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        self.current().map_or(&TokenKind::Eof, |t| &t.kind)
    }

    /// Line of the current token, or of the last token seen.
    #[inline]
    pub fn current_line(&self) -> Line {
        self.current().map_or(1, |t| t.line)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind().is_eof()
    }

    /// Check if the current token has the same variant as `kind`.
    ///
    /// Literal payloads are ignored.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail at the current token.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Line, ParseError> {
        if self.check(kind) {
            let line = self.current_line();
            self.advance();
            Ok(line)
        } else {
            Err(self.unexpected())
        }
    }

    /// Error describing the current token as unexpected.
    #[cold]
    pub fn unexpected(&self) -> ParseError {
        match self.current() {
            Some(token) if !token.kind.is_eof() => {
                ParseError::unexpected_token(token.line, token.kind.to_string())
            }
            _ => ParseError::unexpected_eof(self.current_line()),
        }
    }
}
