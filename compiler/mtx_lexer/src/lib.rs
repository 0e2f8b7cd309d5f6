//! Scanner for mtx: source text to a token stream.
//!
//! Built on logos. Blanks and `#` comments are skipped; every newline, including
//! newlines inside string literals, advances the 1-based line counter.
//! Scanning never stops early: an illegal character is reported and skipped.

mod escape;
mod raw_token;
mod token;

use logos::Logos;
use mtx_diagnostic::{illegal_character, invalid_number, unterminated_string, Diagnostic};
use mtx_ir::Line;

use crate::escape::unescape_string;
use crate::raw_token::RawToken;

pub use token::{Token, TokenKind};

/// Scanner result: the token stream (always ending in `Eof`) and any
/// problems found along the way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<Diagnostic>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `source` into tokens.
#[tracing::instrument(level = "debug", skip_all)]
pub fn lex(source: &str) -> LexOutput {
    let mut output = LexOutput::default();
    let mut line: Line = 1;
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let slice = logos.slice();
        let token_line = line;

        let raw = match result {
            Ok(raw) => raw,
            Err(()) => {
                let c = source
                    .get(logos.span().start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or('\u{FFFD}');
                output.errors.push(illegal_character(line, c));
                continue;
            }
        };

        let kind = match raw {
            RawToken::Comment => continue,
            RawToken::Newline => {
                line += 1;
                continue;
            }
            RawToken::String => {
                line += count_newlines(slice);
                TokenKind::Str(unescape_string(&slice[1..slice.len() - 1]))
            }
            RawToken::UnterminatedString => {
                line += count_newlines(slice);
                output.errors.push(unterminated_string(token_line));
                continue;
            }
            RawToken::Int => match slice.parse::<i64>() {
                Ok(value) => TokenKind::Int(value),
                Err(_) => {
                    output.errors.push(invalid_number(line, slice));
                    continue;
                }
            },
            RawToken::Float => match slice.parse::<f64>() {
                Ok(value) => TokenKind::Float(value),
                Err(_) => {
                    output.errors.push(invalid_number(line, slice));
                    continue;
                }
            },
            RawToken::Ident => TokenKind::Ident(slice.to_string()),
            other => match convert_fixed(other) {
                Some(kind) => kind,
                None => continue,
            },
        };

        output.tokens.push(Token::new(kind, token_line));
    }

    output.tokens.push(Token::new(TokenKind::Eof, line));

    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "scanned"
    );
    output
}

fn count_newlines(slice: &str) -> Line {
    Line::try_from(slice.matches('\n').count()).unwrap_or(Line::MAX)
}

/// Map a raw token that carries no value to its final kind.
fn convert_fixed(raw: RawToken) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::For => TokenKind::For,
        RawToken::While => TokenKind::While,
        RawToken::Break => TokenKind::Break,
        RawToken::Continue => TokenKind::Continue,
        RawToken::Return => TokenKind::Return,
        RawToken::Eye => TokenKind::Eye,
        RawToken::Zeros => TokenKind::Zeros,
        RawToken::Ones => TokenKind::Ones,
        RawToken::Print => TokenKind::Print,
        RawToken::DotAdd => TokenKind::DotAdd,
        RawToken::DotSub => TokenKind::DotSub,
        RawToken::DotMul => TokenKind::DotMul,
        RawToken::DotDiv => TokenKind::DotDiv,
        RawToken::AddAssign => TokenKind::AddAssign,
        RawToken::SubAssign => TokenKind::SubAssign,
        RawToken::MulAssign => TokenKind::MulAssign,
        RawToken::DivAssign => TokenKind::DivAssign,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Apostrophe => TokenKind::Apostrophe,
        RawToken::Comment
        | RawToken::Newline
        | RawToken::Float
        | RawToken::Int
        | RawToken::String
        | RawToken::UnterminatedString
        | RawToken::Ident => return None,
    };
    Some(kind)
}
