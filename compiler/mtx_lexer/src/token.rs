//! Scanner output tokens.

use std::fmt;

use mtx_ir::{format_float, Line};

/// A token with the line it starts on.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: Line,
}

impl Token {
    pub fn new(kind: TokenKind, line: Line) -> Self {
        Token { kind, line }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Literals
    Int(i64),
    Float(f64),
    /// String literal contents, escapes decoded.
    Str(String),
    Ident(String),

    // Keywords
    If,
    Else,
    For,
    While,
    Break,
    Continue,
    Return,
    Eye,
    Zeros,
    Ones,
    Print,

    // Operators
    DotAdd,
    DotSub,
    DotMul,
    DotDiv,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    LtEq,
    GtEq,
    NotEq,
    EqEq,
    Plus,
    Minus,
    Star,
    Slash,
    Eq,
    Lt,
    Gt,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Colon,
    Comma,
    Semicolon,
    Apostrophe,

    Eof,
}

impl TokenKind {
    /// Token class name as shown by `mtx lex`.
    ///
    /// Single-character punctuation is its own class name.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "INTNUM",
            TokenKind::Float(_) => "FLOATNUM",
            TokenKind::Str(_) => "STRING",
            TokenKind::Ident(_) => "ID",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Return => "RETURN",
            TokenKind::Eye => "EYE",
            TokenKind::Zeros => "ZEROS",
            TokenKind::Ones => "ONES",
            TokenKind::Print => "PRINT",
            TokenKind::DotAdd => "DOTADD",
            TokenKind::DotSub => "DOTSUB",
            TokenKind::DotMul => "DOTMUL",
            TokenKind::DotDiv => "DOTDIV",
            TokenKind::AddAssign => "ADDASSIGN",
            TokenKind::SubAssign => "SUBASSIGN",
            TokenKind::MulAssign => "MULASSIGN",
            TokenKind::DivAssign => "DIVASSIGN",
            TokenKind::LtEq => "LEQ",
            TokenKind::GtEq => "GEQ",
            TokenKind::NotEq => "NEQ",
            TokenKind::EqEq => "EQ",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Eq => "=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Apostrophe => "'",
            TokenKind::Eof => "EOF",
        }
    }

    /// Source-level text of fixed tokens. `None` for literals and `Eof`.
    fn fixed_text(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Int(_)
            | TokenKind::Float(_)
            | TokenKind::Str(_)
            | TokenKind::Ident(_)
            | TokenKind::Eof => return None,
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Return => "return",
            TokenKind::Eye => "eye",
            TokenKind::Zeros => "zeros",
            TokenKind::Ones => "ones",
            TokenKind::Print => "print",
            TokenKind::DotAdd => ".+",
            TokenKind::DotSub => ".-",
            TokenKind::DotMul => ".*",
            TokenKind::DotDiv => "./",
            TokenKind::AddAssign => "+=",
            TokenKind::SubAssign => "-=",
            TokenKind::MulAssign => "*=",
            TokenKind::DivAssign => "/=",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::NotEq => "!=",
            TokenKind::EqEq => "==",
            other => other.name(),
        };
        Some(text)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}

/// The token's value: literal contents, identifier name, or source text.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(value) => write!(f, "{value}"),
            TokenKind::Float(value) => f.write_str(&format_float(*value)),
            TokenKind::Str(value) | TokenKind::Ident(value) => f.write_str(value),
            TokenKind::Eof => f.write_str("end of input"),
            other => f.write_str(other.fixed_text().unwrap_or_default()),
        }
    }
}

impl fmt::Display for Token {
    /// `(line): KIND(value)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}): {}({})", self.line, self.kind.name(), self.kind)
    }
}
