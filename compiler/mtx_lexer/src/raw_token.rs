//! Raw token definition.
//!
//! `RawToken` is the logos-derived scanner output before literal values are
//! decoded and line numbers attached.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+")]
pub(crate) enum RawToken {
    #[regex(r"#[^\n]*")]
    Comment,

    #[token("\n")]
    Newline,

    // Keywords
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("while")]
    While,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("return")]
    Return,
    #[token("eye")]
    Eye,
    #[token("zeros")]
    Zeros,
    #[token("ones")]
    Ones,
    #[token("print")]
    Print,

    // Elementwise operators
    #[token(".+")]
    DotAdd,
    #[token(".-")]
    DotSub,
    #[token(".*")]
    DotMul,
    #[token("./")]
    DotDiv,

    // Compound assignment
    #[token("+=")]
    AddAssign,
    #[token("-=")]
    SubAssign,
    #[token("*=")]
    MulAssign,
    #[token("/=")]
    DivAssign,

    // Relational
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("!=")]
    NotEq,
    #[token("==")]
    EqEq,

    // Single-character literals
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("'")]
    Apostrophe,

    #[regex(r"([0-9]*\.[0-9]+|[0-9]+\.[0-9]*)([eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+")]
    Float,

    #[regex(r"[0-9]+")]
    Int,

    // Strings may span lines
    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    String,

    #[regex(r#""([^"\\]|\\(.|\n))*"#)]
    UnterminatedString,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
