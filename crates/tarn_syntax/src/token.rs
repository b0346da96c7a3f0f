//! Tokens produced by the lexer.

use tarn_foundation::Span;

/// A single token with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Where the token appears in the source.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kinds of token the lexer produces.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// An integer literal.
    Int(i64),
    /// `true` or `false`.
    Bool(bool),
    /// A string literal (contents, unescaped).
    Str(String),
    /// A symbol.
    Symbol(String),
    /// A lexing error with a message.
    Error(String),
    /// End of input.
    Eof,
}
