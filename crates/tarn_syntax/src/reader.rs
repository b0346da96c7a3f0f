//! The s-expression reader.
//!
//! Turns source text into [`Node`] trees. The reader is a thin recursive
//! descent over the token stream; all structure beyond balanced lists is
//! left to form compilation.

use tarn_foundation::{Error, Result, Span};

use crate::lexer::Lexer;
use crate::node::Node;
use crate::token::{Token, TokenKind};

/// Reads all top-level nodes from the given source text.
pub fn read_all(source: &str) -> Result<Vec<Node>> {
    let mut reader = Reader::new(source);
    let mut nodes = Vec::new();
    while !reader.at_eof() {
        nodes.push(reader.read_node()?);
    }
    Ok(nodes)
}

/// Reads a single node from the given source text.
///
/// Fails if the source is empty or contains trailing tokens.
pub fn read_one(source: &str) -> Result<Node> {
    let mut reader = Reader::new(source);
    if reader.at_eof() {
        return Err(Error::read_error("empty input"));
    }
    let node = reader.read_node()?;
    if !reader.at_eof() {
        let span = reader.peek().span;
        return Err(Error::read_error("trailing input after expression").with_span(span));
    }
    Ok(node)
}

/// Token-cursor reader over a single source string.
struct Reader {
    tokens: Vec<Token>,
    position: usize,
}

impl Reader {
    fn new(source: &str) -> Self {
        Self {
            tokens: Lexer::tokenize_all(source),
            position: 0,
        }
    }

    fn peek(&self) -> &Token {
        // tokenize_all always ends with Eof
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn next(&mut self) -> Token {
        let token = self.peek().clone();
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
        token
    }

    fn at_eof(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn read_node(&mut self) -> Result<Node> {
        let token = self.next();
        match token.kind {
            TokenKind::LParen => self.read_list(token.span),
            TokenKind::RParen => {
                Err(Error::read_error("unexpected `)`").with_span(token.span))
            }
            TokenKind::Int(n) => Ok(Node::Int(n, token.span)),
            TokenKind::Bool(b) => Ok(Node::Bool(b, token.span)),
            TokenKind::Str(s) => Ok(Node::Str(s, token.span)),
            TokenKind::Symbol(name) => Ok(Node::Symbol(name, token.span)),
            TokenKind::Error(message) => {
                Err(Error::read_error(message).with_span(token.span))
            }
            TokenKind::Eof => {
                Err(Error::read_error("unexpected end of input").with_span(token.span))
            }
        }
    }

    fn read_list(&mut self, open: Span) -> Result<Node> {
        let mut children = Vec::new();
        loop {
            match &self.peek().kind {
                TokenKind::RParen => {
                    let close = self.next().span;
                    return Ok(Node::List(children, open.to(close)));
                }
                TokenKind::Eof => {
                    return Err(Error::read_error("unclosed `(`").with_span(open));
                }
                _ => children.push(self.read_node()?),
            }
        }
    }
}
