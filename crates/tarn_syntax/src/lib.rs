//! Syntax tree, lexer, and s-expression reader for Tarn.
//!
//! This crate provides:
//! - [`Node`] - The immutable, spanned syntax tree
//! - [`Lexer`] / [`Token`] - Tokenization of Tarn source
//! - [`read_all`] / [`read_one`] - The s-expression reader

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod lexer;
mod node;
mod reader;
mod token;

pub use lexer::Lexer;
pub use node::Node;
pub use reader::{read_all, read_one};
pub use token::{Token, TokenKind};
