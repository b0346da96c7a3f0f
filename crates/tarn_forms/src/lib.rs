//! Form dispatch, form handlers, and the compilation driver for Tarn.
//!
//! This crate is the language front end's core: it turns syntax trees into
//! per-function control-flow graphs. The pieces:
//! - [`FormRegistry`] / [`compile_expr`] - Head-symbol dispatch over the
//!   special forms
//! - [`ParseResult`] - The value, type, addressability, and current block
//!   produced by every compiled expression
//! - [`FunctionContext`] - Per-function graph, scopes, and block cursor
//! - [`SymbolResolver`] - The seam to external function and global lookup
//! - [`compile_unit`] / [`compile_source`] - Best-effort unit compilation
//!   with collected diagnostics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod annotation;
mod context;
mod dispatch;
mod driver;
mod forms;
mod result;
mod rules;
mod session;
mod symbols;

pub use annotation::parse_type_node;
pub use context::{Binding, FunctionContext};
pub use dispatch::{compile_expr, FormHandler, FormRegistry};
pub use driver::{compile_source, compile_unit, CompiledFunction, CompiledUnit};
pub use result::ParseResult;
pub use session::Session;
pub use symbols::{ResolvedSymbol, SymbolResolver, SymbolTable};
