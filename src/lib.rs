//! Tarn - A Lisp-like systems language front end
//!
//! This crate re-exports all layers of the Tarn compilation core for
//! convenient access. For detailed documentation, see the individual layer
//! crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: tarn_forms      — Form dispatch, handlers, unit driver
//! Layer 2: tarn_cfg        — Basic blocks, instructions, terminators
//! Layer 1: tarn_syntax     — Lexer, s-expression reader, syntax tree
//! Layer 0: tarn_foundation — Types, spans, errors, diagnostics
//! ```

pub use tarn_cfg as cfg;
pub use tarn_forms as forms;
pub use tarn_foundation as foundation;
pub use tarn_syntax as syntax;
