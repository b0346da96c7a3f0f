//! Source spans, error types, diagnostics, and type descriptors for Tarn.
//!
//! This crate provides:
//! - [`Span`] - Source location tracking
//! - [`Error`] / [`ErrorKind`] - Rich error types with spans
//! - [`DiagnosticSink`] - Best-effort error accumulation
//! - [`TypeDesc`] - Structural type descriptors
//! - [`TypeRegistry`] - The name-to-type registry

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod diagnostics;
mod error;
mod registry;
mod span;
mod types;

pub use diagnostics::DiagnosticSink;
pub use error::{Error, ErrorKind, Result};
pub use registry::TypeRegistry;
pub use span::Span;
pub use types::TypeDesc;
