//! Integration tests for Layer 0: Foundation
//!
//! Tests for spans, error types, diagnostics, and type descriptors.

mod errors;
mod spans;
