//! Cross-layer integration tests for Tarn
//!
//! Tests that run whole units from source text through the reader, the
//! registries, and the compilation driver.

mod diagnostics;
