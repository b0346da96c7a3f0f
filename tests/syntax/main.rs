//! Integration tests for Layer 1: Syntax
//!
//! Tests for the lexer and the s-expression reader.

mod reader;
