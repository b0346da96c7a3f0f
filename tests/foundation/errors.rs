//! Integration tests for Error types
//!
//! Tests error construction, display, spans, and the diagnostic sink.

use tarn_foundation::{DiagnosticSink, Error, ErrorKind, Span, TypeDesc};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_arity_mismatch() {
    let err = Error::arity_mismatch("if", "2 or 3", 5);
    assert!(matches!(err.kind, ErrorKind::ArityMismatch { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("if"));
    assert!(msg.contains("2 or 3"));
    assert!(msg.contains('5'));
}

#[test]
fn error_unrecognized_form() {
    let err = Error::unrecognized_form("frobnicate");
    assert!(matches!(err.kind, ErrorKind::UnrecognizedForm(_)));
    assert!(format!("{err}").contains("frobnicate"));
}

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch(TypeDesc::int(), TypeDesc::Bool);
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("int"));
    assert!(msg.contains("bool"));
}

#[test]
fn error_not_a_pointer() {
    let err = Error::not_a_pointer("ptr-equals", 2, TypeDesc::int());
    let msg = format!("{err}");
    assert!(msg.contains("operand 2"));
    assert!(msg.contains("ptr-equals"));
}

#[test]
fn error_condition_not_boolean() {
    let err = Error::condition_not_boolean(TypeDesc::pointer(TypeDesc::int()));
    let msg = format!("{err}");
    assert!(msg.contains("condition"));
    assert!(msg.contains("(ptr int)"));
}

#[test]
fn error_undefined_symbol() {
    let err = Error::undefined_symbol("ghost");
    assert!(matches!(err.kind, ErrorKind::UndefinedSymbol(_)));
    assert!(format!("{err}").contains("ghost"));
}

#[test]
fn error_not_addressable() {
    let err = Error::not_addressable("set");
    assert!(matches!(err.kind, ErrorKind::NotAddressable { .. }));
    assert!(format!("{err}").contains("storage location"));
}

// =============================================================================
// Spans on Errors
// =============================================================================

#[test]
fn error_carries_optional_span() {
    let bare = Error::undefined_symbol("x");
    assert_eq!(bare.span, None);

    let spanned = bare.with_span(Span::new(4, 5, 2, 3));
    assert_eq!(spanned.span, Some(Span::new(4, 5, 2, 3)));
    // The kind is unchanged by span attachment.
    assert!(matches!(spanned.kind, ErrorKind::UndefinedSymbol(_)));
}

// =============================================================================
// Diagnostic Sink
// =============================================================================

#[test]
fn sink_accumulates_in_order() {
    let mut sink = DiagnosticSink::new();
    sink.report(Error::undefined_symbol("a"));
    sink.report(Error::unrecognized_form("b"));
    sink.report(Error::condition_not_boolean(TypeDesc::int()));

    assert!(sink.has_errors());
    assert_eq!(sink.len(), 3);
    let kinds: Vec<_> = sink.iter().map(|err| &err.kind).collect();
    assert!(matches!(kinds[0], ErrorKind::UndefinedSymbol(_)));
    assert!(matches!(kinds[1], ErrorKind::UnrecognizedForm(_)));
    assert!(matches!(kinds[2], ErrorKind::ConditionNotBoolean { .. }));
}

#[test]
fn sink_starts_empty() {
    let sink = DiagnosticSink::new();
    assert!(sink.is_empty());
    assert!(!sink.has_errors());
    assert!(sink.into_errors().is_empty());
}
