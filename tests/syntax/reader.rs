//! Integration tests for the s-expression reader

use tarn_foundation::ErrorKind;
use tarn_syntax::{Node, read_all, read_one};

// =============================================================================
// Reading Structure
// =============================================================================

#[test]
fn reads_nested_forms() {
    let node = read_one("(if (ptr-equals a b) (do 1 2) 3)").unwrap();
    let children = node.as_list().unwrap();
    assert_eq!(children.len(), 4);
    assert_eq!(children[0].as_symbol(), Some("if"));
    assert_eq!(children[1].as_list().unwrap().len(), 3);
    assert_eq!(children[3].as_int(), Some(3));
}

#[test]
fn reads_multiple_top_level_declarations() {
    let nodes = read_all(
        "(defn a () void)\n\
         (defn b () int 1)  ; trailing comment\n",
    )
    .unwrap();
    assert_eq!(nodes.len(), 2);
    assert!(nodes.iter().all(Node::is_list));
}

#[test]
fn empty_source_reads_to_nothing() {
    assert!(read_all("").unwrap().is_empty());
    assert!(read_all("; only a comment").unwrap().is_empty());
}

// =============================================================================
// Reader Errors
// =============================================================================

#[test]
fn unclosed_list_points_at_the_open_paren() {
    let err = read_one("(do (set x 1)").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ReadError(_)));
    let span = err.span.expect("unclosed list carries a span");
    assert_eq!(span.start, 0);
}

#[test]
fn stray_close_paren_fails() {
    let err = read_all("1 ) 2").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ReadError(_)));
}

#[test]
fn read_one_rejects_trailing_input() {
    let err = read_one("(a) (b)").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ReadError(_)));
}

// =============================================================================
// Spans
// =============================================================================

#[test]
fn list_spans_cover_both_parens() {
    let source = "  (a (b) c)";
    let node = read_one(source).unwrap();
    assert_eq!(node.span().text(source), "(a (b) c)");
}
