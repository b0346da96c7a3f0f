//! Integration tests for source spans

use tarn_foundation::Span;

#[test]
fn span_ranges_combine() {
    let open = Span::new(0, 1, 1, 1);
    let close = Span::new(9, 10, 1, 10);
    let whole = open.to(close);
    assert_eq!(whole.start, 0);
    assert_eq!(whole.end, 10);
    assert_eq!(whole.len(), 10);
}

#[test]
fn span_slices_source() {
    let source = "(set x 1)";
    let span = Span::new(1, 4, 1, 2);
    assert_eq!(span.text(source), "set");
}

#[test]
fn span_displays_line_and_column() {
    assert_eq!(format!("{}", Span::new(12, 15, 4, 2)), "4:2");
    assert_eq!(format!("{}", Span::at_start()), "1:1");
}
