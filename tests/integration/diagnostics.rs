//! Best-effort diagnostics across a unit

use tarn_forms::{CompiledUnit, FormRegistry, SymbolTable, compile_source};
use tarn_foundation::{DiagnosticSink, ErrorKind, TypeRegistry};

fn compile(source: &str) -> (CompiledUnit, DiagnosticSink) {
    let types = TypeRegistry::with_core_types();
    let forms = FormRegistry::with_core_forms();
    let globals = SymbolTable::new();
    compile_source(&types, &forms, &globals, source)
}

// =============================================================================
// One Error Per Failed Function
// =============================================================================

#[test]
fn independent_errors_all_surface() {
    let (unit, diagnostics) = compile(
        "(defn a () int (if 1 2 3))\
         (defn b () int (frobnicate))\
         (defn c () int ghost)\
         (defn d () int 4)",
    );
    assert_eq!(unit.functions.len(), 1);
    assert_eq!(unit.functions[0].name, "d");
    assert_eq!(diagnostics.len(), 3);

    let kinds: Vec<_> = diagnostics.iter().map(|err| &err.kind).collect();
    assert!(matches!(kinds[0], ErrorKind::ConditionNotBoolean { .. }));
    assert!(matches!(kinds[1], ErrorKind::UnrecognizedForm(_)));
    assert!(matches!(kinds[2], ErrorKind::UndefinedSymbol(_)));
}

#[test]
fn errors_carry_source_positions() {
    let (_, diagnostics) = compile("(defn f () int\n  unknown-name)");
    let err = diagnostics.iter().next().expect("one error");
    let span = err.span.expect("compile errors carry spans");
    assert_eq!(span.line, 2);
}

#[test]
fn header_errors_do_not_stop_later_functions() {
    let (unit, diagnostics) = compile(
        "(defn broken (not-a-param-list) int 1)\
         (defn fine () int 2)",
    );
    assert!(diagnostics.has_errors());
    assert_eq!(unit.functions.len(), 1);
    assert_eq!(unit.functions[0].name, "fine");
}

#[test]
fn unknown_types_in_headers_are_reported() {
    let (unit, diagnostics) = compile("(defn f ((x quux)) void)");
    assert!(unit.functions.is_empty());
    assert!(diagnostics
        .iter()
        .any(|err| matches!(err.kind, ErrorKind::UndefinedSymbol(_))));
}

#[test]
fn read_failures_preempt_compilation() {
    let (unit, diagnostics) = compile("(defn f () int 1");
    assert!(unit.functions.is_empty());
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        diagnostics.iter().next().unwrap().kind,
        ErrorKind::ReadError(_)
    ));
}

#[test]
fn clean_units_have_empty_sinks() {
    let (unit, diagnostics) = compile("(defn f () void)");
    assert!(diagnostics.is_empty());
    assert_eq!(unit.functions.len(), 1);
}
