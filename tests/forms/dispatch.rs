//! Integration tests for form dispatch and symbol fallback

use tarn_forms::{
    FormRegistry, FunctionContext, ParseResult, Session, SymbolTable, compile_expr,
};
use tarn_foundation::{ErrorKind, Result, TypeDesc, TypeRegistry};
use tarn_syntax::{Node, read_one};

use crate::compile_expression;

// =============================================================================
// Registry
// =============================================================================

#[test]
fn core_registry_covers_the_form_vocabulary() {
    let registry = FormRegistry::with_core_forms();
    for name in [
        "if",
        "do",
        "let",
        "set",
        "return",
        "while",
        "address-of",
        "deref",
        "cast",
        "ptr-equals",
        "ptr-less-than",
        "ptr-greater-than",
        "ptr-add",
        "ptr-subtract",
        "null-ptr",
        "null?",
        "sref",
    ] {
        assert!(registry.contains(name), "missing form {name}");
    }
    assert!(!registry.contains("lambda"));
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    let registry = FormRegistry::with_core_forms();
    assert!(registry.get("if").is_some());
    assert!(registry.get("IF").is_none());
    assert!(registry.get("if ").is_none());
}

#[test]
fn user_registered_handlers_dispatch() {
    fn constant_nine(
        _session: &mut Session<'_>,
        ctx: &mut FunctionContext,
        block: tarn_cfg::BlockId,
        _node: &Node,
        _get_address: bool,
        _prefixed_with_core: bool,
    ) -> Result<ParseResult> {
        let value = ctx
            .cfg_mut()
            .emit_const(block, tarn_cfg::ConstValue::Int(9));
        Ok(ParseResult::new(Some(value), TypeDesc::int(), false, block))
    }

    let types = TypeRegistry::with_core_types();
    let mut forms = FormRegistry::with_core_forms();
    forms.register("nine", constant_nine);
    let symbols = SymbolTable::new();
    let mut session = Session::new(&types, &forms, &symbols);
    let mut ctx = FunctionContext::new("f", vec![], TypeDesc::Void);
    let entry = ctx.current_block();

    let node = read_one("(nine)").unwrap();
    let pr = compile_expr(&mut session, &mut ctx, entry, &node, false).unwrap();
    assert_eq!(pr.ty, TypeDesc::int());
}

// =============================================================================
// Symbol Fallback
// =============================================================================

#[test]
fn unknown_head_is_unrecognized_with_span() {
    let (result, _) = compile_expression("(frobnicate 1 2)");
    let err = result.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnrecognizedForm(_)));
    assert!(err.span.is_some());
}

#[test]
fn function_heads_compile_as_calls() {
    let types = TypeRegistry::with_core_types();
    let forms = FormRegistry::with_core_forms();
    let mut symbols = SymbolTable::new();
    symbols.define_function(
        "max",
        vec![TypeDesc::int(), TypeDesc::int()],
        TypeDesc::int(),
    );
    let mut session = Session::new(&types, &forms, &symbols);
    let mut ctx = FunctionContext::new("f", vec![], TypeDesc::Void);
    let entry = ctx.current_block();

    let node = read_one("(max 1 2)").unwrap();
    let pr = compile_expr(&mut session, &mut ctx, entry, &node, false).unwrap();
    assert_eq!(pr.ty, TypeDesc::int());
}

#[test]
fn call_arity_checked_before_arguments_compile() {
    let types = TypeRegistry::with_core_types();
    let forms = FormRegistry::with_core_forms();
    let mut symbols = SymbolTable::new();
    symbols.define_function("one", vec![TypeDesc::int()], TypeDesc::int());
    let mut session = Session::new(&types, &forms, &symbols);
    let mut ctx = FunctionContext::new("f", vec![], TypeDesc::Void);
    let entry = ctx.current_block();

    let node = read_one("(one 1 2 3)").unwrap();
    let err = compile_expr(&mut session, &mut ctx, entry, &node, false).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ArityMismatch { .. }));
    assert!(ctx.cfg().block(entry).instrs.is_empty());
}

#[test]
fn forms_shadow_functions_of_the_same_name() {
    let types = TypeRegistry::with_core_types();
    let forms = FormRegistry::with_core_forms();
    let mut symbols = SymbolTable::new();
    // A function named like a form never wins dispatch.
    symbols.define_function("if", vec![], TypeDesc::int());
    let mut session = Session::new(&types, &forms, &symbols);
    let mut ctx = FunctionContext::new("f", vec![], TypeDesc::Void);
    let entry = ctx.current_block();

    let node = read_one("(if true 1 2)").unwrap();
    let pr = compile_expr(&mut session, &mut ctx, entry, &node, false).unwrap();
    // The if handler ran: a merge structure exists rather than a call.
    assert_eq!(ctx.cfg().block_count(), 4);
    assert_eq!(pr.ty, TypeDesc::int());
}

// =============================================================================
// Atoms
// =============================================================================

#[test]
fn literal_atoms_have_literal_types() {
    let (result, _) = compile_expression("42");
    assert_eq!(result.unwrap().ty, TypeDesc::int());

    let (result, _) = compile_expression("false");
    assert_eq!(result.unwrap().ty, TypeDesc::Bool);

    let (result, _) = compile_expression("\"text\"");
    assert_eq!(result.unwrap().ty, TypeDesc::pointer(TypeDesc::char()));
}

#[test]
fn malformed_heads_are_rejected() {
    let (result, _) = compile_expression("()");
    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::MalformedNode { .. }
    ));

    let (result, _) = compile_expression("(1 2 3)");
    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::MalformedNode { .. }
    ));
}
