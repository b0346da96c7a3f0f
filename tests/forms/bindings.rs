//! Integration tests for `let`, `set`, `return`, and `sref`

use tarn_cfg::Terminator;
use tarn_forms::{FormRegistry, FunctionContext, Session, SymbolTable, compile_expr};
use tarn_foundation::{ErrorKind, TypeDesc, TypeRegistry};
use tarn_syntax::read_one;

use crate::{compile_expression, compile_expression_with};

// =============================================================================
// let
// =============================================================================

#[test]
fn let_scopes_bindings_to_the_body() {
    let (result, _) = compile_expression("(let ((x 1) (y 2)) y)");
    assert_eq!(result.unwrap().ty, TypeDesc::int());

    let (result, _) = compile_expression("(do (let ((x 1)) x) x)");
    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::UndefinedSymbol(_)
    ));
}

#[test]
fn let_bindings_shadow_parameters() {
    let (result, _) = compile_expression_with(
        "(let ((x true)) x)",
        false,
        vec![("x".to_string(), TypeDesc::int())],
        TypeDesc::Void,
    );
    assert_eq!(result.unwrap().ty, TypeDesc::Bool);
}

#[test]
fn let_annotation_must_match_initializer() {
    let (result, _) = compile_expression("(let ((p (ptr int) (null-ptr int))) p)");
    assert_eq!(result.unwrap().ty, TypeDesc::pointer(TypeDesc::int()));

    let (result, _) = compile_expression("(let ((p (ptr char) (null-ptr int))) p)");
    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::TypeMismatch { .. }
    ));
}

#[test]
fn let_initializers_may_branch() {
    let (result, ctx) = compile_expression("(let ((x (if true 1 2))) x)");
    assert_eq!(result.unwrap().ty, TypeDesc::int());
    // The binding's slot lives in the if's merge block, not the entry.
    assert_eq!(ctx.cfg().block_count(), 4);
}

// =============================================================================
// set
// =============================================================================

#[test]
fn set_stores_and_yields_void() {
    let (result, _) = compile_expression("(let ((x 1)) (set x 2))");
    assert!(result.unwrap().is_void());
}

#[test]
fn set_requires_matching_types_and_a_place() {
    let (result, _) = compile_expression("(let ((x 1)) (set x false))");
    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::TypeMismatch { .. }
    ));

    let (result, _) = compile_expression("(set 1 2)");
    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::NotAddressable { .. }
    ));
}

// =============================================================================
// return
// =============================================================================

#[test]
fn return_matches_the_declared_type() {
    let (result, ctx) =
        compile_expression_with("(return 5)", false, vec![], TypeDesc::int());
    assert!(result.unwrap().is_void());
    let entry = ctx.cfg().entry();
    assert!(matches!(
        ctx.cfg().block(entry).terminator,
        Some(Terminator::Return(Some(_)))
    ));
}

#[test]
fn return_type_mismatches_are_rejected() {
    let (result, _) =
        compile_expression_with("(return true)", false, vec![], TypeDesc::int());
    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::TypeMismatch { .. }
    ));

    let (result, _) = compile_expression_with("(return)", false, vec![], TypeDesc::int());
    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::TypeMismatch { .. }
    ));
}

#[test]
fn siblings_after_return_land_in_an_unreachable_block() {
    let (result, ctx) = compile_expression_with(
        "(do (return 1) (set-me-free))",
        false,
        vec![],
        TypeDesc::int(),
    );
    // The sibling fails to compile (unknown form), but the return already
    // terminated the entry block.
    assert!(result.is_err());
    let entry = ctx.cfg().entry();
    assert!(ctx.cfg().block(entry).is_terminated());
}

// =============================================================================
// sref
// =============================================================================

fn point() -> TypeDesc {
    TypeDesc::Struct {
        name: "point".to_string(),
        fields: vec![
            ("x".to_string(), TypeDesc::int()),
            ("y".to_string(), TypeDesc::int()),
        ],
    }
}

fn compile_with_point(source: &str, get_address: bool) -> tarn_foundation::Result<tarn_forms::ParseResult> {
    let mut types = TypeRegistry::with_core_types();
    types.register("point", point());
    let forms = FormRegistry::with_core_forms();
    let symbols = SymbolTable::new();
    let mut session = Session::new(&types, &forms, &symbols);
    let mut ctx =
        FunctionContext::new("f", vec![("p".to_string(), point())], TypeDesc::Void);
    let entry = ctx.current_block();
    let node = read_one(source).expect("test source must read");
    compile_expr(&mut session, &mut ctx, entry, &node, get_address)
}

#[test]
fn sref_reads_and_writes_fields() {
    let pr = compile_with_point("(sref p y)", false).unwrap();
    assert_eq!(pr.ty, TypeDesc::int());
    assert!(!pr.is_address);

    let pr = compile_with_point("(set (sref p x) 4)", false).unwrap();
    assert!(pr.is_void());
}

#[test]
fn sref_field_must_exist() {
    let err = compile_with_point("(sref p z)", false).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedNode { .. }));
}
