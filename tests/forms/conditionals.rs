//! Integration tests for `if`, `while`, and `do`

use tarn_cfg::Terminator;
use tarn_foundation::{ErrorKind, TypeDesc};

use crate::{compile_expression, compile_expression_with};

// =============================================================================
// if
// =============================================================================

#[test]
fn if_merges_same_typed_branches() {
    let (result, ctx) = compile_expression("(if true 1 2)");
    let pr = result.unwrap();
    assert_eq!(pr.ty, TypeDesc::int());
    assert_eq!(ctx.cfg().block_count(), 4);
    assert!(pr.value.is_some());
}

#[test]
fn if_with_value_branches_and_void_else_is_void() {
    let (result, _) = compile_expression("(if true 1)");
    assert!(result.unwrap().is_void());
}

#[test]
fn if_requires_boolean_condition() {
    let (result, _) = compile_expression("(if (null-ptr int) 1 2)");
    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::ConditionNotBoolean { .. }
    ));
}

#[test]
fn if_rejects_branch_type_mismatch() {
    let (result, _) = compile_expression("(if true 1 false)");
    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::TypeMismatch { .. }
    ));
}

#[test]
fn if_arity_error_emits_nothing() {
    let (result, ctx) = compile_expression("(if true)");
    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::ArityMismatch { .. }
    ));
    assert_eq!(ctx.cfg().block_count(), 1);
    assert!(ctx.cfg().block(ctx.cfg().entry()).instrs.is_empty());
}

#[test]
fn deeply_nested_ifs_stay_consistent() {
    let (result, ctx) =
        compile_expression("(if true (if false 1 2) (if true 3 (if false 4 5)))");
    let pr = result.unwrap();
    assert_eq!(pr.ty, TypeDesc::int());
    // Every reachable block in the finished expression tree has one
    // terminator except the final merge, which is still open.
    let unterminated = ctx
        .cfg()
        .blocks()
        .filter(|block| !block.is_terminated())
        .count();
    assert_eq!(unterminated, 1);
}

// =============================================================================
// while
// =============================================================================

#[test]
fn while_is_void_with_dedicated_condition_block() {
    let (result, ctx) = compile_expression("(while false 1)");
    assert!(result.unwrap().is_void());
    assert!(ctx.cfg().blocks().any(|b| b.label == "while-cond"));
    assert!(ctx.cfg().blocks().any(|b| b.label == "while-exit"));
}

#[test]
fn while_loops_counter_updates() {
    let (result, ctx) = compile_expression(
        "(let ((p (null-ptr int)))\
           (while (null? p)\
             (set p (ptr-add p 1))))",
    );
    assert!(result.unwrap().is_void());
    // The back edge exists: some block branches to an earlier one.
    let back_edges = ctx
        .cfg()
        .blocks()
        .filter(|block| {
            matches!(&block.terminator, Some(Terminator::Branch(to)) if to.0 < block.id.0)
        })
        .count();
    assert_eq!(back_edges, 1);
}

// =============================================================================
// do
// =============================================================================

#[test]
fn do_yields_the_last_expression() {
    let (result, _) = compile_expression("(do 1 true (null-ptr char))");
    assert_eq!(
        result.unwrap().ty,
        TypeDesc::pointer(TypeDesc::char())
    );
}

#[test]
fn do_forwards_address_requests_to_the_tail() {
    let (result, _) = compile_expression_with(
        "(let ((x 1)) (do 2 x))",
        true,
        vec![],
        TypeDesc::Void,
    );
    let pr = result.unwrap();
    assert!(pr.is_address);
    assert_eq!(pr.ty, TypeDesc::int());
}
