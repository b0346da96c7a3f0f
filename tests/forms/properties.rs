//! Property-based tests over the form compilation contract

use proptest::prelude::*;

use tarn_forms::{FormRegistry, FunctionContext, Session, SymbolTable, compile_expr};
use tarn_foundation::{TypeDesc, TypeRegistry};
use tarn_syntax::read_one;

fn compile_fresh(source: &str) -> (bool, FunctionContext) {
    let types = TypeRegistry::with_core_types();
    let forms = FormRegistry::with_core_forms();
    let symbols = SymbolTable::new();
    let mut session = Session::new(&types, &forms, &symbols);
    let mut ctx = FunctionContext::new("prop", vec![], TypeDesc::Void);
    let entry = ctx.current_block();
    let node = read_one(source).expect("fixed sources read");
    let ok = compile_expr(&mut session, &mut ctx, entry, &node, false).is_ok();
    (ok, ctx)
}

fn well_formed_source() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(if true 1 2)".to_string()),
        Just("(let ((x 1)) (if (null? (null-ptr int)) (set x 2)) x)".to_string()),
        Just("(do (while false) 1)".to_string()),
        Just("(let ((x 5)) (deref (address-of x)))".to_string()),
        Just("(ptr-equals (ptr-add (null-ptr char) 2) (null-ptr char))".to_string()),
        Just("(cast (cast 1 char) int)".to_string()),
    ]
}

proptest! {
    // Compiling the same source twice produces structurally identical
    // graphs: same blocks, labels, instruction counts, and terminators.
    #[test]
    fn compilation_is_reproducible(source in well_formed_source()) {
        let (ok_a, a) = compile_fresh(&source);
        let (ok_b, b) = compile_fresh(&source);
        prop_assert!(ok_a && ok_b);
        prop_assert_eq!(a.cfg().block_count(), b.cfg().block_count());
        for (block_a, block_b) in a.cfg().blocks().zip(b.cfg().blocks()) {
            prop_assert_eq!(block_a, block_b);
        }
    }

    // Arity failures happen before any operand compiles, so the graph is
    // left exactly as it started.
    #[test]
    fn arity_failures_have_no_side_effects(
        form in prop_oneof![
            Just("if"),
            Just("set"),
            Just("deref"),
            Just("address-of"),
            Just("ptr-equals"),
            Just("cast"),
        ],
    ) {
        let (ok, ctx) = compile_fresh(&format!("({form})"));
        prop_assert!(!ok);
        prop_assert_eq!(ctx.cfg().block_count(), 1);
        prop_assert!(ctx.cfg().block(ctx.cfg().entry()).instrs.is_empty());
    }

    // Nesting a well-formed expression under `do` never changes whether it
    // compiles.
    #[test]
    fn do_wrapping_preserves_compilability(source in well_formed_source()) {
        let (direct, _) = compile_fresh(&source);
        let (wrapped, _) = compile_fresh(&format!("(do {source})"));
        prop_assert_eq!(direct, wrapped);
    }
}
