//! The form handlers.
//!
//! One module per special form (or small family). Every handler follows the
//! same contract: validate arity and node shape before touching operands,
//! compile operands through the dispatcher in source order, perform the
//! form's own type checks, and return a fresh [`ParseResult`](crate::ParseResult)
//! carrying the up-to-date current block. The incoming block may already
//! hold instructions from sibling forms, and no handler ever appends past a
//! terminator.

mod address_of;
mod assign;
mod binding;
mod cast;
mod conditional;
mod deref;
mod loop_while;
mod null;
mod ptr_arith;
mod ptr_compare;
mod ret;
mod sequence;
mod struct_ref;

use crate::dispatch::FormRegistry;

/// Registers every core form. Called once at startup.
pub fn register_core(registry: &mut FormRegistry) {
    registry.register("if", conditional::compile);
    registry.register("do", sequence::compile);
    registry.register("let", binding::compile);
    registry.register("set", assign::compile);
    registry.register("return", ret::compile);
    registry.register("while", loop_while::compile);
    registry.register("address-of", address_of::compile);
    registry.register("deref", deref::compile);
    registry.register("cast", cast::compile);
    registry.register("ptr-equals", ptr_compare::compile_equals);
    registry.register("ptr-less-than", ptr_compare::compile_less_than);
    registry.register("ptr-greater-than", ptr_compare::compile_greater_than);
    registry.register("ptr-add", ptr_arith::compile_add);
    registry.register("ptr-subtract", ptr_arith::compile_subtract);
    registry.register("null-ptr", null::compile_null_ptr);
    registry.register("null?", null::compile_is_null);
    registry.register("sref", struct_ref::compile);
}
