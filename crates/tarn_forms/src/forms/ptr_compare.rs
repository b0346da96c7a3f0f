//! The pointer comparison family: `ptr-equals`, `ptr-less-than`,
//! `ptr-greater-than`.
//!
//! Each takes exactly two pointer operands, evaluated left to right (the
//! order is a contract, not an implementation detail, since operands may
//! have side effects). The pointee types need not match: these forms
//! compare addresses, not pointee identity. The result is boolean and never
//! addressable; a caller's `get_address` request is ignored rather than
//! rejected, as for every form producing a non-addressable scalar.

use tarn_cfg::{BlockId, PtrCmpOp};
use tarn_foundation::{Result, TypeDesc};
use tarn_syntax::Node;

use crate::context::FunctionContext;
use crate::dispatch::compile_expr;
use crate::result::ParseResult;
use crate::rules;
use crate::session::Session;

/// Compiles a `ptr-equals` form.
pub fn compile_equals(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    get_address: bool,
    prefixed_with_core: bool,
) -> Result<ParseResult> {
    let _ = (get_address, prefixed_with_core);
    compile_comparison(session, ctx, block, node, "ptr-equals", PtrCmpOp::Eq)
}

/// Compiles a `ptr-less-than` form.
pub fn compile_less_than(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    get_address: bool,
    prefixed_with_core: bool,
) -> Result<ParseResult> {
    let _ = (get_address, prefixed_with_core);
    compile_comparison(session, ctx, block, node, "ptr-less-than", PtrCmpOp::Lt)
}

/// Compiles a `ptr-greater-than` form.
pub fn compile_greater_than(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    get_address: bool,
    prefixed_with_core: bool,
) -> Result<ParseResult> {
    let _ = (get_address, prefixed_with_core);
    compile_comparison(session, ctx, block, node, "ptr-greater-than", PtrCmpOp::Gt)
}

fn compile_comparison(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    form: &str,
    op: PtrCmpOp,
) -> Result<ParseResult> {
    let (operands, span) = rules::form_operands(node, form)?;
    rules::expect_exact_arity(form, operands, span, 2)?;

    let lhs = compile_expr(session, ctx, block, &operands[0], false)?;
    rules::expect_pointer(&lhs.ty, form, 1, operands[0].span())?;

    let rhs = compile_expr(session, ctx, lhs.block, &operands[1], false)?;
    rules::expect_pointer(&rhs.ty, form, 2, operands[1].span())?;

    let value = ctx
        .cfg_mut()
        .emit_ptr_cmp(rhs.block, op, lhs.value_id()?, rhs.value_id()?);
    ctx.set_current_block(rhs.block);
    Ok(ParseResult::new(
        Some(value),
        TypeDesc::Bool,
        false,
        rhs.block,
    ))
}
