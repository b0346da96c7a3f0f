//! The pointer arithmetic family: `ptr-add` and `ptr-subtract`.
//!
//! `(ptr-add p n)` and `(ptr-subtract p n)` offset a pointer by an integer
//! element count, in either direction. The result keeps the pointer's type.

use tarn_cfg::BlockId;
use tarn_foundation::{Result, TypeDesc};
use tarn_syntax::Node;

use crate::context::FunctionContext;
use crate::dispatch::compile_expr;
use crate::result::ParseResult;
use crate::rules;
use crate::session::Session;

/// Compiles a `ptr-add` form.
pub fn compile_add(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    _get_address: bool,
    _prefixed_with_core: bool,
) -> Result<ParseResult> {
    compile_offset(session, ctx, block, node, "ptr-add", false)
}

/// Compiles a `ptr-subtract` form.
pub fn compile_subtract(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    _get_address: bool,
    _prefixed_with_core: bool,
) -> Result<ParseResult> {
    compile_offset(session, ctx, block, node, "ptr-subtract", true)
}

fn compile_offset(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    form: &str,
    negate: bool,
) -> Result<ParseResult> {
    let (operands, span) = rules::form_operands(node, form)?;
    rules::expect_exact_arity(form, operands, span, 2)?;

    let base = compile_expr(session, ctx, block, &operands[0], false)?;
    rules::expect_pointer(&base.ty, form, 1, operands[0].span())?;

    let offset = compile_expr(session, ctx, base.block, &operands[1], false)?;
    rules::expect_same_type(&TypeDesc::int(), &offset.ty, operands[1].span())?;

    let value = ctx.cfg_mut().emit_ptr_offset(
        offset.block,
        base.value_id()?,
        offset.value_id()?,
        negate,
    );
    ctx.set_current_block(offset.block);
    Ok(ParseResult::new(Some(value), base.ty, false, offset.block))
}
