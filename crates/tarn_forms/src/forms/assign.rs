//! The `set` form.
//!
//! `(set place value)` stores a value into a storage location. The place is
//! compiled in address mode and must actually denote storage; the value must
//! have the place's exact type. The form itself is void.

use tarn_cfg::BlockId;
use tarn_foundation::{Error, Result};
use tarn_syntax::Node;

use crate::context::FunctionContext;
use crate::dispatch::compile_expr;
use crate::result::ParseResult;
use crate::rules;
use crate::session::Session;

/// Compiles a `set` form.
pub fn compile(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    _get_address: bool,
    _prefixed_with_core: bool,
) -> Result<ParseResult> {
    let (operands, span) = rules::form_operands(node, "set")?;
    rules::expect_exact_arity("set", operands, span, 2)?;

    let place = compile_expr(session, ctx, block, &operands[0], true)?;
    if !place.is_address {
        return Err(Error::not_addressable("set").with_span(operands[0].span()));
    }

    let value = compile_expr(session, ctx, place.block, &operands[1], false)?;
    rules::expect_same_type(&place.ty, &value.ty, operands[1].span())?;

    ctx.cfg_mut()
        .emit_store(value.block, place.value_id()?, value.value_id()?);
    ctx.set_current_block(value.block);
    Ok(ParseResult::void(value.block))
}
