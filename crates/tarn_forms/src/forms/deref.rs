//! The `deref` form.
//!
//! `(deref p)` reads through a pointer. In value mode the result is a load
//! of the pointee; in address mode the pointer value itself is the address,
//! so `(set (deref p) v)` writes through `p` without an intermediate load.

use tarn_cfg::BlockId;
use tarn_foundation::Result;
use tarn_syntax::Node;

use crate::context::FunctionContext;
use crate::dispatch::compile_expr;
use crate::result::ParseResult;
use crate::rules;
use crate::session::Session;

/// Compiles a `deref` form.
pub fn compile(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    get_address: bool,
    _prefixed_with_core: bool,
) -> Result<ParseResult> {
    let (operands, span) = rules::form_operands(node, "deref")?;
    rules::expect_exact_arity("deref", operands, span, 1)?;

    let pointer = compile_expr(session, ctx, block, &operands[0], false)?;
    let pointee = rules::expect_pointer(&pointer.ty, "deref", 1, operands[0].span())?.clone();
    ctx.set_current_block(pointer.block);

    if get_address {
        return Ok(ParseResult::new(
            Some(pointer.value_id()?),
            pointee,
            true,
            pointer.block,
        ));
    }
    let loaded = ctx.cfg_mut().emit_load(pointer.block, pointer.value_id()?);
    Ok(ParseResult::new(Some(loaded), pointee, false, pointer.block))
}
