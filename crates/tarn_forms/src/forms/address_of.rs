//! The `address-of` form.
//!
//! `(address-of place)` produces a pointer to a storage location. The
//! operand is compiled in address mode and must denote storage; the result
//! is an ordinary pointer value, not itself an address.

use tarn_cfg::BlockId;
use tarn_foundation::{Error, Result, TypeDesc};
use tarn_syntax::Node;

use crate::context::FunctionContext;
use crate::dispatch::compile_expr;
use crate::result::ParseResult;
use crate::rules;
use crate::session::Session;

/// Compiles an `address-of` form.
pub fn compile(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    _get_address: bool,
    _prefixed_with_core: bool,
) -> Result<ParseResult> {
    let (operands, span) = rules::form_operands(node, "address-of")?;
    rules::expect_exact_arity("address-of", operands, span, 1)?;

    let place = compile_expr(session, ctx, block, &operands[0], true)?;
    if !place.is_address {
        return Err(Error::not_addressable("address-of").with_span(operands[0].span()));
    }

    ctx.set_current_block(place.block);
    Ok(ParseResult::new(
        Some(place.value_id()?),
        TypeDesc::pointer(place.ty),
        false,
        place.block,
    ))
}
