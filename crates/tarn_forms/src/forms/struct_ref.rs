//! The `sref` form.
//!
//! `(sref base field)` selects a field of a struct. The base is compiled in
//! address mode so the field address can be computed without copying the
//! whole struct; the field is named by a bare symbol and must exist. In
//! value mode the field is loaded, in address mode its address is the
//! result, so `(set (sref s x) v)` writes the field in place.

use tarn_cfg::BlockId;
use tarn_foundation::{Error, Result, TypeDesc};
use tarn_syntax::Node;

use crate::context::FunctionContext;
use crate::dispatch::compile_expr;
use crate::result::ParseResult;
use crate::rules;
use crate::session::Session;

/// Compiles an `sref` form.
pub fn compile(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    get_address: bool,
    _prefixed_with_core: bool,
) -> Result<ParseResult> {
    let (operands, span) = rules::form_operands(node, "sref")?;
    rules::expect_exact_arity("sref", operands, span, 2)?;

    let field = operands[1].as_symbol().ok_or_else(|| {
        Error::malformed_node("a field name", operands[1].type_name())
            .with_span(operands[1].span())
    })?;

    let base = compile_expr(session, ctx, block, &operands[0], true)?;
    if !base.is_address {
        return Err(Error::not_addressable("sref").with_span(operands[0].span()));
    }
    let TypeDesc::Struct { fields, .. } = &base.ty else {
        return Err(
            Error::malformed_node("a struct-typed expression", base.ty.to_string())
                .with_span(operands[0].span()),
        );
    };
    let (index, field_ty) = fields
        .iter()
        .enumerate()
        .find(|(_, (name, _))| name == field)
        .map(|(index, (_, ty))| (index, ty.clone()))
        .ok_or_else(|| {
            Error::malformed_node(
                format!("a field of {}", base.ty),
                format!("unknown field `{field}`"),
            )
            .with_span(operands[1].span())
        })?;

    let addr = ctx
        .cfg_mut()
        .emit_field_addr(base.block, base.value_id()?, index);
    ctx.set_current_block(base.block);

    if get_address {
        return Ok(ParseResult::new(Some(addr), field_ty, true, base.block));
    }
    let value = ctx.cfg_mut().emit_load(base.block, addr);
    Ok(ParseResult::new(Some(value), field_ty, false, base.block))
}
