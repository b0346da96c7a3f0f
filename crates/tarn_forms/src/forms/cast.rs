//! The `cast` form.
//!
//! `(cast expr type)` reinterprets a value as another type. Casts are
//! permitted between pointer types and between scalar types (primitives and
//! bool); anything crossing that line, or involving void, struct, or
//! function types, is rejected.

use tarn_cfg::BlockId;
use tarn_foundation::{Error, Result, TypeDesc};
use tarn_syntax::Node;

use crate::annotation::parse_type_node;
use crate::context::FunctionContext;
use crate::dispatch::compile_expr;
use crate::result::ParseResult;
use crate::rules;
use crate::session::Session;

fn is_scalar(ty: &TypeDesc) -> bool {
    ty.is_primitive() || ty.is_bool()
}

fn castable(from: &TypeDesc, to: &TypeDesc) -> bool {
    (from.is_pointer() && to.is_pointer()) || (is_scalar(from) && is_scalar(to))
}

/// Compiles a `cast` form.
pub fn compile(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    _get_address: bool,
    _prefixed_with_core: bool,
) -> Result<ParseResult> {
    let (operands, span) = rules::form_operands(node, "cast")?;
    rules::expect_exact_arity("cast", operands, span, 2)?;

    let target = parse_type_node(&operands[1], session.types)?;
    let source = compile_expr(session, ctx, block, &operands[0], false)?;
    if !castable(&source.ty, &target) {
        return Err(Error::type_mismatch(target, source.ty.clone()).with_span(operands[0].span()));
    }

    let value = ctx.cfg_mut().emit_cast(source.block, source.value_id()?);
    ctx.set_current_block(source.block);
    Ok(ParseResult::new(Some(value), target, false, source.block))
}
