//! The null-pointer forms: `null-ptr` and `null?`.
//!
//! `(null-ptr type)` produces the null pointer of a given pointee type;
//! `(null? p)` tests a pointer against null and yields a boolean.

use tarn_cfg::{BlockId, ConstValue, PtrCmpOp};
use tarn_foundation::{Result, TypeDesc};
use tarn_syntax::Node;

use crate::annotation::parse_type_node;
use crate::context::FunctionContext;
use crate::dispatch::compile_expr;
use crate::result::ParseResult;
use crate::rules;
use crate::session::Session;

/// Compiles a `null-ptr` form.
pub fn compile_null_ptr(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    _get_address: bool,
    _prefixed_with_core: bool,
) -> Result<ParseResult> {
    let (operands, span) = rules::form_operands(node, "null-ptr")?;
    rules::expect_exact_arity("null-ptr", operands, span, 1)?;

    let pointee = parse_type_node(&operands[0], session.types)?;
    let value = ctx.cfg_mut().emit_const(block, ConstValue::Null);
    ctx.set_current_block(block);
    Ok(ParseResult::new(
        Some(value),
        TypeDesc::pointer(pointee),
        false,
        block,
    ))
}

/// Compiles a `null?` form.
pub fn compile_is_null(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    _get_address: bool,
    _prefixed_with_core: bool,
) -> Result<ParseResult> {
    let (operands, span) = rules::form_operands(node, "null?")?;
    rules::expect_exact_arity("null?", operands, span, 1)?;

    let pointer = compile_expr(session, ctx, block, &operands[0], false)?;
    rules::expect_pointer(&pointer.ty, "null?", 1, operands[0].span())?;

    let null = ctx.cfg_mut().emit_const(pointer.block, ConstValue::Null);
    let value = ctx
        .cfg_mut()
        .emit_ptr_cmp(pointer.block, PtrCmpOp::Eq, pointer.value_id()?, null);
    ctx.set_current_block(pointer.block);
    Ok(ParseResult::new(
        Some(value),
        TypeDesc::Bool,
        false,
        pointer.block,
    ))
}
