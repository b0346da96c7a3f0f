//! The `return` form.
//!
//! `(return)` or `(return expr)`. The operand's type must match the
//! function's declared return type (a bare `return` requires a void
//! function). The form terminates the current block and leaves the cursor
//! in a fresh, unreachable post-return block so subsequent sibling
//! expressions still have somewhere to compile into.

use tarn_cfg::{BlockId, Terminator};
use tarn_foundation::{Error, Result, TypeDesc};
use tarn_syntax::Node;

use crate::context::FunctionContext;
use crate::dispatch::compile_expr;
use crate::result::ParseResult;
use crate::rules;
use crate::session::Session;

/// Compiles a `return` form.
pub fn compile(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    _get_address: bool,
    _prefixed_with_core: bool,
) -> Result<ParseResult> {
    let (operands, span) = rules::form_operands(node, "return")?;
    rules::expect_arity("return", operands, span, 0, 1)?;
    let declared = ctx.return_type().clone();

    let (value, end_block) = match operands.first() {
        None => {
            if !declared.is_void() {
                return Err(Error::type_mismatch(declared, TypeDesc::Void).with_span(span));
            }
            (None, block)
        }
        Some(operand) => {
            let result = compile_expr(session, ctx, block, operand, false)?;
            rules::expect_same_type(&declared, &result.ty, operand.span())?;
            if result.is_void() {
                (None, result.block)
            } else {
                (Some(result.value_id()?), result.block)
            }
        }
    };

    ctx.cfg_mut().terminate(end_block, Terminator::Return(value));
    let after = ctx.cfg_mut().create_block("post-return");
    ctx.set_current_block(after);
    Ok(ParseResult::void(after))
}
