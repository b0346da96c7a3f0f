//! The `if` form.
//!
//! `(if cond then)` or `(if cond then else)`. Lowers to a conditional
//! branch into fresh then/else blocks that meet at a merge block. When both
//! branches produce a non-void value of the same type, the results are
//! unified at the merge block with the select-by-predecessor primitive;
//! the merged result is addressable only if both branch results were.

use tarn_cfg::{BlockId, Terminator};
use tarn_foundation::{Error, Result};
use tarn_syntax::Node;

use crate::context::FunctionContext;
use crate::dispatch::compile_expr;
use crate::result::ParseResult;
use crate::rules;
use crate::session::Session;

/// Compiles an `if` form.
pub fn compile(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    get_address: bool,
    _prefixed_with_core: bool,
) -> Result<ParseResult> {
    let (operands, span) = rules::form_operands(node, "if")?;
    rules::expect_arity("if", operands, span, 2, 3)?;

    let cond = compile_expr(session, ctx, block, &operands[0], false)?;
    let cond_value = rules::expect_bool_condition(&cond, operands[0].span())?;

    let then_block = ctx.cfg_mut().create_block("if-then");
    let else_block = ctx.cfg_mut().create_block("if-else");
    let merge_block = ctx.cfg_mut().create_block("if-merge");
    ctx.cfg_mut().terminate(
        cond.block,
        Terminator::CondBranch {
            cond: cond_value,
            then_to: then_block,
            else_to: else_block,
        },
    );

    let then_result = compile_expr(session, ctx, then_block, &operands[1], get_address)?;
    let else_result = match operands.get(2) {
        Some(else_node) => compile_expr(session, ctx, else_block, else_node, get_address)?,
        // Omitted else: a synthesized no-op producing void.
        None => ParseResult::void(else_block),
    };

    for branch_end in [then_result.block, else_result.block] {
        if !ctx.cfg_mut().is_terminated(branch_end) {
            ctx.cfg_mut()
                .terminate(branch_end, Terminator::Branch(merge_block));
        }
    }
    ctx.set_current_block(merge_block);

    // Void absorbs: if either branch yields no value, so does the form.
    if then_result.is_void() || else_result.is_void() {
        return Ok(ParseResult::void(merge_block));
    }
    if then_result.ty != else_result.ty {
        return Err(
            Error::type_mismatch(then_result.ty.clone(), else_result.ty.clone()).with_span(span),
        );
    }

    let merged = ctx.cfg_mut().emit_select(
        merge_block,
        (then_result.block, then_result.value_id()?),
        (else_result.block, else_result.value_id()?),
    );
    Ok(ParseResult::new(
        Some(merged),
        then_result.ty.clone(),
        then_result.is_address && else_result.is_address,
        merge_block,
    ))
}
