//! The `while` form.
//!
//! `(while cond body...)`. The condition lives in its own block so the back
//! edge re-evaluates it on every iteration; the body loops back to the
//! condition block unless it terminated itself. The form is void and leaves
//! the cursor in the exit block.

use tarn_cfg::{BlockId, Terminator};
use tarn_foundation::{Error, Result};
use tarn_syntax::Node;

use crate::context::FunctionContext;
use crate::dispatch::compile_expr;
use crate::result::ParseResult;
use crate::rules;
use crate::session::Session;

/// Compiles a `while` form.
pub fn compile(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    _get_address: bool,
    _prefixed_with_core: bool,
) -> Result<ParseResult> {
    let (operands, span) = rules::form_operands(node, "while")?;
    if operands.is_empty() {
        return Err(Error::arity_mismatch("while", "at least 1", 0).with_span(span));
    }

    let cond_block = ctx.cfg_mut().create_block("while-cond");
    ctx.cfg_mut().terminate(block, Terminator::Branch(cond_block));

    let cond = compile_expr(session, ctx, cond_block, &operands[0], false)?;
    let cond_value = rules::expect_bool_condition(&cond, operands[0].span())?;

    let body_block = ctx.cfg_mut().create_block("while-body");
    let exit_block = ctx.cfg_mut().create_block("while-exit");
    ctx.cfg_mut().terminate(
        cond.block,
        Terminator::CondBranch {
            cond: cond_value,
            then_to: body_block,
            else_to: exit_block,
        },
    );

    let mut current = body_block;
    for operand in &operands[1..] {
        let result = compile_expr(session, ctx, current, operand, false)?;
        current = result.block;
    }
    if !ctx.cfg_mut().is_terminated(current) {
        ctx.cfg_mut().terminate(current, Terminator::Branch(cond_block));
    }

    ctx.set_current_block(exit_block);
    Ok(ParseResult::void(exit_block))
}
