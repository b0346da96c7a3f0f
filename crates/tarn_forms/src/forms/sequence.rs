//! The `do` form.
//!
//! `(do expr...)` compiles its expressions in order, threading the current
//! block through each. The form's result is the last expression's result
//! (the caller's `get_address` request is forwarded to the last expression
//! only); an empty sequence is void.

use tarn_cfg::BlockId;
use tarn_foundation::Result;
use tarn_syntax::Node;

use crate::context::FunctionContext;
use crate::dispatch::compile_expr;
use crate::result::ParseResult;
use crate::rules;
use crate::session::Session;

/// Compiles a `do` form.
pub fn compile(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    get_address: bool,
    _prefixed_with_core: bool,
) -> Result<ParseResult> {
    let (operands, _span) = rules::form_operands(node, "do")?;

    let Some((last, init)) = operands.split_last() else {
        return Ok(ParseResult::void(block));
    };

    let mut current = block;
    for operand in init {
        let result = compile_expr(session, ctx, current, operand, false)?;
        current = result.block;
    }
    compile_expr(session, ctx, current, last, get_address)
}
