//! The `let` form.
//!
//! `(let ((name init) | (name type init) ...) body...)`. Each binding gets
//! a fresh stack slot so locals are addressable. Bindings are sequential:
//! later initializers see earlier bindings. An annotation, when present,
//! must match the initializer's type exactly. The body is compiled in the
//! new scope and the form's result is the last body expression's.

use tarn_cfg::BlockId;
use tarn_foundation::{Error, Result};
use tarn_syntax::Node;

use crate::annotation::parse_type_node;
use crate::context::{Binding, FunctionContext};
use crate::dispatch::compile_expr;
use crate::result::ParseResult;
use crate::rules;
use crate::session::Session;

/// Compiles a `let` form.
pub fn compile(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    get_address: bool,
    _prefixed_with_core: bool,
) -> Result<ParseResult> {
    let (operands, span) = rules::form_operands(node, "let")?;
    if operands.is_empty() {
        return Err(Error::arity_mismatch("let", "at least 1", 0).with_span(span));
    }

    let bindings = operands[0].as_list().ok_or_else(|| {
        Error::malformed_node("a binding list", operands[0].type_name())
            .with_span(operands[0].span())
    })?;
    let body = &operands[1..];

    ctx.push_scope();
    let compiled = compile_scoped(session, ctx, block, bindings, body, get_address);
    ctx.pop_scope();
    let result = compiled?;
    ctx.set_current_block(result.block);
    Ok(result)
}

/// Compiles the bindings and body inside the pushed scope, so the caller
/// can pop the scope on both success and failure.
fn compile_scoped(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    bindings: &[Node],
    body: &[Node],
    get_address: bool,
) -> Result<ParseResult> {
    let mut current = block;
    for binding_node in bindings {
        current = compile_binding(session, ctx, current, binding_node)?;
    }

    let Some((last, init)) = body.split_last() else {
        return Ok(ParseResult::void(current));
    };
    for statement in init {
        let result = compile_expr(session, ctx, current, statement, false)?;
        current = result.block;
    }
    compile_expr(session, ctx, current, last, get_address)
}

/// Compiles one `(name init)` or `(name type init)` binding, returning the
/// block control resides in afterwards.
fn compile_binding(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
) -> Result<BlockId> {
    let parts = node
        .as_list()
        .ok_or_else(|| Error::malformed_node("a binding", node.type_name()).with_span(node.span()))?;
    if parts.len() < 2 || parts.len() > 3 {
        return Err(
            Error::malformed_node("a (name init) or (name type init) binding", "wrong shape")
                .with_span(node.span()),
        );
    }

    let name = parts[0].as_symbol().ok_or_else(|| {
        Error::malformed_node("a binding name", parts[0].type_name()).with_span(parts[0].span())
    })?;

    let annotation = if parts.len() == 3 {
        Some(parse_type_node(&parts[1], session.types)?)
    } else {
        None
    };
    let init_node = &parts[parts.len() - 1];

    let init = compile_expr(session, ctx, block, init_node, false)?;
    if init.is_void() {
        return Err(
            Error::malformed_node("a value-producing initializer", "void expression")
                .with_span(init_node.span()),
        );
    }
    if let Some(annotated) = &annotation {
        rules::expect_same_type(annotated, &init.ty, init_node.span())?;
    }

    let slot = ctx.cfg_mut().emit_alloc(init.block);
    ctx.cfg_mut().emit_store(init.block, slot, init.value_id()?);
    ctx.define(
        name,
        Binding {
            ty: init.ty.clone(),
            storage: slot,
        },
    );
    Ok(init.block)
}
