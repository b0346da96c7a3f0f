//! Form dispatch.
//!
//! [`compile_expr`] is the single entry point for compiling any expression:
//! atoms compile directly, and list forms dispatch on their head symbol
//! through the [`FormRegistry`]. A head symbol with no registered handler
//! falls back to the external symbol resolver (function call or global
//! reference); if that also fails, the form is unrecognized.
//!
//! The dispatcher performs no type checking of its own; every handler is
//! solely responsible for its form's rules. Handlers compile their operands
//! back through [`compile_expr`], never by bypassing it.

use std::collections::HashMap;

use tarn_cfg::{BlockId, ConstValue};
use tarn_foundation::{Error, Result, Span, TypeDesc};
use tarn_syntax::Node;

use crate::context::FunctionContext;
use crate::forms;
use crate::result::ParseResult;
use crate::session::Session;
use crate::symbols::ResolvedSymbol;

/// A form handler.
///
/// Receives the session, the enclosing function context, the block to start
/// compiling in, the full form node (head symbol included), whether the
/// caller wants the result's address, and whether the form was spelled with
/// the core prefix (accepted by every handler, used by none; reserved for
/// distinguishing core forms from user-shadowed macros).
pub type FormHandler = fn(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    get_address: bool,
    prefixed_with_core: bool,
) -> Result<ParseResult>;

/// Registry mapping head symbols to form handlers.
///
/// Populated once at startup and read-only afterwards; lookups are
/// case-sensitive exact matches.
#[derive(Clone, Default)]
pub struct FormRegistry {
    handlers: HashMap<String, FormHandler>,
}

impl FormRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Creates a registry with every core form registered.
    #[must_use]
    pub fn with_core_forms() -> Self {
        let mut registry = Self::new();
        forms::register_core(&mut registry);
        registry
    }

    /// Registers a handler for a head symbol. Startup only; the registry
    /// must not change once compilation begins.
    pub fn register(&mut self, name: impl Into<String>, handler: FormHandler) {
        self.handlers.insert(name.into(), handler);
    }

    /// Looks up the handler for a head symbol.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<FormHandler> {
        self.handlers.get(name).copied()
    }

    /// Returns true if a handler is registered for the symbol.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// The registered form names, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for FormRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("FormRegistry").field("forms", &names).finish()
    }
}

/// Compiles one expression, returning its parse result.
///
/// The result's `block` field is the block control resides in afterwards;
/// callers chain further compilation there.
pub fn compile_expr(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    get_address: bool,
) -> Result<ParseResult> {
    match node {
        Node::Int(n, _) => {
            let value = ctx.cfg_mut().emit_const(block, ConstValue::Int(*n));
            Ok(ParseResult::new(Some(value), TypeDesc::int(), false, block))
        }
        Node::Bool(b, _) => {
            let value = ctx.cfg_mut().emit_const(block, ConstValue::Bool(*b));
            Ok(ParseResult::new(Some(value), TypeDesc::Bool, false, block))
        }
        Node::Str(s, _) => {
            let value = ctx.cfg_mut().emit_const(block, ConstValue::Str(s.clone()));
            Ok(ParseResult::new(
                Some(value),
                TypeDesc::pointer(TypeDesc::char()),
                false,
                block,
            ))
        }
        Node::Symbol(name, span) => compile_symbol(session, ctx, block, name, *span, get_address),
        Node::List(children, span) => {
            compile_list(session, ctx, block, node, children, *span, get_address)
        }
    }
}

/// Compiles a symbol reference: a local, or a global from the resolver.
fn compile_symbol(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    name: &str,
    span: Span,
    get_address: bool,
) -> Result<ParseResult> {
    if let Some(binding) = ctx.lookup(name).cloned() {
        return Ok(storage_result(ctx, block, binding.storage, binding.ty, get_address));
    }

    match session.symbols.resolve(name) {
        Some(ResolvedSymbol::Variable { ty }) => {
            let addr = ctx.cfg_mut().emit_global_addr(block, name);
            Ok(storage_result(ctx, block, addr, ty, get_address))
        }
        Some(ResolvedSymbol::Function { .. }) => Err(Error::malformed_node(
            "a value expression",
            format!("function name `{name}`"),
        )
        .with_span(span)),
        None => Err(Error::undefined_symbol(name).with_span(span)),
    }
}

/// Builds the result for a reference to storage at `addr` of type `ty`:
/// the address itself when requested, otherwise a load.
fn storage_result(
    ctx: &mut FunctionContext,
    block: BlockId,
    addr: tarn_cfg::ValueId,
    ty: TypeDesc,
    get_address: bool,
) -> ParseResult {
    if get_address {
        ParseResult::new(Some(addr), ty, true, block)
    } else {
        let value = ctx.cfg_mut().emit_load(block, addr);
        ParseResult::new(Some(value), ty, false, block)
    }
}

/// Compiles a list: form dispatch, then function-call fallback.
fn compile_list(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    node: &Node,
    children: &[Node],
    span: Span,
    get_address: bool,
) -> Result<ParseResult> {
    if children.is_empty() {
        return Err(Error::malformed_node("a non-empty form", "empty list").with_span(span));
    }

    let head = &children[0];
    let Some(name) = head.as_symbol() else {
        return Err(
            Error::malformed_node("a symbol in form head", head.type_name())
                .with_span(head.span()),
        );
    };

    if let Some(handler) = session.forms.get(name) {
        return handler(session, ctx, block, node, get_address, false);
    }

    match session.symbols.resolve(name) {
        Some(ResolvedSymbol::Function { params, ret }) => {
            compile_call(session, ctx, block, name, span, &params, &ret, &children[1..])
        }
        Some(ResolvedSymbol::Variable { .. }) => Err(Error::malformed_node(
            "a form or function",
            format!("variable `{name}`"),
        )
        .with_span(head.span())),
        None => Err(Error::unrecognized_form(name).with_span(span)),
    }
}

/// Compiles a call to a resolved function: arity check first, then operands
/// left to right, each threaded through the block the previous one returned.
#[allow(clippy::too_many_arguments)]
fn compile_call(
    session: &mut Session<'_>,
    ctx: &mut FunctionContext,
    block: BlockId,
    name: &str,
    span: Span,
    params: &[TypeDesc],
    ret: &TypeDesc,
    args: &[Node],
) -> Result<ParseResult> {
    if args.len() != params.len() {
        return Err(
            Error::arity_mismatch(name, params.len().to_string(), args.len()).with_span(span),
        );
    }

    let mut current = block;
    let mut values = Vec::with_capacity(args.len());
    for (arg, param_ty) in args.iter().zip(params) {
        let result = compile_expr(session, ctx, current, arg, false)?;
        current = result.block;
        if &result.ty != param_ty {
            return Err(
                Error::type_mismatch(param_ty.clone(), result.ty.clone()).with_span(arg.span()),
            );
        }
        values.push(result.value_id()?);
    }

    let dest = ctx
        .cfg_mut()
        .emit_call(current, name, values, !ret.is_void());
    Ok(ParseResult::new(dest, ret.clone(), false, current))
}
