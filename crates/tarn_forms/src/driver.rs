//! The unit compilation driver.
//!
//! Parses `(defn name ((param type)...) ret body...)` declarations, compiles
//! each function body through the form dispatcher, and collects diagnostics.
//! Compilation is best-effort: a failed function is recorded and skipped,
//! and every remaining declaration is still compiled so one error does not
//! hide the rest.

use tarn_cfg::{FunctionCfg, Terminator};
use tarn_foundation::{DiagnosticSink, Error, Result, TypeDesc, TypeRegistry};
use tarn_syntax::{read_all, Node};

use crate::annotation::parse_type_node;
use crate::context::FunctionContext;
use crate::dispatch::{compile_expr, FormRegistry};
use crate::session::Session;
use crate::symbols::{ResolvedSymbol, SymbolResolver, SymbolTable};

/// A fully compiled function.
#[derive(Clone, Debug)]
pub struct CompiledFunction {
    /// The function's name.
    pub name: String,
    /// Parameter names and types, in order.
    pub params: Vec<(String, TypeDesc)>,
    /// The declared return type.
    pub ret: TypeDesc,
    /// The function's control-flow graph.
    pub cfg: FunctionCfg,
}

/// The functions of one compiled unit.
#[derive(Clone, Debug, Default)]
pub struct CompiledUnit {
    /// The unit's functions, in declaration order.
    pub functions: Vec<CompiledFunction>,
}

/// The parsed header of a `defn` declaration.
struct Header<'a> {
    name: String,
    params: Vec<(String, TypeDesc)>,
    ret: TypeDesc,
    body: &'a [Node],
}

/// Resolves the unit's own declarations first, then falls back to the
/// external resolver.
struct UnitResolver<'a> {
    unit: SymbolTable,
    outer: &'a dyn SymbolResolver,
}

impl SymbolResolver for UnitResolver<'_> {
    fn resolve(&self, name: &str) -> Option<ResolvedSymbol> {
        self.unit.resolve(name).or_else(|| self.outer.resolve(name))
    }
}

/// Compiles a whole unit of declarations.
///
/// Declaration headers are registered before any body compiles, so
/// functions may call each other regardless of declaration order. Returns
/// the functions that compiled, alongside every diagnostic recorded.
pub fn compile_unit(
    types: &TypeRegistry,
    forms: &FormRegistry,
    globals: &dyn SymbolResolver,
    decls: &[Node],
) -> (CompiledUnit, DiagnosticSink) {
    let mut diagnostics = DiagnosticSink::new();

    let mut headers = Vec::new();
    let mut unit = SymbolTable::new();
    for decl in decls {
        match parse_header(decl, types) {
            Ok(header) => {
                unit.define_function(
                    header.name.clone(),
                    header.params.iter().map(|(_, ty)| ty.clone()).collect(),
                    header.ret.clone(),
                );
                headers.push(header);
            }
            Err(err) => diagnostics.report(err),
        }
    }

    let resolver = UnitResolver {
        unit,
        outer: globals,
    };
    let mut functions = Vec::new();
    for header in headers {
        let mut session = Session::new(types, forms, &resolver);
        match compile_function(&mut session, &header) {
            Ok(function) => functions.push(function),
            Err(err) => diagnostics.report(err),
        }
        for err in session.diagnostics.into_errors() {
            diagnostics.report(err);
        }
    }

    (CompiledUnit { functions }, diagnostics)
}

/// Reads and compiles a unit from source text.
pub fn compile_source(
    types: &TypeRegistry,
    forms: &FormRegistry,
    globals: &dyn SymbolResolver,
    source: &str,
) -> (CompiledUnit, DiagnosticSink) {
    match read_all(source) {
        Ok(decls) => compile_unit(types, forms, globals, &decls),
        Err(err) => {
            let mut diagnostics = DiagnosticSink::new();
            diagnostics.report(err);
            (CompiledUnit::default(), diagnostics)
        }
    }
}

fn parse_header<'a>(decl: &'a Node, types: &TypeRegistry) -> Result<Header<'a>> {
    let children = decl.as_list().ok_or_else(|| {
        Error::malformed_node("a defn declaration", decl.type_name()).with_span(decl.span())
    })?;
    if children.first().and_then(Node::as_symbol) != Some("defn") {
        return Err(
            Error::malformed_node("a defn declaration", "other form").with_span(decl.span()),
        );
    }
    if children.len() < 4 {
        return Err(
            Error::malformed_node("(defn name (params) ret body...)", "too few parts")
                .with_span(decl.span()),
        );
    }

    let name = children[1]
        .as_symbol()
        .ok_or_else(|| {
            Error::malformed_node("a function name", children[1].type_name())
                .with_span(children[1].span())
        })?
        .to_string();

    let param_nodes = children[2].as_list().ok_or_else(|| {
        Error::malformed_node("a parameter list", children[2].type_name())
            .with_span(children[2].span())
    })?;
    let mut params = Vec::with_capacity(param_nodes.len());
    for param in param_nodes {
        let pair = param.as_list().ok_or_else(|| {
            Error::malformed_node("a (name type) parameter", param.type_name())
                .with_span(param.span())
        })?;
        if pair.len() != 2 {
            return Err(
                Error::malformed_node("a (name type) parameter", "wrong shape")
                    .with_span(param.span()),
            );
        }
        let param_name = pair[0].as_symbol().ok_or_else(|| {
            Error::malformed_node("a parameter name", pair[0].type_name())
                .with_span(pair[0].span())
        })?;
        let ty = parse_type_node(&pair[1], types)?;
        params.push((param_name.to_string(), ty));
    }

    let ret = parse_type_node(&children[3], types)?;
    Ok(Header {
        name,
        params,
        ret,
        body: &children[4..],
    })
}

/// Compiles one function body into a validated graph.
fn compile_function(session: &mut Session<'_>, header: &Header<'_>) -> Result<CompiledFunction> {
    let mut ctx = FunctionContext::new(
        header.name.clone(),
        header.params.clone(),
        header.ret.clone(),
    );

    let mut current = ctx.current_block();
    let mut last = None;
    for expr in header.body {
        let result = compile_expr(session, &mut ctx, current, expr, false)?;
        current = result.block;
        last = Some(result);
    }

    // Implicit return off the end of the body. An unreachable final block
    // (every path already returned) needs no terminator at all.
    if !ctx.cfg().is_terminated(current) && ctx.cfg().reachable().contains(&current) {
        if header.ret.is_void() {
            ctx.cfg_mut().terminate(current, Terminator::Return(None));
        } else {
            let result = last.ok_or_else(|| {
                Error::type_mismatch(header.ret.clone(), TypeDesc::Void)
            })?;
            if result.ty != header.ret {
                let span = header.body.last().map(Node::span);
                let mut err = Error::type_mismatch(header.ret.clone(), result.ty.clone());
                if let Some(span) = span {
                    err = err.with_span(span);
                }
                return Err(err);
            }
            ctx.cfg_mut()
                .terminate(current, Terminator::Return(Some(result.value_id()?)));
        }
    }

    let cfg = ctx.into_cfg();
    cfg.validate()?;
    Ok(CompiledFunction {
        name: header.name.clone(),
        params: header.params.clone(),
        ret: header.ret.clone(),
        cfg,
    })
}
