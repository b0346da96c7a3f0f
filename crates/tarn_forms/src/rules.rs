//! Shared shape, arity, and type rules used by the form handlers.
//!
//! Every handler validates its own node shape and operand types; these
//! helpers keep the checks and their diagnostics uniform across forms.

use tarn_cfg::ValueId;
use tarn_foundation::{Error, Result, Span, TypeDesc};
use tarn_syntax::Node;

use crate::result::ParseResult;

/// Splits a form node into its operands (children after the head symbol)
/// and the form's span. Handlers re-validate shape rather than trusting the
/// dispatcher.
pub fn form_operands<'a>(node: &'a Node, form: &str) -> Result<(&'a [Node], Span)> {
    let children = node.as_list().ok_or_else(|| {
        Error::malformed_node(format!("a {form} form"), node.type_name()).with_span(node.span())
    })?;
    if children.is_empty() {
        return Err(
            Error::malformed_node(format!("a {form} form"), "empty list").with_span(node.span()),
        );
    }
    Ok((&children[1..], node.span()))
}

/// Checks an inclusive operand-count range. Runs before any operand is
/// compiled so arity failures never trigger operand side effects.
pub fn expect_arity(
    form: &str,
    operands: &[Node],
    span: Span,
    min: usize,
    max: usize,
) -> Result<()> {
    if operands.len() < min || operands.len() > max {
        let expected = if min == max {
            format!("{min}")
        } else {
            format!("{min} or {max}")
        };
        return Err(Error::arity_mismatch(form, expected, operands.len()).with_span(span));
    }
    Ok(())
}

/// Checks an exact operand count.
pub fn expect_exact_arity(form: &str, operands: &[Node], span: Span, count: usize) -> Result<()> {
    expect_arity(form, operands, span, count, count)
}

/// Returns true if the type may govern a condition. The language defines no
/// implicit boolean coercion, so only `bool` qualifies.
#[must_use]
pub fn is_condition_type(ty: &TypeDesc) -> bool {
    ty.is_bool()
}

/// Checks that a compiled condition is boolean.
pub fn expect_bool_condition(result: &ParseResult, span: Span) -> Result<ValueId> {
    if !is_condition_type(&result.ty) {
        return Err(Error::condition_not_boolean(result.ty.clone()).with_span(span));
    }
    result.value_id()
}

/// Checks that an operand is pointer-typed and returns its pointee.
pub fn expect_pointer<'a>(
    ty: &'a TypeDesc,
    form: &str,
    position: usize,
    span: Span,
) -> Result<&'a TypeDesc> {
    ty.pointee()
        .ok_or_else(|| Error::not_a_pointer(form, position, ty.clone()).with_span(span))
}

/// Checks two types for structural equality.
pub fn expect_same_type(expected: &TypeDesc, actual: &TypeDesc, span: Span) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::type_mismatch(expected.clone(), actual.clone()).with_span(span))
    }
}
