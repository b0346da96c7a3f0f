//! Type annotation parsing.
//!
//! Turns a type-annotation node such as `int` or `(ptr (ptr char))` into a
//! [`TypeDesc`], resolving names through the type registry.

use tarn_foundation::{Error, Result, TypeDesc, TypeRegistry};
use tarn_syntax::Node;

/// Parses a type-annotation node.
pub fn parse_type_node(node: &Node, types: &TypeRegistry) -> Result<TypeDesc> {
    match node {
        Node::Symbol(name, span) => types
            .lookup(name)
            .cloned()
            .ok_or_else(|| Error::undefined_symbol(name.clone()).with_span(*span)),
        Node::List(children, span) => {
            if children.len() == 2 && children[0].as_symbol() == Some("ptr") {
                let pointee = parse_type_node(&children[1], types)?;
                Ok(TypeDesc::pointer(pointee))
            } else {
                Err(
                    Error::malformed_node("a type annotation", "unrecognized type form")
                        .with_span(*span),
                )
            }
        }
        other => Err(
            Error::malformed_node("a type annotation", other.type_name()).with_span(other.span()),
        ),
    }
}
