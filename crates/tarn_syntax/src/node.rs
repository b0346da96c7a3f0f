//! The syntax tree consumed by form compilation.
//!
//! A [`Node`] is either an atom (symbol or literal) or a list of child
//! nodes. Nodes are immutable once produced by the reader and are shared by
//! reference throughout the compilation of a unit.

use tarn_foundation::Span;

/// A syntax tree node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A symbol such as `if` or `my-var`.
    Symbol(String, Span),
    /// An integer literal such as `42`.
    Int(i64, Span),
    /// A boolean literal, `true` or `false`.
    Bool(bool, Span),
    /// A string literal such as `"hello"`.
    Str(String, Span),
    /// A list form such as `(ptr-equals a b)`.
    List(Vec<Node>, Span),
}

impl Node {
    /// Returns the source span of this node.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Symbol(_, s)
            | Self::Int(_, s)
            | Self::Bool(_, s)
            | Self::Str(_, s)
            | Self::List(_, s) => *s,
        }
    }

    /// Returns true if this is a symbol atom.
    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_, _))
    }

    /// Returns true if this is a list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_, _))
    }

    /// Returns true if this is any atom (non-list) node.
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        !self.is_list()
    }

    /// Returns the symbol name, or None if not a symbol.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name, _) => Some(name),
            _ => None,
        }
    }

    /// Returns the integer value, or None if not an integer literal.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n, _) => Some(*n),
            _ => None,
        }
    }

    /// Returns the child nodes of a list, or None if not a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Self::List(children, _) => Some(children),
            _ => None,
        }
    }

    /// A human-readable shape name for this node, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Symbol(_, _) => "symbol",
            Self::Int(_, _) => "integer literal",
            Self::Bool(_, _) => "boolean literal",
            Self::Str(_, _) => "string literal",
            Self::List(_, _) => "list",
        }
    }
}

/// Helper constructors with default spans (for tests).
impl Node {
    /// Creates a symbol node with a default span.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into(), Span::default())
    }

    /// Creates an integer node with a default span.
    #[must_use]
    pub fn int(n: i64) -> Self {
        Self::Int(n, Span::default())
    }

    /// Creates a boolean node with a default span.
    #[must_use]
    pub fn bool_lit(b: bool) -> Self {
        Self::Bool(b, Span::default())
    }

    /// Creates a string node with a default span.
    #[must_use]
    pub fn string(s: impl Into<String>) -> Self {
        Self::Str(s.into(), Span::default())
    }

    /// Creates a list node with a default span.
    #[must_use]
    pub fn list(children: Vec<Node>) -> Self {
        Self::List(children, Span::default())
    }

    /// Creates a form `(head children...)` with default spans.
    #[must_use]
    pub fn form(head: impl Into<String>, mut operands: Vec<Node>) -> Self {
        let mut children = vec![Self::symbol(head)];
        children.append(&mut operands);
        Self::list(children)
    }
}
