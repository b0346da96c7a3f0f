//! Error types for the Tarn compiler core.
//!
//! Uses `thiserror` for ergonomic error definition. Every error carries an
//! optional source span so diagnostics can point back at the offending form.

use thiserror::Error;

use crate::span::Span;
use crate::types::TypeDesc;

/// Convenience result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Tarn compilation.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// The source location the error is attributed to, if known.
    pub span: Option<Span>,
}

impl Error {
    /// Creates a new error with the given kind and no span.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, span: None }
    }

    /// Attaches a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(form: impl Into<String>, expected: impl Into<String>, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch {
            form: form.into(),
            expected: expected.into(),
            actual,
        })
    }

    /// Creates an unrecognized form error.
    #[must_use]
    pub fn unrecognized_form(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnrecognizedForm(name.into()))
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: TypeDesc, actual: TypeDesc) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates a non-pointer operand error.
    #[must_use]
    pub fn not_a_pointer(form: impl Into<String>, position: usize, actual: TypeDesc) -> Self {
        Self::new(ErrorKind::NotAPointer {
            form: form.into(),
            position,
            actual,
        })
    }

    /// Creates a non-boolean condition error.
    #[must_use]
    pub fn condition_not_boolean(actual: TypeDesc) -> Self {
        Self::new(ErrorKind::ConditionNotBoolean { actual })
    }

    /// Creates a malformed node error.
    #[must_use]
    pub fn malformed_node(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedNode {
            expected: expected.into(),
            actual: actual.into(),
        })
    }

    /// Creates an undefined symbol error.
    #[must_use]
    pub fn undefined_symbol(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedSymbol(name.into()))
    }

    /// Creates a non-addressable expression error.
    #[must_use]
    pub fn not_addressable(form: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotAddressable {
            form: form.into(),
        })
    }

    /// Creates a reader error.
    #[must_use]
    pub fn read_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ReadError(message.into()))
    }

    /// Creates an internal error (a compiler bug, not a user error).
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ErrorKind {
    /// Wrong number of operands to a form.
    #[error("arity mismatch: {form} expects {expected} operands, got {actual}")]
    ArityMismatch {
        /// The form name.
        form: String,
        /// Description of the expected operand count.
        expected: String,
        /// Actual number of operands.
        actual: usize,
    },

    /// The head symbol names neither a form nor a known function.
    #[error("unrecognized form: {0}")]
    UnrecognizedForm(String),

    /// General operand or branch type error.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: TypeDesc,
        /// The actual type encountered.
        actual: TypeDesc,
    },

    /// A pointer-typed operand was required.
    #[error("operand {position} of {form} is not a pointer (got {actual})")]
    NotAPointer {
        /// The form name.
        form: String,
        /// 1-based operand position.
        position: usize,
        /// The actual type encountered.
        actual: TypeDesc,
    },

    /// A condition expression was not boolean.
    #[error("condition is not boolean (got {actual})")]
    ConditionNotBoolean {
        /// The actual type of the condition.
        actual: TypeDesc,
    },

    /// A node had the wrong shape for its position.
    #[error("malformed node: expected {expected}, got {actual}")]
    MalformedNode {
        /// Description of the expected shape.
        expected: String,
        /// Description of what was found.
        actual: String,
    },

    /// A symbol resolved to nothing in scope.
    #[error("undefined symbol: {0}")]
    UndefinedSymbol(String),

    /// An expression that denotes no storage location was used as a place.
    #[error("{form}: expression does not denote a storage location")]
    NotAddressable {
        /// The form that needed an address.
        form: String,
    },

    /// The reader could not build a syntax tree.
    #[error("read error: {0}")]
    ReadError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
