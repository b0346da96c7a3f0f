//! The diagnostic sink.
//!
//! Compilation is best-effort across top-level forms: a failed form's error
//! is recorded here and the driver moves on to its siblings, so a single
//! pass can surface as many independent errors as possible.

use crate::error::Error;

/// An ordered collection of compilation errors.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticSink {
    errors: Vec<Error>,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Records an error.
    pub fn report(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Returns true if any error has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no errors have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the recorded errors in order.
    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        self.errors.iter()
    }

    /// Consumes the sink, returning the recorded errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}
