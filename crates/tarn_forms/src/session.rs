//! The compilation session handed to every form handler.

use tarn_foundation::{DiagnosticSink, TypeRegistry};

use crate::dispatch::FormRegistry;
use crate::symbols::SymbolResolver;

/// Shared compilation state: the read-only registries plus the diagnostic
/// sink.
///
/// The type and form registries are populated before compilation begins and
/// are only ever borrowed afterwards, so independent units can compile on
/// separate threads against the same registries.
pub struct Session<'a> {
    /// The global type registry.
    pub types: &'a TypeRegistry,
    /// The form handler registry.
    pub forms: &'a FormRegistry,
    /// The external symbol-resolution collaborator.
    pub symbols: &'a dyn SymbolResolver,
    /// Collected diagnostics for this unit.
    pub diagnostics: DiagnosticSink,
}

impl<'a> Session<'a> {
    /// Creates a session over the given registries.
    #[must_use]
    pub fn new(
        types: &'a TypeRegistry,
        forms: &'a FormRegistry,
        symbols: &'a dyn SymbolResolver,
    ) -> Self {
        Self {
            types,
            forms,
            symbols,
            diagnostics: DiagnosticSink::new(),
        }
    }
}
