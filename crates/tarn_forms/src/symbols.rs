//! Symbol resolution for names the form registry does not recognize.
//!
//! This is the seam to the external symbol-resolution collaborator: it
//! distinguishes an unknown form from a reference to a known function or
//! global variable.

use std::collections::HashMap;

use tarn_foundation::TypeDesc;

/// What a name resolved to.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedSymbol {
    /// A callable function with the given signature.
    Function {
        /// Parameter types, in order.
        params: Vec<TypeDesc>,
        /// Return type.
        ret: TypeDesc,
    },
    /// A global variable of the given type.
    Variable {
        /// The variable's type.
        ty: TypeDesc,
    },
}

/// Resolves names that are neither registered forms nor locals.
pub trait SymbolResolver {
    /// Resolves a name, or returns None if it is unknown.
    fn resolve(&self, name: &str) -> Option<ResolvedSymbol>;
}

/// A simple table-backed resolver, populated at startup.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, ResolvedSymbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            symbols: HashMap::new(),
        }
    }

    /// Registers a function signature.
    pub fn define_function(
        &mut self,
        name: impl Into<String>,
        params: Vec<TypeDesc>,
        ret: TypeDesc,
    ) {
        self.symbols
            .insert(name.into(), ResolvedSymbol::Function { params, ret });
    }

    /// Registers a global variable.
    pub fn define_variable(&mut self, name: impl Into<String>, ty: TypeDesc) {
        self.symbols
            .insert(name.into(), ResolvedSymbol::Variable { ty });
    }
}

impl SymbolResolver for SymbolTable {
    fn resolve(&self, name: &str) -> Option<ResolvedSymbol> {
        self.symbols.get(name).cloned()
    }
}
