//! The global type registry.
//!
//! Maps type names to [`TypeDesc`] descriptors. The registry is populated
//! once during startup and then shared immutably across compilation; form
//! handlers only borrow from it and never mutate it.

use std::collections::HashMap;

use crate::types::TypeDesc;

/// Name-to-descriptor registry for the language's types.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    types: HashMap<String, TypeDesc>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Creates a registry with the core language types registered.
    #[must_use]
    pub fn with_core_types() -> Self {
        let mut registry = Self::new();
        registry.register("void", TypeDesc::Void);
        registry.register("bool", TypeDesc::Bool);
        registry.register("int", TypeDesc::int());
        registry.register("float", TypeDesc::Primitive("float".to_string()));
        registry.register("char", TypeDesc::char());
        registry
    }

    /// Registers a type under the given name.
    ///
    /// Registration happens during startup only; once compilation begins the
    /// registry is shared by reference and must not change.
    pub fn register(&mut self, name: impl Into<String>, ty: TypeDesc) {
        self.types.insert(name.into(), ty);
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&TypeDesc> {
        self.types.get(name)
    }

    /// Returns true if a type with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
