//! Per-function compilation state.
//!
//! A `FunctionContext` owns the function's control-flow graph, its lexical
//! scope stack, and the current-block cursor. It is exclusively owned by the
//! single thread compiling that function.

use im::HashMap;
use tarn_cfg::{BlockId, FunctionCfg, ValueId};
use tarn_foundation::TypeDesc;

/// A local variable binding: its type and the address of its stack slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    /// The variable's static type.
    pub ty: TypeDesc,
    /// Address of the variable's storage.
    pub storage: ValueId,
}

/// Per-function compilation state.
#[derive(Clone, Debug)]
pub struct FunctionContext {
    name: String,
    params: Vec<(String, TypeDesc)>,
    ret: TypeDesc,
    cfg: FunctionCfg,
    /// Scope stack. Each entry is the full visible map at that depth, so
    /// pushing clones the top (cheap with `im`) and popping restores the
    /// outer view, shadowing included.
    scopes: Vec<HashMap<String, Binding>>,
    current: BlockId,
}

impl FunctionContext {
    /// Creates a context for a function, binding each parameter to a fresh
    /// addressable stack slot in the entry block.
    #[must_use]
    pub fn new(name: impl Into<String>, params: Vec<(String, TypeDesc)>, ret: TypeDesc) -> Self {
        let mut cfg = FunctionCfg::new();
        let entry = cfg.entry();
        let mut scope = HashMap::new();
        for (index, (param_name, ty)) in params.iter().enumerate() {
            let arg = cfg.emit_arg(entry, index);
            let slot = cfg.emit_alloc(entry);
            cfg.emit_store(entry, slot, arg);
            scope.insert(
                param_name.clone(),
                Binding {
                    ty: ty.clone(),
                    storage: slot,
                },
            );
        }
        Self {
            name: name.into(),
            params,
            ret,
            cfg,
            scopes: vec![scope],
            current: entry,
        }
    }

    /// The function's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The function's parameters.
    #[must_use]
    pub fn params(&self) -> &[(String, TypeDesc)] {
        &self.params
    }

    /// The function's declared return type.
    #[must_use]
    pub fn return_type(&self) -> &TypeDesc {
        &self.ret
    }

    /// The function's control-flow graph.
    #[must_use]
    pub fn cfg(&self) -> &FunctionCfg {
        &self.cfg
    }

    /// Mutable access to the control-flow graph.
    pub fn cfg_mut(&mut self) -> &mut FunctionCfg {
        &mut self.cfg
    }

    /// Consumes the context, returning the built graph.
    #[must_use]
    pub fn into_cfg(self) -> FunctionCfg {
        self.cfg
    }

    /// The block the cursor currently points at.
    #[must_use]
    pub fn current_block(&self) -> BlockId {
        self.current
    }

    /// Moves the cursor to a new block.
    pub fn set_current_block(&mut self, block: BlockId) {
        self.current = block;
    }

    /// Enters a new lexical scope.
    pub fn push_scope(&mut self) {
        let top = self.scopes.last().cloned().unwrap_or_default();
        self.scopes.push(top);
    }

    /// Leaves the innermost lexical scope.
    ///
    /// # Panics
    /// Panics if called with only the parameter scope remaining.
    pub fn pop_scope(&mut self) {
        assert!(self.scopes.len() > 1, "pop of the parameter scope");
        self.scopes.pop();
    }

    /// Defines a local in the innermost scope, shadowing any outer binding.
    pub fn define(&mut self, name: impl Into<String>, binding: Binding) {
        if let Some(top) = self.scopes.last_mut() {
            top.insert(name.into(), binding);
        }
    }

    /// Looks up a local by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.scopes.last().and_then(|scope| scope.get(name))
    }
}
