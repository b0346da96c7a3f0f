//! The value handed back from compiling any expression.

use tarn_cfg::{BlockId, ValueId};
use tarn_foundation::{Error, Result, TypeDesc};

/// The result of compiling one expression.
///
/// Produced fresh by every successful handler invocation and consumed
/// immediately by the caller; never mutated after construction.
///
/// When `is_address` is true, `value` holds the *address* of storage whose
/// logical type is `ty`; consumers load from it when they need the value.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseResult {
    /// The computed value; None encodes a void result.
    pub value: Option<ValueId>,
    /// The static type of the expression.
    pub ty: TypeDesc,
    /// Whether the value denotes a storage location.
    pub is_address: bool,
    /// The block in which control resides after this expression.
    pub block: BlockId,
}

impl ParseResult {
    /// Creates a new parse result.
    #[must_use]
    pub const fn new(value: Option<ValueId>, ty: TypeDesc, is_address: bool, block: BlockId) -> Self {
        Self {
            value,
            ty,
            is_address,
            block,
        }
    }

    /// Creates a void result in the given block.
    #[must_use]
    pub const fn void(block: BlockId) -> Self {
        Self {
            value: None,
            ty: TypeDesc::Void,
            is_address: false,
            block,
        }
    }

    /// Returns true if this result is void.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        self.ty.is_void()
    }

    /// Returns the value, or an internal error for a void result.
    ///
    /// Handlers call this only after checking the result's type; a missing
    /// value at that point is a compiler bug, not a user error.
    pub fn value_id(&self) -> Result<ValueId> {
        self.value
            .ok_or_else(|| Error::internal("expression produced no value"))
    }
}
