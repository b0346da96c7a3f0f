//! The instruction set emitted by form compilation.
//!
//! Instructions name values by [`ValueId`] handles; the external backend is
//! responsible for turning them into target code. Nothing here encodes
//! machine instructions.

use crate::block::BlockId;

/// A handle naming a value produced by an instruction or function argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValueId(pub u32);

/// A constant operand.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstValue {
    /// An integer constant.
    Int(i64),
    /// A boolean constant.
    Bool(bool),
    /// A string constant (lowered by the backend to static data).
    Str(String),
    /// The null pointer.
    Null,
}

/// Pointer comparison operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PtrCmpOp {
    /// Address equality.
    Eq,
    /// Address strictly-less-than.
    Lt,
    /// Address strictly-greater-than.
    Gt,
}

/// A single non-terminator instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum Instr {
    /// Materialize a constant: `dest = value`.
    Const {
        /// Result value.
        dest: ValueId,
        /// The constant.
        value: ConstValue,
    },
    /// The function argument at `index`: `dest = arg[index]`.
    Arg {
        /// Result value.
        dest: ValueId,
        /// Zero-based argument index.
        index: usize,
    },
    /// Allocate a stack slot; `dest` holds its address.
    Alloc {
        /// Address of the new slot.
        dest: ValueId,
    },
    /// Load from an address: `dest = *addr`.
    Load {
        /// Result value.
        dest: ValueId,
        /// Address to load from.
        addr: ValueId,
    },
    /// Store to an address: `*addr = value`.
    Store {
        /// Address to store to.
        addr: ValueId,
        /// Value stored.
        value: ValueId,
    },
    /// Compare two pointers by address: `dest = lhs <op> rhs`.
    PtrCmp {
        /// Result value (boolean).
        dest: ValueId,
        /// The comparison operator.
        op: PtrCmpOp,
        /// Left operand.
        lhs: ValueId,
        /// Right operand.
        rhs: ValueId,
    },
    /// Offset a pointer by an element count: `dest = base ± offset`.
    PtrOffset {
        /// Result pointer.
        dest: ValueId,
        /// Base pointer.
        base: ValueId,
        /// Element count.
        offset: ValueId,
        /// True for subtraction.
        negate: bool,
    },
    /// Address of a struct field: `dest = &base.fields[index]`.
    FieldAddr {
        /// Result address.
        dest: ValueId,
        /// Address of the struct.
        base: ValueId,
        /// Zero-based field index.
        index: usize,
    },
    /// Reinterpret a value at a different type: `dest = cast value`.
    Cast {
        /// Result value.
        dest: ValueId,
        /// Value being cast.
        value: ValueId,
    },
    /// Merge two values by predecessor block: `dest` is `first.1` when
    /// control arrived from `first.0`, otherwise `second.1`.
    Select {
        /// Result value.
        dest: ValueId,
        /// First (predecessor block, value) pair.
        first: (BlockId, ValueId),
        /// Second (predecessor block, value) pair.
        second: (BlockId, ValueId),
    },
    /// Call a function by name.
    Call {
        /// Result value; None for void-returning callees.
        dest: Option<ValueId>,
        /// Callee name.
        callee: String,
        /// Argument values, in order.
        args: Vec<ValueId>,
    },
    /// Address of a global variable: `dest = &global`.
    GlobalAddr {
        /// Result address.
        dest: ValueId,
        /// The global's name.
        name: String,
    },
}

impl Instr {
    /// Returns the value this instruction defines, if any.
    #[must_use]
    pub fn dest(&self) -> Option<ValueId> {
        match self {
            Self::Const { dest, .. }
            | Self::Arg { dest, .. }
            | Self::Alloc { dest }
            | Self::Load { dest, .. }
            | Self::PtrCmp { dest, .. }
            | Self::PtrOffset { dest, .. }
            | Self::FieldAddr { dest, .. }
            | Self::Cast { dest, .. }
            | Self::Select { dest, .. }
            | Self::GlobalAddr { dest, .. } => Some(*dest),
            Self::Call { dest, .. } => *dest,
            Self::Store { .. } => None,
        }
    }
}
