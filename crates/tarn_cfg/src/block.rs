//! Basic blocks and terminators.
//!
//! A basic block is a straight-line instruction sequence ending in exactly
//! one terminator. Appending past a terminator is a programming error in the
//! compiler itself, not a user-facing diagnostic, so it panics.

use crate::instr::{Instr, ValueId};

/// A handle naming a basic block within a function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockId(pub u32);

/// The single control-transfer instruction ending a block.
#[derive(Clone, Debug, PartialEq)]
pub enum Terminator {
    /// Unconditional branch.
    Branch(BlockId),
    /// Two-way branch on a boolean value.
    CondBranch {
        /// The boolean condition value.
        cond: ValueId,
        /// Target when the condition is true.
        then_to: BlockId,
        /// Target when the condition is false.
        else_to: BlockId,
    },
    /// Return from the function, with an optional value.
    Return(Option<ValueId>),
}

impl Terminator {
    /// The blocks this terminator can transfer control to.
    #[must_use]
    pub fn successors(&self) -> Vec<BlockId> {
        match self {
            Self::Branch(target) => vec![*target],
            Self::CondBranch {
                then_to, else_to, ..
            } => vec![*then_to, *else_to],
            Self::Return(_) => Vec::new(),
        }
    }
}

/// A basic block: ordered instructions plus at most one terminator.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicBlock {
    /// This block's handle.
    pub id: BlockId,
    /// Human-readable label for debugging output.
    pub label: String,
    /// The instructions, in append order.
    pub instrs: Vec<Instr>,
    /// The terminator, once appended.
    pub terminator: Option<Terminator>,
}

impl BasicBlock {
    /// Creates a new, empty, unterminated block.
    #[must_use]
    pub fn new(id: BlockId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            instrs: Vec::new(),
            terminator: None,
        }
    }

    /// Returns true if this block has a terminator.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.terminator.is_some()
    }

    /// Appends an instruction.
    ///
    /// # Panics
    /// Panics if the block is already terminated.
    pub fn push(&mut self, instr: Instr) {
        assert!(
            self.terminator.is_none(),
            "append to terminated block {:?}",
            self.id
        );
        self.instrs.push(instr);
    }

    /// Appends the terminator.
    ///
    /// # Panics
    /// Panics if the block is already terminated.
    pub fn terminate(&mut self, terminator: Terminator) {
        assert!(
            self.terminator.is_none(),
            "second terminator for block {:?}",
            self.id
        );
        self.terminator = Some(terminator);
    }
}
