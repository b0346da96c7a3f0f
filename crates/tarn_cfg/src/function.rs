//! The per-function control-flow graph builder.
//!
//! `FunctionCfg` owns the function's blocks, allocates value handles, and
//! offers the emit surface the form handlers compile against: create-block,
//! append-instruction, append-terminator, and the select-by-predecessor
//! merge primitive.

use tarn_foundation::{Error, Result};

use crate::block::{BasicBlock, BlockId, Terminator};
use crate::instr::{ConstValue, Instr, PtrCmpOp, ValueId};

/// An ordered set of basic blocks with a single entry.
#[derive(Clone, Debug)]
pub struct FunctionCfg {
    blocks: Vec<BasicBlock>,
    entry: BlockId,
    next_value: u32,
}

impl Default for FunctionCfg {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionCfg {
    /// Creates a new graph with an empty entry block.
    #[must_use]
    pub fn new() -> Self {
        let mut cfg = Self {
            blocks: Vec::new(),
            entry: BlockId(0),
            next_value: 0,
        };
        cfg.entry = cfg.create_block("entry");
        cfg
    }

    /// The entry block.
    #[must_use]
    pub const fn entry(&self) -> BlockId {
        self.entry
    }

    /// Creates a new, unterminated block and returns its handle.
    pub fn create_block(&mut self, label: impl Into<String>) -> BlockId {
        let id = BlockId(u32::try_from(self.blocks.len()).unwrap_or(u32::MAX));
        self.blocks.push(BasicBlock::new(id, label));
        id
    }

    /// Returns the block with the given handle.
    ///
    /// # Panics
    /// Panics if the handle does not name a block of this function.
    #[must_use]
    pub fn block(&self, id: BlockId) -> &BasicBlock {
        &self.blocks[id.0 as usize]
    }

    fn block_mut(&mut self, id: BlockId) -> &mut BasicBlock {
        &mut self.blocks[id.0 as usize]
    }

    /// The number of blocks in this function.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Iterates over all blocks in creation order.
    pub fn blocks(&self) -> impl Iterator<Item = &BasicBlock> {
        self.blocks.iter()
    }

    /// Allocates a fresh value handle.
    pub fn fresh_value(&mut self) -> ValueId {
        let id = ValueId(self.next_value);
        self.next_value += 1;
        id
    }

    /// Returns true if the given block has a terminator.
    #[must_use]
    pub fn is_terminated(&self, id: BlockId) -> bool {
        self.block(id).is_terminated()
    }

    /// Appends a terminator to the given block.
    ///
    /// # Panics
    /// Panics if the block is already terminated.
    pub fn terminate(&mut self, id: BlockId, terminator: Terminator) {
        self.block_mut(id).terminate(terminator);
    }

    /// Emits a constant.
    pub fn emit_const(&mut self, block: BlockId, value: ConstValue) -> ValueId {
        let dest = self.fresh_value();
        self.block_mut(block).push(Instr::Const { dest, value });
        dest
    }

    /// Emits a function-argument reference.
    pub fn emit_arg(&mut self, block: BlockId, index: usize) -> ValueId {
        let dest = self.fresh_value();
        self.block_mut(block).push(Instr::Arg { dest, index });
        dest
    }

    /// Emits a stack-slot allocation; the result holds the slot's address.
    pub fn emit_alloc(&mut self, block: BlockId) -> ValueId {
        let dest = self.fresh_value();
        self.block_mut(block).push(Instr::Alloc { dest });
        dest
    }

    /// Emits a load from an address.
    pub fn emit_load(&mut self, block: BlockId, addr: ValueId) -> ValueId {
        let dest = self.fresh_value();
        self.block_mut(block).push(Instr::Load { dest, addr });
        dest
    }

    /// Emits a store to an address.
    pub fn emit_store(&mut self, block: BlockId, addr: ValueId, value: ValueId) {
        self.block_mut(block).push(Instr::Store { addr, value });
    }

    /// Emits a pointer comparison.
    pub fn emit_ptr_cmp(
        &mut self,
        block: BlockId,
        op: PtrCmpOp,
        lhs: ValueId,
        rhs: ValueId,
    ) -> ValueId {
        let dest = self.fresh_value();
        self.block_mut(block).push(Instr::PtrCmp { dest, op, lhs, rhs });
        dest
    }

    /// Emits a pointer offset.
    pub fn emit_ptr_offset(
        &mut self,
        block: BlockId,
        base: ValueId,
        offset: ValueId,
        negate: bool,
    ) -> ValueId {
        let dest = self.fresh_value();
        self.block_mut(block).push(Instr::PtrOffset {
            dest,
            base,
            offset,
            negate,
        });
        dest
    }

    /// Emits a struct field address computation.
    pub fn emit_field_addr(&mut self, block: BlockId, base: ValueId, index: usize) -> ValueId {
        let dest = self.fresh_value();
        self.block_mut(block).push(Instr::FieldAddr { dest, base, index });
        dest
    }

    /// Emits a cast.
    pub fn emit_cast(&mut self, block: BlockId, value: ValueId) -> ValueId {
        let dest = self.fresh_value();
        self.block_mut(block).push(Instr::Cast { dest, value });
        dest
    }

    /// Emits the select-by-predecessor merge primitive.
    pub fn emit_select(
        &mut self,
        block: BlockId,
        first: (BlockId, ValueId),
        second: (BlockId, ValueId),
    ) -> ValueId {
        let dest = self.fresh_value();
        self.block_mut(block).push(Instr::Select {
            dest,
            first,
            second,
        });
        dest
    }

    /// Emits a call; returns the result value unless the callee is void.
    pub fn emit_call(
        &mut self,
        block: BlockId,
        callee: impl Into<String>,
        args: Vec<ValueId>,
        has_result: bool,
    ) -> Option<ValueId> {
        let dest = has_result.then(|| self.fresh_value());
        self.block_mut(block).push(Instr::Call {
            dest,
            callee: callee.into(),
            args,
        });
        dest
    }

    /// Emits a global-address reference.
    pub fn emit_global_addr(&mut self, block: BlockId, name: impl Into<String>) -> ValueId {
        let dest = self.fresh_value();
        self.block_mut(block).push(Instr::GlobalAddr {
            dest,
            name: name.into(),
        });
        dest
    }

    /// The blocks reachable from the entry block.
    #[must_use]
    pub fn reachable(&self) -> Vec<BlockId> {
        let mut seen = vec![false; self.blocks.len()];
        let mut order = Vec::new();
        let mut work = vec![self.entry];
        while let Some(id) = work.pop() {
            let idx = id.0 as usize;
            if seen[idx] {
                continue;
            }
            seen[idx] = true;
            order.push(id);
            if let Some(terminator) = &self.blocks[idx].terminator {
                work.extend(terminator.successors());
            }
        }
        order
    }

    /// Checks the completed-function invariant: every block reachable from
    /// the entry has a terminator.
    ///
    /// Unreachable blocks (for example, merge blocks after two returning
    /// branches) are permitted to be unterminated.
    pub fn validate(&self) -> Result<()> {
        for id in self.reachable() {
            let block = self.block(id);
            if !block.is_terminated() {
                return Err(Error::internal(format!(
                    "reachable block {} ({:?}) has no terminator",
                    block.label, id
                )));
            }
        }
        Ok(())
    }
}
