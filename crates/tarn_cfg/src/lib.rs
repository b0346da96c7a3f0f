//! Control-flow graph of typed instructions built by Tarn form compilation.
//!
//! This crate provides:
//! - [`ValueId`] / [`Instr`] - Value handles and the instruction set
//! - [`BasicBlock`] / [`Terminator`] - Blocks with single-terminator enforcement
//! - [`FunctionCfg`] - The per-function graph builder and validator

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod block;
mod function;
mod instr;

pub use block::{BasicBlock, BlockId, Terminator};
pub use function::FunctionCfg;
pub use instr::{ConstValue, Instr, PtrCmpOp, ValueId};
