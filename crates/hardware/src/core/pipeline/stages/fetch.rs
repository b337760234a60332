//! Instruction Fetch (IF) Stage.
//!
//! Reads the word at the current program counter. Addresses past the end of
//! command memory read as NOP. The fetch stage never changes the PC; the
//! Writeback stage advances or redirects it.

use crate::core::Cpu;
use crate::core::pipeline::latches::Slot;

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `cpu` - CPU state; only the PC and command memory are read.
///
/// # Returns
///
/// A slot holding the fetched word, tagged with its address, with cleared ALU scratch.
pub fn fetch_stage(cpu: &Cpu) -> Slot {
    let word = cpu.cmd_mem.fetch(cpu.pc);
    if cpu.trace {
        eprintln!("IF  pc={:<4} word={:06x}", cpu.pc, word);
    }
    Slot::fetched(cpu.pc, word)
}
