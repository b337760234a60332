//! Serializable CPU state.
//!
//! Read-only views for the debug shell and JSON output: PC, registers, a
//! window of data memory, the next instruction, and all five pipeline slots.

use serde::Serialize;

use super::Cpu;
use crate::common::constants::{PIPELINE_DEPTH, REG_COUNT};
use crate::core::pipeline::signals::Stage;
use crate::isa::Word;
use crate::isa::disasm::disassemble;
use crate::stats::SimStats;

/// One pipeline slot as shown to a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlotView {
    /// Short stage name.
    pub stage: &'static str,
    /// Address the instruction came from; absent for a bubble.
    pub pc: Option<u16>,
    /// Raw instruction word.
    pub word: Word,
    /// Disassembly, or `--` for a bubble.
    pub text: String,
    /// ALU scratch: first operand.
    pub op1: u16,
    /// ALU scratch: second operand.
    pub op2: u16,
    /// ALU scratch: result.
    pub res: u16,
}

/// Point-in-time view of the whole CPU.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CpuSnapshot {
    /// Cycles executed so far.
    pub cycle: u64,
    /// Program counter.
    pub pc: u16,
    /// Disassembly of the word at the PC.
    pub current: String,
    /// Register values.
    pub registers: [u16; REG_COUNT],
    /// Leading window of data memory.
    pub memory: Vec<u16>,
    /// Pipeline slots, Fetch first.
    pub pipeline: [SlotView; PIPELINE_DEPTH],
    /// Statistics so far.
    pub stats: SimStats,
}

impl Cpu {
    /// Captures the current state.
    ///
    /// # Arguments
    ///
    /// * `mem_words` - Number of leading data memory words to include.
    pub fn snapshot(&self, mem_words: usize) -> CpuSnapshot {
        CpuSnapshot {
            cycle: self.stats.cycles,
            pc: self.pc,
            current: disassemble(self.current_command()),
            registers: *self.regs.values(),
            memory: self.mem.window(mem_words).to_vec(),
            pipeline: Stage::ALL.map(|stage| {
                let slot = self.pipeline.slot(stage);
                SlotView {
                    stage: stage.name(),
                    pc: slot.pc,
                    word: slot.word,
                    text: self.slot_text(stage),
                    op1: slot.alu.op1,
                    op2: slot.alu.op2,
                    res: slot.alu.res,
                }
            }),
            stats: self.stats.clone(),
        }
    }
}
