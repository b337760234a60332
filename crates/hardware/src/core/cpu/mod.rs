//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! processor state. It coordinates the following:
//! 1. **State Management:** Registers, data memory, command memory, and the program counter.
//! 2. **Pipeline Control:** The five slots and the pending control decision.
//! 3. **Observability:** Statistics, the retire trace, and the optional commit log.

/// Cycle driver and pipeline visualization.
pub mod execution;

/// Data and command memories.
pub mod memory;

/// Serializable views of the CPU state.
pub mod snapshot;

use serde::Serialize;

use crate::common::RegisterFile;
use crate::common::constants::{PIPELINE_DEPTH, REG_COUNT};
use crate::config::Config;
use crate::core::pipeline::latches::Pipeline;
use crate::isa::Word;
use crate::stats::SimStats;

use self::memory::{CommandMemory, DataMemory};

/// Maximum number of (pc, word) entries kept in the retire trace.
pub const PC_TRACE_MAX: usize = 32;

/// One committed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Commit {
    /// Cycle (1-based) in which the instruction left Writeback.
    pub cycle: u64,
    /// Command-memory address of the instruction.
    pub pc: u16,
    /// Instruction word.
    pub word: Word,
}

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Data memory.
    pub mem: DataMemory,
    /// Command memory.
    pub cmd_mem: CommandMemory,
    /// Program counter; the address fetched next cycle.
    pub pc: u16,
    /// Pipeline slots and pending decision.
    pub pipeline: Pipeline,

    /// Print per-stage activity and a pipeline diagram to stderr each cycle.
    pub trace: bool,
    /// Performance statistics.
    pub stats: SimStats,
    /// Ring buffer of (pc, word) for the last retired instructions.
    pub pc_trace: Vec<(u16, Word)>,
    /// Every committed instruction in order, when enabled in the configuration.
    pub commit_log: Option<Vec<Commit>>,
}

impl Cpu {
    /// Creates a CPU in the reset state.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration (tracing, start PC, commit log).
    ///
    /// # Returns
    ///
    /// A `Cpu` with register 1 set to 1, zeroed memories, and an empty pipeline.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            mem: DataMemory::new(),
            cmd_mem: CommandMemory::new(),
            pc: config.general.start_pc,
            pipeline: Pipeline::new(),
            trace: config.general.trace_instructions || cfg!(feature = "always-trace"),
            stats: SimStats::default(),
            pc_trace: Vec::with_capacity(PC_TRACE_MAX),
            commit_log: config.general.commit_log.then(Vec::new),
        }
    }

    /// Records a committed instruction.
    pub(crate) fn retire(&mut self, pc: u16, word: Word) {
        self.stats.instructions_retired += 1;
        if self.pc_trace.len() >= PC_TRACE_MAX {
            let _ = self.pc_trace.remove(0);
        }
        self.pc_trace.push((pc, word));
        if let Some(log) = self.commit_log.as_mut() {
            log.push(Commit {
                cycle: self.stats.cycles + 1,
                pc,
                word,
            });
        }
    }

    /// Returns the data memory contents.
    pub fn memory(&self) -> &[u16] {
        self.mem.as_slice()
    }

    /// Returns the command memory contents.
    pub fn commands(&self) -> &[Word] {
        self.cmd_mem.as_slice()
    }

    /// Returns the register values.
    pub const fn registers(&self) -> &[u16; REG_COUNT] {
        self.regs.values()
    }

    /// Returns the program counter.
    pub const fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the word the next cycle will fetch.
    pub fn current_command(&self) -> Word {
        self.cmd_mem.fetch(self.pc)
    }

    /// Returns the raw words of the five pipeline slots, Fetch first.
    pub fn pipeline_words(&self) -> [Word; PIPELINE_DEPTH] {
        self.pipeline.words()
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
