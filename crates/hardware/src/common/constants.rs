//! Machine constants for the PW-700.
//!
//! Dimensions of the architectural state and defaults used by the cycle driver
//! and the command-line front end.

/// Number of general-purpose registers.
pub const REG_COUNT: usize = 16;

/// Register that holds a non-zero value after reset.
pub const RESET_REG: usize = 1;

/// Value of [`RESET_REG`] after reset.
pub const RESET_REG_VALUE: u16 = 1;

/// Data memory size in 16-bit words.
pub const DATA_MEM_WORDS: usize = 1024;

/// Command memory size in instruction words.
pub const CMD_MEM_WORDS: usize = 1024;

/// Mask reducing a 16-bit value to the 10-bit address space.
pub const ADDR_MASK: u16 = 0x3FF;

/// Width of an encoded instruction in the program text format.
pub const INSTRUCTION_WIDTH: usize = 24;

/// Number of pipeline slots (Fetch, Decode1, Decode2, Execute, Writeback).
pub const PIPELINE_DEPTH: usize = 5;

/// Cycles executed by a bulk run when no budget is configured.
pub const DEFAULT_MAX_CYCLES: u64 = 1024;

/// Data memory words printed after a bulk run.
pub const DEFAULT_DUMP_WORDS: usize = 10;
