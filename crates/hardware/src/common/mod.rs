//! Common utilities and types shared by every part of the PW-700 simulator.
//!
//! This module provides the building blocks used across the pipeline, the ISA
//! tooling, and the program loader. It includes:
//! 1. **Constants:** Machine dimensions (register count, memory sizes, pipeline depth).
//! 2. **Error Handling:** Typed errors for program loading, assembly, and configuration.
//! 3. **Register Management:** The sixteen-entry 16-bit register file.

/// Machine-wide constants.
pub mod constants;

/// Error types for loading, assembling, and configuring.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{ADDR_MASK, CMD_MEM_WORDS, DATA_MEM_WORDS, PIPELINE_DEPTH, REG_COUNT};
pub use error::{AsmError, ConfigError, LoadError};
pub use reg::RegisterFile;
