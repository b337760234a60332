//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of
//! the PW-700 pipeline. It includes:
//! 1. **Fetch:** Reads the word at the PC from command memory.
//! 2. **Decode:** Loads Op1 (Decode1) and Op2 or the MTR memory operand (Decode2).
//! 3. **Execute:** Computes Res in the ALU.
//! 4. **Writeback:** Commits Res to registers or memory and steers the PC.
//!
//! The cycle driver runs Writeback, Execute, Decode2, Decode1 in that order.

/// Instruction decode stages implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Writeback stage implementation.
pub mod writeback;

/// Decode1 stage entry point (D1 stage).
pub use decode::decode1_stage;
/// Decode2 stage entry point (D2 stage).
pub use decode::decode2_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
