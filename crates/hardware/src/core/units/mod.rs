//! Execution units and functional components.
//!
//! The PW-700 has a single functional unit: a 16-bit integer ALU used by the
//! Execute stage.

/// Arithmetic Logic Unit for 16-bit integer operations.
pub mod alu;
