//! Register File.
//!
//! This module provides the `RegisterFile` struct holding the sixteen 16-bit
//! general-purpose registers. It provides:
//! 1. **Reset State:** Register 1 holds 1 after reset; all others hold 0.
//! 2. **Access:** Indexed reads and writes; indices wrap to the 4-bit register space.
//! 3. **Observability:** Dumping register state for debug output.

use serde::Serialize;

use super::constants::{REG_COUNT, RESET_REG, RESET_REG_VALUE};

/// Sixteen 16-bit general-purpose registers.
///
/// Only the Writeback stage writes registers; decode stages read them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterFile {
    regs: [u16; REG_COUNT],
}

impl RegisterFile {
    /// Creates a register file in the reset state.
    ///
    /// # Returns
    ///
    /// A `RegisterFile` with register 1 set to 1 and the rest zero.
    pub fn new() -> Self {
        let mut regs = [0; REG_COUNT];
        regs[RESET_REG] = RESET_REG_VALUE;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15). Larger indices wrap.
    ///
    /// # Returns
    ///
    /// The 16-bit value stored in the register.
    #[inline]
    pub const fn read(&self, idx: usize) -> u16 {
        self.regs[idx % REG_COUNT]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15). Larger indices wrap.
    /// * `val` - The 16-bit value to write.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u16) {
        self.regs[idx % REG_COUNT] = val;
    }

    /// Returns all register values in index order.
    pub const fn values(&self) -> &[u16; REG_COUNT] {
        &self.regs
    }

    /// Dumps all registers to stdout, four per row.
    pub fn dump(&self) {
        for (i, vals) in self.regs.chunks(4).enumerate() {
            let cells: Vec<String> = vals
                .iter()
                .enumerate()
                .map(|(j, v)| format!("r{:<2}={:>5}", i * 4 + j, v))
                .collect();
            println!("{}", cells.join("  "));
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
