//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the PW-700 pipeline. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived metrics.
//! 2. **Stalls:** Cycles lost to Decode1 and Decode2 waiting on producers.
//! 3. **Forwarding:** Operands bypassed from Execute and Writeback.
//! 4. **Control Flow:** Taken and not-taken branches, squashes, and discarded instructions.

use serde::Serialize;

/// Simulation statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total cycles elapsed.
    pub cycles: u64,
    /// Instructions that left Writeback (bubbles excluded).
    pub instructions_retired: u64,

    /// Cycles in which Decode1 waited (bubble inserted into Decode2).
    pub stalls_decode2: u64,
    /// Cycles in which Decode2 waited (bubble inserted into Execute).
    pub stalls_execute: u64,

    /// Operands bypassed from the Execute slot.
    pub forwards_execute: u64,
    /// Operands bypassed from the Writeback slot.
    pub forwards_writeback: u64,

    /// JUMP_LESS and JMP instructions that redirected the PC.
    pub branches_taken: u64,
    /// JUMP_LESS instructions that fell through.
    pub branches_not_taken: u64,
    /// Pipeline squashes.
    pub squashes: u64,
    /// Wrong-path instructions discarded by squashes.
    pub squashed_instructions: u64,
}

impl SimStats {
    /// Returns the total stall cycles.
    pub const fn stall_cycles(&self) -> u64 {
        self.stalls_decode2 + self.stalls_execute
    }

    /// Returns cycles per retired instruction, or 0 before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("PW-700 SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_cpi                  {:.4}", self.cpi());
        println!("----------------------------------------------------------");
        println!("HAZARDS");
        println!("  stall.decode1          {}", self.stalls_decode2);
        println!("  stall.decode2          {}", self.stalls_execute);
        println!("  forward.execute        {}", self.forwards_execute);
        println!("  forward.writeback      {}", self.forwards_writeback);
        println!("----------------------------------------------------------");
        println!("CONTROL FLOW");
        println!("  branch.taken           {}", self.branches_taken);
        println!("  branch.not_taken       {}", self.branches_not_taken);
        println!("  squash.events          {}", self.squashes);
        println!("  squash.instructions    {}", self.squashed_instructions);
        println!("==========================================================");
    }
}
