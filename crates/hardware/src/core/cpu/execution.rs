//! Main Execution Loop.
//!
//! This module implements the PW-700 clock cycle. Each cycle performs:
//! 1. **PC Retraction:** After a stall the PC steps back so the discarded fetch repeats.
//! 2. **Fetch and Shift:** The word at the PC is fetched and the pipeline shifts
//!    with the pattern chosen by the previous cycle.
//! 3. **Stage Evaluation:** Writeback, Execute, Decode2, Decode1, in that order, so
//!    commits and freshly computed results are visible to the decode stages.
//! 4. **Accounting:** Cycle and stall statistics, tracing, and the pipeline diagram.

use super::Cpu;
use crate::core::pipeline::signals::{PipelineControl, Stage};
use crate::core::pipeline::stages::{
    decode1_stage, decode2_stage, execute_stage, fetch_stage, wb_stage,
};
use crate::isa::disasm::disassemble;

impl Cpu {
    /// Advances the CPU by one clock cycle.
    pub fn tick(&mut self) {
        if self.pipeline.pending().is_stall() {
            self.pc = self.pc.wrapping_sub(1);
        }
        let fetched = fetch_stage(self);
        self.pipeline.advance(fetched);

        wb_stage(self);
        execute_stage(self);
        decode2_stage(self);
        decode1_stage(self);

        self.stats.cycles += 1;
        let decision = self.pipeline.pending();
        match decision {
            PipelineControl::StallAtDecode2 => self.stats.stalls_decode2 += 1,
            PipelineControl::StallAtExecute => self.stats.stalls_execute += 1,
            PipelineControl::Advance | PipelineControl::Squash => {}
        }
        tracing::debug!(cycle = self.stats.cycles, pc = self.pc, ?decision, "cycle");

        if self.trace {
            self.print_pipeline_diagram();
        }
    }

    /// Runs `cycles` clock cycles.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.tick();
        }
    }

    /// Runs until `done` holds or `max_cycles` have elapsed.
    ///
    /// # Returns
    ///
    /// The number of cycles executed by this call.
    pub fn run_until<F>(&mut self, max_cycles: u64, mut done: F) -> u64
    where
        F: FnMut(&Self) -> bool,
    {
        let mut ran = 0;
        while ran < max_cycles && !done(self) {
            self.tick();
            ran += 1;
        }
        ran
    }

    /// Returns the text shown for the slot at `stage`.
    pub fn slot_text(&self, stage: Stage) -> String {
        let slot = self.pipeline.slot(stage);
        if slot.is_bubble() {
            "--".to_string()
        } else {
            disassemble(slot.word)
        }
    }

    /// Prints a diagram of the current pipeline state to stderr.
    pub fn print_pipeline_diagram(&self) {
        let cells: Vec<String> = Stage::ALL
            .iter()
            .map(|&stage| format!("{} {:<16}", stage.name(), self.slot_text(stage)))
            .collect();
        eprintln!(
            "[Pipeline] cycle={:<5} pc={:<4} next={:?} | {}",
            self.stats.cycles,
            self.pc,
            self.pipeline.pending(),
            cells.join(" | ")
        );
    }
}
