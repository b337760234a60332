//! Simulator: owns the CPU together with its run configuration.
//!
//! Front ends drive a `Simulator` rather than a bare `Cpu` so the cycle budget
//! and dump size travel with the machine they apply to.

use std::path::Path;

use crate::common::error::LoadError;
use crate::config::{Config, RunConfig};
use crate::core::Cpu;
use crate::core::cpu::snapshot::CpuSnapshot;
use crate::sim::loader;
use crate::stats::SimStats;

/// Top-level simulator: CPU state plus run settings.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural and pipeline state.
    pub cpu: Cpu,
    run: RunConfig,
}

impl Simulator {
    /// Creates a simulator with an empty program.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            run: config.run.clone(),
        }
    }

    /// Creates a simulator and loads program text.
    pub fn from_program(text: &str, config: &Config) -> Result<Self, LoadError> {
        let mut sim = Self::new(config);
        let _ = loader::load_program(&mut sim.cpu, text)?;
        Ok(sim)
    }

    /// Creates a simulator and loads a program file.
    pub fn from_file(path: impl AsRef<Path>, config: &Config) -> Result<Self, LoadError> {
        let mut sim = Self::new(config);
        let _ = loader::load_program_file(&mut sim.cpu, path)?;
        Ok(sim)
    }

    /// Advances the simulator by one clock cycle.
    pub fn tick(&mut self) {
        self.cpu.tick();
    }

    /// Runs `cycles` clock cycles.
    pub fn step(&mut self, cycles: u64) {
        self.cpu.run(cycles);
    }

    /// Runs the configured cycle budget.
    ///
    /// # Returns
    ///
    /// Statistics after the run.
    pub fn run(&mut self) -> &SimStats {
        self.cpu.run(self.run.max_cycles);
        &self.cpu.stats
    }

    /// Returns the configured leading window of data memory.
    pub fn memory_dump(&self) -> &[u16] {
        self.cpu.mem.window(self.run.dump_words)
    }

    /// Captures the CPU state with the configured memory window.
    pub fn snapshot(&self) -> CpuSnapshot {
        self.cpu.snapshot(self.run.dump_words)
    }
}
