//! Core processor implementation.
//!
//! This module contains the CPU state, the five-slot instruction pipeline with
//! its hazard unit, and the execution units used by the Execute stage.

/// CPU core implementation and cycle orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
