//! PW-700 pipelined CPU simulator library.
//!
//! This crate implements a cycle-accurate simulator for the PW-700, a small
//! 16-bit machine with ten opcodes and a five-slot pipeline:
//! 1. **Core:** Pipeline (fetch, two decode stages, execute, writeback), hazard
//!    detection with forwarding and stalls, and squash on taken jumps.
//! 2. **ISA:** Field extraction, typed decoding, disassembly, and an assembler.
//! 3. **Simulation:** Program loader, configuration, snapshots, and statistics.

/// Common types and constants (registers, errors, machine dimensions).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (pipeline, execution units, cycle driver, memories).
pub mod core;
/// Instruction set (encoding, decode, disassembly, assembler).
pub mod isa;
/// Program loader and simulator driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memories, pipeline, and stats.
pub use crate::core::Cpu;
/// Top-level simulator driver; construct with `Simulator::from_file`.
pub use crate::sim::Simulator;
