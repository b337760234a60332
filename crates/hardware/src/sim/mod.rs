//! Simulation utilities and program loading.
//!
//! Provides the program loader for the 24-digit text format and the
//! `Simulator` wrapper that pairs a CPU with its run configuration.

/// Program text loader.
pub mod loader;

/// Top-level simulator driver.
pub mod simulator;

pub use simulator::Simulator;
