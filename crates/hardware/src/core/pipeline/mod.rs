//! Instruction pipeline implementation.
//!
//! This module contains the five-slot PW-700 pipeline. It includes the
//! following components:
//! 1. **Hazards:** Detection of read-after-write dependencies, forwarding, and stalls.
//! 2. **Latches:** The slot array with its per-slot ALU scratch and the shift patterns.
//! 3. **Signals:** Stage identifiers, ALU operations, and the per-cycle control decision.
//! 4. **Stages:** Fetch, Decode1, Decode2, Execute, and Writeback.

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Pipeline slots and the advance/stall/squash shift patterns.
pub mod latches;

/// Stage identifiers and control signals.
pub mod signals;

/// Pipeline stage implementations.
pub mod stages;

pub use latches::{AluScratch, Pipeline, Slot};
pub use signals::{PipelineControl, Stage};
