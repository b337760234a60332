//! Pipeline control signals.
//!
//! This module defines the values that steer the pipeline. It provides:
//! 1. **Stage Identification:** The five slots in program order.
//! 2. **Operation Classification:** The ALU operations the Execute stage performs.
//! 3. **Cycle Control:** The single decision value that selects next cycle's shift pattern.

use serde::Serialize;

use crate::common::constants::PIPELINE_DEPTH;

/// A pipeline slot, oldest last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Stage {
    /// Holds the word fetched this cycle.
    Fetch = 0,
    /// Loads the first operand.
    Decode1 = 1,
    /// Loads the second operand (or the memory operand of MTR).
    Decode2 = 2,
    /// Computes Res.
    Execute = 3,
    /// Commits architectural state.
    Writeback = 4,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Self; PIPELINE_DEPTH] = [
        Self::Fetch,
        Self::Decode1,
        Self::Decode2,
        Self::Execute,
        Self::Writeback,
    ];

    /// Returns the slot index of this stage.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the short name used in pipeline diagrams.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fetch => "IF",
            Self::Decode1 => "D1",
            Self::Decode2 => "D2",
            Self::Execute => "EX",
            Self::Writeback => "WB",
        }
    }

    /// Returns the stages after this one, nearest first.
    pub fn later(self) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().skip(self.index() + 1)
    }
}

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// `Res <- Op1`.
    #[default]
    Pass,

    /// `Res <- Op1 + Op2`.
    Add,

    /// `Res <- Op1 - Op2`.
    Sub,

    /// `Res <- (Op1 < Op2) as u16`.
    SetLess,
}

/// The per-cycle control decision.
///
/// Stages raise decisions during a cycle; the strongest one is kept and
/// selects the shift pattern applied at the start of the next cycle. Any
/// stall also makes the cycle driver retract the PC so the discarded fetch
/// is repeated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PipelineControl {
    /// Every slot moves forward.
    #[default]
    Advance,
    /// Decode1 waits; a bubble enters Decode2.
    StallAtDecode2,
    /// Decode1 and Decode2 wait; a bubble enters Execute.
    StallAtExecute,
    /// Writeback redirected the PC and discarded the younger slots.
    Squash,
}

impl PipelineControl {
    /// Combines two decisions, keeping the stronger.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Returns `true` for either stall pattern.
    pub const fn is_stall(self) -> bool {
        matches!(self, Self::StallAtDecode2 | Self::StallAtExecute)
    }
}
