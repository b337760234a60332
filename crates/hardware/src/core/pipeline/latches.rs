//! Pipeline slot structures.
//!
//! The PW-700 pipeline is a five-entry shift register: Fetch → Decode1 →
//! Decode2 → Execute → Writeback. Each slot carries the instruction word, the
//! command-memory address it came from, and its ALU scratch record.
//!
//! 1. **Instruction Flow:** One shift pattern per cycle, chosen by the pending decision.
//! 2. **Bubbles:** Empty slots carry no address and execute as NOP.
//! 3. **Squash:** Discards every slot younger than Writeback.

use crate::common::constants::PIPELINE_DEPTH;
use crate::isa::{Instruction, Word, decode};

use super::signals::{PipelineControl, Stage};

/// ALU scratch record travelling with an instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluScratch {
    /// First operand, loaded in Decode1 (or Decode2 for MTR).
    pub op1: u16,
    /// Second operand, loaded in Decode2.
    pub op2: u16,
    /// Result, computed in Execute.
    pub res: u16,
}

/// One pipeline slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slot {
    /// Instruction word; 0 for a bubble.
    pub word: Word,
    /// Command-memory address the word was fetched from; `None` for a bubble.
    pub pc: Option<u16>,
    /// ALU scratch record.
    pub alu: AluScratch,
}

impl Slot {
    /// An empty slot.
    pub const BUBBLE: Self = Self {
        word: 0,
        pc: None,
        alu: AluScratch {
            op1: 0,
            op2: 0,
            res: 0,
        },
    };

    /// Creates a slot for a freshly fetched word with cleared scratch.
    pub const fn fetched(pc: u16, word: Word) -> Self {
        Self {
            word,
            pc: Some(pc),
            alu: AluScratch {
                op1: 0,
                op2: 0,
                res: 0,
            },
        }
    }

    /// Returns `true` if the slot holds no instruction.
    #[inline(always)]
    pub const fn is_bubble(&self) -> bool {
        self.pc.is_none()
    }

    /// Decodes the slot's word; bubbles decode as NOP.
    pub fn instruction(&self) -> Instruction {
        if self.is_bubble() {
            Instruction::Nop
        } else {
            decode(self.word)
        }
    }
}

/// The five pipeline slots plus the decision pending for the next advance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pipeline {
    slots: [Slot; PIPELINE_DEPTH],
    pending: PipelineControl,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot at `stage`.
    #[inline(always)]
    pub const fn slot(&self, stage: Stage) -> &Slot {
        &self.slots[stage.index()]
    }

    /// Returns the slot at `stage` mutably.
    #[inline(always)]
    pub const fn slot_mut(&mut self, stage: Stage) -> &mut Slot {
        &mut self.slots[stage.index()]
    }

    /// Returns all slots, Fetch first.
    pub const fn slots(&self) -> &[Slot; PIPELINE_DEPTH] {
        &self.slots
    }

    /// Returns the raw words of all slots, Fetch first.
    pub fn words(&self) -> [Word; PIPELINE_DEPTH] {
        self.slots.map(|s| s.word)
    }

    /// Returns the decision that the next [`Pipeline::advance`] will apply.
    pub const fn pending(&self) -> PipelineControl {
        self.pending
    }

    /// Raises a decision for the next cycle; the stronger decision wins.
    pub fn request(&mut self, control: PipelineControl) {
        self.pending = self.pending.merge(control);
    }

    /// Returns `true` if every slot is a bubble.
    pub fn is_drained(&self) -> bool {
        self.slots.iter().all(Slot::is_bubble)
    }

    /// Shifts the pipeline by one cycle.
    ///
    /// The pattern is selected by the pending decision, which is then reset:
    ///
    /// - `Advance` / `Squash`: every slot moves forward; `fetched` enters Fetch.
    /// - `StallAtDecode2`: Execute and Decode2 move; Decode2 gets a bubble;
    ///   Decode1 holds; Fetch gets `fetched`.
    /// - `StallAtExecute`: only Execute moves; Execute gets a bubble; Decode1
    ///   and Decode2 hold; Fetch gets `fetched`.
    ///
    /// # Arguments
    ///
    /// * `fetched` - The slot produced by this cycle's fetch.
    pub fn advance(&mut self, fetched: Slot) {
        let [f, d1, d2, ex, _] = self.slots;
        self.slots = match self.pending {
            PipelineControl::Advance | PipelineControl::Squash => [fetched, f, d1, d2, ex],
            PipelineControl::StallAtDecode2 => [fetched, d1, Slot::BUBBLE, d2, ex],
            PipelineControl::StallAtExecute => [fetched, d1, d2, Slot::BUBBLE, ex],
        };
        self.pending = PipelineControl::Advance;
    }

    /// Discards Fetch, Decode1, Decode2 and Execute, keeping Writeback.
    ///
    /// # Returns
    ///
    /// The number of instructions discarded (bubbles excluded).
    pub fn squash(&mut self) -> u64 {
        let mut flushed = 0;
        for slot in &mut self.slots[..Stage::Writeback.index()] {
            if !slot.is_bubble() {
                flushed += 1;
            }
            *slot = Slot::BUBBLE;
        }
        flushed
    }
}
