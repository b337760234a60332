//! PW-700 opcodes.
//!
//! Values 10-15 of the opcode field are unassigned; they decode to
//! [`crate::isa::Instruction::Unknown`] and behave as no-ops.

use serde::Serialize;

use super::instruction::{Field, fields};

/// The ten assigned operation codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Opcode {
    /// No operation.
    Nop = 0x0,
    /// Literal to memory: `mem[addr] <- literal`.
    Ltm = 0x1,
    /// Memory to register: `r1 <- mem[addr]`.
    Mtr = 0x2,
    /// Register to register: `r1 <- r2`.
    Rtr = 0x3,
    /// Subtract: `r3 <- r1 - r2`.
    Sub = 0x4,
    /// Conditional jump: `if r1 < r2 then pc <- target`.
    JumpLess = 0x5,
    /// Indirect load: `r1 <- mem[r2]`.
    Mtrk = 0x6,
    /// Indirect store: `mem[r1] <- r2`.
    Rtmk = 0x7,
    /// Unconditional jump: `pc <- target`.
    Jmp = 0x8,
    /// Add: `r3 <- r1 + r2`.
    Sum = 0x9,
}

impl Opcode {
    /// Every assigned opcode in numeric order.
    pub const ALL: [Self; 10] = [
        Self::Nop,
        Self::Ltm,
        Self::Mtr,
        Self::Rtr,
        Self::Sub,
        Self::JumpLess,
        Self::Mtrk,
        Self::Rtmk,
        Self::Jmp,
        Self::Sum,
    ];

    /// Maps a raw opcode field value to an opcode.
    ///
    /// # Returns
    ///
    /// `None` for the unassigned values 10-15.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        Some(match bits {
            0x0 => Self::Nop,
            0x1 => Self::Ltm,
            0x2 => Self::Mtr,
            0x3 => Self::Rtr,
            0x4 => Self::Sub,
            0x5 => Self::JumpLess,
            0x6 => Self::Mtrk,
            0x7 => Self::Rtmk,
            0x8 => Self::Jmp,
            0x9 => Self::Sum,
            _ => return None,
        })
    }

    /// Returns the opcode field value.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Ltm => "LTM",
            Self::Mtr => "MTR",
            Self::Rtr => "RTR",
            Self::Sub => "SUB",
            Self::JumpLess => "JUMP_LESS",
            Self::Mtrk => "MTRK",
            Self::Rtmk => "RTMK",
            Self::Jmp => "JMP",
            Self::Sum => "SUM",
        }
    }

    /// Looks up an opcode by mnemonic, ignoring ASCII case.
    pub fn from_mnemonic(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(text))
    }

    /// Returns the fields named by the assembler operands, in source order.
    ///
    /// `LTM literal addr`, `MTR r1 addr`, `JUMP_LESS r1 r2 target`, `JMP target`;
    /// the remaining forms list their registers in field order.
    pub const fn operand_fields(self) -> &'static [Field] {
        match self {
            Self::Nop => &[],
            Self::Ltm => &[fields::LITERAL, fields::ADDR],
            Self::Mtr => &[fields::R1, fields::ADDR],
            Self::Rtr | Self::Mtrk | Self::Rtmk => &[fields::R1, fields::R2],
            Self::Sub | Self::Sum => &[fields::R1, fields::R2, fields::R3],
            Self::JumpLess => &[fields::R1, fields::R2, fields::ADDR],
            Self::Jmp => &[fields::ADDR],
        }
    }

    /// Returns how many operands the assembler form takes.
    pub const fn operand_count(self) -> usize {
        self.operand_fields().len()
    }
}
