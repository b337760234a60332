//! Instruction Decoder.
//!
//! Turns a raw word into an [`Instruction`]. Decoding is total: every 32-bit
//! value yields an instruction, and unassigned opcodes become
//! [`Instruction::Unknown`], which the pipeline treats as a no-op.

use super::instruction::{InstructionBits, Word, fields};
use super::opcodes::Opcode;

/// A decoded PW-700 instruction.
///
/// Register operands are indices 0-15; addresses, targets, and literals are
/// 10-bit values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// No operation.
    Nop,
    /// `mem[addr] <- literal`.
    Ltm {
        /// Value stored.
        literal: u16,
        /// Destination memory address.
        addr: u16,
    },
    /// `reg <- mem[addr]`.
    Mtr {
        /// Destination register.
        reg: usize,
        /// Source memory address.
        addr: u16,
    },
    /// `dst <- src`.
    Rtr {
        /// Destination register (r1).
        dst: usize,
        /// Source register (r2).
        src: usize,
    },
    /// `dst <- lhs - rhs`, wrapping.
    Sub {
        /// Minuend register (r1).
        lhs: usize,
        /// Subtrahend register (r2).
        rhs: usize,
        /// Destination register (r3).
        dst: usize,
    },
    /// `if lhs < rhs then pc <- target`.
    JumpLess {
        /// Left comparison register (r1).
        lhs: usize,
        /// Right comparison register (r2).
        rhs: usize,
        /// Branch target in command memory.
        target: u16,
    },
    /// `dst <- mem[addr_reg]`.
    Mtrk {
        /// Destination register (r1).
        dst: usize,
        /// Register holding the memory address (r2).
        addr_reg: usize,
    },
    /// `mem[addr_reg] <- src`.
    Rtmk {
        /// Register holding the memory address (r1).
        addr_reg: usize,
        /// Register holding the stored value (r2).
        src: usize,
    },
    /// `pc <- target`.
    Jmp {
        /// Jump target in command memory.
        target: u16,
    },
    /// `dst <- lhs + rhs`, wrapping.
    Sum {
        /// First addend register (r1).
        lhs: usize,
        /// Second addend register (r2).
        rhs: usize,
        /// Destination register (r3).
        dst: usize,
    },
    /// Unassigned opcode (10-15); executes as a no-op.
    Unknown {
        /// Raw opcode field.
        opcode: u32,
    },
}

/// Decodes a raw instruction word.
///
/// # Arguments
///
/// * `word` - Instruction word; bits above 23 are ignored.
///
/// # Returns
///
/// The decoded instruction. Never fails.
pub fn decode(word: Word) -> Instruction {
    let Some(op) = Opcode::from_bits(word.opcode()) else {
        return Instruction::Unknown {
            opcode: word.opcode(),
        };
    };
    match op {
        Opcode::Nop => Instruction::Nop,
        Opcode::Ltm => Instruction::Ltm {
            literal: word.literal(),
            addr: word.addr(),
        },
        Opcode::Mtr => Instruction::Mtr {
            reg: word.r1(),
            addr: word.addr(),
        },
        Opcode::Rtr => Instruction::Rtr {
            dst: word.r1(),
            src: word.r2(),
        },
        Opcode::Sub => Instruction::Sub {
            lhs: word.r1(),
            rhs: word.r2(),
            dst: word.r3(),
        },
        Opcode::JumpLess => Instruction::JumpLess {
            lhs: word.r1(),
            rhs: word.r2(),
            target: word.addr(),
        },
        Opcode::Mtrk => Instruction::Mtrk {
            dst: word.r1(),
            addr_reg: word.r2(),
        },
        Opcode::Rtmk => Instruction::Rtmk {
            addr_reg: word.r1(),
            src: word.r2(),
        },
        Opcode::Jmp => Instruction::Jmp {
            target: word.addr(),
        },
        Opcode::Sum => Instruction::Sum {
            lhs: word.r1(),
            rhs: word.r2(),
            dst: word.r3(),
        },
    }
}

impl Instruction {
    /// Returns the opcode, or `None` for [`Instruction::Unknown`].
    pub const fn opcode(&self) -> Option<Opcode> {
        Some(match self {
            Self::Nop => Opcode::Nop,
            Self::Ltm { .. } => Opcode::Ltm,
            Self::Mtr { .. } => Opcode::Mtr,
            Self::Rtr { .. } => Opcode::Rtr,
            Self::Sub { .. } => Opcode::Sub,
            Self::JumpLess { .. } => Opcode::JumpLess,
            Self::Mtrk { .. } => Opcode::Mtrk,
            Self::Rtmk { .. } => Opcode::Rtmk,
            Self::Jmp { .. } => Opcode::Jmp,
            Self::Sum { .. } => Opcode::Sum,
            Self::Unknown { .. } => return None,
        })
    }

    /// Returns the operand values in assembler order.
    pub fn operands(&self) -> Vec<u32> {
        match *self {
            Self::Nop | Self::Unknown { .. } => Vec::new(),
            Self::Ltm { literal, addr } => vec![literal.into(), addr.into()],
            Self::Mtr { reg, addr } => vec![reg as u32, addr.into()],
            Self::Rtr { dst, src } => vec![dst as u32, src as u32],
            Self::Sub { lhs, rhs, dst } | Self::Sum { lhs, rhs, dst } => {
                vec![lhs as u32, rhs as u32, dst as u32]
            }
            Self::JumpLess { lhs, rhs, target } => vec![lhs as u32, rhs as u32, target.into()],
            Self::Mtrk { dst, addr_reg } => vec![dst as u32, addr_reg as u32],
            Self::Rtmk { addr_reg, src } => vec![addr_reg as u32, src as u32],
            Self::Jmp { target } => vec![target.into()],
        }
    }

    /// Encodes the instruction back into a word.
    ///
    /// Operands wider than their field are truncated. Unknown opcodes encode
    /// only their opcode field.
    pub fn encode(&self) -> Word {
        let Some(op) = self.opcode() else {
            let Self::Unknown { opcode } = *self else {
                return 0;
            };
            return fields::OPCODE.insert(0, opcode);
        };
        op.operand_fields()
            .iter()
            .zip(self.operands())
            .fold(fields::OPCODE.insert(0, op.bits()), |word, (field, value)| {
                field.insert(word, value)
            })
    }

    /// Returns the register this instruction writes at Writeback, if any.
    pub const fn dest_reg(&self) -> Option<usize> {
        match *self {
            Self::Mtr { reg: r, .. }
            | Self::Rtr { dst: r, .. }
            | Self::Mtrk { dst: r, .. }
            | Self::Sub { dst: r, .. }
            | Self::Sum { dst: r, .. } => Some(r),
            _ => None,
        }
    }

    /// Returns `true` for instructions that can redirect the program counter.
    pub const fn is_control_flow(&self) -> bool {
        matches!(self, Self::JumpLess { .. } | Self::Jmp { .. })
    }
}
