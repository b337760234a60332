//! Instruction builders.
//!
//! Thin wrappers over `Instruction::encode` so tests read like assembly.

use pw700_core::isa::{Instruction, Word};

pub fn nop() -> Word {
    Instruction::Nop.encode()
}

pub fn ltm(literal: u16, addr: u16) -> Word {
    Instruction::Ltm { literal, addr }.encode()
}

pub fn mtr(reg: usize, addr: u16) -> Word {
    Instruction::Mtr { reg, addr }.encode()
}

pub fn rtr(dst: usize, src: usize) -> Word {
    Instruction::Rtr { dst, src }.encode()
}

pub fn sub(lhs: usize, rhs: usize, dst: usize) -> Word {
    Instruction::Sub { lhs, rhs, dst }.encode()
}

pub fn jump_less(lhs: usize, rhs: usize, target: u16) -> Word {
    Instruction::JumpLess { lhs, rhs, target }.encode()
}

pub fn mtrk(dst: usize, addr_reg: usize) -> Word {
    Instruction::Mtrk { dst, addr_reg }.encode()
}

pub fn rtmk(addr_reg: usize, src: usize) -> Word {
    Instruction::Rtmk { addr_reg, src }.encode()
}

pub fn jmp(target: u16) -> Word {
    Instruction::Jmp { target }.encode()
}

pub fn sum(lhs: usize, rhs: usize, dst: usize) -> Word {
    Instruction::Sum { lhs, rhs, dst }.encode()
}
