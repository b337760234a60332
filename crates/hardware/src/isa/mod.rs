//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the PW-700 instruction encoding, the typed decoder, and the text
//! tooling built on top of it.
//!
//! # Layout
//!
//! * `instruction`: Bit-field table and raw field accessors over instruction words.
//! * `opcodes`: The ten opcodes with their mnemonics and operand counts.
//! * `decode`: Total decoding of a word into an [`decode::Instruction`].
//! * `disasm`: Instruction text in assembler operand order.
//! * `asm`: Assembler from mnemonic source text to the 24-digit program format.

/// Assembler for mnemonic source text.
pub mod asm;

/// Instruction decoding into typed instructions.
pub mod decode;

/// Instruction disassembler for debug output and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Opcode values and mnemonics.
pub mod opcodes;

pub use decode::{Instruction, decode};
pub use instruction::{InstructionBits, Word};
pub use opcodes::Opcode;
