//! Instruction Disassembler for the PW-700.
//!
//! Converts an instruction word into the text the assembler accepts, with
//! operands in source order, for debug output, pipeline diagrams, and
//! diagnostics.
//!
//! # Usage
//!
//! ```
//! use pw700_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x10_1400), "LTM 5 0");
//! ```

use std::fmt;

use super::decode::{Instruction, decode};
use super::instruction::Word;

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(op) = self.opcode() else {
            let Self::Unknown { opcode } = self else {
                return Ok(());
            };
            return write!(f, "UNKNOWN({opcode:#x})");
        };
        f.write_str(op.mnemonic())?;
        for value in self.operands() {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

/// Disassembles an instruction word.
///
/// Returns text like `"SUB 1 1 2"`, or `"UNKNOWN(0xa)"` for unassigned
/// opcodes. Bits outside the fields an opcode uses are not shown.
pub fn disassemble(word: Word) -> String {
    decode(word).to_string()
}
