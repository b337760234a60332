//! PW-700 Assembler.
//!
//! Translates mnemonic source into instruction words and renders words in the
//! program text format. It performs:
//! 1. **Tokenizing:** Text after `;` is a comment; tokens are split on every
//!    character that is not alphanumeric or `_`.
//! 2. **Validation:** Operand count and range are checked per mnemonic;
//!    registers take 0-15, addresses, targets and literals take 0-1023.
//! 3. **Emission:** Each instruction becomes one line of 24 binary digits.
//!
//! Blank and comment-only lines produce no instruction. Assembly stops at the
//! first error.

use crate::common::constants::INSTRUCTION_WIDTH;
use crate::common::error::AsmError;

use super::instruction::{Word, fields};
use super::opcodes::Opcode;

/// Splits the code part of a source line into tokens.
fn tokens(line: &str) -> Vec<&str> {
    let code = line.split(';').next().unwrap_or_default();
    code.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| !t.is_empty())
        .collect()
}

/// Assembles one source line.
///
/// # Arguments
///
/// * `line` - Source text of the line.
/// * `line_no` - 1-based line number used in errors.
///
/// # Returns
///
/// `Ok(None)` for blank or comment-only lines, otherwise the encoded word.
pub fn assemble_line(line: &str, line_no: usize) -> Result<Option<Word>, AsmError> {
    let toks = tokens(line);
    let Some((&mnemonic, operands)) = toks.split_first() else {
        return Ok(None);
    };
    let op = Opcode::from_mnemonic(mnemonic).ok_or_else(|| AsmError::UnknownMnemonic {
        line: line_no,
        mnemonic: mnemonic.to_string(),
    })?;

    let layout = op.operand_fields();
    if operands.len() != layout.len() {
        return Err(AsmError::OperandCount {
            line: line_no,
            mnemonic: op.mnemonic(),
            expected: layout.len(),
            found: operands.len(),
        });
    }

    let mut word = fields::OPCODE.insert(0, op.bits());
    for (field, text) in layout.iter().zip(operands) {
        let value: u64 = text.parse().map_err(|_| AsmError::InvalidOperand {
            line: line_no,
            mnemonic: op.mnemonic(),
            text: (*text).to_string(),
        })?;
        if value > u64::from(field.max_value()) {
            return Err(AsmError::OutOfRange {
                line: line_no,
                mnemonic: op.mnemonic(),
                value,
                max: field.max_value(),
            });
        }
        word = field.insert(word, value as u32);
    }
    Ok(Some(word))
}

/// Assembles a whole source text.
///
/// # Returns
///
/// The instruction words in source order, or the first error.
pub fn assemble(source: &str) -> Result<Vec<Word>, AsmError> {
    let mut words = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        if let Some(word) = assemble_line(line, idx + 1)? {
            words.push(word);
        }
    }
    tracing::debug!(instructions = words.len(), "assembled program");
    Ok(words)
}

/// Renders words in the program text format, one 24-digit line per word.
pub fn to_listing(words: &[Word]) -> String {
    let mut out = String::with_capacity(words.len() * (INSTRUCTION_WIDTH + 1));
    for word in words {
        out.push_str(&format!(
            "{:0width$b}\n",
            word & 0xFF_FFFF,
            width = INSTRUCTION_WIDTH
        ));
    }
    out
}
