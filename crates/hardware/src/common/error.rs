//! Error definitions.
//!
//! The simulator core has no recoverable runtime errors; everything that can
//! fail happens before the first cycle. This module provides:
//! 1. **Load errors:** Unreadable files and malformed program lines.
//! 2. **Assembler errors:** Unknown mnemonics, operand counts, and operand ranges.
//! 3. **Configuration errors:** Unreadable or malformed JSON configuration.

use std::io;

use thiserror::Error;

use super::constants::{CMD_MEM_WORDS, INSTRUCTION_WIDTH};

/// Failure while loading a program into command memory.
///
/// Line numbers are 1-based. Lines before the failing one stay loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program `{path}`: {source}")]
    Io {
        /// Path that was opened.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line is not a binary string whose value fits in 24 bits.
    #[error("line {line}: `{text}` is not a binary word that fits in {INSTRUCTION_WIDTH} bits")]
    InvalidLine {
        /// 1-based line number.
        line: usize,
        /// Offending line with surrounding whitespace removed.
        text: String,
    },

    /// The program has more lines than command memory holds.
    #[error("line {line}: program exceeds command memory of {CMD_MEM_WORDS} words")]
    TooLong {
        /// 1-based number of the first line that did not fit.
        line: usize,
    },
}

impl LoadError {
    /// Returns the 1-based line number the error refers to, if any.
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Io { .. } => None,
            Self::InvalidLine { line, .. } | Self::TooLong { line } => Some(*line),
        }
    }
}

/// Failure while assembling source text.
///
/// Assembly stops at the first failing line; line numbers are 1-based.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AsmError {
    /// The first token of a line names no instruction.
    #[error("unknown mnemonic `{mnemonic}` in line {line}")]
    UnknownMnemonic {
        /// 1-based line number.
        line: usize,
        /// Token that was read as the mnemonic.
        mnemonic: String,
    },

    /// The instruction received the wrong number of operands.
    #[error(
        "unexpected amount of operands for {mnemonic} in line {line}: expected {expected}, got {found}"
    )]
    OperandCount {
        /// 1-based line number.
        line: usize,
        /// Instruction mnemonic.
        mnemonic: &'static str,
        /// Operands the instruction takes.
        expected: usize,
        /// Operands present on the line.
        found: usize,
    },

    /// An operand is not an unsigned decimal number.
    #[error("operand `{text}` of {mnemonic} in line {line} is not an unsigned decimal number")]
    InvalidOperand {
        /// 1-based line number.
        line: usize,
        /// Instruction mnemonic.
        mnemonic: &'static str,
        /// Operand token.
        text: String,
    },

    /// An operand does not fit its field.
    #[error("operand {value} of {mnemonic} in line {line} is out of range 0..={max}")]
    OutOfRange {
        /// 1-based line number.
        line: usize,
        /// Instruction mnemonic.
        mnemonic: &'static str,
        /// Parsed operand value.
        value: u64,
        /// Largest value the field holds.
        max: u32,
    },
}

impl AsmError {
    /// Returns the 1-based line number of the failing source line.
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownMnemonic { line, .. }
            | Self::OperandCount { line, .. }
            | Self::InvalidOperand { line, .. }
            | Self::OutOfRange { line, .. } => *line,
        }
    }
}

/// Failure while reading a JSON configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config `{path}`: {source}")]
    Io {
        /// Path that was opened.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON for [`crate::config::Config`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
