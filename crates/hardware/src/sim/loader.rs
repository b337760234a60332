//! Program Loader.
//!
//! This module fills command memory from the program text format. It performs:
//! 1. **Parsing:** Each line is a binary string, most significant bit first,
//!    whose value fits in 24 bits. Leading zeros beyond 24 digits are allowed;
//!    surrounding whitespace and `\r` are ignored.
//! 2. **Placement:** Line *n* (1-based) is stored at command address *n - 1*.
//! 3. **Partial Loads:** The first bad line stops loading; earlier lines stay in
//!    memory and every later address keeps its NOP.

use std::fs;
use std::path::Path;

use crate::common::constants::INSTRUCTION_WIDTH;
use crate::common::error::LoadError;
use crate::core::Cpu;
use crate::isa::Word;

/// Parses one program line.
///
/// # Returns
///
/// The word, or `None` if the line is empty, contains anything other than `0`
/// and `1`, or has more than 24 significant digits.
pub fn parse_line(line: &str) -> Option<Word> {
    let digits = line.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(0);
    }
    if significant.len() > INSTRUCTION_WIDTH {
        return None;
    }
    Word::from_str_radix(significant, 2).ok()
}

/// Loads program text into the CPU's command memory.
///
/// Command memory is cleared first. On error, the lines before the failing
/// one remain loaded.
///
/// # Arguments
///
/// * `cpu` - CPU whose command memory is filled.
/// * `text` - Program text, one instruction per line.
///
/// # Returns
///
/// The number of instructions loaded.
pub fn load_program(cpu: &mut Cpu, text: &str) -> Result<usize, LoadError> {
    cpu.cmd_mem.clear();
    let mut loaded = 0;
    for (idx, line) in text.lines().enumerate() {
        let Some(word) = parse_line(line) else {
            let err = LoadError::InvalidLine {
                line: idx + 1,
                text: line.trim().to_string(),
            };
            tracing::warn!(loaded, %err, "program load stopped");
            return Err(err);
        };
        if !cpu.cmd_mem.store(idx, word) {
            let err = LoadError::TooLong { line: idx + 1 };
            tracing::warn!(loaded, %err, "program load stopped");
            return Err(err);
        }
        loaded += 1;
    }
    tracing::info!(instructions = loaded, "program loaded");
    Ok(loaded)
}

/// Reads a program file and loads it into the CPU's command memory.
///
/// # Arguments
///
/// * `cpu` - CPU whose command memory is filled.
/// * `path` - Path to the program text file.
///
/// # Returns
///
/// The number of instructions loaded.
pub fn load_program_file(cpu: &mut Cpu, path: impl AsRef<Path>) -> Result<usize, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_program(cpu, &text)
}
