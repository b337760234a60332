//! Data and Command Memories.
//!
//! This module provides the two PW-700 memories. It performs the following:
//! 1. **Data Memory:** 1024 words of 16 bits, zero at reset; addresses wrap to 10 bits.
//! 2. **Command Memory:** 1024 instruction words, written by the loader only.
//! 3. **Observability:** Slices over both memories for dumps and snapshots.

use crate::common::constants::{ADDR_MASK, CMD_MEM_WORDS, DATA_MEM_WORDS};
use crate::isa::Word;

/// Word-addressed 16-bit data memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    words: Vec<u16>,
}

impl DataMemory {
    /// Creates a zeroed data memory.
    pub fn new() -> Self {
        Self {
            words: vec![0; DATA_MEM_WORDS],
        }
    }

    /// Reads the word at `addr`; only the low 10 bits of the address are used.
    #[inline]
    pub fn read(&self, addr: u16) -> u16 {
        self.words[usize::from(addr & ADDR_MASK)]
    }

    /// Writes the word at `addr`; only the low 10 bits of the address are used.
    #[inline]
    pub fn write(&mut self, addr: u16, val: u16) {
        self.words[usize::from(addr & ADDR_MASK)] = val;
    }

    /// Returns the whole memory.
    pub fn as_slice(&self) -> &[u16] {
        &self.words
    }

    /// Returns the first `len` words, clamped to the memory size.
    pub fn window(&self, len: usize) -> &[u16] {
        &self.words[..len.min(DATA_MEM_WORDS)]
    }
}

impl Default for DataMemory {
    fn default() -> Self {
        Self::new()
    }
}

/// Instruction storage, immutable while the pipeline runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandMemory {
    words: Vec<Word>,
}

impl CommandMemory {
    /// Creates a command memory filled with NOPs.
    pub fn new() -> Self {
        Self {
            words: vec![0; CMD_MEM_WORDS],
        }
    }

    /// Returns the word at `pc`, or NOP past the end of memory.
    #[inline]
    pub fn fetch(&self, pc: u16) -> Word {
        self.words.get(usize::from(pc)).copied().unwrap_or(0)
    }

    /// Stores a word at `addr`.
    ///
    /// # Returns
    ///
    /// `false` if `addr` is outside command memory.
    pub fn store(&mut self, addr: usize, word: Word) -> bool {
        self.words.get_mut(addr).map(|slot| *slot = word).is_some()
    }

    /// Resets every word to NOP.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns the whole memory.
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }
}

impl Default for CommandMemory {
    fn default() -> Self {
        Self::new()
    }
}
