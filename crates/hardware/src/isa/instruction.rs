//! Instruction encoding and decoding utilities.
//!
//! An instruction word is 24 bits wide, stored in a `u32`. Every field is
//! described by an (offset, width) pair in [`fields`]; the accessors in
//! [`InstructionBits`] extract them without validation.
//!
//! ```text
//!  23   20 19   16 15   12 11    8 7                 0
//! +-------+-------+-------+-------+-------------------+
//! |opcode |  r1   |  r2   |  r3   |                   |
//! +-------+-------+-------+-------+-------------------+
//!                 |     literal (19..10)  |  addr / target (9..0)  |
//! ```

/// Raw instruction word as fetched from command memory.
pub type Word = u32;

/// A named bit field inside an instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    /// Position of the least significant bit.
    pub offset: u32,
    /// Number of bits.
    pub width: u32,
}

impl Field {
    /// Creates a field descriptor.
    pub const fn new(offset: u32, width: u32) -> Self {
        Self { offset, width }
    }

    /// Returns the unshifted mask covering `width` bits.
    #[inline(always)]
    pub const fn mask(self) -> u32 {
        (1 << self.width) - 1
    }

    /// Returns the largest value the field holds.
    pub const fn max_value(self) -> u32 {
        self.mask()
    }

    /// Extracts the field from `word`.
    #[inline(always)]
    pub const fn extract(self, word: Word) -> u32 {
        (word >> self.offset) & self.mask()
    }

    /// Returns `word` with the field replaced by `value`, truncated to the field width.
    #[inline(always)]
    pub const fn insert(self, word: Word, value: u32) -> Word {
        (word & !(self.mask() << self.offset)) | ((value & self.mask()) << self.offset)
    }
}

/// Field table for the PW-700 instruction format.
pub mod fields {
    use super::Field;

    /// Operation code (bits 20-23).
    pub const OPCODE: Field = Field::new(20, 4);
    /// First register operand (bits 16-19).
    pub const R1: Field = Field::new(16, 4);
    /// Second register operand (bits 12-15).
    pub const R2: Field = Field::new(12, 4);
    /// Third register operand (bits 8-11).
    pub const R3: Field = Field::new(8, 4);
    /// Data memory address or jump target (bits 0-9).
    pub const ADDR: Field = Field::new(0, 10);
    /// Literal stored by LTM (bits 10-19).
    pub const LITERAL: Field = Field::new(10, 10);
}

/// Trait for extracting instruction fields from encoded words.
///
/// Fields overlap (the literal spans the register fields); which ones are
/// meaningful depends on the opcode.
pub trait InstructionBits {
    /// Extracts the opcode field.
    fn opcode(&self) -> u32;

    /// Extracts the first register index.
    fn r1(&self) -> usize;

    /// Extracts the second register index.
    fn r2(&self) -> usize;

    /// Extracts the third register index.
    fn r3(&self) -> usize;

    /// Extracts the 10-bit memory address or jump target.
    fn addr(&self) -> u16;

    /// Extracts the 10-bit literal.
    fn literal(&self) -> u16;
}

impl InstructionBits for Word {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        fields::OPCODE.extract(*self)
    }

    #[inline(always)]
    fn r1(&self) -> usize {
        fields::R1.extract(*self) as usize
    }

    #[inline(always)]
    fn r2(&self) -> usize {
        fields::R2.extract(*self) as usize
    }

    #[inline(always)]
    fn r3(&self) -> usize {
        fields::R3.extract(*self) as usize
    }

    #[inline(always)]
    fn addr(&self) -> u16 {
        fields::ADDR.extract(*self) as u16
    }

    #[inline(always)]
    fn literal(&self) -> u16 {
        fields::LITERAL.extract(*self) as u16
    }
}
