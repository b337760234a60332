//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 16-bit ALU used in the Execute stage.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub (both wrapping)
//! - [`logic`]:      Pass-through, unsigned set-less-than

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Pass-through and comparison operations.
pub mod logic;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit for 16-bit register values.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (Op1)
    /// * `b`  - Second operand (Op2)
    ///
    /// # Returns
    ///
    /// The 16-bit result stored into Res.
    ///
    /// # Examples
    ///
    /// ```
    /// use pw700_core::core::units::alu::Alu;
    /// use pw700_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Sub, 3, 5), 0xFFFE);
    /// assert_eq!(Alu::execute(AluOp::SetLess, 0, 1), 1);
    /// assert_eq!(Alu::execute(AluOp::Pass, 42, 7), 42);
    /// ```
    pub const fn execute(op: AluOp, a: u16, b: u16) -> u16 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Pass | AluOp::SetLess => logic::execute(op, a, b),
        }
    }
}
