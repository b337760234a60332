//! ALU arithmetic operations.
//!
//! Both operations wrap modulo 2^16, matching the register width.

use crate::core::pipeline::signals::AluOp;

/// Executes an arithmetic operation.
///
/// # Returns
///
/// `a + b` or `a - b`, wrapping. Returns `0` for non-arithmetic operations.
pub const fn execute(op: AluOp, a: u16, b: u16) -> u16 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
