//! ALU pass-through and comparison operations.
//!
//! `SetLess` compares the operands as unsigned 16-bit values and yields 1 when
//! the first is strictly smaller; this is the taken flag of JUMP_LESS.

use crate::core::pipeline::signals::AluOp;

/// Executes a pass-through or comparison operation.
///
/// # Returns
///
/// `a` for `Pass`, `(a < b) as u16` for `SetLess`, `0` otherwise.
pub const fn execute(op: AluOp, a: u16, b: u16) -> u16 {
    match op {
        AluOp::Pass => a,
        AluOp::SetLess => (a < b) as u16,
        _ => 0,
    }
}
