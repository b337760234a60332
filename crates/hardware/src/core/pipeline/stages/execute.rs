//! Instruction Execute (EX) Stage.
//!
//! Computes Res for the Execute slot. It performs:
//! 1. **Pass-through:** LTM, MTR, RTR, MTRK, RTMK and JMP carry Op1 into Res.
//! 2. **Arithmetic:** SUB and SUM, wrapping at 16 bits.
//! 3. **Branch Resolution:** JUMP_LESS sets Res to 1 when it is taken.
//!
//! The stage touches nothing but its own slot's scratch record.

use crate::core::Cpu;
use crate::core::pipeline::signals::{AluOp, Stage};
use crate::core::units::alu::Alu;
use crate::isa::Instruction;

/// Returns the ALU operation for `inst`, or `None` for NOP and unknown opcodes.
pub const fn alu_op(inst: &Instruction) -> Option<AluOp> {
    match inst {
        Instruction::Ltm { .. }
        | Instruction::Mtr { .. }
        | Instruction::Rtr { .. }
        | Instruction::Mtrk { .. }
        | Instruction::Rtmk { .. }
        | Instruction::Jmp { .. } => Some(AluOp::Pass),
        Instruction::Sub { .. } => Some(AluOp::Sub),
        Instruction::Sum { .. } => Some(AluOp::Add),
        Instruction::JumpLess { .. } => Some(AluOp::SetLess),
        Instruction::Nop | Instruction::Unknown { .. } => None,
    }
}

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn execute_stage(cpu: &mut Cpu) {
    let trace = cpu.trace;
    let slot = cpu.pipeline.slot_mut(Stage::Execute);
    if slot.is_bubble() {
        return;
    }
    let Some(op) = alu_op(&slot.instruction()) else {
        return;
    };
    slot.alu.res = Alu::execute(op, slot.alu.op1, slot.alu.op2);
    if trace {
        eprintln!(
            "EX  pc={:<4} {:?} op1={} op2={} -> res={}",
            slot.pc.unwrap_or_default(),
            op,
            slot.alu.op1,
            slot.alu.op2,
            slot.alu.res
        );
    }
}
