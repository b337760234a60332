//! Instruction Decode Stages (D1, D2).
//!
//! Operand loading is split over two stages:
//!
//! | Opcode                     | Decode1 (Op1)  | Decode2              |
//! |----------------------------|----------------|----------------------|
//! | LTM                        | literal        |                      |
//! | MTR                        |                | Op1 <- mem\[addr\]   |
//! | RTR, MTRK                  | reg\[r2\]      |                      |
//! | SUB, SUM, JUMP_LESS        | reg\[r1\]      | Op2 <- reg\[r2\]     |
//! | RTMK                       | reg\[r1\]      |                      |
//! | JMP                        | target         |                      |
//!
//! Every register or memory read goes through the hazard unit. A stall skips
//! the operand write and requests the matching stall pattern.

use crate::core::Cpu;
use crate::core::pipeline::hazards::{self, Source};
use crate::core::pipeline::signals::{PipelineControl, Stage};
use crate::isa::Instruction;

/// Where Decode1 takes Op1 from.
enum FirstOperand {
    Immediate(u16),
    Read(Source),
}

/// Returns the Decode1 operand of `inst`, if it has one.
const fn first_operand(inst: &Instruction) -> Option<FirstOperand> {
    Some(match *inst {
        Instruction::Ltm { literal: v, .. } | Instruction::Jmp { target: v } => {
            FirstOperand::Immediate(v)
        }
        Instruction::Rtr { src: r, .. }
        | Instruction::Mtrk { addr_reg: r, .. }
        | Instruction::Sub { lhs: r, .. }
        | Instruction::Sum { lhs: r, .. }
        | Instruction::JumpLess { lhs: r, .. }
        | Instruction::Rtmk { addr_reg: r, .. } => FirstOperand::Read(Source::Register(r)),
        _ => return None,
    })
}

/// Executes the Decode1 stage.
///
/// Loads Op1 of the Decode1 slot. A producer still in Decode2 stalls the
/// stage and requests [`PipelineControl::StallAtDecode2`].
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn decode1_stage(cpu: &mut Cpu) {
    let slot = *cpu.pipeline.slot(Stage::Decode1);
    if slot.is_bubble() {
        return;
    }
    let value = match first_operand(&slot.instruction()) {
        None => return,
        Some(FirstOperand::Immediate(v)) => v,
        Some(FirstOperand::Read(source)) => {
            let Some(v) = hazards::read_operand(cpu, Stage::Decode1, source) else {
                cpu.pipeline.request(PipelineControl::StallAtDecode2);
                return;
            };
            v
        }
    };
    cpu.pipeline.slot_mut(Stage::Decode1).alu.op1 = value;
}

/// Executes the Decode2 stage.
///
/// Loads Op2 for SUB, SUM and JUMP_LESS, and the memory operand (into Op1)
/// for MTR. A stall requests [`PipelineControl::StallAtExecute`].
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn decode2_stage(cpu: &mut Cpu) {
    let slot = *cpu.pipeline.slot(Stage::Decode2);
    if slot.is_bubble() {
        return;
    }
    match slot.instruction() {
        Instruction::Sub { rhs, .. }
        | Instruction::Sum { rhs, .. }
        | Instruction::JumpLess { rhs, .. } => {
            match hazards::read_operand(cpu, Stage::Decode2, Source::Register(rhs)) {
                Some(v) => cpu.pipeline.slot_mut(Stage::Decode2).alu.op2 = v,
                None => cpu.pipeline.request(PipelineControl::StallAtExecute),
            }
        }
        Instruction::Mtr { addr, .. } => {
            match hazards::read_operand(cpu, Stage::Decode2, Source::Memory(addr)) {
                Some(v) => cpu.pipeline.slot_mut(Stage::Decode2).alu.op1 = v,
                None => cpu.pipeline.request(PipelineControl::StallAtExecute),
            }
        }
        _ => {}
    }
}
