//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the pipeline and the only place
//! architectural state changes. It commits Res to the register file or data
//! memory, resolves jumps, and advances the program counter. A taken branch or
//! jump squashes every younger slot.

use crate::core::Cpu;
use crate::core::pipeline::signals::{PipelineControl, Stage};
use crate::isa::Instruction;

/// Redirects the PC to `target` and discards the wrong-path slots.
fn redirect(cpu: &mut Cpu, target: u16) {
    let flushed = cpu.pipeline.squash();
    cpu.stats.squashes += 1;
    cpu.stats.squashed_instructions += flushed;
    cpu.pipeline.request(PipelineControl::Squash);
    tracing::debug!(from = cpu.pc, target, flushed, "squash");
    cpu.pc = target;
}

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - LTM: `mem[addr] <- Res`
/// - MTR, RTR: `reg[r1] <- Res`; SUB, SUM: `reg[r3] <- Res`
/// - MTRK: `reg[r1] <- mem[Res]`; RTMK: `mem[Res] <- reg[r2]`
/// - JUMP_LESS with `Res == 1`, JMP: PC takes the target and the pipeline squashes
/// - Everything else, bubbles included: PC advances by one
pub fn wb_stage(cpu: &mut Cpu) {
    let slot = *cpu.pipeline.slot(Stage::Writeback);
    let Some(pc) = slot.pc else {
        cpu.pc = cpu.pc.wrapping_add(1);
        return;
    };
    cpu.retire(pc, slot.word);

    let res = slot.alu.res;
    let inst = slot.instruction();
    if cpu.trace {
        eprintln!("WB  pc={pc:<4} {inst} res={res}");
    }
    match inst {
        Instruction::Ltm { addr, .. } => cpu.mem.write(addr, res),
        Instruction::Mtr { reg: r, .. }
        | Instruction::Rtr { dst: r, .. }
        | Instruction::Sub { dst: r, .. }
        | Instruction::Sum { dst: r, .. } => cpu.regs.write(r, res),
        Instruction::Mtrk { dst, .. } => {
            let val = cpu.mem.read(res);
            cpu.regs.write(dst, val);
        }
        Instruction::Rtmk { src, .. } => {
            let val = cpu.regs.read(src);
            cpu.mem.write(res, val);
        }
        Instruction::JumpLess { target, .. } => {
            if res == 1 {
                cpu.stats.branches_taken += 1;
                redirect(cpu, target);
                return;
            }
            cpu.stats.branches_not_taken += 1;
        }
        Instruction::Jmp { .. } => {
            cpu.stats.branches_taken += 1;
            redirect(cpu, res);
            return;
        }
        Instruction::Nop | Instruction::Unknown { .. } => {}
    }
    cpu.pc = cpu.pc.wrapping_add(1);
}
