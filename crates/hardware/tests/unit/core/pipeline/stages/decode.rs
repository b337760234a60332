//! Decode Stage Tests.
//!
//! Decode1 loads Op1 from a literal, a target or a register; Decode2 loads
//! Op2 for the three-register forms and the memory operand for MTR.

use pretty_assertions::assert_eq;
use pw700_core::core::Cpu;
use pw700_core::core::pipeline::stages::{decode1_stage, decode2_stage};
use pw700_core::core::pipeline::{PipelineControl, Slot, Stage};
use pw700_core::isa::Word;
use rstest::rstest;

use crate::common::builder::*;

fn cpu_with(stage: Stage, word: Word) -> Cpu {
    let mut cpu = Cpu::default();
    cpu.regs.write(2, 200);
    cpu.regs.write(3, 300);
    cpu.mem.write(6, 600);
    *cpu.pipeline.slot_mut(stage) = Slot::fetched(0, word);
    cpu
}

#[rstest]
#[case(ltm(77, 6), 77)]
#[case(jmp(12), 12)]
#[case(rtr(9, 2), 200)]
#[case(mtrk(9, 3), 300)]
#[case(sub(2, 3, 9), 200)]
#[case(sum(3, 2, 9), 300)]
#[case(jump_less(2, 3, 0), 200)]
#[case(rtmk(3, 2), 300)]
fn decode1_loads_first_operand(#[case] word: Word, #[case] op1: u16) {
    let mut cpu = cpu_with(Stage::Decode1, word);
    decode1_stage(&mut cpu);
    assert_eq!(cpu.pipeline.slot(Stage::Decode1).alu.op1, op1);
    assert_eq!(cpu.pipeline.pending(), PipelineControl::Advance);
}

#[rstest]
#[case(mtr(2, 6))]
#[case(nop())]
fn decode1_leaves_other_forms_alone(#[case] word: Word) {
    let mut cpu = cpu_with(Stage::Decode1, word);
    decode1_stage(&mut cpu);
    assert_eq!(cpu.pipeline.slot(Stage::Decode1).alu.op1, 0);
}

#[test]
fn decode1_requests_stall_when_producer_in_decode2() {
    let mut cpu = cpu_with(Stage::Decode1, sum(2, 2, 9));
    *cpu.pipeline.slot_mut(Stage::Decode2) = Slot::fetched(0, mtr(2, 6));
    decode1_stage(&mut cpu);
    assert_eq!(cpu.pipeline.pending(), PipelineControl::StallAtDecode2);
    assert_eq!(cpu.pipeline.slot(Stage::Decode1).alu.op1, 0);
}

#[test]
fn decode1_counts_forward_from_execute() {
    let mut cpu = cpu_with(Stage::Decode1, rtr(9, 2));
    let mut producer = Slot::fetched(0, sum(0, 0, 2));
    producer.alu.res = 5;
    *cpu.pipeline.slot_mut(Stage::Execute) = producer;
    decode1_stage(&mut cpu);
    assert_eq!(cpu.pipeline.slot(Stage::Decode1).alu.op1, 5);
    assert_eq!(cpu.stats.forwards_execute, 1);
}

#[rstest]
#[case(sub(2, 3, 9))]
#[case(sum(2, 3, 9))]
#[case(jump_less(2, 3, 0))]
fn decode2_loads_second_register(#[case] word: Word) {
    let mut cpu = cpu_with(Stage::Decode2, word);
    decode2_stage(&mut cpu);
    assert_eq!(cpu.pipeline.slot(Stage::Decode2).alu.op2, 300);
}

#[test]
fn decode2_loads_memory_operand_for_mtr() {
    let mut cpu = cpu_with(Stage::Decode2, mtr(9, 6));
    decode2_stage(&mut cpu);
    assert_eq!(cpu.pipeline.slot(Stage::Decode2).alu.op1, 600);
}

#[test]
fn decode2_requests_execute_stall_on_aliased_store() {
    let mut cpu = cpu_with(Stage::Decode2, mtr(9, 6));
    cpu.regs.write(4, 6);
    *cpu.pipeline.slot_mut(Stage::Writeback) = Slot::fetched(0, rtmk(4, 2));
    decode2_stage(&mut cpu);
    assert_eq!(cpu.pipeline.pending(), PipelineControl::StallAtExecute);
}

#[test]
fn bubble_is_not_decoded() {
    let mut cpu = Cpu::default();
    let mut stale = Slot::BUBBLE;
    stale.word = ltm(77, 0);
    *cpu.pipeline.slot_mut(Stage::Decode1) = stale;
    decode1_stage(&mut cpu);
    assert_eq!(cpu.pipeline.slot(Stage::Decode1).alu.op1, 0);
}
