//! Assembler Tests.
//!
//! Covers tokenizing, comments, case handling, every error kind with its line
//! number, the program listing format, and assembling disassembler output.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use pw700_core::common::AsmError;
use pw700_core::isa::asm::{assemble, assemble_line, to_listing};
use pw700_core::isa::disasm::disassemble;
use pw700_core::isa::{Instruction, Word};
use pw700_core::sim::loader::parse_line;
use rstest::rstest;

use crate::common::builder::*;

// ──────────────────────────────────────────────────────────
// 1. Accepted source
// ──────────────────────────────────────────────────────────

#[test]
fn assembles_small_program() {
    let src = "LTM 5 0\nMTR 1 0\nSUB 1 1 2\n";
    assert_eq!(assemble(src).unwrap(), vec![ltm(5, 0), mtr(1, 0), sub(1, 1, 2)]);
}

#[rstest]
#[case("ltm 5 0")]
#[case("Ltm 5 0")]
#[case("  LTM   5   0  ")]
#[case("LTM 5, 0")]
#[case("LTM 5 0 ; store five")]
#[case("\tLTM\t5\t0")]
fn separators_case_and_comments(#[case] line: &str) {
    assert_eq!(assemble_line(line, 1).unwrap(), Some(ltm(5, 0)));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("; only a comment")]
fn blank_lines_produce_nothing(#[case] line: &str) {
    assert_eq!(assemble_line(line, 1).unwrap(), None);
}

#[test]
fn jump_less_mnemonic_keeps_underscore() {
    assert_eq!(assemble_line("JUMP_LESS 0 1 5", 1).unwrap(), Some(jump_less(0, 1, 5)));
}

#[test]
fn field_maxima_are_accepted() {
    let src = "LTM 1023 1023\nSUM 15 15 15\nJMP 1023";
    assert_eq!(
        assemble(src).unwrap(),
        vec![ltm(1023, 1023), sum(15, 15, 15), jmp(1023)]
    );
}

// ──────────────────────────────────────────────────────────
// 2. Errors
// ──────────────────────────────────────────────────────────

#[test]
fn unknown_mnemonic_reports_physical_line() {
    let err = assemble("; header\n\nLTM 1 2\nMUL 1 2 3\n").unwrap_err();
    assert_eq!(
        err,
        AsmError::UnknownMnemonic {
            line: 4,
            mnemonic: "MUL".to_string(),
        }
    );
    assert_eq!(err.line(), 4);
}

#[rstest]
#[case("NOP 1", "NOP", 0, 1)]
#[case("LTM 5", "LTM", 2, 1)]
#[case("SUB 1 2", "SUB", 3, 2)]
#[case("JMP", "JMP", 1, 0)]
#[case("JUMP_LESS 1 2 3 4", "JUMP_LESS", 3, 4)]
fn wrong_operand_count(
    #[case] line: &str,
    #[case] mnemonic: &'static str,
    #[case] expected: usize,
    #[case] found: usize,
) {
    assert_eq!(
        assemble_line(line, 7).unwrap_err(),
        AsmError::OperandCount {
            line: 7,
            mnemonic,
            expected,
            found,
        }
    );
}

#[rstest]
#[case("RTR 16 0", 16, 15)]
#[case("SUM 0 0 99", 99, 15)]
#[case("LTM 1024 0", 1024, 1023)]
#[case("MTR 0 5000", 5000, 1023)]
#[case("JMP 99999999999", 99_999_999_999, 1023)]
fn out_of_range_operands(#[case] line: &str, #[case] value: u64, #[case] max: u32) {
    match assemble_line(line, 2).unwrap_err() {
        AsmError::OutOfRange { line: 2, value: v, max: m, .. } => {
            assert_eq!((v, m), (value, max));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_numeric_operand() {
    assert_eq!(
        assemble_line("MTR r1 0", 3).unwrap_err(),
        AsmError::InvalidOperand {
            line: 3,
            mnemonic: "MTR",
            text: "r1".to_string(),
        }
    );
}

#[test]
fn error_message_names_line_and_mnemonic() {
    let msg = assemble("NOP\nLTM 5").unwrap_err().to_string();
    assert_eq!(
        msg,
        "unexpected amount of operands for LTM in line 2: expected 2, got 1"
    );
}

// ──────────────────────────────────────────────────────────
// 3. Listing format
// ──────────────────────────────────────────────────────────

#[test]
fn listing_is_twenty_four_binary_digits_per_line() {
    let listing = to_listing(&[ltm(5, 0), jmp(3)]);
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(
        lines,
        vec!["000100000001010000000000", "100000000000000000000011"]
    );
}

#[test]
fn listing_terminates_every_line_and_drops_high_bits() {
    assert_eq!(to_listing(&[]), "");
    assert_eq!(
        to_listing(&[0x0100_0001, 0]),
        "000000000000000000000001\n000000000000000000000000\n"
    );
}

#[test]
fn listing_lines_parse_back() {
    let words = vec![mtrk(2, 3), sub(2, 4, 5), nop()];
    let parsed: Vec<Word> = to_listing(&words)
        .lines()
        .map(|l| parse_line(l).unwrap())
        .collect();
    assert_eq!(parsed, words);
}

// ──────────────────────────────────────────────────────────
// 4. Disassembler output is valid source
// ──────────────────────────────────────────────────────────

fn any_instruction() -> impl Strategy<Value = Instruction> {
    let reg = 0usize..16;
    let addr = 0u16..1024;
    prop_oneof![
        Just(Instruction::Nop),
        (addr.clone(), addr.clone()).prop_map(|(literal, addr)| Instruction::Ltm { literal, addr }),
        (reg.clone(), addr.clone()).prop_map(|(reg, addr)| Instruction::Mtr { reg, addr }),
        (reg.clone(), reg.clone()).prop_map(|(dst, src)| Instruction::Rtr { dst, src }),
        (reg.clone(), reg.clone(), reg.clone())
            .prop_map(|(lhs, rhs, dst)| Instruction::Sub { lhs, rhs, dst }),
        (reg.clone(), reg.clone(), addr.clone())
            .prop_map(|(lhs, rhs, target)| Instruction::JumpLess { lhs, rhs, target }),
        (reg.clone(), reg.clone()).prop_map(|(dst, addr_reg)| Instruction::Mtrk { dst, addr_reg }),
        (reg.clone(), reg.clone()).prop_map(|(addr_reg, src)| Instruction::Rtmk { addr_reg, src }),
        addr.prop_map(|target| Instruction::Jmp { target }),
        (reg.clone(), reg.clone(), reg)
            .prop_map(|(lhs, rhs, dst)| Instruction::Sum { lhs, rhs, dst }),
    ]
}

proptest! {
    #[test]
    fn disassembly_reassembles_to_same_word(inst in any_instruction()) {
        let word = inst.encode();
        let text = disassemble(word);
        prop_assert_eq!(assemble_line(&text, 1).unwrap(), Some(word));
    }
}
