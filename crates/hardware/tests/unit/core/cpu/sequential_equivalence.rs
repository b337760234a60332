//! Sequential Equivalence Properties.
//!
//! Random programs built to provoke forwarding, stalls and squashes must end
//! in the same registers and memory as the one-at-a-time reference, and must
//! commit exactly the instructions the reference executes, in order.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use pw700_core::isa::{Instruction, Word};

use crate::common::harness::TestContext;
use crate::common::reference::Reference;

/// Straight-line instructions over a small register and address set so that
/// dependences are frequent.
fn straight_line() -> impl Strategy<Value = Instruction> {
    let reg = 0usize..5;
    let addr = 0u16..5;
    prop_oneof![
        Just(Instruction::Nop),
        (0u16..1024, addr.clone()).prop_map(|(literal, addr)| Instruction::Ltm { literal, addr }),
        (reg.clone(), addr).prop_map(|(reg, addr)| Instruction::Mtr { reg, addr }),
        (reg.clone(), reg.clone()).prop_map(|(dst, src)| Instruction::Rtr { dst, src }),
        (reg.clone(), reg.clone(), reg.clone())
            .prop_map(|(lhs, rhs, dst)| Instruction::Sub { lhs, rhs, dst }),
        (reg.clone(), reg.clone(), reg.clone())
            .prop_map(|(lhs, rhs, dst)| Instruction::Sum { lhs, rhs, dst }),
        (reg.clone(), reg.clone()).prop_map(|(dst, addr_reg)| Instruction::Mtrk { dst, addr_reg }),
        (reg.clone(), reg).prop_map(|(addr_reg, src)| Instruction::Rtmk { addr_reg, src }),
    ]
}

/// Upper bound on cycles for `len` instructions: fill, two stall cycles per
/// instruction, and a four-slot squash per jump.
fn budget(len: usize) -> u64 {
    (len as u64) * 7 + 10
}

fn run_pipelined(words: &[Word]) -> TestContext {
    let mut ctx = TestContext::new().load_program(words);
    ctx.run(budget(words.len()));
    ctx
}

fn assert_matches(ctx: &TestContext, reference: &Reference) {
    assert_eq!(ctx.cpu().registers(), &reference.regs);
    assert_eq!(ctx.cpu().memory(), reference.mem.as_slice());
    let committed: Vec<u16> = ctx
        .committed_pcs()
        .into_iter()
        .take(reference.trace.len())
        .collect();
    assert_eq!(committed, reference.trace);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn straight_line_programs_match_reference(
        program in prop::collection::vec(straight_line(), 1..24),
    ) {
        let words: Vec<Word> = program.iter().map(Instruction::encode).collect();
        let mut reference = Reference::new();
        reference.run(&words);

        let ctx = run_pipelined(&words);
        assert_matches(&ctx, &reference);
        prop_assert_eq!(
            ctx.committed_pcs()[..words.len()].to_vec(),
            (0..words.len() as u16).collect::<Vec<_>>()
        );
    }

    /// Forward-only jumps terminate, so the reference can run to completion.
    #[test]
    fn forward_jumps_match_reference(
        body in prop::collection::vec((straight_line(), 0u8..4, 0usize..4, 0usize..4), 1..16),
    ) {
        let len = body.len();
        let words: Vec<Word> = body
            .iter()
            .enumerate()
            .map(|(i, &(inst, kind, lhs, rhs))| {
                let target = (i + 1 + usize::from(kind)).min(len) as u16;
                let inst = match kind {
                    0 => Instruction::Jmp { target },
                    1 => Instruction::JumpLess { lhs, rhs, target },
                    _ => inst,
                };
                inst.encode()
            })
            .collect();
        let mut reference = Reference::new();
        reference.run(&words);

        let ctx = run_pipelined(&words);
        assert_matches(&ctx, &reference);
    }
}
