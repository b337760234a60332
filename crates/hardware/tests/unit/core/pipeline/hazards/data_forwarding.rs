//! Data Forwarding Tests: RAW Hazard Resolution.
//!
//! Drives `hazards::detect` directly on hand-built pipelines to check which
//! producer wins and which value is bypassed for register and memory sources.

use pretty_assertions::assert_eq;
use pw700_core::common::RegisterFile;
use pw700_core::core::cpu::memory::DataMemory;
use pw700_core::core::pipeline::hazards::{Resolution, Source, detect};
use pw700_core::core::pipeline::{Pipeline, Slot, Stage};
use pw700_core::isa::Word;

use crate::common::builder::*;

/// Places `word` in `stage` with the given Res.
fn producer(p: &mut Pipeline, stage: Stage, word: Word, res: u16) {
    let mut slot = Slot::fetched(stage.index() as u16, word);
    slot.alu.res = res;
    *p.slot_mut(stage) = slot;
}

fn resolve(p: &Pipeline, consumer: Stage, source: Source) -> Resolution {
    detect(p, &RegisterFile::new(), &DataMemory::new(), consumer, source)
}

// ══════════════════════════════════════════════════════════
// 1. Register sources
// ══════════════════════════════════════════════════════════

#[test]
fn empty_pipeline_reads_register_file() {
    let p = Pipeline::new();
    assert_eq!(resolve(&p, Stage::Decode1, Source::Register(3)), Resolution::Read);
}

#[test]
fn forward_from_execute() {
    let mut p = Pipeline::new();
    producer(&mut p, Stage::Execute, sub(1, 2, 3), 42);
    assert_eq!(
        resolve(&p, Stage::Decode1, Source::Register(3)),
        Resolution::Forward {
            from: Stage::Execute,
            value: 42,
        }
    );
}

#[test]
fn forward_from_writeback() {
    let mut p = Pipeline::new();
    producer(&mut p, Stage::Writeback, rtr(3, 0), 9);
    assert_eq!(
        resolve(&p, Stage::Decode2, Source::Register(3)),
        Resolution::Forward {
            from: Stage::Writeback,
            value: 9,
        }
    );
}

#[test]
fn nearest_producer_wins() {
    let mut p = Pipeline::new();
    producer(&mut p, Stage::Execute, sum(0, 0, 3), 1);
    producer(&mut p, Stage::Writeback, sum(0, 0, 3), 2);
    assert_eq!(
        resolve(&p, Stage::Decode2, Source::Register(3)),
        Resolution::Forward {
            from: Stage::Execute,
            value: 1,
        }
    );
}

#[test]
fn mtrk_forwards_memory_word_at_res() {
    let mut p = Pipeline::new();
    producer(&mut p, Stage::Execute, mtrk(2, 3), 7);
    let mut mem = DataMemory::new();
    mem.write(7, 40);
    assert_eq!(
        detect(&p, &RegisterFile::new(), &mem, Stage::Decode1, Source::Register(2)),
        Resolution::Forward {
            from: Stage::Execute,
            value: 40,
        }
    );
}

#[test]
fn younger_stages_are_not_producers() {
    let mut p = Pipeline::new();
    producer(&mut p, Stage::Decode1, sub(0, 0, 3), 5);
    producer(&mut p, Stage::Fetch, sub(0, 0, 3), 5);
    assert_eq!(resolve(&p, Stage::Decode2, Source::Register(3)), Resolution::Read);
}

#[test]
fn non_writers_are_ignored() {
    let mut p = Pipeline::new();
    producer(&mut p, Stage::Decode2, jump_less(3, 3, 0), 0);
    producer(&mut p, Stage::Execute, rtmk(3, 3), 0);
    producer(&mut p, Stage::Writeback, ltm(3, 3), 3);
    assert_eq!(resolve(&p, Stage::Decode1, Source::Register(3)), Resolution::Read);
}

#[test]
fn bubbles_are_skipped_even_with_stale_word() {
    let mut p = Pipeline::new();
    let mut stale = Slot::BUBBLE;
    stale.word = sub(1, 1, 3);
    *p.slot_mut(Stage::Execute) = stale;
    assert_eq!(resolve(&p, Stage::Decode1, Source::Register(3)), Resolution::Read);
}

// ══════════════════════════════════════════════════════════
// 2. Memory sources
// ══════════════════════════════════════════════════════════

#[test]
fn ltm_forwards_literal_to_memory_reader() {
    let mut p = Pipeline::new();
    producer(&mut p, Stage::Writeback, ltm(11, 4), 11);
    assert_eq!(
        resolve(&p, Stage::Decode2, Source::Memory(4)),
        Resolution::Forward {
            from: Stage::Writeback,
            value: 11,
        }
    );
}

#[test]
fn ltm_to_other_address_does_not_match() {
    let mut p = Pipeline::new();
    producer(&mut p, Stage::Execute, ltm(11, 5), 11);
    assert_eq!(resolve(&p, Stage::Decode2, Source::Memory(4)), Resolution::Read);
}

#[test]
fn register_writer_does_not_match_memory_source() {
    let mut p = Pipeline::new();
    producer(&mut p, Stage::Execute, mtr(4, 4), 0);
    assert_eq!(resolve(&p, Stage::Decode2, Source::Memory(4)), Resolution::Read);
}
