//! Data Hazard Detection and Forwarding.
//!
//! This module keeps overlapping instructions consistent with one-at-a-time
//! execution. It provides:
//! 1. **Producer Search:** Scans the slots after the consumer, nearest first, for
//!    the youngest older instruction that writes the operand's location.
//! 2. **Operand Forwarding:** A producer in Execute or Writeback has computed Res
//!    this cycle; its value is bypassed (`mem[Res]` for an MTRK producer).
//! 3. **Stall Detection:** A producer still in Decode2 has no Res yet; the
//!    consumer must wait a cycle.
//! 4. **Store Aliasing:** An MTR whose address matches the register-file value of
//!    a pending RTMK's address register waits until the store has left.
//!
//! Stages run back to front within a cycle, so Execute's Res and Writeback's
//! commit are both visible by the time the decode stages consult this unit.

use crate::common::RegisterFile;
use crate::common::constants::ADDR_MASK;
use crate::core::Cpu;
use crate::core::cpu::memory::DataMemory;
use crate::isa::Instruction;

use super::latches::Pipeline;
use super::signals::Stage;

/// Location an operand is read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    /// A general-purpose register.
    Register(usize),
    /// A data memory word.
    Memory(u16),
}

/// Outcome of a hazard check for one operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// No in-flight producer; read architectural state.
    Read,
    /// Bypass a value from a later slot.
    Forward {
        /// Slot holding the producer.
        from: Stage,
        /// Value the consumer must see.
        value: u16,
    },
    /// The producer has not computed its result yet.
    Stall {
        /// Slot holding the producer.
        producer: Stage,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Hit {
    Direct,
    Aliased,
}

/// Classifies `inst` as a writer of `source`.
fn hit(inst: &Instruction, source: Source, regs: &RegisterFile) -> Option<Hit> {
    match (source, *inst) {
        (Source::Register(r), i) if i.dest_reg() == Some(r) => Some(Hit::Direct),
        (Source::Memory(a), Instruction::Ltm { addr, .. }) if addr == a => Some(Hit::Direct),
        (Source::Memory(a), Instruction::Rtmk { addr_reg, .. })
            if regs.read(addr_reg) & ADDR_MASK == a =>
        {
            Some(Hit::Aliased)
        }
        _ => None,
    }
}

/// Decides how a consumer in `consumer` obtains the value at `source`.
///
/// # Arguments
///
/// * `pipeline` - Current pipeline contents; Execute must already hold this cycle's Res.
/// * `regs` - Register file, used for the store aliasing check.
/// * `mem` - Data memory, used to resolve values forwarded from MTRK.
/// * `consumer` - Stage reading the operand.
/// * `source` - Location being read.
///
/// # Returns
///
/// The [`Resolution`] for the nearest producer, or `Read` if none is in flight.
pub fn detect(
    pipeline: &Pipeline,
    regs: &RegisterFile,
    mem: &DataMemory,
    consumer: Stage,
    source: Source,
) -> Resolution {
    for stage in consumer.later() {
        let slot = pipeline.slot(stage);
        if slot.is_bubble() {
            continue;
        }
        let inst = slot.instruction();
        match hit(&inst, source, regs) {
            None => {}
            Some(Hit::Aliased) => return Resolution::Stall { producer: stage },
            Some(Hit::Direct) if stage < Stage::Execute => {
                return Resolution::Stall { producer: stage };
            }
            Some(Hit::Direct) => {
                let value = match inst {
                    Instruction::Mtrk { .. } => mem.read(slot.alu.res),
                    _ => slot.alu.res,
                };
                return Resolution::Forward { from: stage, value };
            }
        }
    }
    Resolution::Read
}

/// Reads an operand for a decode stage, applying forwarding.
///
/// Updates forwarding statistics and emits trace events.
///
/// # Returns
///
/// `Some(value)` when the operand is available, `None` when the consumer must stall.
pub fn read_operand(cpu: &mut Cpu, consumer: Stage, source: Source) -> Option<u16> {
    match detect(&cpu.pipeline, &cpu.regs, &cpu.mem, consumer, source) {
        Resolution::Read => Some(match source {
            Source::Register(r) => cpu.regs.read(r),
            Source::Memory(a) => cpu.mem.read(a),
        }),
        Resolution::Forward { from, value } => {
            match from {
                Stage::Execute => cpu.stats.forwards_execute += 1,
                _ => cpu.stats.forwards_writeback += 1,
            }
            tracing::trace!(
                consumer = consumer.name(),
                from = from.name(),
                ?source,
                value,
                "forward"
            );
            Some(value)
        }
        Resolution::Stall { producer } => {
            tracing::trace!(
                consumer = consumer.name(),
                producer = producer.name(),
                ?source,
                "stall"
            );
            None
        }
    }
}
