//! # Branch Instructions
//!
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS: each tests one status flag.
//!
//! The operand is a signed 8-bit displacement relative to the address after the
//! branch. When the condition holds, `PC = PC + 1 + displacement` (PC points at
//! the displacement byte on entry). No flags are affected.

use super::Flow;
use crate::{MemoryBus, StatusFlags, CPU};

/// Branches when `flag` is in the `expected` state; otherwise falls through to
/// the length-based advance.
pub(crate) fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, flag: StatusFlags, expected: bool) -> Flow {
    if cpu.status.is_set(flag) != expected {
        return Flow::Next;
    }

    let displacement = cpu.mem_read(cpu.pc) as i8;
    cpu.pc = cpu
        .pc
        .wrapping_add(1)
        .wrapping_add_signed(i16::from(displacement));

    Flow::Jump
}
