//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The push/pop primitives themselves live in `crate::stack`.

use super::Flow;
use crate::{MemoryBus, StatusFlags, StatusRegister, CPU};

/// Executes the PHA (Push Accumulator) instruction. No flags affected.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.stack_push(cpu.a);
    Flow::Next
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy has B and B2 set; the live register is unchanged.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    let pushed = cpu.status.flags() | StatusFlags::BREAK | StatusFlags::BREAK2;
    cpu.stack_push(pushed.bits());
    Flow::Next
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.a = cpu.stack_pop();
    cpu.status.update_zero_and_negative(cpu.a);
    Flow::Next
}

/// Executes the PLP (Pull Processor Status) instruction.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    restore_status(cpu);
    Flow::Next
}

/// Pops the status register with B cleared and B2 set.
pub(crate) fn restore_status<M: MemoryBus>(cpu: &mut CPU<M>) {
    let mut status = StatusRegister::from_bits(cpu.stack_pop());
    status.clear(StatusFlags::BREAK);
    status.set(StatusFlags::BREAK2);
    cpu.status = status;
}
