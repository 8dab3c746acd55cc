//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! All but TXS update Z and N from the destination.

use super::Flow;
use crate::{MemoryBus, CPU};

pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.x = cpu.a;
    cpu.status.update_zero_and_negative(cpu.x);
    Flow::Next
}

pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.y = cpu.a;
    cpu.status.update_zero_and_negative(cpu.y);
    Flow::Next
}

pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.a = cpu.x;
    cpu.status.update_zero_and_negative(cpu.a);
    Flow::Next
}

pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.a = cpu.y;
    cpu.status.update_zero_and_negative(cpu.a);
    Flow::Next
}

pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.x = cpu.sp;
    cpu.status.update_zero_and_negative(cpu.x);
    Flow::Next
}

/// TXS: the stack pointer is not flag-observed, so no flags change.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.sp = cpu.x;
    Flow::Next
}
