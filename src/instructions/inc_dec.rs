//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC, DEC: Memory operand
//! - INX, INY, DEX, DEY: Index registers
//!
//! All wrap modulo 256 and set Z and N from the 8-bit result.

use super::{modify_memory, Flow};
use crate::{AddressingError, AddressingMode, MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    modify_memory(cpu, mode, |_, value| value.wrapping_add(1))?;
    Ok(Flow::Next)
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    modify_memory(cpu, mode, |_, value| value.wrapping_sub(1))?;
    Ok(Flow::Next)
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.update_zero_and_negative(cpu.x);
    Flow::Next
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.update_zero_and_negative(cpu.y);
    Flow::Next
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.update_zero_and_negative(cpu.x);
    Flow::Next
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.update_zero_and_negative(cpu.y);
    Flow::Next
}
