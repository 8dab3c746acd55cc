//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each has an accumulator form and memory forms that share the same bit logic.
//! The bit shifted out lands in C; Z and N follow the result.

use super::{modify_operand, Flow};
use crate::{AddressingError, AddressingMode, MemoryBus, StatusFlags, CPU};

/// Executes the ASL instruction: bit 7 into C, 0 into bit 0.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    modify_operand(cpu, mode, |cpu, value| {
        cpu.status.assign(StatusFlags::CARRY, value & 0x80 != 0);
        value << 1
    })?;
    Ok(Flow::Next)
}

/// Executes the LSR instruction: bit 0 into C, 0 into bit 7.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    modify_operand(cpu, mode, |cpu, value| {
        cpu.status.assign(StatusFlags::CARRY, value & 0x01 != 0);
        value >> 1
    })?;
    Ok(Flow::Next)
}

/// Executes the ROL instruction: bit 7 into C, the prior C into bit 0.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    modify_operand(cpu, mode, |cpu, value| {
        let carry_in = u8::from(cpu.status.is_set(StatusFlags::CARRY));
        cpu.status.assign(StatusFlags::CARRY, value & 0x80 != 0);
        (value << 1) | carry_in
    })?;
    Ok(Flow::Next)
}

/// Executes the ROR instruction: bit 0 into C, the prior C into bit 7.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    modify_operand(cpu, mode, |cpu, value| {
        let carry_in = u8::from(cpu.status.is_set(StatusFlags::CARRY));
        cpu.status.assign(StatusFlags::CARRY, value & 0x01 != 0);
        (value >> 1) | (carry_in << 7)
    })?;
    Ok(Flow::Next)
}
