//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Compare register with memory
//! - BIT: Bit test
//!
//! Decimal mode is ignored: ADC and SBC are always binary.

use super::Flow;
use crate::{AddressingError, AddressingMode, MemoryBus, StatusFlags, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// - C: bit 8 of the 9-bit sum
/// - V: set when both inputs share a sign the result does not,
///   `(A ^ result) & (M ^ result) & 0x80`
/// - Z, N: from the 8-bit result
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    let value = cpu.read_operand(mode)?;

    let a = cpu.a;
    let carry_in = u16::from(cpu.status.is_set(StatusFlags::CARRY));
    let sum = u16::from(a) + u16::from(value) + carry_in;
    let result = sum as u8;

    cpu.status.assign(StatusFlags::CARRY, sum & 0x100 != 0);
    cpu.status
        .assign(StatusFlags::OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);

    cpu.a = result;
    cpu.status.update_zero_and_negative(result);

    Ok(Flow::Next)
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - M - (1 - C)` in a widened integer.
///
/// - C: set when no borrow occurred (bit 8 of the difference is clear)
/// - V: `(A ^ result) & (!M ^ result) & 0x80`
/// - Z, N: from the 8-bit result
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    let value = cpu.read_operand(mode)?;

    let a = cpu.a;
    let borrow = u16::from(!cpu.status.is_set(StatusFlags::CARRY));
    let diff = u16::from(a)
        .wrapping_sub(u16::from(value))
        .wrapping_sub(borrow);
    let result = diff as u8;

    cpu.status.assign(StatusFlags::CARRY, diff & 0x100 == 0);
    cpu.status
        .assign(StatusFlags::OVERFLOW, (a ^ result) & (!value ^ result) & 0x80 != 0);

    cpu.a = result;
    cpu.status.update_zero_and_negative(result);

    Ok(Flow::Next)
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    let value = cpu.read_operand(mode)?;
    cpu.a &= value;
    cpu.status.update_zero_and_negative(cpu.a);
    Ok(Flow::Next)
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    let value = cpu.read_operand(mode)?;
    cpu.a |= value;
    cpu.status.update_zero_and_negative(cpu.a);
    Ok(Flow::Next)
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    let value = cpu.read_operand(mode)?;
    cpu.a ^= value;
    cpu.status.update_zero_and_negative(cpu.a);
    Ok(Flow::Next)
}

pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    let register = cpu.a;
    compare(cpu, mode, register)
}

pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    let register = cpu.x;
    compare(cpu, mode, register)
}

pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    let register = cpu.y;
    compare(cpu, mode, register)
}

/// Shared CMP/CPX/CPY logic.
///
/// - C: set when `register >= M` (no borrow)
/// - Z, N: from `register - M` truncated to 8 bits
///
/// Memory is never written.
fn compare<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    register: u8,
) -> Result<Flow, AddressingError> {
    let value = cpu.read_operand(mode)?;

    cpu.status.assign(StatusFlags::CARRY, register >= value);
    cpu.status.update_zero_and_negative(register.wrapping_sub(value));

    Ok(Flow::Next)
}

/// Executes the BIT (Bit Test) instruction.
///
/// - Z: set when `A & M == 0`
/// - V: bit 6 of M
/// - N: bit 7 of M
///
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    let value = cpu.read_operand(mode)?;

    cpu.status.assign(StatusFlags::ZERO, cpu.a & value == 0);
    cpu.status.assign(StatusFlags::OVERFLOW, value & 0x40 != 0);
    cpu.status.assign(StatusFlags::NEGATIVE, value & 0x80 != 0);

    Ok(Flow::Next)
}
