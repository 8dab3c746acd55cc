//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA, LDX, LDY: Load a register from memory, updating Z and N
//! - STA, STX, STY: Store a register to memory, no flags affected

use super::Flow;
use crate::{AddressingError, AddressingMode, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    cpu.a = cpu.read_operand(mode)?;
    cpu.status.update_zero_and_negative(cpu.a);
    Ok(Flow::Next)
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    cpu.x = cpu.read_operand(mode)?;
    cpu.status.update_zero_and_negative(cpu.x);
    Ok(Flow::Next)
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    cpu.y = cpu.read_operand(mode)?;
    cpu.status.update_zero_and_negative(cpu.y);
    Ok(Flow::Next)
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    let addr = cpu.operand_address(mode)?;
    cpu.mem_write(addr, cpu.a);
    Ok(Flow::Next)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    let addr = cpu.operand_address(mode)?;
    cpu.mem_write(addr, cpu.x);
    Ok(Flow::Next)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    let addr = cpu.operand_address(mode)?;
    cpu.mem_write(addr, cpu.y);
    Ok(Flow::Next)
}
