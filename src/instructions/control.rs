//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR: Jump to subroutine
//! - RTS: Return from subroutine
//! - RTI: Return from interrupt
//!
//! BRK and NOP have no state to change and are handled in the dispatcher.

use super::Flow;
use crate::{AddressingError, AddressingMode, MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234
/// - Indirect (0x6C): JMP ($1234)
///
/// The indirect form keeps the NMOS page-wrap bug: with a pointer at $10FF
/// the high byte of the target comes from $1000, not $1100. The resolver
/// reproduces it.
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    cpu.pc = cpu.operand_address(mode)?;
    Ok(Flow::Jump)
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (operand start
/// + 1), high byte first, then jumps. RTS adds the missing 1 back.
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, AddressingError> {
    let target = cpu.operand_address(mode)?;
    let return_address = cpu.pc.wrapping_add(1);

    cpu.stack_push_u16(return_address);
    cpu.pc = target;

    Ok(Flow::Jump)
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.pc = cpu.stack_pop_u16().wrapping_add(1);
    Flow::Jump
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pops the status register (B cleared, B2 set, as PLP does) and then the
/// program counter. Unlike RTS, the popped address is used as is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    super::stack::restore_status(cpu);
    cpu.pc = cpu.stack_pop_u16();
    Flow::Jump
}
