//! # 6502 Instruction Implementations
//!
//! Each instruction is a standalone function taking the CPU and the addressing
//! mode from its opcode descriptor. Handlers are entered with PC pointing at the
//! first operand byte and report through [`Flow`] whether they redirected
//! control; the execution loop skips the operand bytes otherwise.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{AddressingError, AddressingMode, MemoryBus, Mnemonic, Opcode, StatusFlags, CPU};

/// What the execution loop does with PC after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Skip the operand bytes and continue with the next instruction.
    Next,
    /// The handler set PC itself.
    Jump,
    /// Stop running (BRK).
    Halt,
}

/// Executes the instruction described by `opcode`.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: &Opcode,
) -> Result<Flow, AddressingError> {
    let mode = opcode.mode;

    match opcode.mnemonic {
        Mnemonic::ADC => alu::execute_adc(cpu, mode),
        Mnemonic::SBC => alu::execute_sbc(cpu, mode),
        Mnemonic::AND => alu::execute_and(cpu, mode),
        Mnemonic::ORA => alu::execute_ora(cpu, mode),
        Mnemonic::EOR => alu::execute_eor(cpu, mode),
        Mnemonic::CMP => alu::execute_cmp(cpu, mode),
        Mnemonic::CPX => alu::execute_cpx(cpu, mode),
        Mnemonic::CPY => alu::execute_cpy(cpu, mode),
        Mnemonic::BIT => alu::execute_bit(cpu, mode),

        Mnemonic::BCC => Ok(branches::branch_if(cpu, StatusFlags::CARRY, false)),
        Mnemonic::BCS => Ok(branches::branch_if(cpu, StatusFlags::CARRY, true)),
        Mnemonic::BNE => Ok(branches::branch_if(cpu, StatusFlags::ZERO, false)),
        Mnemonic::BEQ => Ok(branches::branch_if(cpu, StatusFlags::ZERO, true)),
        Mnemonic::BPL => Ok(branches::branch_if(cpu, StatusFlags::NEGATIVE, false)),
        Mnemonic::BMI => Ok(branches::branch_if(cpu, StatusFlags::NEGATIVE, true)),
        Mnemonic::BVC => Ok(branches::branch_if(cpu, StatusFlags::OVERFLOW, false)),
        Mnemonic::BVS => Ok(branches::branch_if(cpu, StatusFlags::OVERFLOW, true)),

        Mnemonic::ASL => shifts::execute_asl(cpu, mode),
        Mnemonic::LSR => shifts::execute_lsr(cpu, mode),
        Mnemonic::ROL => shifts::execute_rol(cpu, mode),
        Mnemonic::ROR => shifts::execute_ror(cpu, mode),

        Mnemonic::LDA => load_store::execute_lda(cpu, mode),
        Mnemonic::LDX => load_store::execute_ldx(cpu, mode),
        Mnemonic::LDY => load_store::execute_ldy(cpu, mode),
        Mnemonic::STA => load_store::execute_sta(cpu, mode),
        Mnemonic::STX => load_store::execute_stx(cpu, mode),
        Mnemonic::STY => load_store::execute_sty(cpu, mode),

        Mnemonic::INC => inc_dec::execute_inc(cpu, mode),
        Mnemonic::DEC => inc_dec::execute_dec(cpu, mode),
        Mnemonic::INX => Ok(inc_dec::execute_inx(cpu)),
        Mnemonic::INY => Ok(inc_dec::execute_iny(cpu)),
        Mnemonic::DEX => Ok(inc_dec::execute_dex(cpu)),
        Mnemonic::DEY => Ok(inc_dec::execute_dey(cpu)),

        Mnemonic::JMP => control::execute_jmp(cpu, mode),
        Mnemonic::JSR => control::execute_jsr(cpu, mode),
        Mnemonic::RTS => Ok(control::execute_rts(cpu)),
        Mnemonic::RTI => Ok(control::execute_rti(cpu)),
        Mnemonic::BRK => Ok(Flow::Halt),
        Mnemonic::NOP => Ok(Flow::Next),

        Mnemonic::PHA => Ok(stack::execute_pha(cpu)),
        Mnemonic::PHP => Ok(stack::execute_php(cpu)),
        Mnemonic::PLA => Ok(stack::execute_pla(cpu)),
        Mnemonic::PLP => Ok(stack::execute_plp(cpu)),

        Mnemonic::CLC => Ok(flags::assign(cpu, StatusFlags::CARRY, false)),
        Mnemonic::SEC => Ok(flags::assign(cpu, StatusFlags::CARRY, true)),
        Mnemonic::CLI => Ok(flags::assign(cpu, StatusFlags::INTERRUPT_DISABLE, false)),
        Mnemonic::SEI => Ok(flags::assign(cpu, StatusFlags::INTERRUPT_DISABLE, true)),
        Mnemonic::CLD => Ok(flags::assign(cpu, StatusFlags::DECIMAL_MODE, false)),
        Mnemonic::SED => Ok(flags::assign(cpu, StatusFlags::DECIMAL_MODE, true)),
        Mnemonic::CLV => Ok(flags::assign(cpu, StatusFlags::OVERFLOW, false)),

        Mnemonic::TAX => Ok(transfer::execute_tax(cpu)),
        Mnemonic::TAY => Ok(transfer::execute_tay(cpu)),
        Mnemonic::TXA => Ok(transfer::execute_txa(cpu)),
        Mnemonic::TYA => Ok(transfer::execute_tya(cpu)),
        Mnemonic::TSX => Ok(transfer::execute_tsx(cpu)),
        Mnemonic::TXS => Ok(transfer::execute_txs(cpu)),
    }
}

/// Read-modify-write on a memory operand. Updates Z and N from the result.
pub(crate) fn modify_memory<M, F>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    op: F,
) -> Result<u8, AddressingError>
where
    M: MemoryBus,
    F: FnOnce(&mut CPU<M>, u8) -> u8,
{
    let addr = cpu.operand_address(mode)?;
    let value = cpu.mem_read(addr);
    let result = op(cpu, value);
    cpu.mem_write(addr, result);
    cpu.status.update_zero_and_negative(result);
    Ok(result)
}

/// Read-modify-write on the accumulator or a memory operand, for the shift
/// family. Both paths share `op`.
pub(crate) fn modify_operand<M, F>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    op: F,
) -> Result<u8, AddressingError>
where
    M: MemoryBus,
    F: FnOnce(&mut CPU<M>, u8) -> u8,
{
    if mode != AddressingMode::Accumulator {
        return modify_memory(cpu, mode, op);
    }

    let value = cpu.a;
    let result = op(cpu, value);
    cpu.a = result;
    cpu.status.update_zero_and_negative(result);
    Ok(result)
}
