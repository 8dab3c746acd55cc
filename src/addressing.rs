//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns a mode plus the operand bytes into an effective
//! address.
//!
//! The resolver is handed the program counter pointing at the first operand
//! byte (one past the opcode). Modes without a memory operand (`Implicit`,
//! `Accumulator`, `Relative`) are handled inside their instruction handlers;
//! reaching the resolver with one of them is an [`AddressingError`].

use thiserror::Error;

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register (full 16-bit addition).
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register (full 16-bit addition).
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Total instruction length in bytes, opcode included.
    pub const fn instruction_len(self) -> u8 {
        self.operand_bytes() + 1
    }

    /// Whether the generic resolver can produce an effective address for this mode.
    pub const fn has_memory_operand(self) -> bool {
        !matches!(
            self,
            AddressingMode::Implicit | AddressingMode::Accumulator | AddressingMode::Relative
        )
    }
}

/// Raised when an addressing mode without a memory operand reaches the resolver.
///
/// This can only come from a malformed opcode table entry, never from program data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressingError {
    #[error("addressing mode {0:?} has no memory operand")]
    NoMemoryOperand(AddressingMode),
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves the effective address for `mode` using the operand bytes at the
    /// current program counter. Only meaningful inside an instruction handler,
    /// where PC already points past the opcode.
    pub(crate) fn operand_address(&self, mode: AddressingMode) -> Result<u16, AddressingError> {
        self.resolve_address(mode, self.pc)
    }

    /// Resolves the effective address for `mode` with the operand starting at `pc`.
    ///
    /// Reads memory but never writes it. `pc` is the address of the first
    /// operand byte, one past the opcode.
    ///
    /// Zero page,X and zero page,Y wrap within the zero page as the hardware
    /// does, rather than carrying into page one.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{AddressingMode, CPU};
    ///
    /// let mut cpu = CPU::new();
    /// cpu.mem_write(0x0300, 0xFF); // JMP ($30FF)
    /// cpu.mem_write(0x0301, 0x30);
    /// cpu.mem_write(0x30FF, 0x80);
    /// cpu.mem_write(0x3000, 0x50); // high byte fetched from the same page
    /// cpu.mem_write(0x3100, 0x40);
    ///
    /// assert_eq!(cpu.resolve_address(AddressingMode::Indirect, 0x0300), Ok(0x5080));
    /// assert!(cpu.resolve_address(AddressingMode::Relative, 0x0300).is_err());
    /// ```
    pub fn resolve_address(&self, mode: AddressingMode, pc: u16) -> Result<u16, AddressingError> {
        let addr = match mode {
            AddressingMode::Immediate => pc,
            AddressingMode::ZeroPage => u16::from(self.mem_read(pc)),
            AddressingMode::ZeroPageX => u16::from(self.mem_read(pc).wrapping_add(self.x)),
            AddressingMode::ZeroPageY => u16::from(self.mem_read(pc).wrapping_add(self.y)),
            AddressingMode::Absolute => self.mem_read_u16(pc),
            AddressingMode::AbsoluteX => self.mem_read_u16(pc).wrapping_add(u16::from(self.x)),
            AddressingMode::AbsoluteY => self.mem_read_u16(pc).wrapping_add(u16::from(self.y)),
            AddressingMode::Indirect => {
                let ptr = self.mem_read_u16(pc);
                // NMOS bug: the high byte never carries into the next page
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                u16::from_le_bytes([self.mem_read(ptr), self.mem_read(hi_addr)])
            }
            AddressingMode::IndirectX => {
                let ptr = self.mem_read(pc).wrapping_add(self.x);
                self.read_zero_page_u16(ptr)
            }
            AddressingMode::IndirectY => {
                let base = self.read_zero_page_u16(self.mem_read(pc));
                base.wrapping_add(u16::from(self.y))
            }
            AddressingMode::Implicit | AddressingMode::Accumulator | AddressingMode::Relative => {
                return Err(AddressingError::NoMemoryOperand(mode));
            }
        };

        Ok(addr)
    }

    /// Reads a little-endian pointer from the zero page; `$FF` takes its high byte from `$00`.
    fn read_zero_page_u16(&self, ptr: u8) -> u16 {
        let lo = self.mem_read(u16::from(ptr));
        let hi = self.mem_read(u16::from(ptr.wrapping_add(1)));
        u16::from_le_bytes([lo, hi])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_lengths() {
        assert_eq!(AddressingMode::Implicit.instruction_len(), 1);
        assert_eq!(AddressingMode::Accumulator.instruction_len(), 1);
        assert_eq!(AddressingMode::Immediate.instruction_len(), 2);
        assert_eq!(AddressingMode::Relative.instruction_len(), 2);
        assert_eq!(AddressingMode::IndirectY.instruction_len(), 2);
        assert_eq!(AddressingMode::Absolute.instruction_len(), 3);
        assert_eq!(AddressingMode::Indirect.instruction_len(), 3);
    }

    #[test]
    fn test_immediate_is_the_program_counter() {
        let cpu = CPU::new();
        assert_eq!(cpu.resolve_address(AddressingMode::Immediate, 0x8001), Ok(0x8001));
    }

    #[test]
    fn test_zero_page_x_wraps_within_zero_page() {
        let mut cpu = CPU::new();
        cpu.mem_write(0x8001, 0xF0);
        cpu.set_x(0x20);

        assert_eq!(cpu.resolve_address(AddressingMode::ZeroPageX, 0x8001), Ok(0x0010));
    }

    #[test]
    fn test_absolute_y_crosses_pages() {
        let mut cpu = CPU::new();
        cpu.mem_write_u16(0x8001, 0x12F0);
        cpu.set_y(0x20);

        assert_eq!(cpu.resolve_address(AddressingMode::AbsoluteY, 0x8001), Ok(0x1310));
    }

    #[test]
    fn test_indirect_x_reads_both_pointer_bytes_from_memory() {
        let mut cpu = CPU::new();
        cpu.mem_write(0x8001, 0x20);
        cpu.set_x(0x04);
        cpu.mem_write(0x0024, 0x74);
        cpu.mem_write(0x0025, 0x20);

        assert_eq!(cpu.resolve_address(AddressingMode::IndirectX, 0x8001), Ok(0x2074));
    }

    #[test]
    fn test_indirect_y_pointer_wraps_within_zero_page() {
        let mut cpu = CPU::new();
        cpu.mem_write(0x8001, 0xFF);
        cpu.mem_write(0x00FF, 0x00);
        cpu.mem_write(0x0000, 0x40);
        cpu.mem_write(0x0100, 0x99); // must not be used as the high byte
        cpu.set_y(0x05);

        assert_eq!(cpu.resolve_address(AddressingMode::IndirectY, 0x8001), Ok(0x4005));
    }

    #[test]
    fn test_operand_address_reads_from_program_counter() {
        let mut cpu = CPU::new();
        cpu.mem_write(0x8000, 0xB6); // LDX $10,Y
        cpu.mem_write(0x8001, 0x10);
        cpu.set_y(0x05);

        cpu.set_pc(0x8001);
        assert_eq!(cpu.operand_address(AddressingMode::ZeroPageY), Ok(0x0015));
        assert_eq!(
            cpu.operand_address(AddressingMode::ZeroPageY),
            cpu.resolve_address(AddressingMode::ZeroPageY, 0x8001)
        );
    }

    #[test]
    fn test_modes_without_memory_operand_are_rejected() {
        let cpu = CPU::new();
        for mode in [
            AddressingMode::Implicit,
            AddressingMode::Accumulator,
            AddressingMode::Relative,
        ] {
            assert!(!mode.has_memory_operand());
            assert_eq!(
                cpu.resolve_address(mode, 0x8001),
                Err(AddressingError::NoMemoryOperand(mode))
            );
        }
    }
}
