//! # Instruction Trace
//!
//! Read-only decoding of the instruction at an address and nestest-style trace
//! lines for debugging:
//!
//! ```text
//! 8000  A9 05     LDA #$05                        A:00 X:00 Y:00 P:00 SP:FD
//! 8002  85 00     STA $00 = 00                    A:05 X:00 Y:00 P:00 SP:FD
//! ```
//!
//! Memory operands are shown with their resolved address and current value.
//! Decoding reads memory through the `MemoryBus` contract only, so tracing
//! never changes CPU or memory state.

use crate::{AddressingMode, MemoryBus, Mnemonic, Opcode, CPU};

/// A decoded instruction together with its operand bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Address of the opcode byte.
    pub address: u16,

    pub opcode: Opcode,

    /// Operand bytes (0-2, depending on addressing mode).
    pub operand: Vec<u8>,
}

/// Decodes the instruction at `address`; `None` for an undefined opcode.
///
/// ```
/// use cpu6502::{trace, AddressingMode, Mnemonic, CPU};
///
/// let mut cpu = CPU::new();
/// cpu.load(&[0xBD, 0x34, 0x12]).unwrap(); // LDA $1234,X
///
/// let instr = trace::decode(&cpu, 0x8000).unwrap();
/// assert_eq!(instr.opcode.mnemonic, Mnemonic::LDA);
/// assert_eq!(instr.opcode.mode, AddressingMode::AbsoluteX);
/// assert_eq!(instr.operand, vec![0x34, 0x12]);
/// assert_eq!(instr.operand_text(), "$1234,X");
/// ```
pub fn decode<M: MemoryBus>(cpu: &CPU<M>, address: u16) -> Option<DecodedInstruction> {
    let opcode = *cpu.opcodes().get(cpu.mem_read(address))?;

    let operand = (1..u16::from(opcode.len))
        .map(|offset| cpu.mem_read(address.wrapping_add(offset)))
        .collect();

    Some(DecodedInstruction {
        address,
        opcode,
        operand,
    })
}

impl DecodedInstruction {
    /// Opcode byte followed by operand bytes.
    pub fn bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.operand.len() + 1);
        bytes.push(self.opcode.code);
        bytes.extend_from_slice(&self.operand);
        bytes
    }

    fn operand_u8(&self) -> u8 {
        self.operand.first().copied().unwrap_or(0)
    }

    fn operand_u16(&self) -> u16 {
        let lo = self.operand.first().copied().unwrap_or(0);
        let hi = self.operand.get(1).copied().unwrap_or(0);
        u16::from_le_bytes([lo, hi])
    }

    /// Operand in assembler syntax, without any memory lookups.
    pub fn operand_text(&self) -> String {
        match self.opcode.mode {
            AddressingMode::Implicit => String::new(),
            AddressingMode::Accumulator => "A".to_string(),
            AddressingMode::Immediate => format!("#${:02X}", self.operand_u8()),
            AddressingMode::ZeroPage => format!("${:02X}", self.operand_u8()),
            AddressingMode::ZeroPageX => format!("${:02X},X", self.operand_u8()),
            AddressingMode::ZeroPageY => format!("${:02X},Y", self.operand_u8()),
            AddressingMode::Relative => format!("${:04X}", self.branch_target()),
            AddressingMode::Absolute => format!("${:04X}", self.operand_u16()),
            AddressingMode::AbsoluteX => format!("${:04X},X", self.operand_u16()),
            AddressingMode::AbsoluteY => format!("${:04X},Y", self.operand_u16()),
            AddressingMode::Indirect => format!("(${:04X})", self.operand_u16()),
            AddressingMode::IndirectX => format!("(${:02X},X)", self.operand_u8()),
            AddressingMode::IndirectY => format!("(${:02X}),Y", self.operand_u8()),
        }
    }

    /// Target of a relative branch, measured from the byte after the instruction.
    fn branch_target(&self) -> u16 {
        let displacement = self.operand_u8() as i8;
        self.address
            .wrapping_add(2)
            .wrapping_add_signed(i16::from(displacement))
    }

    /// Full assembler text, annotated with the resolved address and value of
    /// memory operands using the CPU's current registers.
    pub fn disassembly<M: MemoryBus>(&self, cpu: &CPU<M>) -> String {
        let text = self.operand_text();
        let mode = self.opcode.mode;
        let operand_start = self.address.wrapping_add(1);

        let annotation = match cpu.resolve_address(mode, operand_start) {
            Err(_) => String::new(),
            Ok(_) if mode == AddressingMode::Immediate => String::new(),
            Ok(_)
                if mode == AddressingMode::Absolute
                    && matches!(self.opcode.mnemonic, Mnemonic::JMP | Mnemonic::JSR) =>
            {
                String::new()
            }
            Ok(target) => {
                let value = cpu.mem_read(target);
                match mode {
                    AddressingMode::ZeroPage | AddressingMode::Absolute => {
                        format!(" = {value:02X}")
                    }
                    AddressingMode::ZeroPageX | AddressingMode::ZeroPageY => {
                        format!(" @ {target:02X} = {value:02X}")
                    }
                    AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => {
                        format!(" @ {target:04X} = {value:02X}")
                    }
                    AddressingMode::Indirect => format!(" = {target:04X}"),
                    AddressingMode::IndirectX => {
                        let ptr = self.operand_u8().wrapping_add(cpu.x());
                        format!(" @ {ptr:02X} = {target:04X} = {value:02X}")
                    }
                    AddressingMode::IndirectY => {
                        let base = target.wrapping_sub(u16::from(cpu.y()));
                        format!(" = {base:04X} @ {target:04X} = {value:02X}")
                    }
                    _ => String::new(),
                }
            }
        };

        if text.is_empty() {
            self.opcode.mnemonic.to_string()
        } else {
            format!("{} {}{}", self.opcode.mnemonic, text, annotation)
        }
    }
}

/// Formats one trace line for the instruction at the CPU's program counter,
/// with the register state before it executes.
///
/// ```
/// use cpu6502::{trace, CPU};
///
/// let mut cpu = CPU::new();
/// cpu.load(&[0xA9, 0x05, 0x00]).unwrap();
/// cpu.reset();
///
/// assert_eq!(
///     trace::trace(&cpu),
///     "8000  A9 05     LDA #$05                        A:00 X:00 Y:00 P:00 SP:FD"
/// );
/// ```
pub fn trace<M: MemoryBus>(cpu: &CPU<M>) -> String {
    let pc = cpu.pc();

    let (bytes, asm) = match decode(cpu, pc) {
        Some(instr) => (instr.bytes(), instr.disassembly(cpu)),
        None => {
            let byte = cpu.mem_read(pc);
            (vec![byte], format!(".byte ${byte:02X}"))
        }
    };

    let hex = bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{:04X}  {:<8}  {:<31} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
        pc,
        hex,
        asm,
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.status(),
        cpu.sp()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cpu_with(program: &[u8]) -> CPU {
        let mut cpu = CPU::new();
        cpu.load(program).unwrap();
        cpu.reset();
        cpu
    }

    #[test]
    fn test_decode_undefined_opcode() {
        let cpu = cpu_with(&[0x02]);
        assert_eq!(decode(&cpu, 0x8000), None);
        assert!(trace(&cpu).starts_with("8000  02        .byte $02"));
    }

    #[test]
    fn test_branch_target_is_absolute() {
        // BNE -2
        let cpu = cpu_with(&[0xD0, 0xFE]);
        let instr = decode(&cpu, 0x8000).unwrap();
        assert_eq!(instr.disassembly(&cpu), "BNE $8000");
    }

    #[test]
    fn test_zero_page_indexed_annotation() {
        let mut cpu = cpu_with(&[0xB5, 0x44]); // LDA $44,X
        cpu.set_x(0x01);
        cpu.mem_write(0x0045, 0x07);

        let instr = decode(&cpu, 0x8000).unwrap();
        assert_eq!(instr.disassembly(&cpu), "LDA $44,X @ 45 = 07");
    }

    #[test]
    fn test_indirect_y_annotation() {
        let mut cpu = cpu_with(&[0xB1, 0x89]); // LDA ($89),Y
        cpu.set_y(0x05);
        cpu.mem_write_u16(0x0089, 0x0300);
        cpu.mem_write(0x0305, 0x42);

        let instr = decode(&cpu, 0x8000).unwrap();
        assert_eq!(instr.disassembly(&cpu), "LDA ($89),Y = 0300 @ 0305 = 42");
    }

    #[test]
    fn test_jump_targets_are_not_dereferenced() {
        let cpu = cpu_with(&[0x20, 0x00, 0x40]); // JSR $4000
        let instr = decode(&cpu, 0x8000).unwrap();
        assert_eq!(instr.disassembly(&cpu), "JSR $4000");
    }

    #[test]
    fn test_accumulator_and_implied_forms() {
        let cpu = cpu_with(&[0x0A, 0xEA]);
        assert_eq!(decode(&cpu, 0x8000).unwrap().disassembly(&cpu), "ASL A");
        assert_eq!(decode(&cpu, 0x8001).unwrap().disassembly(&cpu), "NOP");
    }

    #[test]
    fn test_trace_does_not_change_state() {
        let mut cpu = cpu_with(&[0x91, 0x10]); // STA ($10),Y
        cpu.set_a(0x99);
        let before = cpu.memory().as_slice().to_vec();

        let _ = trace(&cpu);

        assert_eq!(cpu.memory().as_slice(), &before[..]);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.a(), 0x99);
    }
}
