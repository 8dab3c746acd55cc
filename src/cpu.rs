//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next opcode byte
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register**: N, V, B2, B, D, I, Z, C packed into one byte
//! - **Cycle counter**: running total of base cycles
//!
//! ## Execution Model
//!
//! Each `step()`:
//! 1. Reads the opcode at PC and advances PC past it
//! 2. Looks the opcode up; an undefined byte halts the CPU
//! 3. Dispatches to the mnemonic's handler
//! 4. Unless the handler redirected control flow, skips the operand bytes
//!
//! `run()` loops over `step()` until BRK or an undefined opcode.

use log::{debug, error, log_enabled, trace, Level};

use crate::addressing::AddressingMode;
use crate::instructions::{self, Flow};
use crate::stack::STACK_RESET;
use crate::{
    CpuError, FlatMemory, MemoryBus, Opcode, OpcodeTable, StatusFlags, StatusRegister,
};

/// Where `load()` places a program image.
pub const PROGRAM_START: u16 = 0x8000;

/// Size of the program ROM region (0x8000-0xFFFF).
pub const PROGRAM_CAPACITY: usize = 0x8000;

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Why the CPU stopped running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// A BRK instruction executed at `address`.
    Break { address: u16 },

    /// The byte at `address` is not a documented opcode.
    UnknownOpcode { opcode: u8, address: u16 },
}

/// Result of executing a single instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Halted(HaltReason),
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait; the
/// default is a 64KB [`FlatMemory`].
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, HaltReason};
///
/// let mut cpu = CPU::new();
///
/// // LDA #$05; STA $00; LDA #$00; ADC $00; BRK
/// let halt = cpu
///     .load_and_run(&[0xA9, 0x05, 0x85, 0x00, 0xA9, 0x00, 0x65, 0x00, 0x00])
///     .unwrap();
///
/// assert_eq!(halt, HaltReason::Break { address: 0x8008 });
/// assert_eq!(cpu.a(), 0x05);
/// assert!(!cpu.flag_c());
/// assert!(!cpu.flag_z());
/// assert!(!cpu.flag_n());
/// ```
pub struct CPU<M: MemoryBus = FlatMemory> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next opcode byte)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 | sp gives full stack address)
    pub(crate) sp: u8,

    pub(crate) status: StatusRegister,

    /// Total base cycles executed since the last reset
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,

    opcodes: OpcodeTable,

    halt_reason: Option<HaltReason>,
}

impl CPU<FlatMemory> {
    /// Creates a CPU over zero-filled flat memory with power-on defaults:
    /// SP = 0xFD, every other register and the status register zero.
    pub fn new() -> Self {
        Self::with_memory(FlatMemory::new())
    }
}

impl Default for CPU<FlatMemory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU over the given memory bus with power-on defaults.
    ///
    /// The program counter is zero until [`CPU::reset`] loads it from the
    /// reset vector.
    pub fn with_memory(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: STACK_RESET,
            status: StatusRegister::default(),
            cycles: 0,
            memory,
            opcodes: OpcodeTable::new(),
            halt_reason: None,
        }
    }

    /// Copies `program` to [`PROGRAM_START`] and points the reset vector at it.
    ///
    /// The image may fill the whole ROM region; the reset vector is written
    /// after the copy and takes precedence over bytes at 0xFFFC/0xFFFD.
    pub fn load(&mut self, program: &[u8]) -> Result<(), CpuError> {
        if program.len() > PROGRAM_CAPACITY {
            return Err(CpuError::ProgramTooLarge {
                len: program.len(),
                capacity: PROGRAM_CAPACITY,
            });
        }

        for (addr, &byte) in (PROGRAM_START..=u16::MAX).zip(program) {
            self.memory.write(addr, byte);
        }
        self.memory.write_u16(RESET_VECTOR, PROGRAM_START);

        debug!("loaded {} byte program at ${:04X}", program.len(), PROGRAM_START);
        Ok(())
    }

    /// Clears the registers and status, restores SP and loads PC from the
    /// reset vector. Memory is left untouched.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = STACK_RESET;
        self.status = StatusRegister::default();
        self.cycles = 0;
        self.halt_reason = None;
        self.pc = self.memory.read_u16(RESET_VECTOR);

        debug!("reset: pc=${:04X}", self.pc);
    }

    /// Loads `program`, resets and runs until the CPU halts.
    pub fn load_and_run(&mut self, program: &[u8]) -> Result<HaltReason, CpuError> {
        self.load(program)?;
        self.reset();
        self.run()
    }

    /// Executes one instruction.
    ///
    /// Returns `StepOutcome::Halted` when the instruction was BRK or the byte at
    /// PC is not a documented opcode. A `CpuError` is only possible when an
    /// opcode table entry pairs a mnemonic with an addressing mode it cannot use.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, StepOutcome};
    ///
    /// let mut cpu = CPU::new();
    /// cpu.load(&[0xA2, 0xFF, 0xE8, 0x00]).unwrap(); // LDX #$FF; INX; BRK
    /// cpu.reset();
    ///
    /// assert_eq!(cpu.step().unwrap(), StepOutcome::Continue);
    /// assert_eq!(cpu.x(), 0xFF);
    /// assert_eq!(cpu.pc(), 0x8002);
    ///
    /// cpu.step().unwrap();
    /// assert_eq!(cpu.x(), 0x00);
    /// assert!(cpu.flag_z());
    /// ```
    pub fn step(&mut self) -> Result<StepOutcome, CpuError> {
        if log_enabled!(Level::Trace) {
            trace!("{}", crate::trace::trace(self));
        }

        let address = self.pc;
        let code = self.memory.read(address);
        self.pc = self.pc.wrapping_add(1);

        let Some(&opcode) = self.opcodes.get(code) else {
            debug!("undefined opcode ${code:02X} at ${address:04X}, halting");
            return Ok(self.halt(HaltReason::UnknownOpcode {
                opcode: code,
                address,
            }));
        };

        self.cycles += u64::from(opcode.cycles);

        match self.dispatch(&opcode, address)? {
            Flow::Next => {
                self.pc = self.pc.wrapping_add(u16::from(opcode.len) - 1);
                Ok(StepOutcome::Continue)
            }
            Flow::Jump => Ok(StepOutcome::Continue),
            Flow::Halt => {
                debug!("BRK at ${address:04X}, halting");
                Ok(self.halt(HaltReason::Break { address }))
            }
        }
    }

    /// Runs the handler for `opcode`, which was fetched from `address`.
    fn dispatch(&mut self, opcode: &Opcode, address: u16) -> Result<Flow, CpuError> {
        instructions::execute(self, opcode).map_err(|source| {
            error!(
                "{} (${:02X}) at ${:04X}: {}",
                opcode.mnemonic, opcode.code, address, source
            );
            CpuError::MalformedDispatch {
                opcode: opcode.code,
                mnemonic: opcode.mnemonic,
                address,
                source,
            }
        })
    }

    fn halt(&mut self, reason: HaltReason) -> StepOutcome {
        self.halt_reason = Some(reason);
        StepOutcome::Halted(reason)
    }

    /// Runs until BRK or an undefined opcode.
    pub fn run(&mut self) -> Result<HaltReason, CpuError> {
        self.run_with_callback(|_| {})
    }

    /// Runs until halted, invoking `callback` before every instruction.
    ///
    /// ```
    /// use cpu6502::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// cpu.load(&[0xE8, 0xE8, 0xE8, 0x00]).unwrap(); // INX x3; BRK
    /// cpu.reset();
    ///
    /// let mut visited = Vec::new();
    /// cpu.run_with_callback(|cpu| visited.push(cpu.pc())).unwrap();
    /// assert_eq!(visited, vec![0x8000, 0x8001, 0x8002, 0x8003]);
    /// ```
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<HaltReason, CpuError>
    where
        F: FnMut(&mut Self),
    {
        self.halt_reason = None;
        loop {
            callback(self);
            if let StepOutcome::Halted(reason) = self.step()? {
                return Ok(reason);
            }
        }
    }

    /// Runs at most `limit` instructions.
    ///
    /// Returns `None` if the limit was reached before the CPU halted.
    pub fn run_for_instructions(&mut self, limit: u64) -> Result<Option<HaltReason>, CpuError> {
        self.halt_reason = None;
        for _ in 0..limit {
            if let StepOutcome::Halted(reason) = self.step()? {
                return Ok(Some(reason));
            }
        }
        Ok(None)
    }

    /// Runs until at least `cycle_budget` base cycles have elapsed or the CPU halts.
    ///
    /// Instructions are never split, so the budget may be overshot by up to
    /// one instruction's cost.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<Option<HaltReason>, CpuError> {
        self.halt_reason = None;
        let target = self.cycles.saturating_add(cycle_budget);
        while self.cycles < target {
            if let StepOutcome::Halted(reason) = self.step()? {
                return Ok(Some(reason));
            }
        }
        Ok(None)
    }

    // ========== Memory Access ==========

    pub fn mem_read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    pub fn mem_write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    pub fn mem_read_u16(&self, addr: u16) -> u16 {
        self.memory.read_u16(addr)
    }

    pub fn mem_write_u16(&mut self, addr: u16, value: u16) {
        self.memory.write_u16(addr, value);
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    /// Reads the byte an instruction operates on.
    pub(crate) fn read_operand(&self, mode: AddressingMode) -> Result<u8, crate::AddressingError> {
        let addr = self.operand_address(mode)?;
        Ok(self.memory.read(addr))
    }

    // ========== Register Access ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC, bit 5 = Break2).
    pub fn status(&self) -> u8 {
        self.status.bits()
    }

    /// Returns the status register.
    pub fn status_register(&self) -> &StatusRegister {
        &self.status
    }

    /// Returns the total number of base cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns why the CPU last halted, if it has halted since the last reset or run.
    pub fn halt_reason(&self) -> Option<HaltReason> {
        self.halt_reason
    }

    /// Returns the opcode table this CPU decodes with.
    pub fn opcodes(&self) -> &OpcodeTable {
        &self.opcodes
    }

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn set_status(&mut self, value: u8) {
        self.status = StatusRegister::from_bits(value);
    }

    // ========== Status Flag Access ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.is_set(StatusFlags::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.is_set(StatusFlags::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.status.is_set(StatusFlags::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.status.is_set(StatusFlags::DECIMAL_MODE)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.status.is_set(StatusFlags::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.is_set(StatusFlags::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.is_set(StatusFlags::CARRY)
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.status.assign(StatusFlags::NEGATIVE, value);
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.status.assign(StatusFlags::OVERFLOW, value);
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.status.assign(StatusFlags::BREAK, value);
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.status.assign(StatusFlags::DECIMAL_MODE, value);
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.status.assign(StatusFlags::INTERRUPT_DISABLE, value);
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.status.assign(StatusFlags::ZERO, value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.status.assign(StatusFlags::CARRY, value);
    }
}
