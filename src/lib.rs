//! # 6502 CPU Emulator Core
//!
//! An NMOS 6502 instruction-execution core: fetch-decode-execute loop,
//! addressing-mode resolution, status-flag arithmetic, stack discipline and the
//! flat 64KB memory model the processor addresses.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, HaltReason};
//!
//! let mut cpu = CPU::new();
//!
//! // LDX #$FF; INX; BRK
//! let halt = cpu.load_and_run(&[0xA2, 0xFF, 0xE8, 0x00]).unwrap();
//!
//! assert_eq!(halt, HaltReason::Break { address: 0x8003 });
//! assert_eq!(cpu.x(), 0x00);
//! assert!(cpu.flag_z());
//! assert!(!cpu.flag_n());
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **Table-Driven Decoding**: opcode metadata lives in one `OpcodeTable`
//! - **Exhaustive Dispatch**: every mnemonic has its own handler, selected by a
//!   `match` over `Mnemonic`, so no instruction can fall through into another
//! - **Deterministic**: no I/O, no threads; a CPU owns its memory outright
//!
//! Decimal-mode arithmetic, interrupts beyond reset and cycle-exact timing are
//! not emulated. BRK and undefined opcodes end a run.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, lifecycle and execution loop
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `status` - Status register flags
//! - `stack` - Page-one stack push/pop
//! - `addressing` - Addressing modes and effective-address resolution
//! - `opcodes` - Opcode descriptor table
//! - `trace` - Instruction decoding and trace lines for debugging

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod stack;
pub mod status;
pub mod trace;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

use thiserror::Error;

// Re-export public API
pub use addressing::{AddressingError, AddressingMode};
pub use cpu::{HaltReason, StepOutcome, CPU, PROGRAM_CAPACITY, PROGRAM_START, RESET_VECTOR};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, Opcode, OpcodeTable};
pub use stack::{STACK_BASE, STACK_RESET};
pub use status::{StatusFlags, StatusRegister};

/// Errors that can occur while loading or executing a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpuError {
    /// An opcode table entry paired a mnemonic with an addressing mode that
    /// has no memory operand. Indicates a table bug, never bad program data.
    #[error("{mnemonic} (${opcode:02X}) at ${address:04X} reached the operand resolver: {source}")]
    MalformedDispatch {
        opcode: u8,
        mnemonic: Mnemonic,
        address: u16,
        source: AddressingError,
    },

    /// The program image does not fit the ROM region at 0x8000.
    #[error("program of {len} bytes exceeds the {capacity} byte ROM region")]
    ProgramTooLarge { len: usize, capacity: usize },
}
