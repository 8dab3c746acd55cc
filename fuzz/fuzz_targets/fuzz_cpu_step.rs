//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register state and memory contents, executes one
//! instruction and checks the invariants that must survive any opcode.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{StepOutcome, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Memory regions the addressing modes reach
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Region at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut cpu = CPU::new();

    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        cpu.mem_write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        cpu.mem_write(0x0100 + i as u16, byte);
    }
    for (i, &byte) in input.memory.main_memory.iter().enumerate() {
        cpu.mem_write(0x4000 + i as u16, byte);
    }

    cpu.load(&input.memory.instruction_bytes).unwrap();
    cpu.reset();

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    let opcode = input.memory.instruction_bytes[0];
    let descriptor = cpu.opcodes().get(opcode).copied();

    // The table never pairs a mnemonic with a mode it cannot resolve
    let outcome = cpu.step().expect("well-formed opcode table");

    match descriptor {
        None => assert!(matches!(outcome, StepOutcome::Halted(_))),
        Some(op) => {
            assert!(cpu.cycles() == u64::from(op.cycles));
        }
    }
});
