//! Fuzz target for bounded runs over arbitrary program images.
//!
//! Any byte sequence must either halt or exhaust the instruction budget
//! without a dispatch fault or a panic.

#![no_main]

use cpu6502::CPU;
use libfuzzer_sys::fuzz_target;

const INSTRUCTION_BUDGET: u64 = 10_000;

fuzz_target!(|program: &[u8]| {
    let mut cpu = CPU::new();
    if cpu.load(program).is_err() {
        return;
    }
    cpu.reset();

    let result = cpu.run_for_instructions(INSTRUCTION_BUDGET);
    assert!(result.is_ok(), "dispatch fault: {result:?}");
});
