//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for loading a program image,
//! stepping or running it, and inspecting registers and memory.

use wasm_bindgen::prelude::*;

use crate::{trace, CpuError, HaltReason, StepOutcome, CPU};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<CpuError> for JsError {
    fn from(err: CpuError) -> Self {
        JsError {
            message: err.to_string(),
        }
    }
}

fn describe(reason: HaltReason) -> String {
    match reason {
        HaltReason::Break { address } => format!("BRK at ${address:04X}"),
        HaltReason::UnknownOpcode { opcode, address } => {
            format!("undefined opcode ${opcode:02X} at ${address:04X}")
        }
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Creates an emulator with zeroed memory and power-on register state.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Emulator6502 {
        Emulator6502 { cpu: CPU::new() }
    }

    /// Loads a program at $8000, sets the reset vector and resets the CPU.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), JsError> {
        self.cpu.load(program)?;
        self.cpu.reset();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Executes one instruction. Returns false once the CPU has halted.
    pub fn step(&mut self) -> Result<bool, JsError> {
        Ok(self.cpu.step()? == StepOutcome::Continue)
    }

    /// Runs at most `max_instructions`. Returns true if the CPU halted.
    pub fn run(&mut self, max_instructions: u32) -> Result<bool, JsError> {
        let halted = self
            .cpu
            .run_for_instructions(u64::from(max_instructions))?
            .is_some();
        Ok(halted)
    }

    /// Human-readable reason for the last halt, if any.
    pub fn halt_reason(&self) -> Option<String> {
        self.cpu.halt_reason().map(describe)
    }

    /// Trace line for the instruction at the program counter.
    pub fn trace_line(&self) -> String {
        trace::trace(&self.cpu)
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    /// Base cycles since reset. JavaScript numbers are f64, so this is lossy
    /// only past 2^53 cycles.
    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.mem_read(addr)
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.mem_write(addr, value);
    }

    /// Copies one 256-byte page into a fresh `Uint8Array`.
    pub fn memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = usize::from(page) << 8;
        let slice = &self.cpu.memory().as_slice()[start..start + 0x100];
        js_sys::Uint8Array::from(slice)
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
