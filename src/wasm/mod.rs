//! WebAssembly bindings for the 6502 core.
//!
//! Exposes a `CPU<FlatMemory>` to JavaScript for browser-based stepping and
//! inspection of raw program images.

pub mod api;

pub use api::Emulator6502;
