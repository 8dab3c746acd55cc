//! # Hardware Stack
//!
//! The 6502 stack lives in page one (0x0100-0x01FF) and grows downward. The
//! 8-bit stack pointer is an offset into that page: a push writes at
//! `0x0100 | sp` and then decrements, a pop increments and then reads. The
//! pointer wraps modulo 256, so the stack can never address outside page one.
//!
//! Words are pushed high byte first, so they sit little-endian in memory.

use crate::{MemoryBus, CPU};

/// First address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after power-on and reset.
pub const STACK_RESET: u8 = 0xFD;

impl<M: MemoryBus> CPU<M> {
    /// Pushes one byte.
    ///
    /// ```
    /// use cpu6502::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// cpu.stack_push(0x42);
    /// assert_eq!(cpu.sp(), 0xFC);
    /// assert_eq!(cpu.mem_read(0x01FD), 0x42);
    /// assert_eq!(cpu.stack_pop(), 0x42);
    /// assert_eq!(cpu.sp(), 0xFD);
    /// ```
    pub fn stack_push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | u16::from(self.sp), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pops one byte.
    pub fn stack_pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | u16::from(self.sp))
    }

    /// Pushes a word, high byte first.
    pub fn stack_push_u16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.stack_push(hi);
        self.stack_push(lo);
    }

    /// Pops a word pushed by [`CPU::stack_push_u16`].
    pub fn stack_pop_u16(&mut self) -> u16 {
        let lo = self.stack_pop();
        let hi = self.stack_pop();
        u16::from_le_bytes([lo, hi])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_reverse_order() {
        let mut cpu = CPU::new();

        for value in [0x11, 0x22, 0x33] {
            cpu.stack_push(value);
        }
        assert_eq!(cpu.sp(), STACK_RESET - 3);

        assert_eq!(cpu.stack_pop(), 0x33);
        assert_eq!(cpu.stack_pop(), 0x22);
        assert_eq!(cpu.stack_pop(), 0x11);
        assert_eq!(cpu.sp(), STACK_RESET);
    }

    #[test]
    fn test_push_wraps_from_bottom_of_page() {
        let mut cpu = CPU::new();
        cpu.set_sp(0x00);

        cpu.stack_push(0xAA);
        assert_eq!(cpu.mem_read(0x0100), 0xAA);
        assert_eq!(cpu.sp(), 0xFF);

        cpu.stack_push(0xBB);
        assert_eq!(cpu.mem_read(0x01FF), 0xBB);
        assert_eq!(cpu.sp(), 0xFE);

        // Nothing leaked outside page one
        assert_eq!(cpu.mem_read(0x00FF), 0x00);
        assert_eq!(cpu.mem_read(0x0200), 0x00);
    }

    #[test]
    fn test_pop_wraps_from_top_of_page() {
        let mut cpu = CPU::new();
        cpu.set_sp(0xFF);
        cpu.mem_write(0x0100, 0x5A);

        assert_eq!(cpu.stack_pop(), 0x5A);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_word_layout() {
        let mut cpu = CPU::new();

        cpu.stack_push_u16(0x8003);
        assert_eq!(cpu.mem_read(0x01FD), 0x80);
        assert_eq!(cpu.mem_read(0x01FC), 0x03);
        assert_eq!(cpu.stack_pop_u16(), 0x8003);
        assert_eq!(cpu.sp(), STACK_RESET);
    }
}
