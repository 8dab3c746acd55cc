//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! backing store it addresses. The CPU reads and writes every byte (zero page,
//! stack page, program ROM, vectors) through this trait, so memory-mapped
//! extensions wrap or replace `FlatMemory` instead of reaching into a raw array.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Reads never mutate state; writes are the only side effect
//! - Nothing is write-protected, the ROM region included

/// Memory bus trait for CPU to read/write bytes.
///
/// # Design
///
/// - `read(&self)`: Immutable reference, so a read can never have side effects
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use cpu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write_u16(0xFFFC, 0x8000);
/// assert_eq!(mem.read(0xFFFC), 0x00);
/// assert_eq!(mem.read(0xFFFD), 0x80);
/// assert_eq!(mem.read_u16(0xFFFC), 0x8000);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cpu6502::{MemoryBus, CPU};
///
/// /// 2KB of RAM mirrored through the lower half, flat above.
/// struct MirroredRam {
///     ram: [u8; 0x0800],
///     upper: Vec<u8>,
/// }
///
/// impl MemoryBus for MirroredRam {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[(addr & 0x07FF) as usize]
///         } else {
///             self.upper[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[(addr & 0x07FF) as usize] = value;
///         } else {
///             self.upper[(addr - 0x8000) as usize] = value;
///         }
///     }
/// }
///
/// let memory = MirroredRam { ram: [0; 0x0800], upper: vec![0; 0x8000] };
/// let mut cpu = CPU::with_memory(memory);
/// cpu.mem_write(0x0001, 0x42);
/// assert_eq!(cpu.mem_read(0x0801), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic. Addresses that were never written read as whatever the
    /// implementation initialised them to (zero for `FlatMemory`).
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic. There is no protection: the program ROM region and the
    /// vectors are as writable as the zero page.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    ///
    /// There is no bounds check. At `0xFFFF` the address arithmetic wraps, so
    /// the high byte comes from `0x0000`.
    ///
    /// ```
    /// use cpu6502::{MemoryBus, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFF, 0x34);
    /// mem.write(0x0000, 0x12);
    /// assert_eq!(mem.read_u16(0xFFFF), 0x1234);
    /// ```
    fn read_u16(&self, addr: u16) -> u16 {
        let lo = self.read(addr);
        let hi = self.read(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Writes a little-endian word, wrapping at `0xFFFF` like [`MemoryBus::read_u16`].
    fn write_u16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) map onto one contiguous zero-filled
/// array:
///
/// - `0x0000-0x00FF`: zero page
/// - `0x0100-0x01FF`: stack page
/// - `0x8000-0xFFFF`: program ROM region
/// - `0xFFFC-0xFFFD`: reset vector
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{FlatMemory, MemoryBus};
    ///
    /// let mem = FlatMemory::new();
    /// assert_eq!(mem.read(0x0000), 0x00);
    /// assert_eq!(mem.read(0xFFFF), 0x00);
    /// ```
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Returns the whole address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours untouched
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_flat_memory_full_range() {
        let mut mem = FlatMemory::new();

        mem.write(0x0000, 0x01);
        mem.write(0x7FFF, 0x7F);
        mem.write(0x8000, 0x80);
        mem.write(0xFFFF, 0xFF);

        assert_eq!(mem.read(0x0000), 0x01);
        assert_eq!(mem.read(0x7FFF), 0x7F);
        assert_eq!(mem.read(0x8000), 0x80);
        assert_eq!(mem.read(0xFFFF), 0xFF);
    }

    #[test]
    fn test_word_access_is_little_endian() {
        let mut mem = FlatMemory::new();

        mem.write_u16(0x0200, 0xBEEF);
        assert_eq!(mem.read(0x0200), 0xEF);
        assert_eq!(mem.read(0x0201), 0xBE);
        assert_eq!(mem.read_u16(0x0200), 0xBEEF);
    }

    #[test]
    fn test_word_access_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();

        mem.write_u16(0xFFFF, 0xA1B2);
        assert_eq!(mem.read(0xFFFF), 0xB2);
        assert_eq!(mem.read(0x0000), 0xA1);
        assert_eq!(mem.read_u16(0xFFFF), 0xA1B2);
    }
}
