//! # Processor Status Register
//!
//! The 6502 packs eight status flags into one byte:
//!
//! ```text
//!  7 6 5 4 3 2 1 0
//!  N V _ B D I Z C
//!  | | | | | | | +--- Carry
//!  | | | | | | +----- Zero
//!  | | | | | +------- Interrupt Disable
//!  | | | | +--------- Decimal Mode (unused by the ALU on this variant)
//!  | | | +----------- Break
//!  | | +------------- Break2 (unused, pushed as 1)
//!  | +--------------- Overflow
//!  +----------------- Negative
//! ```

use bitflags::bitflags;

bitflags! {
    /// Individual status flags, one bit each.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StatusFlags: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL_MODE = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const BREAK2 = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

/// The live status register.
///
/// Every operation touches exactly the flags it is given; neighbouring bits are
/// never disturbed.
///
/// # Examples
///
/// ```
/// use cpu6502::{StatusFlags, StatusRegister};
///
/// let mut status = StatusRegister::default();
/// status.set(StatusFlags::CARRY);
/// status.assign(StatusFlags::NEGATIVE, true);
/// status.clear(StatusFlags::CARRY);
///
/// assert!(!status.is_set(StatusFlags::CARRY));
/// assert!(status.is_set(StatusFlags::NEGATIVE));
/// assert_eq!(status.bits(), 0b1000_0000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusRegister {
    flags: StatusFlags,
}

impl StatusRegister {
    /// Builds a register from a packed byte. All eight bits are defined, so no
    /// bit is ever dropped.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            flags: StatusFlags::from_bits_retain(bits),
        }
    }

    /// Returns the packed byte.
    pub fn bits(&self) -> u8 {
        self.flags.bits()
    }

    /// Returns the flags as a bitflags value.
    pub fn flags(&self) -> StatusFlags {
        self.flags
    }

    pub fn set(&mut self, flag: StatusFlags) {
        self.flags.insert(flag);
    }

    pub fn clear(&mut self, flag: StatusFlags) {
        self.flags.remove(flag);
    }

    /// Sets `flag` when `value` is true, clears it otherwise.
    pub fn assign(&mut self, flag: StatusFlags, value: bool) {
        self.flags.set(flag, value);
    }

    /// Returns true if every bit of `flag` is set.
    pub fn is_set(&self, flag: StatusFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Zero is set iff `value == 0`, Negative iff bit 7 of `value` is set.
    pub fn update_zero_and_negative(&mut self, value: u8) {
        self.assign(StatusFlags::ZERO, value == 0);
        self.assign(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }
}

impl From<u8> for StatusRegister {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}

impl From<StatusRegister> for u8 {
    fn from(status: StatusRegister) -> Self {
        status.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_bit_layout() {
        assert_eq!(StatusFlags::CARRY.bits(), 1 << 0);
        assert_eq!(StatusFlags::ZERO.bits(), 1 << 1);
        assert_eq!(StatusFlags::INTERRUPT_DISABLE.bits(), 1 << 2);
        assert_eq!(StatusFlags::DECIMAL_MODE.bits(), 1 << 3);
        assert_eq!(StatusFlags::BREAK.bits(), 1 << 4);
        assert_eq!(StatusFlags::BREAK2.bits(), 1 << 5);
        assert_eq!(StatusFlags::OVERFLOW.bits(), 1 << 6);
        assert_eq!(StatusFlags::NEGATIVE.bits(), 1 << 7);
    }

    #[test]
    fn test_assign_touches_one_bit() {
        for bits in 0..=255u8 {
            for flag in StatusFlags::all().iter() {
                let mut status = StatusRegister::from_bits(bits);
                status.assign(flag, true);
                assert_eq!(status.bits(), bits | flag.bits());

                let mut status = StatusRegister::from_bits(bits);
                status.assign(flag, false);
                assert_eq!(status.bits(), bits & !flag.bits());
            }
        }
    }

    #[test]
    fn test_flags_are_independent() {
        let mut status = StatusRegister::default();
        status.set(StatusFlags::CARRY);
        status.set(StatusFlags::OVERFLOW);
        status.set(StatusFlags::ZERO);
        status.clear(StatusFlags::OVERFLOW);

        assert!(status.is_set(StatusFlags::CARRY));
        assert!(status.is_set(StatusFlags::ZERO));
        assert!(!status.is_set(StatusFlags::OVERFLOW));
        assert_eq!(status.bits(), 0b0000_0011);
    }

    #[test]
    fn test_update_zero_and_negative() {
        let mut status = StatusRegister::from_bits(0xFF);
        status.update_zero_and_negative(0x01);
        assert_eq!(status.bits(), 0xFF & !(StatusFlags::ZERO | StatusFlags::NEGATIVE).bits());

        status.update_zero_and_negative(0x00);
        assert!(status.is_set(StatusFlags::ZERO));
        assert!(!status.is_set(StatusFlags::NEGATIVE));

        status.update_zero_and_negative(0x80);
        assert!(!status.is_set(StatusFlags::ZERO));
        assert!(status.is_set(StatusFlags::NEGATIVE));
    }
}
