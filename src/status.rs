//! # Processor Status Register
//!
//! The status register (P) packs eight flags into one byte. Bit position follows
//! declaration order:
//!
//! ```text
//!  7 6 5 4 3 2 1 0
//!  N V B2 B D I Z C
//! ```
//!
//! Break (bit 4) and Break2 (bit 5) are not real latches on the NMOS part: they
//! only have meaning in the byte pushed to the stack. Whenever a status byte is
//! pulled back from the stack (PLP, RTI), Break is cleared and Break2 is set.

use bitflags::bitflags;

bitflags! {
    /// The 6502 status register as a fixed 8-bit flag set.
    ///
    /// Besides the `bitflags` operations (`insert`, `remove`, `set(flag, bool)`,
    /// `toggle`, `contains`), the register exposes `get` / `unset` and the stack
    /// conversions used by PHP, PLP and RTI.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::Status;
    ///
    /// let mut p = Status::POWER_UP;
    /// assert!(p.get(Status::INTERRUPT_DISABLE));
    ///
    /// p.insert(Status::CARRY);
    /// p.set(Status::ZERO, true);
    /// p.unset(Status::CARRY);
    /// p.toggle(Status::NEGATIVE);
    ///
    /// assert_eq!(p.as_byte(), 0b1010_0110);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const CARRY = 1;
        const ZERO = 1 << 1;
        const INTERRUPT_DISABLE = 1 << 2;
        const DECIMAL_MODE = 1 << 3;
        const BREAK = 1 << 4;
        const BREAK2 = 1 << 5;
        const OVERFLOW = 1 << 6;
        const NEGATIVE = 1 << 7;
    }
}

impl Status {
    /// Status after power-up or reset: interrupts disabled, Break2 set (0x24).
    pub const POWER_UP: Self = Self::INTERRUPT_DISABLE.union(Self::BREAK2);

    /// Returns true if `flag` is set.
    pub fn get(self, flag: Self) -> bool {
        self.contains(flag)
    }

    /// Forces `flag` clear.
    pub fn unset(&mut self, flag: Self) {
        self.remove(flag);
    }

    /// Raw byte view of the register.
    pub fn as_byte(self) -> u8 {
        self.bits()
    }

    /// Builds a status register from a raw byte, keeping every bit.
    pub fn from_byte(value: u8) -> Self {
        Self::from_bits_retain(value)
    }

    /// Builds a status register from a byte pulled off the stack.
    ///
    /// Break is cleared and Break2 is set regardless of the stored bits.
    pub fn from_stack_byte(value: u8) -> Self {
        let mut status = Self::from_byte(value);
        status.remove(Self::BREAK);
        status.insert(Self::BREAK2);
        status
    }

    /// Byte pushed by PHP: Break and Break2 both forced set.
    pub fn to_stack_byte(self) -> u8 {
        (self | Self::BREAK | Self::BREAK2).bits()
    }

    /// Sets Zero and Negative from a result byte.
    pub fn update_zero_negative(&mut self, result: u8) {
        self.set(Self::ZERO, result == 0);
        self.set(Self::NEGATIVE, result & 0x80 != 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::POWER_UP
    }
}
