//! 6502 CPU registers.

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset.
pub const STACK_RESET: u8 = 0xFD;

/// 6502 register file.
///
/// - A: 8-bit accumulator
/// - X, Y: 8-bit index registers
/// - SP: 8-bit stack pointer (stack lives at 0x0100-0x01FF and grows downward)
/// - PC: 16-bit program counter
///
/// The status register is kept separately in [`crate::Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Stack pointer (0x0100 + sp is the next free stack slot).
    pub sp: u8,
    /// Program counter.
    pub pc: u16,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Registers in reset state with PC at zero; the caller loads PC from the
    /// reset vector.
    pub const fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: STACK_RESET,
            pc: 0,
        }
    }

    /// Address written by a push. Decrements SP, wrapping within the stack page.
    pub fn push_addr(&mut self) -> u16 {
        let addr = STACK_BASE | self.sp as u16;
        self.sp = self.sp.wrapping_sub(1);
        addr
    }

    /// Address read by a pull. Increments SP first, wrapping within the stack page.
    pub fn pull_addr(&mut self) -> u16 {
        self.sp = self.sp.wrapping_add(1);
        STACK_BASE | self.sp as u16
    }
}
