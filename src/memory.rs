//! # Memory
//!
//! The CPU never touches a byte array directly; it goes through [`MemoryBus`].
//! [`FlatMemory`] is the default bus: 64KB of RAM with nothing mapped.
//!
//! A bus is infallible. Every address from 0x0000 to 0xFFFF can be read and
//! written, and multi-byte values are little-endian.

/// Byte-level access to the 16-bit address space.
///
/// Only `read` and `write` are required. The 16-bit helpers are built on them
/// and wrap from 0xFFFF to 0x0000 for the high byte.
///
/// # Examples
///
/// A bus that mirrors 2KB of RAM across the address space:
///
/// ```
/// use core6502::MemoryBus;
///
/// struct Mirrored([u8; 0x800]);
///
/// impl MemoryBus for Mirrored {
///     fn read(&self, addr: u16) -> u8 {
///         self.0[(addr & 0x7FF) as usize]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         self.0[(addr & 0x7FF) as usize] = value;
///     }
/// }
///
/// let mut bus = Mirrored([0; 0x800]);
/// bus.write_u16(0xFFFC, 0x8000);
/// assert_eq!(bus.read_u16(0x07FC), 0x8000);
/// ```
pub trait MemoryBus {
    /// Returns the byte at `addr`. Must not panic for any address.
    fn read(&self, addr: u16) -> u8;

    /// Stores `value` at `addr`. Must not panic; read-only regions may drop
    /// the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Low byte at `addr`, high byte at `addr + 1` (mod 65536).
    fn read_u16(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read(addr), self.read(addr.wrapping_add(1))])
    }

    /// Stores `value` low byte first.
    fn write_u16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
    }
}

/// 64KB of zero-initialized RAM covering the whole address space.
///
/// ```
/// use core6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// assert_eq!(mem.read(0x1235), 0x00);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    bytes: Box<[u8; 0x1_0000]>,
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; 0x1_0000]),
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.bytes[usize::from(addr)]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.bytes[usize::from(addr)] = value;
    }
}
