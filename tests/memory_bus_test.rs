//! Memory bus tests
//!
//! Verifies `FlatMemory` and that the CPU works against any `MemoryBus`.

use core6502::{FlatMemory, MemoryBus, CPU};
use std::cell::Cell;

#[test]
fn test_flat_memory_starts_zeroed() {
    let memory = FlatMemory::new();

    for addr in [0x0000, 0x00FF, 0x0100, 0x1234, 0x8000, 0xFFFF] {
        assert_eq!(memory.read(addr), 0x00, "0x{:04X} should start at 0", addr);
    }
}

#[test]
fn test_flat_memory_write_then_read() {
    let mut memory = FlatMemory::new();

    memory.write(0x0000, 0x01);
    memory.write(0x7FFF, 0x7F);
    memory.write(0xFFFF, 0xCD);

    assert_eq!(memory.read(0x0000), 0x01);
    assert_eq!(memory.read(0x7FFF), 0x7F);
    assert_eq!(memory.read(0xFFFF), 0xCD);
    assert_eq!(memory.read(0x0001), 0x00);
}

#[test]
fn test_read_u16_little_endian() {
    let mut memory = FlatMemory::new();

    memory.write(0x0200, 0x34);
    memory.write(0x0201, 0x12);

    assert_eq!(memory.read_u16(0x0200), 0x1234);
}

#[test]
fn test_write_u16_little_endian() {
    let mut memory = FlatMemory::new();

    memory.write_u16(0x0300, 0xBEEF);

    assert_eq!(memory.read(0x0300), 0xEF);
    assert_eq!(memory.read(0x0301), 0xBE);
}

#[test]
fn test_u16_access_wraps_at_top_of_memory() {
    let mut memory = FlatMemory::new();

    memory.write_u16(0xFFFF, 0xA1B2);

    assert_eq!(memory.read(0xFFFF), 0xB2);
    assert_eq!(memory.read(0x0000), 0xA1);
    assert_eq!(memory.read_u16(0xFFFF), 0xA1B2);
}

/// 2KB of RAM mirrored across the whole address space, with a read counter.
struct MirroredRam {
    ram: [u8; 0x0800],
    reads: Cell<usize>,
}

impl MirroredRam {
    fn new() -> Self {
        Self {
            ram: [0; 0x0800],
            reads: Cell::new(0),
        }
    }
}

impl MemoryBus for MirroredRam {
    fn read(&self, addr: u16) -> u8 {
        self.reads.set(self.reads.get() + 1);
        self.ram[(addr & 0x07FF) as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.ram[(addr & 0x07FF) as usize] = value;
    }
}

#[test]
fn test_cpu_runs_on_custom_bus() {
    let mut memory = MirroredRam::new();

    // Reset vector 0xFFFC mirrors to 0x07FC; point it at 0x0600
    memory.write_u16(0xFFFC, 0x0600);
    // LDA #$2A ; STA $0010 ; BRK
    memory.write(0x0600, 0xA9);
    memory.write(0x0601, 0x2A);
    memory.write(0x0602, 0x85);
    memory.write(0x0603, 0x10);
    memory.write(0x0604, 0x00);

    let mut cpu = CPU::new(memory);
    assert_eq!(cpu.pc(), 0x0600);

    cpu.run().unwrap();

    assert_eq!(cpu.a(), 0x2A);
    assert_eq!(cpu.memory().read(0x0010), 0x2A);
    // The store is visible through a mirror
    assert_eq!(cpu.memory().read(0x0810), 0x2A);
    assert!(cpu.memory().reads.get() > 0);
}

#[test]
fn test_load_goes_through_bus() {
    let mut cpu = CPU::new(MirroredRam::new());

    cpu.load(&[0xE8, 0x00]).unwrap();

    // 0x8000 mirrors to 0x0000
    assert_eq!(cpu.memory().ram[0x0000], 0xE8);
    assert_eq!(cpu.mem_read_u16(0xFFFC), 0x8000);

    cpu.reset();
    cpu.run().unwrap();

    assert_eq!(cpu.x(), 0x01);
}
