//! Tests for the stack pointer transfers TSX and TXS.

use core6502::{FlatMemory, MemoryBus, Status, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_tsx_copies_reset_stack_pointer() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xBA);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_tsx_zero_flag() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xBA);
    cpu.set_sp(0x00);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_txs_sets_stack_pointer() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x9A);
    cpu.set_x(0x40);

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x40);
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_txs_does_not_affect_flags() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x9A);
    cpu.set_x(0x00);
    cpu.set_flag(Status::NEGATIVE, true);
    let before = cpu.status();

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.status(), before);
    assert!(!cpu.flag_z());
}
