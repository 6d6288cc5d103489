//! Tests for the RTI (Return from Interrupt) instruction.

use core6502::{FlatMemory, MemoryBus, Status, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_rti_restores_status_and_pc() {
    let mut cpu = setup_cpu();

    // Stack, from SP+1 upwards: status, PC low, PC high
    cpu.memory_mut().write(0x8000, 0x40);
    cpu.memory_mut().write(0x01FB, 0b1100_0011);
    cpu.memory_mut().write(0x01FC, 0x78);
    cpu.memory_mut().write(0x01FD, 0x56);
    cpu.set_sp(0xFA);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x5678);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_i());
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_rti_clears_break_and_sets_break2() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x40);
    cpu.memory_mut().write(0x01FB, 0b0001_0000);
    cpu.memory_mut().write(0x01FC, 0x00);
    cpu.memory_mut().write(0x01FD, 0x90);
    cpu.set_sp(0xFA);

    cpu.step().unwrap();

    assert!(!cpu.flag_b());
    assert!(cpu.flag(Status::BREAK2));
    assert_eq!(cpu.status().as_byte(), 0b0010_0000);
}

#[test]
fn test_rti_does_not_add_one_to_pc() {
    let mut cpu = setup_cpu();

    // Pulled PC is used as-is
    cpu.memory_mut().write(0x8000, 0x40);
    cpu.memory_mut().write(0x01FB, 0x24);
    cpu.memory_mut().write(0x01FC, 0x10);
    cpu.memory_mut().write(0x01FD, 0x80);
    cpu.set_sp(0xFA);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8010);
}
