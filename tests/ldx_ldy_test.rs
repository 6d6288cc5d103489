//! Tests for the LDX and LDY instructions.

use core6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_ldx_immediate() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xA2);
    cpu.memory_mut().write(0x8001, 0x00);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_ldx_zero_page_y_wraps() {
    let mut cpu = setup_cpu();

    // LDX $80,Y with Y = 0x90 reads 0x0010
    cpu.memory_mut().write(0x8000, 0xB6);
    cpu.memory_mut().write(0x8001, 0x80);
    cpu.memory_mut().write(0x0010, 0x81);
    cpu.set_y(0x90);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x81);
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_ldx_absolute_y() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xBE);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2005, 0x12);
    cpu.set_y(0x05);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x12);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_ldy_immediate() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xA0);
    cpu.memory_mut().write(0x8001, 0xFE);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0xFE);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_ldy_zero_page_x() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xB4);
    cpu.memory_mut().write(0x8001, 0x40);
    cpu.memory_mut().write(0x0043, 0x09);
    cpu.set_x(0x03);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x09);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xBC);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x10);
    cpu.memory_mut().write(0x1100, 0x33);
    cpu.set_x(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x33);
    assert_eq!(cpu.pc(), 0x8003);
}
