//! Tests for the shift and rotate instructions ASL, LSR, ROL and ROR.
//!
//! Each is exercised in accumulator form and at least one memory form.

use core6502::{FlatMemory, MemoryBus, Status, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== ASL ==========

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x0A);
    cpu.set_a(0x81);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_asl_zero_page() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x06);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.memory_mut().write(0x0020, 0x40);
    cpu.set_a(0x11);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0020), 0x80);
    assert_eq!(cpu.a(), 0x11);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_asl_to_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x0A);
    cpu.set_a(0x80);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

// ========== LSR ==========

#[test]
fn test_lsr_accumulator() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x4A);
    cpu.set_a(0x03);
    cpu.set_flag(Status::NEGATIVE, true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lsr_absolute_x() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x5E);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x02);
    cpu.memory_mut().write(0x0201, 0x01);
    cpu.set_x(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0201), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.cycles(), 7);
}

// ========== ROL ==========

#[test]
fn test_rol_accumulator_shifts_carry_in() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x2A);
    cpu.set_a(0x40);
    cpu.set_flag(Status::CARRY, true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_rol_zero_page_carry_out() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x26);
    cpu.memory_mut().write(0x8001, 0x50);
    cpu.memory_mut().write(0x0050, 0x80);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0050), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

// ========== ROR ==========

#[test]
fn test_ror_accumulator_shifts_carry_into_bit_7() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x6A);
    cpu.set_a(0x02);
    cpu.set_flag(Status::CARRY, true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_zero_page_x() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x76);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0011, 0x01);
    cpu.set_x(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0011), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert_eq!(cpu.cycles(), 6);
}
