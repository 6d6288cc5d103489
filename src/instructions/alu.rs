//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logical, compare and bit-test operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry (ADC of the inverted operand)
//! - AND, EOR, ORA: Bitwise combine with the accumulator
//! - CMP, CPX, CPY: Compare a register with memory
//! - BIT: Test bits in memory against the accumulator
//!
//! Decimal mode is ignored: ADC and SBC are always binary.

use super::Flow;
use crate::{byte_sub, AddressingMode, ExecutionError, MemoryBus, Status, CPU};

/// Adds `value` and the carry flag into the accumulator.
///
/// Carry is set when the 9-bit sum exceeds 0xFF. Overflow is set when both
/// inputs share a sign that the result does not: `(A ^ R) & (M ^ R) & 0x80`.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let carry_in = cpu.status.get(Status::CARRY) as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.status.set(Status::CARRY, sum > 0xFF);
    cpu.status
        .set(Status::OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);

    cpu.regs.a = result;
    cpu.status.update_zero_negative(result);
}

/// Executes the ADC (Add with Carry) instruction.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the unsigned sum exceeds 255
/// - Overflow (V): Set on signed overflow
/// - Zero (Z), Negative (N): From the truncated result
pub(crate) fn adc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode)?;
    add_with_carry(cpu, value);
    Ok(Flow::Next)
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// `A - M - (1 - C)` equals `A + !M + C`: the operand's two's-complement
/// negation minus one, fed through the ADC path. Carry set afterwards means
/// no borrow occurred.
pub(crate) fn sbc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode)?;
    add_with_carry(cpu, !value);
    Ok(Flow::Next)
}

/// Executes the AND (Logical AND) instruction. Updates A, Z and N.
pub(crate) fn and<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode)?;
    cpu.regs.a &= value;
    cpu.status.update_zero_negative(cpu.regs.a);
    Ok(Flow::Next)
}

/// Executes the EOR (Exclusive OR) instruction. Updates A, Z and N.
pub(crate) fn eor<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode)?;
    cpu.regs.a ^= value;
    cpu.status.update_zero_negative(cpu.regs.a);
    Ok(Flow::Next)
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates A, Z and N.
pub(crate) fn ora<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode)?;
    cpu.regs.a |= value;
    cpu.status.update_zero_negative(cpu.regs.a);
    Ok(Flow::Next)
}

/// Executes the BIT (Bit Test) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A & M is zero
/// - Negative (N): Bit 7 of M
/// - Overflow (V): Bit 6 of M
///
/// The accumulator is not modified.
pub(crate) fn bit<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode)?;
    cpu.status.set(Status::ZERO, cpu.regs.a & value == 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
    Ok(Flow::Next)
}

/// Shared body of CMP, CPX and CPY.
///
/// Carry is set when `register >= M`; Zero and Negative come from
/// `register - M` modulo 256.
fn compare<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    register: u8,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode)?;
    cpu.status.set(Status::CARRY, value <= register);
    cpu.status.update_zero_negative(byte_sub(register, value));
    Ok(Flow::Next)
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn cmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let register = cpu.regs.a;
    compare(cpu, mode, register)
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn cpx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let register = cpu.regs.x;
    compare(cpu, mode, register)
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn cpy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let register = cpu.regs.y;
    compare(cpu, mode, register)
}
