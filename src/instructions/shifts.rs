//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each has an accumulator form (`NoneAddressing`) and memory forms. The bit
//! shifted out becomes the new carry; Zero and Negative come from the result.

use super::Flow;
use crate::{AddressingMode, ExecutionError, MemoryBus, Status, CPU};

/// Applies `op` to the accumulator or to the operand in memory, writing the
/// result back to the same place.
fn read_modify_write<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    op: impl FnOnce(&mut Status, u8) -> u8,
) -> Result<Flow, ExecutionError> {
    if mode == AddressingMode::NoneAddressing {
        cpu.regs.a = op(&mut cpu.status, cpu.regs.a);
    } else {
        let addr = cpu.operand_address(mode)?;
        let value = cpu.memory.read(addr);
        let result = op(&mut cpu.status, value);
        cpu.memory.write(addr, result);
    }
    Ok(Flow::Next)
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// - Carry (C): Old bit 7
/// - Bit 0 of the result is 0
pub(crate) fn asl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    read_modify_write(cpu, mode, |status, value| {
        status.set(Status::CARRY, value & 0x80 != 0);
        let result = value << 1;
        status.update_zero_negative(result);
        result
    })
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// - Carry (C): Old bit 0
/// - Bit 7 of the result is 0, so N is always cleared
pub(crate) fn lsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    read_modify_write(cpu, mode, |status, value| {
        status.set(Status::CARRY, value & 0x01 != 0);
        let result = value >> 1;
        status.update_zero_negative(result);
        result
    })
}

/// Executes the ROL (Rotate Left) instruction.
///
/// - Bit 0 of the result is the old carry
/// - Carry (C): Old bit 7
pub(crate) fn rol<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    read_modify_write(cpu, mode, |status, value| {
        let carry_in = status.get(Status::CARRY) as u8;
        status.set(Status::CARRY, value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        status.update_zero_negative(result);
        result
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// - Bit 7 of the result is the old carry
/// - Carry (C): Old bit 0
pub(crate) fn ror<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    read_modify_write(cpu, mode, |status, value| {
        let carry_in = status.get(Status::CARRY) as u8;
        status.set(Status::CARRY, value & 0x01 != 0);
        let result = (value >> 1) | (carry_in << 7);
        status.update_zero_negative(result);
        result
    })
}
