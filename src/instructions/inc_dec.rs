//! # Increment and Decrement Instructions
//!
//! - INC, DEC: memory
//! - INX, INY, DEX, DEY: index registers
//!
//! All wrap modulo 256 and set Zero and Negative from the result.

use super::Flow;
use crate::{byte_add, byte_sub, AddressingMode, ExecutionError, MemoryBus, CPU};

pub(crate) fn inc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let addr = cpu.operand_address(mode)?;
    let result = byte_add(cpu.memory.read(addr), 1);
    cpu.memory.write(addr, result);
    cpu.status.update_zero_negative(result);
    Ok(Flow::Next)
}

pub(crate) fn dec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let addr = cpu.operand_address(mode)?;
    let result = byte_sub(cpu.memory.read(addr), 1);
    cpu.memory.write(addr, result);
    cpu.status.update_zero_negative(result);
    Ok(Flow::Next)
}

pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.regs.x = byte_add(cpu.regs.x, 1);
    cpu.status.update_zero_negative(cpu.regs.x);
    Ok(Flow::Next)
}

pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.regs.y = byte_add(cpu.regs.y, 1);
    cpu.status.update_zero_negative(cpu.regs.y);
    Ok(Flow::Next)
}

pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.regs.x = byte_sub(cpu.regs.x, 1);
    cpu.status.update_zero_negative(cpu.regs.x);
    Ok(Flow::Next)
}

pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.regs.y = byte_sub(cpu.regs.y, 1);
    cpu.status.update_zero_negative(cpu.regs.y);
    Ok(Flow::Next)
}
