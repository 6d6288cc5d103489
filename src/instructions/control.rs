//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump, absolute and indirect
//! - JSR / RTS: Subroutine call and return
//! - RTI: Return from interrupt
//! - NOP: No operation
//! - BRK: Halt the run loop
//!
//! JMP and JSR read their own 16-bit operands at PC rather than going through
//! the addressing-mode resolver.

use super::Flow;
use crate::{ExecutionError, MemoryBus, Status, CPU};

/// Executes JMP absolute (0x4C): PC = 16-bit operand.
pub(crate) fn jmp_absolute<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.regs.pc = cpu.memory.read_u16(cpu.regs.pc);
    Ok(Flow::Jump)
}

/// Executes JMP indirect (0x6C): PC = 16-bit value stored at the operand pointer.
///
/// Note: The NMOS 6502 does not carry into the pointer's high byte when
/// fetching the target. If the pointer's low byte is 0xFF, the target's high
/// byte is read from the start of the same page: JMP ($10FF) reads $10FF and
/// $1000, not $1100.
pub(crate) fn jmp_indirect<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    let ptr = cpu.memory.read_u16(cpu.regs.pc);

    let lo = cpu.memory.read(ptr) as u16;
    let hi_addr = if ptr & 0x00FF == 0x00FF {
        ptr & 0xFF00
    } else {
        ptr.wrapping_add(1)
    };
    let hi = cpu.memory.read(hi_addr) as u16;

    cpu.regs.pc = (hi << 8) | lo;
    Ok(Flow::Jump)
}

/// Executes JSR (Jump to Subroutine).
///
/// Pushes the address of the last byte of the JSR instruction (PC + 1, with PC
/// on the first operand byte), then jumps to the 16-bit operand.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    let target = cpu.memory.read_u16(cpu.regs.pc);
    let return_addr = cpu.regs.pc.wrapping_add(1);
    cpu.push_u16(return_addr);
    cpu.regs.pc = target;
    Ok(Flow::Jump)
}

/// Executes RTS (Return from Subroutine): pulls PC and adds one.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.regs.pc = cpu.pull_u16().wrapping_add(1);
    Ok(Flow::Jump)
}

/// Executes RTI (Return from Interrupt).
///
/// Pulls the status byte (Break cleared, Break2 set), then PC with no
/// adjustment.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    let status = cpu.pull();
    cpu.status = Status::from_stack_byte(status);
    cpu.regs.pc = cpu.pull_u16();
    Ok(Flow::Jump)
}

pub(crate) fn nop<M: MemoryBus>(_cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    Ok(Flow::Next)
}

/// Executes BRK: stops execution without touching the stack or vectors.
pub(crate) fn brk<M: MemoryBus>(_cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    Ok(Flow::Halt)
}
