//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit offset into this page and wraps modulo 256.

use super::Flow;
use crate::{ExecutionError, MemoryBus, Status, CPU};

/// Executes the PHA (Push Accumulator) instruction. No flags affected.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    let a = cpu.regs.a;
    cpu.push(a);
    Ok(Flow::Next)
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte has Break and Break2 set; the live register is unchanged.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    let status = cpu.status.to_stack_byte();
    cpu.push(status);
    Ok(Flow::Next)
}

/// Executes the PLA (Pull Accumulator) instruction. Sets Z and N from A.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.regs.a = cpu.pull();
    cpu.status.update_zero_negative(cpu.regs.a);
    Ok(Flow::Next)
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Replaces the whole status register; Break is cleared and Break2 set.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    let status = cpu.pull();
    cpu.status = Status::from_stack_byte(status);
    Ok(Flow::Next)
}
