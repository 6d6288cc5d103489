//! # Register Transfer Instructions
//!
//! - TAX, TAY: Accumulator to X / Y
//! - TXA, TYA: X / Y to accumulator
//! - TSX: Stack pointer to X
//! - TXS: X to stack pointer
//!
//! Every transfer except TXS sets Zero and Negative from the copied value.

use super::Flow;
use crate::{ExecutionError, MemoryBus, CPU};

pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.regs.x = cpu.regs.a;
    cpu.status.update_zero_negative(cpu.regs.x);
    Ok(Flow::Next)
}

pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.regs.y = cpu.regs.a;
    cpu.status.update_zero_negative(cpu.regs.y);
    Ok(Flow::Next)
}

pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.regs.a = cpu.regs.x;
    cpu.status.update_zero_negative(cpu.regs.a);
    Ok(Flow::Next)
}

pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.regs.a = cpu.regs.y;
    cpu.status.update_zero_negative(cpu.regs.a);
    Ok(Flow::Next)
}

pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.regs.x = cpu.regs.sp;
    cpu.status.update_zero_negative(cpu.regs.x);
    Ok(Flow::Next)
}

/// TXS is the only transfer that leaves the flags alone.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.regs.sp = cpu.regs.x;
    Ok(Flow::Next)
}
