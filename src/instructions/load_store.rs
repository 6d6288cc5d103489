//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads set Zero and Negative from the loaded value. Stores affect no flags.

use super::Flow;
use crate::{AddressingMode, ExecutionError, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode)?;
    cpu.regs.a = value;
    cpu.status.update_zero_negative(value);
    Ok(Flow::Next)
}

/// Executes the LDX (Load X Register) instruction. Sets Z and N from X.
pub(crate) fn ldx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode)?;
    cpu.regs.x = value;
    cpu.status.update_zero_negative(value);
    Ok(Flow::Next)
}

/// Executes the LDY (Load Y Register) instruction. Sets Z and N from Y.
pub(crate) fn ldy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode)?;
    cpu.regs.y = value;
    cpu.status.update_zero_negative(value);
    Ok(Flow::Next)
}

/// Executes the STA (Store Accumulator) instruction.
///
/// # Flag Behavior
///
/// - No flags affected
pub(crate) fn sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let addr = cpu.operand_address(mode)?;
    cpu.memory.write(addr, cpu.regs.a);
    Ok(Flow::Next)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn stx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let addr = cpu.operand_address(mode)?;
    cpu.memory.write(addr, cpu.regs.x);
    Ok(Flow::Next)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn sty<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let addr = cpu.operand_address(mode)?;
    cpu.memory.write(addr, cpu.regs.y);
    Ok(Flow::Next)
}
