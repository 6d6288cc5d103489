//! # Branch Instructions
//!
//! This module implements the eight conditional branches. Each tests one flag:
//!
//! | Instruction | Branches when |
//! |-------------|---------------|
//! | BCC / BCS   | C clear / set |
//! | BNE / BEQ   | Z clear / set |
//! | BPL / BMI   | N clear / set |
//! | BVC / BVS   | V clear / set |
//!
//! The operand is a signed 8-bit offset relative to the address of the next
//! instruction. The offset byte is consumed whether or not the branch is taken.

use super::Flow;
use crate::{ExecutionError, MemoryBus, Status, CPU};

/// Branches if `flag` is in the `when_set` state.
///
/// PC points at the offset byte on entry. A taken branch sets
/// PC = (PC + 1) + sign-extended offset, modulo 65536.
pub(crate) fn branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    flag: Status,
    when_set: bool,
) -> Result<Flow, ExecutionError> {
    if cpu.status.get(flag) != when_set {
        return Ok(Flow::Next);
    }

    let offset = cpu.memory.read(cpu.regs.pc) as i8;
    let next = cpu.regs.pc.wrapping_add(1);
    cpu.regs.pc = next.wrapping_add(offset as u16);

    Ok(Flow::Jump)
}
