//! # Status Flag Instructions
//!
//! CLC/SEC (carry), CLI/SEI (interrupt disable), CLD/SED (decimal) and CLV
//! (overflow). Each touches exactly one flag.

use super::Flow;
use crate::{ExecutionError, MemoryBus, Status, CPU};

pub(crate) fn write_flag<M: MemoryBus>(
    cpu: &mut CPU<M>,
    flag: Status,
    value: bool,
) -> Result<Flow, ExecutionError> {
    cpu.status.set(flag, value);
    Ok(Flow::Next)
}
