//! # 6502 Instruction Execution Core
//!
//! An NMOS 6502 CPU core that executes a linear stream of machine code: a 64KB
//! byte-addressable memory, the A/X/Y/S/PC register file, the packed status
//! register, and a table-driven fetch-decode-execute loop.
//!
//! ## Quick Start
//!
//! ```rust
//! use core6502::{CPU, FlatMemory, Status};
//!
//! let mut cpu: CPU<FlatMemory> = CPU::default();
//!
//! // LDA #$C0 ; TAX ; INX ; BRK
//! cpu.load_and_run(&[0xA9, 0xC0, 0xAA, 0xE8, 0x00]).unwrap();
//!
//! assert_eq!(cpu.x(), 0xC1);
//! assert!(cpu.flag(Status::NEGATIVE));
//! ```
//!
//! ## Architecture
//!
//! - **Single owned machine state**: `CPU<M>` owns registers, status and memory;
//!   instruction handlers receive it by exclusive reference
//! - **Memory abstraction**: the CPU reaches memory only through the `MemoryBus` trait
//! - **Table-driven dispatch**: every opcode byte maps to an `OpCode` entry carrying
//!   its `Instruction` variant, mnemonic, length, cycle count and addressing mode
//! - **Explicit wraparound**: all 8-bit and 16-bit arithmetic uses wrapping operations
//!
//! Cycle counts are informational metadata. There is no timing model, no
//! interrupt handling, and no decimal-mode arithmetic.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, program loading and the execution loop
//! - `registers` - Register file and stack addressing
//! - `status` - Processor status flags
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - Opcode table and lookup
//! - `addressing` - Addressing modes and effective-address resolution

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{byte_add, byte_sub, StepOutcome, CPU};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{lookup, Instruction, OpCode, CPU_OPCODES, OPCODE_TABLE};
pub use registers::Registers;
pub use status::Status;

/// Errors that abort CPU execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched byte has no entry in the opcode table.
    #[error("unrecognized opcode 0x{opcode:02X} at 0x{pc:04X}")]
    UnrecognizedOpcode {
        /// The offending opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: u16,
    },

    /// An instruction handler asked for the effective address of an
    /// instruction that has no memory operand.
    ///
    /// This is an internal dispatch defect, never caused by program data.
    #[error("cannot resolve an effective address for addressing mode {mode:?}")]
    UnsupportedAddressingMode {
        /// The mode that was passed to the resolver.
        mode: AddressingMode,
    },

    /// The program does not fit between the load address and the end of memory.
    #[error("program of {len} bytes exceeds the {capacity} bytes available at 0x8000")]
    ProgramTooLarge {
        /// Length of the rejected program.
        len: usize,
        /// Number of bytes available for a program.
        capacity: usize,
    },
}
