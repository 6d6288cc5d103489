//! # Addressing Modes
//!
//! This module defines the addressing modes an opcode can declare and the resolver
//! that turns a mode into an effective address.
//!
//! When the resolver runs, PC already points at the first operand byte (the
//! opcode byte has been consumed). The resolver only reads memory; it never
//! moves PC.

use crate::{ExecutionError, MemoryBus, Registers};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: NoneAddressing (implied and accumulator forms)
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY
///
/// Branches, JMP and JSR also use `NoneAddressing`: they read their own operand
/// bytes rather than going through the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// 8-bit constant operand in the instruction.
    ///
    /// Example: LDA #$10. The effective address is the operand byte itself.
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Full 16-bit address.
    ///
    /// Example: LDA $1234
    Absolute,

    /// 16-bit address indexed by X, wrapping at 0xFFFF.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y, wrapping at 0xFFFF.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,

    /// No memory operand.
    ///
    /// Examples: TAX, PHA, ASL A, BRK, NOP
    NoneAddressing,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode for this mode.
    ///
    /// `NoneAddressing` reports 0; instructions that read their own operands
    /// (branches, JMP, JSR) declare their length in the opcode table.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::NoneAddressing => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 2,
        }
    }
}

/// Reads a 16-bit pointer stored in zero page.
///
/// The high byte comes from `(ptr + 1) mod 256`, so a pointer at 0xFF takes its
/// high byte from 0x00.
fn read_zero_page_u16<M: MemoryBus>(memory: &M, ptr: u8) -> u16 {
    let lo = memory.read(ptr as u16) as u16;
    let hi = memory.read(ptr.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// Computes the effective address for `mode`.
///
/// # Errors
///
/// Returns `ExecutionError::UnsupportedAddressingMode` for `NoneAddressing`.
///
/// # Examples
///
/// ```
/// use core6502::{addressing::resolve, AddressingMode, FlatMemory, MemoryBus, Registers};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x8001, 0xF0); // operand byte
///
/// let mut regs = Registers::new();
/// regs.pc = 0x8001;
/// regs.x = 0x20;
///
/// // $F0,X wraps within zero page
/// assert_eq!(resolve(AddressingMode::ZeroPageX, &regs, &mem), Ok(0x0010));
/// ```
pub fn resolve<M: MemoryBus>(
    mode: AddressingMode,
    regs: &Registers,
    memory: &M,
) -> Result<u16, ExecutionError> {
    let pc = regs.pc;

    let addr = match mode {
        AddressingMode::Immediate => pc,

        AddressingMode::ZeroPage => memory.read(pc) as u16,

        AddressingMode::ZeroPageX => memory.read(pc).wrapping_add(regs.x) as u16,

        AddressingMode::ZeroPageY => memory.read(pc).wrapping_add(regs.y) as u16,

        AddressingMode::Absolute => memory.read_u16(pc),

        AddressingMode::AbsoluteX => memory.read_u16(pc).wrapping_add(regs.x as u16),

        AddressingMode::AbsoluteY => memory.read_u16(pc).wrapping_add(regs.y as u16),

        AddressingMode::IndirectX => {
            let ptr = memory.read(pc).wrapping_add(regs.x);
            read_zero_page_u16(memory, ptr)
        }

        AddressingMode::IndirectY => {
            let base = read_zero_page_u16(memory, memory.read(pc));
            base.wrapping_add(regs.y as u16)
        }

        AddressingMode::NoneAddressing => {
            tracing::error!(?mode, pc, "no effective address for addressing mode");
            return Err(ExecutionError::UnsupportedAddressingMode { mode });
        }
    };

    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup(operands: &[u8]) -> (Registers, FlatMemory) {
        let mut mem = FlatMemory::new();
        for (i, byte) in operands.iter().enumerate() {
            mem.write(0x8001 + i as u16, *byte);
        }
        let mut regs = Registers::new();
        regs.pc = 0x8001;
        (regs, mem)
    }

    #[test]
    fn test_immediate_is_pc() {
        let (regs, mem) = setup(&[0x42]);
        assert_eq!(resolve(AddressingMode::Immediate, &regs, &mem), Ok(0x8001));
    }

    #[test]
    fn test_zero_page() {
        let (regs, mem) = setup(&[0x42]);
        assert_eq!(resolve(AddressingMode::ZeroPage, &regs, &mem), Ok(0x0042));
    }

    #[test]
    fn test_zero_page_indexed_wraps() {
        let (mut regs, mem) = setup(&[0xFF]);
        regs.x = 0x01;
        regs.y = 0x10;
        assert_eq!(resolve(AddressingMode::ZeroPageX, &regs, &mem), Ok(0x0000));
        assert_eq!(resolve(AddressingMode::ZeroPageY, &regs, &mem), Ok(0x000F));
    }

    #[test]
    fn test_absolute() {
        let (regs, mem) = setup(&[0x34, 0x12]);
        assert_eq!(resolve(AddressingMode::Absolute, &regs, &mem), Ok(0x1234));
    }

    #[test]
    fn test_absolute_indexed_wraps() {
        let (mut regs, mem) = setup(&[0xFF, 0xFF]);
        regs.x = 0x02;
        regs.y = 0x01;
        assert_eq!(resolve(AddressingMode::AbsoluteX, &regs, &mem), Ok(0x0001));
        assert_eq!(resolve(AddressingMode::AbsoluteY, &regs, &mem), Ok(0x0000));
    }

    #[test]
    fn test_absolute_indexed_crosses_page() {
        let (mut regs, mem) = setup(&[0xF0, 0x12]);
        regs.x = 0x20;
        assert_eq!(resolve(AddressingMode::AbsoluteX, &regs, &mem), Ok(0x1310));
    }

    #[test]
    fn test_indirect_x() {
        let (mut regs, mut mem) = setup(&[0x20]);
        regs.x = 0x04;
        mem.write(0x0024, 0x74);
        mem.write(0x0025, 0x20);
        assert_eq!(resolve(AddressingMode::IndirectX, &regs, &mem), Ok(0x2074));
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let (mut regs, mut mem) = setup(&[0xFE]);
        regs.x = 0x01;
        // Pointer at 0xFF: low byte from 0xFF, high byte from 0x00
        mem.write(0x00FF, 0x34);
        mem.write(0x0000, 0x12);
        mem.write(0x0100, 0x99);
        assert_eq!(resolve(AddressingMode::IndirectX, &regs, &mem), Ok(0x1234));
    }

    #[test]
    fn test_indirect_y() {
        let (mut regs, mut mem) = setup(&[0x86]);
        regs.y = 0x10;
        mem.write(0x0086, 0x28);
        mem.write(0x0087, 0x40);
        assert_eq!(resolve(AddressingMode::IndirectY, &regs, &mem), Ok(0x4038));
    }

    #[test]
    fn test_indirect_y_wraps() {
        let (mut regs, mut mem) = setup(&[0xFF]);
        regs.y = 0x02;
        mem.write(0x00FF, 0xFF);
        mem.write(0x0000, 0xFF);
        assert_eq!(resolve(AddressingMode::IndirectY, &regs, &mem), Ok(0x0001));
    }

    #[test]
    fn test_none_addressing_is_an_error() {
        let (regs, mem) = setup(&[]);
        assert_eq!(
            resolve(AddressingMode::NoneAddressing, &regs, &mem),
            Err(ExecutionError::UnsupportedAddressingMode {
                mode: AddressingMode::NoneAddressing
            })
        );
    }

    #[test]
    fn test_operand_bytes() {
        assert_eq!(AddressingMode::NoneAddressing.operand_bytes(), 0);
        assert_eq!(AddressingMode::Immediate.operand_bytes(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_bytes(), 1);
        assert_eq!(AddressingMode::AbsoluteY.operand_bytes(), 2);
    }
}
