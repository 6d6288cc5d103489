//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all documented 6502 instructions,
//! organized by category. Each handler takes a mutable reference to the CPU and
//! reports how the program counter should move afterwards.
//!
//! When a handler runs, PC points at the first operand byte of the instruction.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{ExecutionError, Instruction, MemoryBus, OpCode, Status, CPU};

/// How PC moves once a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Fall through: skip the operand bytes.
    Next,
    /// The handler already set PC.
    Jump,
    /// BRK: stop the run loop.
    Halt,
}

/// Runs the handler for `op`.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: &OpCode,
) -> Result<Flow, ExecutionError> {
    let mode = op.mode;

    match op.instruction {
        Instruction::Lda => load_store::lda(cpu, mode),
        Instruction::Ldx => load_store::ldx(cpu, mode),
        Instruction::Ldy => load_store::ldy(cpu, mode),
        Instruction::Sta => load_store::sta(cpu, mode),
        Instruction::Stx => load_store::stx(cpu, mode),
        Instruction::Sty => load_store::sty(cpu, mode),

        Instruction::Tax => transfer::tax(cpu),
        Instruction::Tay => transfer::tay(cpu),
        Instruction::Tsx => transfer::tsx(cpu),
        Instruction::Txa => transfer::txa(cpu),
        Instruction::Txs => transfer::txs(cpu),
        Instruction::Tya => transfer::tya(cpu),

        Instruction::Adc => alu::adc(cpu, mode),
        Instruction::Sbc => alu::sbc(cpu, mode),
        Instruction::And => alu::and(cpu, mode),
        Instruction::Eor => alu::eor(cpu, mode),
        Instruction::Ora => alu::ora(cpu, mode),
        Instruction::Bit => alu::bit(cpu, mode),
        Instruction::Cmp => alu::cmp(cpu, mode),
        Instruction::Cpx => alu::cpx(cpu, mode),
        Instruction::Cpy => alu::cpy(cpu, mode),

        Instruction::Asl => shifts::asl(cpu, mode),
        Instruction::Lsr => shifts::lsr(cpu, mode),
        Instruction::Rol => shifts::rol(cpu, mode),
        Instruction::Ror => shifts::ror(cpu, mode),

        Instruction::Inc => inc_dec::inc(cpu, mode),
        Instruction::Dec => inc_dec::dec(cpu, mode),
        Instruction::Inx => inc_dec::inx(cpu),
        Instruction::Iny => inc_dec::iny(cpu),
        Instruction::Dex => inc_dec::dex(cpu),
        Instruction::Dey => inc_dec::dey(cpu),

        Instruction::Bcc => branches::branch(cpu, Status::CARRY, false),
        Instruction::Bcs => branches::branch(cpu, Status::CARRY, true),
        Instruction::Bne => branches::branch(cpu, Status::ZERO, false),
        Instruction::Beq => branches::branch(cpu, Status::ZERO, true),
        Instruction::Bpl => branches::branch(cpu, Status::NEGATIVE, false),
        Instruction::Bmi => branches::branch(cpu, Status::NEGATIVE, true),
        Instruction::Bvc => branches::branch(cpu, Status::OVERFLOW, false),
        Instruction::Bvs => branches::branch(cpu, Status::OVERFLOW, true),

        Instruction::JmpAbsolute => control::jmp_absolute(cpu),
        Instruction::JmpIndirect => control::jmp_indirect(cpu),
        Instruction::Jsr => control::jsr(cpu),
        Instruction::Rts => control::rts(cpu),
        Instruction::Rti => control::rti(cpu),
        Instruction::Nop => control::nop(cpu),
        Instruction::Brk => control::brk(cpu),

        Instruction::Pha => stack::pha(cpu),
        Instruction::Php => stack::php(cpu),
        Instruction::Pla => stack::pla(cpu),
        Instruction::Plp => stack::plp(cpu),

        Instruction::Clc => flags::write_flag(cpu, Status::CARRY, false),
        Instruction::Sec => flags::write_flag(cpu, Status::CARRY, true),
        Instruction::Cli => flags::write_flag(cpu, Status::INTERRUPT_DISABLE, false),
        Instruction::Sei => flags::write_flag(cpu, Status::INTERRUPT_DISABLE, true),
        Instruction::Cld => flags::write_flag(cpu, Status::DECIMAL_MODE, false),
        Instruction::Sed => flags::write_flag(cpu, Status::DECIMAL_MODE, true),
        Instruction::Clv => flags::write_flag(cpu, Status::OVERFLOW, false),
    }
}
