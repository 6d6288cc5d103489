//! # Opcode Table
//!
//! The static table of documented NMOS 6502 opcodes. Each entry records the
//! opcode byte, the instruction it performs, its encoded length, its nominal
//! cycle count and its addressing mode.
//!
//! `CPU_OPCODES` is the literal list; `OPCODE_TABLE` is the same data indexed by
//! opcode byte, built at compile time. Bytes with no entry are undocumented
//! opcodes and fail to decode.

use crate::addressing::AddressingMode;
use crate::ExecutionError;

/// The operation an opcode performs, independent of addressing mode.
///
/// Several opcode bytes share one instruction (LDA has eight encodings). The
/// execution engine dispatches on this enum, so every variant must have a
/// handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    // Load/store
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    // Register transfers
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    // Arithmetic
    Adc,
    Sbc,
    // Logical
    And,
    Eor,
    Ora,
    Bit,
    // Shifts and rotates
    Asl,
    Lsr,
    Rol,
    Ror,
    // Increment/decrement
    Inc,
    Dec,
    Inx,
    Iny,
    Dex,
    Dey,
    // Compare
    Cmp,
    Cpx,
    Cpy,
    // Branches
    Bcc,
    Bcs,
    Beq,
    Bmi,
    Bne,
    Bpl,
    Bvc,
    Bvs,
    // Jumps and subroutines
    JmpAbsolute,
    JmpIndirect,
    Jsr,
    Rts,
    Rti,
    // Stack
    Pha,
    Php,
    Pla,
    Plp,
    // Flags
    Clc,
    Sec,
    Cli,
    Sei,
    Cld,
    Sed,
    Clv,
    // Misc
    Nop,
    Brk,
}

impl Instruction {
    /// Three-letter assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Lda => "LDA",
            Instruction::Ldx => "LDX",
            Instruction::Ldy => "LDY",
            Instruction::Sta => "STA",
            Instruction::Stx => "STX",
            Instruction::Sty => "STY",
            Instruction::Tax => "TAX",
            Instruction::Tay => "TAY",
            Instruction::Tsx => "TSX",
            Instruction::Txa => "TXA",
            Instruction::Txs => "TXS",
            Instruction::Tya => "TYA",
            Instruction::Adc => "ADC",
            Instruction::Sbc => "SBC",
            Instruction::And => "AND",
            Instruction::Eor => "EOR",
            Instruction::Ora => "ORA",
            Instruction::Bit => "BIT",
            Instruction::Asl => "ASL",
            Instruction::Lsr => "LSR",
            Instruction::Rol => "ROL",
            Instruction::Ror => "ROR",
            Instruction::Inc => "INC",
            Instruction::Dec => "DEC",
            Instruction::Inx => "INX",
            Instruction::Iny => "INY",
            Instruction::Dex => "DEX",
            Instruction::Dey => "DEY",
            Instruction::Cmp => "CMP",
            Instruction::Cpx => "CPX",
            Instruction::Cpy => "CPY",
            Instruction::Bcc => "BCC",
            Instruction::Bcs => "BCS",
            Instruction::Beq => "BEQ",
            Instruction::Bmi => "BMI",
            Instruction::Bne => "BNE",
            Instruction::Bpl => "BPL",
            Instruction::Bvc => "BVC",
            Instruction::Bvs => "BVS",
            Instruction::JmpAbsolute | Instruction::JmpIndirect => "JMP",
            Instruction::Jsr => "JSR",
            Instruction::Rts => "RTS",
            Instruction::Rti => "RTI",
            Instruction::Pha => "PHA",
            Instruction::Php => "PHP",
            Instruction::Pla => "PLA",
            Instruction::Plp => "PLP",
            Instruction::Clc => "CLC",
            Instruction::Sec => "SEC",
            Instruction::Cli => "CLI",
            Instruction::Sei => "SEI",
            Instruction::Cld => "CLD",
            Instruction::Sed => "SED",
            Instruction::Clv => "CLV",
            Instruction::Nop => "NOP",
            Instruction::Brk => "BRK",
        }
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use core6502::{lookup, AddressingMode, Instruction};
///
/// let lda_imm = lookup(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic(), "LDA");
/// assert_eq!(lda_imm.instruction, Instruction::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.len, 2);
/// assert_eq!(lda_imm.cycles, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpCode {
    /// The opcode byte.
    pub code: u8,

    /// Operation performed by this opcode.
    pub instruction: Instruction,

    /// Encoded length in bytes, including the opcode byte (1-3).
    pub len: u8,

    /// Nominal cycle count, excluding page-crossing and branch penalties.
    ///
    /// Informational only; no timing model consumes it.
    pub cycles: u8,

    /// Addressing mode used to locate the operand.
    pub mode: AddressingMode,
}

impl OpCode {
    const fn new(
        code: u8,
        instruction: Instruction,
        len: u8,
        cycles: u8,
        mode: AddressingMode,
    ) -> Self {
        Self {
            code,
            instruction,
            len,
            cycles,
            mode,
        }
    }

    /// Three-letter assembler mnemonic (e.g., "LDA").
    pub const fn mnemonic(&self) -> &'static str {
        self.instruction.mnemonic()
    }
}

/// Every documented NMOS 6502 opcode (151 entries).
pub const CPU_OPCODES: &[OpCode] = &[
    // Load/store
    OpCode::new(0xA9, Instruction::Lda, 2, 2, AddressingMode::Immediate),
    OpCode::new(0xA5, Instruction::Lda, 2, 3, AddressingMode::ZeroPage),
    OpCode::new(0xB5, Instruction::Lda, 2, 4, AddressingMode::ZeroPageX),
    OpCode::new(0xAD, Instruction::Lda, 3, 4, AddressingMode::Absolute),
    OpCode::new(0xBD, Instruction::Lda, 3, 4, AddressingMode::AbsoluteX),
    OpCode::new(0xB9, Instruction::Lda, 3, 4, AddressingMode::AbsoluteY),
    OpCode::new(0xA1, Instruction::Lda, 2, 6, AddressingMode::IndirectX),
    OpCode::new(0xB1, Instruction::Lda, 2, 5, AddressingMode::IndirectY),
    OpCode::new(0xA2, Instruction::Ldx, 2, 2, AddressingMode::Immediate),
    OpCode::new(0xA6, Instruction::Ldx, 2, 3, AddressingMode::ZeroPage),
    OpCode::new(0xB6, Instruction::Ldx, 2, 4, AddressingMode::ZeroPageY),
    OpCode::new(0xAE, Instruction::Ldx, 3, 4, AddressingMode::Absolute),
    OpCode::new(0xBE, Instruction::Ldx, 3, 4, AddressingMode::AbsoluteY),
    OpCode::new(0xA0, Instruction::Ldy, 2, 2, AddressingMode::Immediate),
    OpCode::new(0xA4, Instruction::Ldy, 2, 3, AddressingMode::ZeroPage),
    OpCode::new(0xB4, Instruction::Ldy, 2, 4, AddressingMode::ZeroPageX),
    OpCode::new(0xAC, Instruction::Ldy, 3, 4, AddressingMode::Absolute),
    OpCode::new(0xBC, Instruction::Ldy, 3, 4, AddressingMode::AbsoluteX),
    OpCode::new(0x85, Instruction::Sta, 2, 3, AddressingMode::ZeroPage),
    OpCode::new(0x95, Instruction::Sta, 2, 4, AddressingMode::ZeroPageX),
    OpCode::new(0x8D, Instruction::Sta, 3, 4, AddressingMode::Absolute),
    OpCode::new(0x9D, Instruction::Sta, 3, 5, AddressingMode::AbsoluteX),
    OpCode::new(0x99, Instruction::Sta, 3, 5, AddressingMode::AbsoluteY),
    OpCode::new(0x81, Instruction::Sta, 2, 6, AddressingMode::IndirectX),
    OpCode::new(0x91, Instruction::Sta, 2, 6, AddressingMode::IndirectY),
    OpCode::new(0x86, Instruction::Stx, 2, 3, AddressingMode::ZeroPage),
    OpCode::new(0x96, Instruction::Stx, 2, 4, AddressingMode::ZeroPageY),
    OpCode::new(0x8E, Instruction::Stx, 3, 4, AddressingMode::Absolute),
    OpCode::new(0x84, Instruction::Sty, 2, 3, AddressingMode::ZeroPage),
    OpCode::new(0x94, Instruction::Sty, 2, 4, AddressingMode::ZeroPageX),
    OpCode::new(0x8C, Instruction::Sty, 3, 4, AddressingMode::Absolute),
    // Register transfers
    OpCode::new(0xAA, Instruction::Tax, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0xA8, Instruction::Tay, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0xBA, Instruction::Tsx, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x8A, Instruction::Txa, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x9A, Instruction::Txs, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x98, Instruction::Tya, 1, 2, AddressingMode::NoneAddressing),
    // Arithmetic
    OpCode::new(0x69, Instruction::Adc, 2, 2, AddressingMode::Immediate),
    OpCode::new(0x65, Instruction::Adc, 2, 3, AddressingMode::ZeroPage),
    OpCode::new(0x75, Instruction::Adc, 2, 4, AddressingMode::ZeroPageX),
    OpCode::new(0x6D, Instruction::Adc, 3, 4, AddressingMode::Absolute),
    OpCode::new(0x7D, Instruction::Adc, 3, 4, AddressingMode::AbsoluteX),
    OpCode::new(0x79, Instruction::Adc, 3, 4, AddressingMode::AbsoluteY),
    OpCode::new(0x61, Instruction::Adc, 2, 6, AddressingMode::IndirectX),
    OpCode::new(0x71, Instruction::Adc, 2, 5, AddressingMode::IndirectY),
    OpCode::new(0xE9, Instruction::Sbc, 2, 2, AddressingMode::Immediate),
    OpCode::new(0xE5, Instruction::Sbc, 2, 3, AddressingMode::ZeroPage),
    OpCode::new(0xF5, Instruction::Sbc, 2, 4, AddressingMode::ZeroPageX),
    OpCode::new(0xED, Instruction::Sbc, 3, 4, AddressingMode::Absolute),
    OpCode::new(0xFD, Instruction::Sbc, 3, 4, AddressingMode::AbsoluteX),
    OpCode::new(0xF9, Instruction::Sbc, 3, 4, AddressingMode::AbsoluteY),
    OpCode::new(0xE1, Instruction::Sbc, 2, 6, AddressingMode::IndirectX),
    OpCode::new(0xF1, Instruction::Sbc, 2, 5, AddressingMode::IndirectY),
    // Logical
    OpCode::new(0x29, Instruction::And, 2, 2, AddressingMode::Immediate),
    OpCode::new(0x25, Instruction::And, 2, 3, AddressingMode::ZeroPage),
    OpCode::new(0x35, Instruction::And, 2, 4, AddressingMode::ZeroPageX),
    OpCode::new(0x2D, Instruction::And, 3, 4, AddressingMode::Absolute),
    OpCode::new(0x3D, Instruction::And, 3, 4, AddressingMode::AbsoluteX),
    OpCode::new(0x39, Instruction::And, 3, 4, AddressingMode::AbsoluteY),
    OpCode::new(0x21, Instruction::And, 2, 6, AddressingMode::IndirectX),
    OpCode::new(0x31, Instruction::And, 2, 5, AddressingMode::IndirectY),
    OpCode::new(0x49, Instruction::Eor, 2, 2, AddressingMode::Immediate),
    OpCode::new(0x45, Instruction::Eor, 2, 3, AddressingMode::ZeroPage),
    OpCode::new(0x55, Instruction::Eor, 2, 4, AddressingMode::ZeroPageX),
    OpCode::new(0x4D, Instruction::Eor, 3, 4, AddressingMode::Absolute),
    OpCode::new(0x5D, Instruction::Eor, 3, 4, AddressingMode::AbsoluteX),
    OpCode::new(0x59, Instruction::Eor, 3, 4, AddressingMode::AbsoluteY),
    OpCode::new(0x41, Instruction::Eor, 2, 6, AddressingMode::IndirectX),
    OpCode::new(0x51, Instruction::Eor, 2, 5, AddressingMode::IndirectY),
    OpCode::new(0x09, Instruction::Ora, 2, 2, AddressingMode::Immediate),
    OpCode::new(0x05, Instruction::Ora, 2, 3, AddressingMode::ZeroPage),
    OpCode::new(0x15, Instruction::Ora, 2, 4, AddressingMode::ZeroPageX),
    OpCode::new(0x0D, Instruction::Ora, 3, 4, AddressingMode::Absolute),
    OpCode::new(0x1D, Instruction::Ora, 3, 4, AddressingMode::AbsoluteX),
    OpCode::new(0x19, Instruction::Ora, 3, 4, AddressingMode::AbsoluteY),
    OpCode::new(0x01, Instruction::Ora, 2, 6, AddressingMode::IndirectX),
    OpCode::new(0x11, Instruction::Ora, 2, 5, AddressingMode::IndirectY),
    OpCode::new(0x24, Instruction::Bit, 2, 3, AddressingMode::ZeroPage),
    OpCode::new(0x2C, Instruction::Bit, 3, 4, AddressingMode::Absolute),
    // Shifts and rotates
    OpCode::new(0x0A, Instruction::Asl, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x06, Instruction::Asl, 2, 5, AddressingMode::ZeroPage),
    OpCode::new(0x16, Instruction::Asl, 2, 6, AddressingMode::ZeroPageX),
    OpCode::new(0x0E, Instruction::Asl, 3, 6, AddressingMode::Absolute),
    OpCode::new(0x1E, Instruction::Asl, 3, 7, AddressingMode::AbsoluteX),
    OpCode::new(0x4A, Instruction::Lsr, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x46, Instruction::Lsr, 2, 5, AddressingMode::ZeroPage),
    OpCode::new(0x56, Instruction::Lsr, 2, 6, AddressingMode::ZeroPageX),
    OpCode::new(0x4E, Instruction::Lsr, 3, 6, AddressingMode::Absolute),
    OpCode::new(0x5E, Instruction::Lsr, 3, 7, AddressingMode::AbsoluteX),
    OpCode::new(0x2A, Instruction::Rol, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x26, Instruction::Rol, 2, 5, AddressingMode::ZeroPage),
    OpCode::new(0x36, Instruction::Rol, 2, 6, AddressingMode::ZeroPageX),
    OpCode::new(0x2E, Instruction::Rol, 3, 6, AddressingMode::Absolute),
    OpCode::new(0x3E, Instruction::Rol, 3, 7, AddressingMode::AbsoluteX),
    OpCode::new(0x6A, Instruction::Ror, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x66, Instruction::Ror, 2, 5, AddressingMode::ZeroPage),
    OpCode::new(0x76, Instruction::Ror, 2, 6, AddressingMode::ZeroPageX),
    OpCode::new(0x6E, Instruction::Ror, 3, 6, AddressingMode::Absolute),
    OpCode::new(0x7E, Instruction::Ror, 3, 7, AddressingMode::AbsoluteX),
    // Increment/decrement
    OpCode::new(0xE6, Instruction::Inc, 2, 5, AddressingMode::ZeroPage),
    OpCode::new(0xF6, Instruction::Inc, 2, 6, AddressingMode::ZeroPageX),
    OpCode::new(0xEE, Instruction::Inc, 3, 6, AddressingMode::Absolute),
    OpCode::new(0xFE, Instruction::Inc, 3, 7, AddressingMode::AbsoluteX),
    OpCode::new(0xC6, Instruction::Dec, 2, 5, AddressingMode::ZeroPage),
    OpCode::new(0xD6, Instruction::Dec, 2, 6, AddressingMode::ZeroPageX),
    OpCode::new(0xCE, Instruction::Dec, 3, 6, AddressingMode::Absolute),
    OpCode::new(0xDE, Instruction::Dec, 3, 7, AddressingMode::AbsoluteX),
    OpCode::new(0xE8, Instruction::Inx, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0xC8, Instruction::Iny, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0xCA, Instruction::Dex, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x88, Instruction::Dey, 1, 2, AddressingMode::NoneAddressing),
    // Compare
    OpCode::new(0xC9, Instruction::Cmp, 2, 2, AddressingMode::Immediate),
    OpCode::new(0xC5, Instruction::Cmp, 2, 3, AddressingMode::ZeroPage),
    OpCode::new(0xD5, Instruction::Cmp, 2, 4, AddressingMode::ZeroPageX),
    OpCode::new(0xCD, Instruction::Cmp, 3, 4, AddressingMode::Absolute),
    OpCode::new(0xDD, Instruction::Cmp, 3, 4, AddressingMode::AbsoluteX),
    OpCode::new(0xD9, Instruction::Cmp, 3, 4, AddressingMode::AbsoluteY),
    OpCode::new(0xC1, Instruction::Cmp, 2, 6, AddressingMode::IndirectX),
    OpCode::new(0xD1, Instruction::Cmp, 2, 5, AddressingMode::IndirectY),
    OpCode::new(0xE0, Instruction::Cpx, 2, 2, AddressingMode::Immediate),
    OpCode::new(0xE4, Instruction::Cpx, 2, 3, AddressingMode::ZeroPage),
    OpCode::new(0xEC, Instruction::Cpx, 3, 4, AddressingMode::Absolute),
    OpCode::new(0xC0, Instruction::Cpy, 2, 2, AddressingMode::Immediate),
    OpCode::new(0xC4, Instruction::Cpy, 2, 3, AddressingMode::ZeroPage),
    OpCode::new(0xCC, Instruction::Cpy, 3, 4, AddressingMode::Absolute),
    // Branches
    OpCode::new(0x90, Instruction::Bcc, 2, 2, AddressingMode::NoneAddressing),
    OpCode::new(0xB0, Instruction::Bcs, 2, 2, AddressingMode::NoneAddressing),
    OpCode::new(0xF0, Instruction::Beq, 2, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x30, Instruction::Bmi, 2, 2, AddressingMode::NoneAddressing),
    OpCode::new(0xD0, Instruction::Bne, 2, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x10, Instruction::Bpl, 2, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x50, Instruction::Bvc, 2, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x70, Instruction::Bvs, 2, 2, AddressingMode::NoneAddressing),
    // Jumps and subroutines
    OpCode::new(0x4C, Instruction::JmpAbsolute, 3, 3, AddressingMode::NoneAddressing),
    OpCode::new(0x6C, Instruction::JmpIndirect, 3, 5, AddressingMode::NoneAddressing),
    OpCode::new(0x20, Instruction::Jsr, 3, 6, AddressingMode::NoneAddressing),
    OpCode::new(0x60, Instruction::Rts, 1, 6, AddressingMode::NoneAddressing),
    OpCode::new(0x40, Instruction::Rti, 1, 6, AddressingMode::NoneAddressing),
    // Stack
    OpCode::new(0x48, Instruction::Pha, 1, 3, AddressingMode::NoneAddressing),
    OpCode::new(0x08, Instruction::Php, 1, 3, AddressingMode::NoneAddressing),
    OpCode::new(0x68, Instruction::Pla, 1, 4, AddressingMode::NoneAddressing),
    OpCode::new(0x28, Instruction::Plp, 1, 4, AddressingMode::NoneAddressing),
    // Flags
    OpCode::new(0x18, Instruction::Clc, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x38, Instruction::Sec, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x58, Instruction::Cli, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x78, Instruction::Sei, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0xD8, Instruction::Cld, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0xF8, Instruction::Sed, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0xB8, Instruction::Clv, 1, 2, AddressingMode::NoneAddressing),
    // Misc
    OpCode::new(0xEA, Instruction::Nop, 1, 2, AddressingMode::NoneAddressing),
    OpCode::new(0x00, Instruction::Brk, 1, 7, AddressingMode::NoneAddressing),
];

/// Opcode entries indexed by opcode byte; `None` for undocumented bytes.
pub static OPCODE_TABLE: [Option<OpCode>; 256] = build_table();

const fn build_table() -> [Option<OpCode>; 256] {
    let mut table: [Option<OpCode>; 256] = [None; 256];
    let mut i = 0;
    while i < CPU_OPCODES.len() {
        let op = CPU_OPCODES[i];
        if table[op.code as usize].is_some() {
            panic!("opcode byte listed twice in CPU_OPCODES");
        }
        table[op.code as usize] = Some(op);
        i += 1;
    }
    table
}

/// Looks up the entry for an opcode byte.
///
/// # Errors
///
/// Returns `ExecutionError::UnrecognizedOpcode` for bytes without an entry.
/// The `pc` field of the error is 0; the execution loop fills in the fetch
/// address.
///
/// # Examples
///
/// ```
/// use core6502::{lookup, ExecutionError};
///
/// assert_eq!(lookup(0xEA).unwrap().mnemonic(), "NOP");
/// assert_eq!(
///     lookup(0x02),
///     Err(ExecutionError::UnrecognizedOpcode { opcode: 0x02, pc: 0 })
/// );
/// ```
pub fn lookup(code: u8) -> Result<&'static OpCode, ExecutionError> {
    OPCODE_TABLE[code as usize]
        .as_ref()
        .ok_or(ExecutionError::UnrecognizedOpcode { opcode: code, pc: 0 })
}
