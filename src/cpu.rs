//! # CPU
//!
//! [`CPU`] bundles the register file, status register, cycle counter and a
//! memory bus, and drives the fetch-decode-execute loop over them.
//!
//! ## CPU State
//!
//! The CPU owns:
//! - **Registers**: Accumulator (A), index registers (X, Y), stack pointer, program counter
//! - **Status flags**: the packed `Status` register
//! - **Cycle counter**: running sum of the nominal cycles of executed instructions
//! - **Memory**: any `MemoryBus` implementation
//!
//! ## Execution Model
//!
//! - `step()`: one instruction
//! - `run()`: instructions until BRK
//! - `load()` / `reset()` / `load_and_run()`: program setup
//!
//! Each step fetches the opcode at PC and advances PC past it. The handler then
//! runs with PC pointing at the first operand byte. Handlers that fall through
//! leave PC there and the loop skips the operand bytes using the opcode length;
//! handlers that transfer control (branches taken, jumps, calls, returns) set PC
//! themselves.

use crate::addressing::{self, AddressingMode};
use crate::instructions::{self, Flow};
use crate::registers::STACK_BASE;
use crate::{lookup, ExecutionError, FlatMemory, MemoryBus, Registers, Status};
use tracing::{debug, error, trace};

/// Address where `load` places programs.
pub const PROGRAM_START: u16 = 0x8000;

/// Location of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Largest program `load` accepts: everything from `PROGRAM_START` to the end of memory.
pub const PROGRAM_CAPACITY: usize = 0x1_0000 - PROGRAM_START as usize;

/// Adds two bytes modulo 256.
///
/// ```
/// assert_eq!(core6502::byte_add(0xFF, 0x02), 0x01);
/// ```
pub fn byte_add(a: u8, b: u8) -> u8 {
    a.wrapping_add(b)
}

/// Subtracts two bytes modulo 256.
///
/// ```
/// assert_eq!(core6502::byte_sub(0x00, 0x01), 0xFF);
/// ```
pub fn byte_sub(a: u8, b: u8) -> u8 {
    a.wrapping_sub(b)
}

/// Result of executing a single instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The instruction completed and execution can continue.
    Continue,
    /// A BRK was executed; `run()` stops here.
    Halted,
}

/// An NMOS 6502 attached to a memory bus.
///
/// The CPU is the single owner of the machine state: registers, status flags,
/// cycle counter and memory. Instruction handlers receive it by exclusive
/// reference. Independent machines are independent `CPU` values.
///
/// # Type Parameters
///
/// * `M` - the bus every fetch, operand access and stack operation goes through
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, Status};
///
/// let mut cpu = CPU::new(FlatMemory::new());
///
/// // LDA #$05 ; BRK
/// cpu.load_and_run(&[0xA9, 0x05, 0x00]).unwrap();
///
/// assert_eq!(cpu.a(), 0x05);
/// assert!(!cpu.flag(Status::ZERO));
/// assert!(!cpu.flag(Status::NEGATIVE));
/// ```
pub struct CPU<M: MemoryBus> {
    /// A, X, Y, SP and PC
    pub(crate) regs: Registers,

    /// Processor status flags
    pub(crate) status: Status,

    /// Sum of nominal cycles of every executed instruction
    pub(crate) cycles: u64,

    /// Backing memory
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and performs a reset.
    ///
    /// PC is loaded from the reset vector at 0xFFFC/0xFFFD, so memory should
    /// already contain a program and vector, or `load` should be called next.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    ///
    /// let cpu = CPU::new(mem);
    /// assert_eq!(cpu.pc(), 0x8000);
    /// assert_eq!(cpu.sp(), 0xFD);
    /// ```
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            regs: Registers::new(),
            status: Status::POWER_UP,
            cycles: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Copies `program` into memory at 0x8000 and points the reset vector at it.
    ///
    /// Registers are not touched; call `reset()` before `run()`.
    ///
    /// A program long enough to reach 0xFFFC has those two bytes overwritten by
    /// the reset vector.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::ProgramTooLarge` and leaves memory untouched if
    /// the program does not fit below 0x10000.
    pub fn load(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        if program.len() > PROGRAM_CAPACITY {
            error!(
                len = program.len(),
                capacity = PROGRAM_CAPACITY,
                "program does not fit in memory"
            );
            return Err(ExecutionError::ProgramTooLarge {
                len: program.len(),
                capacity: PROGRAM_CAPACITY,
            });
        }

        let mut addr = PROGRAM_START;
        for &byte in program {
            self.memory.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
        self.memory.write_u16(RESET_VECTOR, PROGRAM_START);

        debug!(len = program.len(), start = PROGRAM_START, "program loaded");
        Ok(())
    }

    /// Restores the power-up register state and loads PC from the reset vector.
    ///
    /// - A, X, Y are zeroed
    /// - SP is set to 0xFD
    /// - Status is Interrupt Disable | Break2 (0x24)
    ///
    /// Memory and the cycle counter are left alone.
    pub fn reset(&mut self) {
        self.regs = Registers::new();
        self.status = Status::POWER_UP;
        self.regs.pc = self.memory.read_u16(RESET_VECTOR);

        debug!(pc = self.regs.pc, "cpu reset");
    }

    /// Loads `program`, resets, and runs until BRK.
    pub fn load_and_run(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        self.load(program)?;
        self.reset();
        self.run()
    }

    /// Runs the fetch-decode-execute loop until a BRK instruction.
    ///
    /// # Errors
    ///
    /// Stops at the first `ExecutionError`; registers and memory keep whatever
    /// state the failing step left.
    pub fn run(&mut self) -> Result<(), ExecutionError> {
        loop {
            if self.step()? == StepOutcome::Halted {
                debug!(pc = self.regs.pc, cycles = self.cycles, "halted on BRK");
                return Ok(());
            }
        }
    }

    /// Executes one instruction.
    ///
    /// One pass of the loop:
    /// 1. Fetch opcode byte at PC and advance PC by one
    /// 2. Look up the opcode in the opcode table
    /// 3. Dispatch to the instruction handler
    /// 4. Skip the operand bytes unless the handler moved PC itself
    ///
    /// # Errors
    ///
    /// - `ExecutionError::UnrecognizedOpcode` if the byte has no table entry
    ///   (PC is left just past the offending byte)
    /// - `ExecutionError::UnsupportedAddressingMode` on an internal dispatch defect
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{CPU, FlatMemory, MemoryBus, StepOutcome};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write_u16(0xFFFC, 0x8000);
    /// mem.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step(), Ok(StepOutcome::Continue));
    /// assert_eq!(cpu.pc(), 0x8001);
    /// assert_eq!(cpu.cycles(), 2);
    /// ```
    pub fn step(&mut self) -> Result<StepOutcome, ExecutionError> {
        let fetch_pc = self.regs.pc;
        let code = self.memory.read(fetch_pc);
        self.regs.pc = fetch_pc.wrapping_add(1);

        let opcode = lookup(code).map_err(|_| {
            error!(opcode = code, pc = fetch_pc, "unrecognized opcode");
            ExecutionError::UnrecognizedOpcode {
                opcode: code,
                pc: fetch_pc,
            }
        })?;

        trace!(
            pc = fetch_pc,
            opcode = code,
            mnemonic = opcode.mnemonic(),
            a = self.regs.a,
            x = self.regs.x,
            y = self.regs.y,
            sp = self.regs.sp,
            p = self.status.as_byte(),
            "execute"
        );

        let flow = instructions::execute(self, opcode)?;
        self.cycles += opcode.cycles as u64;

        match flow {
            Flow::Next => {
                self.regs.pc = self.regs.pc.wrapping_add(opcode.len as u16 - 1);
                Ok(StepOutcome::Continue)
            }
            Flow::Jump => Ok(StepOutcome::Continue),
            Flow::Halt => Ok(StepOutcome::Halted),
        }
    }

    // ========== Operand and Stack Helpers ==========

    /// Effective address of the current instruction's operand.
    pub(crate) fn operand_address(&self, mode: AddressingMode) -> Result<u16, ExecutionError> {
        addressing::resolve(mode, &self.regs, &self.memory)
    }

    /// Byte at the current instruction's effective address.
    pub(crate) fn operand_value(&self, mode: AddressingMode) -> Result<u8, ExecutionError> {
        let addr = self.operand_address(mode)?;
        Ok(self.memory.read(addr))
    }

    pub(crate) fn push(&mut self, value: u8) {
        let addr = self.regs.push_addr();
        self.memory.write(addr, value);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        let addr = self.regs.pull_addr();
        self.memory.read(addr)
    }

    /// Pushes high byte first so the value sits little-endian in the stack page.
    pub(crate) fn push_u16(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push((value & 0xFF) as u8);
    }

    pub(crate) fn pull_u16(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ========== Memory Access ==========

    /// Reads a byte without executing anything.
    pub fn mem_read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Writes a byte without executing anything.
    pub fn mem_write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Reads a little-endian 16-bit value.
    pub fn mem_read_u16(&self, addr: u16) -> u16 {
        self.memory.read_u16(addr)
    }

    /// Writes a little-endian 16-bit value.
    pub fn mem_write_u16(&mut self, addr: u16, value: u16) {
        self.memory.write_u16(addr, value);
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Register Getters ==========

    pub fn a(&self) -> u8 {
        self.regs.a
    }

    pub fn x(&self) -> u8 {
        self.regs.x
    }

    pub fn y(&self) -> u8 {
        self.regs.y
    }

    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Stack pointer as an offset into page one; see [`CPU::stack_top`].
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// True if every bit of `flag` is set.
    pub fn flag(&self, flag: Status) -> bool {
        self.status.get(flag)
    }

    // Single-flag shorthands, named after the letters in the NV-BDIZC layout.

    pub fn flag_n(&self) -> bool {
        self.flag(Status::NEGATIVE)
    }

    pub fn flag_v(&self) -> bool {
        self.flag(Status::OVERFLOW)
    }

    pub fn flag_b(&self) -> bool {
        self.flag(Status::BREAK)
    }

    pub fn flag_d(&self) -> bool {
        self.flag(Status::DECIMAL_MODE)
    }

    pub fn flag_i(&self) -> bool {
        self.flag(Status::INTERRUPT_DISABLE)
    }

    pub fn flag_z(&self) -> bool {
        self.flag(Status::ZERO)
    }

    pub fn flag_c(&self) -> bool {
        self.flag(Status::CARRY)
    }

    /// Returns the sum of nominal cycle counts of executed instructions.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Address of the next free stack slot (0x0100 | SP).
    pub fn stack_top(&self) -> u16 {
        STACK_BASE | self.regs.sp as u16
    }

    // ========== Register Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Replaces the status register.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Sets or clears a single status flag.
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.status.set(flag, value);
    }
}

impl Default for CPU<FlatMemory> {
    /// A CPU on zeroed flat memory. PC is 0x0000 until a program is loaded
    /// and the CPU reset.
    fn default() -> Self {
        Self::new(FlatMemory::new())
    }
}
