mod alu;
mod exec;
mod helpers;
mod regs;

pub use alu::FlagMask;
pub use regs::{ByteRegister, Flag, Registers, WordRegister};

use crate::mmu::Memory;

/// An instruction handler: receives the fetched opcode byte (whose
/// bit-fields may parameterize the behavior) and returns the elapsed
/// T-cycle count. Immediate operands are read from memory at PC.
pub type InstructionFn = fn(&mut Cpu, u8) -> u32;

/// Sentinel byte that selects the second (CB-prefixed) instruction table.
const CB_PREFIX: u8 = 0xCB;

/// Game Boy CPU core (Sharp LR35902).
///
/// Owns its 64KB memory one-to-one. All registers and latches start at
/// zero; the two 256-entry dispatch tables are built once at construction.
/// `None` table slots are the undefined "opcode holes"; executing one is a
/// logged decode failure, not a crash.
pub struct Cpu {
    pub regs: Registers,
    pub memory: Memory,
    /// Interrupt master enable. DI/EI clear/set it; interrupt delivery
    /// itself is handled outside this core.
    pub ime: bool,
    /// Set by HALT. While halted, `step` burns a NOP's worth of cycles
    /// without fetching. Clearing it requires interrupt delivery, which
    /// lives outside this core.
    pub halted: bool,
    instruction_table: [Option<InstructionFn>; 256],
    instruction_table_cb: [Option<InstructionFn>; 256],
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            memory: Memory::new(),
            ime: false,
            halted: false,
            instruction_table: exec::instruction_table(),
            instruction_table_cb: exec::instruction_table_cb(),
        }
    }

    /// Fetch, decode, and execute one instruction; returns elapsed T-cycles.
    ///
    /// While halted, each call consumes a fixed NOP-equivalent cost without
    /// fetching or moving PC. An undefined opcode is reported via the log
    /// and yields 0 cycles, leaving the host free to continue or stop.
    pub fn step(&mut self) -> u32 {
        if self.halted {
            return 4;
        }

        let opcode = self.fetch8();
        if opcode == CB_PREFIX {
            let cb_opcode = self.fetch8();
            match self.instruction_table_cb[cb_opcode as usize] {
                Some(handler) => handler(self, cb_opcode),
                None => self.decode_failure(cb_opcode, true),
            }
        } else {
            match self.instruction_table[opcode as usize] {
                Some(handler) => handler(self, opcode),
                None => self.decode_failure(opcode, false),
            }
        }
    }

    fn decode_failure(&mut self, opcode: u8, cb_prefixed: bool) -> u32 {
        let fetch_len = if cb_prefixed { 2 } else { 1 };
        let address = self.regs.pc.wrapping_sub(fetch_len);
        log::error!(
            "undefined opcode {prefix}0x{opcode:02X} at 0x{address:04X}",
            prefix = if cb_prefixed { "0xCB " } else { "" },
        );
        0
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        (self.regs.f() >> flag as u8) & 1 == 1
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        let f = self.regs.f();
        if value {
            self.regs.set_f(f | 1 << flag as u8);
        } else {
            self.regs.set_f(f & !(1 << flag as u8));
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.set_f(0);
    }
}
