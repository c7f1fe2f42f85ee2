use crate::cpu::Cpu;

impl Cpu {
    /// NOP.
    pub(super) fn exec_nop(&mut self, _opcode: u8) -> u32 {
        4
    }

    /// HALT — latch the halted state. Leaving it again requires interrupt
    /// delivery, which is outside this core; the host (or a test) clears
    /// the latch directly.
    pub(super) fn exec_halt(&mut self, _opcode: u8) -> u32 {
        self.halted = true;
        4
    }

    /// STOP — executed as NOP. Full STOP semantics (low-power state, the
    /// padding byte) need peripherals this core does not model.
    pub(super) fn exec_stop(&mut self, _opcode: u8) -> u32 {
        4
    }

    /// DI — clear the interrupt master enable.
    pub(super) fn exec_di(&mut self, _opcode: u8) -> u32 {
        self.ime = false;
        4
    }

    /// EI — set the interrupt master enable. The hardware's one-instruction
    /// enable delay is only observable through interrupt delivery, so IME
    /// is set immediately here.
    pub(super) fn exec_ei(&mut self, _opcode: u8) -> u32 {
        self.ime = true;
        4
    }
}
