use crate::cpu::Cpu;

impl Cpu {
    /// JR d8 — relative jump; the signed displacement is relative to the
    /// address following the operand.
    pub(super) fn exec_jr_d8(&mut self, _opcode: u8) -> u32 {
        let offset = self.fetch8() as i8;
        self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
        12
    }

    /// JR cc,d8 — taken re-dispatches to JR d8; not taken still consumes
    /// the displacement byte.
    pub(super) fn exec_jr_cc(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));

        if self.condition(opcode) {
            self.exec_jr_d8(opcode)
        } else {
            let _ = self.fetch8();
            8
        }
    }

    /// JP a16.
    pub(super) fn exec_jp_a16(&mut self, _opcode: u8) -> u32 {
        let addr = self.fetch16();
        self.regs.pc = addr;
        16
    }

    /// JP cc,a16.
    pub(super) fn exec_jp_cc(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));

        if self.condition(opcode) {
            self.exec_jp_a16(opcode)
        } else {
            let _ = self.fetch16();
            12
        }
    }

    /// JP HL — no operand fetch, hence the short cost.
    pub(super) fn exec_jp_hl(&mut self, _opcode: u8) -> u32 {
        self.regs.pc = self.regs.hl;
        4
    }
}
