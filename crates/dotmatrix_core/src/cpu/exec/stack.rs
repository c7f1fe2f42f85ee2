use crate::cpu::{Cpu, WordRegister};

impl Cpu {
    /// PUSH rr — bits 4–5 select BC/DE/HL/AF (AF replaces SP here).
    pub(super) fn exec_push_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));

        let value = match (opcode >> 4) & 0x03 {
            3 => self.regs.af,
            bits => self.regs.word(WordRegister::from_bits(bits)),
        };
        self.push_word(value);
        16
    }

    /// POP rr — counterpart of PUSH; POP AF keeps F's low nibble zero.
    pub(super) fn exec_pop_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));

        let value = self.pop_word();
        match (opcode >> 4) & 0x03 {
            3 => self.regs.set_af(value),
            bits => self.regs.set_word(WordRegister::from_bits(bits), value),
        }
        12
    }

    /// CALL a16.
    pub(super) fn exec_call_a16(&mut self, _opcode: u8) -> u32 {
        let addr = self.fetch16();
        let ret = self.regs.pc;
        self.push_word(ret);
        self.regs.pc = addr;
        24
    }

    /// CALL cc,a16 — taken re-dispatches to CALL a16; not taken skips the
    /// operand and leaves PC and the stack alone.
    pub(super) fn exec_call_cc(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));

        if self.condition(opcode) {
            self.exec_call_a16(opcode)
        } else {
            let _ = self.fetch16();
            12
        }
    }

    /// RET.
    pub(super) fn exec_ret(&mut self, _opcode: u8) -> u32 {
        let addr = self.pop_word();
        self.regs.pc = addr;
        16
    }

    /// RET cc — a taken conditional return costs the unconditional RET
    /// plus the condition check.
    pub(super) fn exec_ret_cc(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));

        if self.condition(opcode) {
            self.exec_ret(opcode) + 4
        } else {
            8
        }
    }

    /// RETI — return and enable interrupts.
    pub(super) fn exec_reti(&mut self, opcode: u8) -> u32 {
        self.ime = true;
        self.exec_ret(opcode)
    }

    /// RST — call one of the eight fixed vectors encoded in bits 3–5.
    pub(super) fn exec_rst(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF
        ));

        let ret = self.regs.pc;
        self.push_word(ret);
        self.regs.pc = (opcode & 0x38) as u16;
        16
    }
}
