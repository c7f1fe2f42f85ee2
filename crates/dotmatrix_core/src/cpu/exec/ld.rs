use crate::cpu::{Cpu, WordRegister};

impl Cpu {
    /// LD rr,d16 — 16-bit immediate into BC/DE/HL/SP (bits 4–5).
    pub(super) fn exec_ld_rr_d16(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));

        let value = self.fetch16();
        let reg = WordRegister::from_bits(opcode >> 4);
        self.regs.set_word(reg, value);
        12
    }

    /// LD r,d8 (and LD (HL),d8 when the destination index is 6).
    pub(super) fn exec_ld_r_d8(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E
        ));

        let dst = (opcode >> 3) & 0x07;
        let value = self.fetch8();
        self.write_operand8(dst, value);

        if dst == 6 { 12 } else { 8 }
    }

    /// LD r1,r2 — the 0x40–0x7F register-transfer block (0x76 is HALT and
    /// dispatched separately).
    pub(super) fn exec_ld_r_r(&mut self, opcode: u8) -> u32 {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);

        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_operand8(src);
        self.write_operand8(dst, value);

        if dst == 6 || src == 6 { 8 } else { 4 }
    }

    /// LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A.
    pub(super) fn exec_ld_indirect_a(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));

        let addr = self.indirect_address(opcode);
        self.memory.write_byte(addr, self.regs.a());
        8
    }

    /// LD A,(BC) / LD A,(DE) / LD A,(HL+) / LD A,(HL-).
    pub(super) fn exec_ld_a_indirect(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));

        let addr = self.indirect_address(opcode);
        let value = self.memory.read_byte(addr);
        self.regs.set_a(value);
        8
    }

    /// Resolve the indirect address for the 0x02/0x0A column and apply the
    /// HL post-increment/decrement for the 0x22/0x32 rows.
    fn indirect_address(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc,
            1 => self.regs.de,
            2 => {
                let addr = self.regs.hl;
                self.regs.hl = addr.wrapping_add(1);
                addr
            }
            _ => {
                let addr = self.regs.hl;
                self.regs.hl = addr.wrapping_sub(1);
                addr
            }
        }
    }

    /// LD (a16),SP.
    pub(super) fn exec_ld_a16_sp(&mut self, _opcode: u8) -> u32 {
        let addr = self.fetch16();
        self.memory.write_word(addr, self.regs.sp);
        20
    }

    /// LDH (a8),A / LDH A,(a8) — high-page IO at 0xFF00 + immediate.
    pub(super) fn exec_ldh_a8(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xE0 | 0xF0));

        let addr = 0xFF00 | self.fetch8() as u16;
        if opcode == 0xE0 {
            self.memory.write_byte(addr, self.regs.a());
        } else {
            let value = self.memory.read_byte(addr);
            self.regs.set_a(value);
        }
        12
    }

    /// LDH (C),A / LDH A,(C) — high-page IO at 0xFF00 + C.
    pub(super) fn exec_ldh_c(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xE2 | 0xF2));

        let addr = 0xFF00 | self.regs.c() as u16;
        if opcode == 0xE2 {
            self.memory.write_byte(addr, self.regs.a());
        } else {
            let value = self.memory.read_byte(addr);
            self.regs.set_a(value);
        }
        8
    }

    /// LD (a16),A / LD A,(a16).
    pub(super) fn exec_ld_a16_a(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xEA | 0xFA));

        let addr = self.fetch16();
        if opcode == 0xEA {
            self.memory.write_byte(addr, self.regs.a());
        } else {
            let value = self.memory.read_byte(addr);
            self.regs.set_a(value);
        }
        16
    }

    /// LD SP,HL.
    pub(super) fn exec_ld_sp_hl(&mut self, _opcode: u8) -> u32 {
        self.regs.sp = self.regs.hl;
        8
    }
}
