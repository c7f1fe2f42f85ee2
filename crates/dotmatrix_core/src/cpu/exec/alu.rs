use crate::cpu::{Cpu, Flag, FlagMask, WordRegister};

impl Cpu {
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,r — the 0x80–0xBF block. The
    /// operation sits in bits 3–5, the source operand in bits 0–2.
    pub(super) fn exec_alu_r(&mut self, opcode: u8) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let src = opcode & 0x07;
        let value = self.read_operand8(src);
        self.apply_alu((opcode >> 3) & 0x07, value);

        if src == 6 { 8 } else { 4 }
    }

    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,d8.
    pub(super) fn exec_alu_d8(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));

        let value = self.fetch8();
        self.apply_alu((opcode >> 3) & 0x07, value);
        8
    }

    fn apply_alu(&mut self, operation: u8, value: u8) {
        let a = self.regs.a();
        match operation {
            0 => {
                let result = self.add_bytes(a, value, 0, FlagMask::ALL);
                self.regs.set_a(result);
            }
            1 => {
                let carry_in = self.get_flag(Flag::C) as u8;
                let result = self.add_bytes(a, value, carry_in, FlagMask::ALL);
                self.regs.set_a(result);
            }
            2 => {
                let result = self.subtract_bytes(a, value, 0, FlagMask::ALL);
                self.regs.set_a(result);
            }
            3 => {
                let borrow_in = self.get_flag(Flag::C) as u8;
                let result = self.subtract_bytes(a, value, borrow_in, FlagMask::ALL);
                self.regs.set_a(result);
            }
            4 => {
                let result = a & value;
                self.regs.set_a(result);
                self.clear_flags();
                self.set_flag(Flag::Z, result == 0);
                self.set_flag(Flag::H, true);
            }
            5 => {
                let result = a ^ value;
                self.regs.set_a(result);
                self.clear_flags();
                self.set_flag(Flag::Z, result == 0);
            }
            6 => {
                let result = a | value;
                self.regs.set_a(result);
                self.clear_flags();
                self.set_flag(Flag::Z, result == 0);
            }
            _ => self.compare_bytes(a, value),
        }
    }

    /// RLCA/RRCA/RLA/RRA — accumulator-only rotates that force Z to 0.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let a = self.regs.a();
        let result = match opcode {
            0x07 => self.rotate_left(a, true),
            0x0F => self.rotate_right(a, true),
            0x17 => self.rotate_left_through_carry(a, true),
            _ => self.rotate_right_through_carry(a, true),
        };
        self.regs.set_a(result);
        4
    }

    /// ADD HL,rr — Z is untouched.
    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let value = self.regs.word(WordRegister::from_bits(opcode >> 4));
        let result = self.add_words(self.regs.hl, value, FlagMask::ALL_EXCEPT_ZERO);
        self.regs.hl = result;
        8
    }

    /// ADD SP,d8 (signed immediate).
    pub(super) fn exec_add_sp_d8(&mut self, _opcode: u8) -> u32 {
        self.regs.sp = self.sp_plus_offset();
        16
    }

    /// LD HL,SP+d8 (signed immediate) — same flag rule as ADD SP,d8.
    pub(super) fn exec_ld_hl_sp_d8(&mut self, _opcode: u8) -> u32 {
        self.regs.hl = self.sp_plus_offset();
        12
    }

    /// SP plus a signed 8-bit immediate. H and C compare the result's low
    /// nibble/byte against the pre-add SP rather than re-doing the
    /// low-byte addition. Z and N are cleared.
    fn sp_plus_offset(&mut self) -> u16 {
        let offset = self.fetch8() as i8 as i16 as u16;
        let sp = self.regs.sp;
        let result = sp.wrapping_add(offset);

        self.set_flag(Flag::Z, false);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (result & 0x000F) < (sp & 0x000F));
        self.set_flag(Flag::C, (result & 0x00FF) < (sp & 0x00FF));

        result
    }

    /// DAA.
    pub(super) fn exec_daa(&mut self, _opcode: u8) -> u32 {
        self.daa();
        4
    }

    /// CPL — complement A, set N and H.
    pub(super) fn exec_cpl(&mut self, _opcode: u8) -> u32 {
        let a = self.regs.a();
        self.regs.set_a(!a);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        4
    }

    /// SCF — set carry, clear N and H.
    pub(super) fn exec_scf(&mut self, _opcode: u8) -> u32 {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        4
    }

    /// CCF — complement carry, clear N and H.
    pub(super) fn exec_ccf(&mut self, _opcode: u8) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        4
    }
}
