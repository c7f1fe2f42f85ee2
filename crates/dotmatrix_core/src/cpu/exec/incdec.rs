use crate::cpu::{Cpu, FlagMask, WordRegister};

impl Cpu {
    /// INC r (and INC (HL)). Carry is never touched.
    pub(super) fn exec_inc8(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C
        ));

        let dst = (opcode >> 3) & 0x07;
        let value = self.read_operand8(dst);
        let result = self.add_bytes(value, 1, 0, FlagMask::ALL_EXCEPT_CARRY);
        self.write_operand8(dst, result);

        if dst == 6 { 12 } else { 4 }
    }

    /// DEC r (and DEC (HL)). Carry is never touched.
    pub(super) fn exec_dec8(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D
        ));

        let dst = (opcode >> 3) & 0x07;
        let value = self.read_operand8(dst);
        let result = self.subtract_bytes(value, 1, 0, FlagMask::ALL_EXCEPT_CARRY);
        self.write_operand8(dst, result);

        if dst == 6 { 12 } else { 4 }
    }

    /// INC rr — no flag effect.
    pub(super) fn exec_inc16_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x03 | 0x13 | 0x23 | 0x33));

        let reg = WordRegister::from_bits(opcode >> 4);
        let value = self.regs.word(reg).wrapping_add(1);
        self.regs.set_word(reg, value);
        8
    }

    /// DEC rr — no flag effect.
    pub(super) fn exec_dec16_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0B | 0x1B | 0x2B | 0x3B));

        let reg = WordRegister::from_bits(opcode >> 4);
        let value = self.regs.word(reg).wrapping_sub(1);
        self.regs.set_word(reg, value);
        8
    }
}
