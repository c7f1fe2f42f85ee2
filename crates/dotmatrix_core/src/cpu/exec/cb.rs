use crate::cpu::{Cpu, Flag};

impl Cpu {
    /// CB 0x00–0x3F: RLC/RRC/RL/RR/SLA/SRA/SWAP/SRL on a register or (HL).
    ///
    /// Bits 3–5 select the operation, bits 0–2 the operand. Unlike the
    /// accumulator-only forms, these compute Z from the result.
    pub(super) fn exec_cb_rotate_shift(&mut self, opcode: u8) -> u32 {
        debug_assert!(opcode <= 0x3F);

        let target = opcode & 0x07;
        let value = self.read_operand8(target);

        let result = match (opcode >> 3) & 0x07 {
            0 => self.rotate_left(value, false),
            1 => self.rotate_right(value, false),
            2 => self.rotate_left_through_carry(value, false),
            3 => self.rotate_right_through_carry(value, false),
            // SLA: bit 7 out to C, bit 0 cleared.
            4 => {
                let result = value << 1;
                self.clear_flags();
                self.set_flag(Flag::Z, result == 0);
                self.set_flag(Flag::C, value & 0x80 != 0);
                result
            }
            // SRA: bit 0 out to C, bit 7 preserved (arithmetic shift).
            5 => {
                let result = (value >> 1) | (value & 0x80);
                self.clear_flags();
                self.set_flag(Flag::Z, result == 0);
                self.set_flag(Flag::C, value & 0x01 != 0);
                result
            }
            // SWAP: exchange nibbles, C cleared.
            6 => {
                let result = value.rotate_left(4);
                self.clear_flags();
                self.set_flag(Flag::Z, result == 0);
                result
            }
            // SRL: bit 0 out to C, bit 7 cleared (logical shift).
            _ => {
                let result = value >> 1;
                self.clear_flags();
                self.set_flag(Flag::Z, result == 0);
                self.set_flag(Flag::C, value & 0x01 != 0);
                result
            }
        };

        self.write_operand8(target, result);
        if target == 6 { 16 } else { 8 }
    }

    /// CB 0x40–0x7F: BIT b,r — Z holds the complement of the tested bit,
    /// H is forced set, N cleared, C untouched.
    pub(super) fn exec_cb_bit(&mut self, opcode: u8) -> u32 {
        debug_assert!((0x40..=0x7F).contains(&opcode));

        let bit = (opcode >> 3) & 0x07;
        let target = opcode & 0x07;
        let value = self.read_operand8(target);

        self.set_flag(Flag::Z, value & (1 << bit) == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);

        if target == 6 { 16 } else { 8 }
    }

    /// CB 0x80–0xBF: RES b,r — no flag effect.
    pub(super) fn exec_cb_res(&mut self, opcode: u8) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let bit = (opcode >> 3) & 0x07;
        let target = opcode & 0x07;
        let value = self.read_operand8(target);
        self.write_operand8(target, value & !(1 << bit));

        if target == 6 { 16 } else { 8 }
    }

    /// CB 0xC0–0xFF: SET b,r — no flag effect.
    pub(super) fn exec_cb_set(&mut self, opcode: u8) -> u32 {
        debug_assert!(opcode >= 0xC0);

        let bit = (opcode >> 3) & 0x07;
        let target = opcode & 0x07;
        let value = self.read_operand8(target);
        self.write_operand8(target, value | 1 << bit);

        if target == 6 { 16 } else { 8 }
    }
}
