use super::{ByteRegister, Cpu, Flag};

impl Cpu {
    /// Read the byte at PC and advance PC by one.
    #[inline]
    pub(super) fn fetch8(&mut self) -> u8 {
        let value = self.memory.read_byte(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Read a low-endian 16-bit immediate at PC and advance PC by two.
    #[inline]
    pub(super) fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8() as u16;
        let hi = self.fetch8() as u16;
        (hi << 8) | lo
    }

    /// Read an 8-bit operand by its 3-bit opcode index.
    ///
    /// The encoding matches the opcode tables: 0=B, 1=C, 2=D, 3=E, 4=H,
    /// 5=L, 6=(HL), 7=A. Index 6 is the unused F slot in the register
    /// encoding; the instruction set repurposes it as the (HL) memory
    /// operand.
    #[inline]
    pub(super) fn read_operand8(&mut self, index: u8) -> u8 {
        match ByteRegister::from_bits(index) {
            Some(reg) => self.regs.byte(reg),
            None => self.memory.read_byte(self.regs.hl),
        }
    }

    /// Write an 8-bit operand by its 3-bit opcode index (see `read_operand8`).
    #[inline]
    pub(super) fn write_operand8(&mut self, index: u8, value: u8) {
        match ByteRegister::from_bits(index) {
            Some(reg) => self.regs.set_byte(reg, value),
            None => self.memory.write_byte(self.regs.hl, value),
        }
    }

    /// Push a word onto the stack.
    ///
    /// The stack grows downward and the low byte is pushed first, so after
    /// the push memory[SP] holds the high byte and memory[SP+1] the low
    /// byte. `pop_word` mirrors this order exactly.
    #[inline]
    pub(super) fn push_word(&mut self, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write_byte(self.regs.sp, value as u8);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write_byte(self.regs.sp, (value >> 8) as u8);
    }

    #[inline]
    pub(super) fn pop_word(&mut self) -> u16 {
        let hi = self.memory.read_byte(self.regs.sp) as u16;
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let lo = self.memory.read_byte(self.regs.sp) as u16;
        self.regs.sp = self.regs.sp.wrapping_add(1);
        (hi << 8) | lo
    }

    /// Evaluate the condition code in opcode bits 3–4.
    ///
    /// Fixed mapping: 00=NZ, 01=Z, 10=NC, 11=C.
    #[inline]
    pub(super) fn condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x03 {
            0 => !self.get_flag(Flag::Z),
            1 => self.get_flag(Flag::Z),
            2 => !self.get_flag(Flag::C),
            _ => self.get_flag(Flag::C),
        }
    }
}
