/// Registers for the Game Boy CPU (LR35902).
///
/// Storage is six plain 16-bit cells; the 8-bit views (A, F, B, C, ...)
/// are explicit accessor functions that preserve the other half. The
/// original hardware convention pairs an 8-bit register with its
/// neighbour: AF, BC, DE, HL, plus SP and PC.
#[derive(Clone, Copy, Debug, Default)]
pub struct Registers {
    pub af: u16,
    pub bc: u16,
    pub de: u16,
    pub hl: u16,
    pub sp: u16,
    pub pc: u16,
}

#[inline]
pub fn high_byte(value: u16) -> u8 {
    (value >> 8) as u8
}

#[inline]
pub fn low_byte(value: u16) -> u8 {
    value as u8
}

#[inline]
pub fn set_high_byte(cell: &mut u16, value: u8) {
    *cell = (*cell & 0x00FF) | (value as u16) << 8;
}

#[inline]
pub fn set_low_byte(cell: &mut u16, value: u8) {
    *cell = (*cell & 0xFF00) | value as u16;
}

impl Registers {
    #[inline]
    pub fn a(&self) -> u8 {
        high_byte(self.af)
    }

    #[inline]
    pub fn set_a(&mut self, value: u8) {
        set_high_byte(&mut self.af, value);
    }

    #[inline]
    pub fn f(&self) -> u8 {
        low_byte(self.af)
    }

    #[inline]
    pub fn set_f(&mut self, value: u8) {
        // Lower 4 bits of F are always zero.
        set_low_byte(&mut self.af, value & 0xF0);
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        self.af = value & 0xFFF0;
    }

    #[inline]
    pub fn b(&self) -> u8 {
        high_byte(self.bc)
    }

    #[inline]
    pub fn set_b(&mut self, value: u8) {
        set_high_byte(&mut self.bc, value);
    }

    #[inline]
    pub fn c(&self) -> u8 {
        low_byte(self.bc)
    }

    #[inline]
    pub fn set_c(&mut self, value: u8) {
        set_low_byte(&mut self.bc, value);
    }

    #[inline]
    pub fn d(&self) -> u8 {
        high_byte(self.de)
    }

    #[inline]
    pub fn set_d(&mut self, value: u8) {
        set_high_byte(&mut self.de, value);
    }

    #[inline]
    pub fn e(&self) -> u8 {
        low_byte(self.de)
    }

    #[inline]
    pub fn set_e(&mut self, value: u8) {
        set_low_byte(&mut self.de, value);
    }

    #[inline]
    pub fn h(&self) -> u8 {
        high_byte(self.hl)
    }

    #[inline]
    pub fn set_h(&mut self, value: u8) {
        set_high_byte(&mut self.hl, value);
    }

    #[inline]
    pub fn l(&self) -> u8 {
        low_byte(self.hl)
    }

    #[inline]
    pub fn set_l(&mut self, value: u8) {
        set_low_byte(&mut self.hl, value);
    }

    /// Read one of the general-purpose 8-bit registers.
    #[inline]
    pub fn byte(&self, reg: ByteRegister) -> u8 {
        match reg {
            ByteRegister::B => self.b(),
            ByteRegister::C => self.c(),
            ByteRegister::D => self.d(),
            ByteRegister::E => self.e(),
            ByteRegister::H => self.h(),
            ByteRegister::L => self.l(),
            ByteRegister::A => self.a(),
        }
    }

    #[inline]
    pub fn set_byte(&mut self, reg: ByteRegister, value: u8) {
        match reg {
            ByteRegister::B => self.set_b(value),
            ByteRegister::C => self.set_c(value),
            ByteRegister::D => self.set_d(value),
            ByteRegister::E => self.set_e(value),
            ByteRegister::H => self.set_h(value),
            ByteRegister::L => self.set_l(value),
            ByteRegister::A => self.set_a(value),
        }
    }

    #[inline]
    pub fn word(&self, reg: WordRegister) -> u16 {
        match reg {
            WordRegister::BC => self.bc,
            WordRegister::DE => self.de,
            WordRegister::HL => self.hl,
            WordRegister::SP => self.sp,
        }
    }

    #[inline]
    pub fn set_word(&mut self, reg: WordRegister, value: u16) {
        match reg {
            WordRegister::BC => self.bc = value,
            WordRegister::DE => self.de = value,
            WordRegister::HL => self.hl = value,
            WordRegister::SP => self.sp = value,
        }
    }
}

/// Flag bits in the F register.
///
/// Layout (bit index in the byte, from MSB to LSB):
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
/// - bits 0–3 are always zero.
#[derive(Clone, Copy, Debug)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

/// One-byte register selected by a 3-bit opcode sub-field.
///
/// The encoding is fixed by the instruction set:
/// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(unused F slot), 7=A.
/// Index 6 never names a register; opcode tables use it for the (HL)
/// memory operand, so `from_bits(6)` is `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteRegister {
    B,
    C,
    D,
    E,
    H,
    L,
    A,
}

impl ByteRegister {
    #[inline]
    pub fn from_bits(bits: u8) -> Option<ByteRegister> {
        match bits & 0x07 {
            0 => Some(ByteRegister::B),
            1 => Some(ByteRegister::C),
            2 => Some(ByteRegister::D),
            3 => Some(ByteRegister::E),
            4 => Some(ByteRegister::H),
            5 => Some(ByteRegister::L),
            7 => Some(ByteRegister::A),
            _ => None,
        }
    }
}

/// Two-byte register selected by a 2-bit opcode sub-field:
/// 0=BC, 1=DE, 2=HL, 3=SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordRegister {
    BC,
    DE,
    HL,
    SP,
}

impl WordRegister {
    #[inline]
    pub fn from_bits(bits: u8) -> WordRegister {
        match bits & 0x03 {
            0 => WordRegister::BC,
            1 => WordRegister::DE,
            2 => WordRegister::HL,
            _ => WordRegister::SP,
        }
    }
}
