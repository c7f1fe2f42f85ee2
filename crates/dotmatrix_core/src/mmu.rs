/// Flat 64KB memory for the LR35902.
///
/// The address space is exactly 16 bits, so every address is valid and no
/// access can fail. There is no banking, mirroring, or mapped IO here; the
/// CPU core treats memory as a plain byte store.
pub struct Memory {
    bytes: Box<[u8; 0x10000]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Create a zero-filled 64KB store.
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; 0x10000]),
        }
    }

    #[inline]
    pub fn read_byte(&self, address: u16) -> u8 {
        self.bytes[address as usize]
    }

    #[inline]
    pub fn write_byte(&mut self, address: u16, value: u8) {
        self.bytes[address as usize] = value;
    }

    /// Read a 16-bit value at `address`.
    ///
    /// The low byte comes first in memory because the CPU is low-endian.
    /// The high-byte access at `address + 1` wraps to 0x0000 when
    /// `address == 0xFFFF`, matching a fixed-size 16-bit-indexed array.
    #[inline]
    pub fn read_word(&self, address: u16) -> u16 {
        let lo = self.read_byte(address) as u16;
        let hi = self.read_byte(address.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Write a 16-bit value at `address`, low byte first.
    #[inline]
    pub fn write_word(&mut self, address: u16, value: u16) {
        self.write_byte(address, value as u8);
        self.write_byte(address.wrapping_add(1), (value >> 8) as u8);
    }

    /// Copy a flat program image into memory starting at `offset`.
    ///
    /// Bytes that would fall past 0xFFFF are ignored.
    pub fn load(&mut self, offset: u16, data: &[u8]) {
        let start = offset as usize;
        let len = data.len().min(0x10000 - start);
        self.bytes[start..start + len].copy_from_slice(&data[..len]);
    }
}
