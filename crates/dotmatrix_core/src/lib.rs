pub mod cpu;
pub mod mmu;

pub use cpu::Cpu;
pub use mmu::Memory;

/// T-cycles in one DMG video frame. The host loop runs `Cpu::step` until a
/// frame's worth of cycles has elapsed, then subtracts the budget and
/// continues.
pub const CYCLES_PER_FRAME: u32 = 70224;
