use anyhow::{Context, Result};
use dotmatrix_core::{Cpu, CYCLES_PER_FRAME};

/// Host loop: run the CPU against the fixed per-frame cycle budget.
///
/// Usage: `dotmatrix [image] [frames]`, where `image` is a flat binary
/// loaded at 0x0000 (the CPU starts with PC at 0x0000) and `frames`
/// defaults to 60. With no image the CPU executes a memory full of NOPs.
fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let image_path = args.next();
    let frames: u32 = match args.next() {
        Some(arg) => arg.parse().context("frame count must be an integer")?,
        None => 60,
    };

    let mut cpu = Cpu::new();
    if let Some(path) = &image_path {
        let image = std::fs::read(path)
            .with_context(|| format!("failed to read program image '{path}'"))?;
        log::info!("loaded {} bytes at 0x0000 from '{path}'", image.len());
        cpu.memory.load(0x0000, &image);
    }

    let mut carried = 0u32;
    for frame in 0..frames {
        let mut cycles = carried;
        while cycles < CYCLES_PER_FRAME {
            let elapsed = cpu.step();
            if elapsed == 0 {
                // Decode failure; the CPU already logged the opcode.
                log::warn!("stopping at frame {frame}, PC=0x{:04X}", cpu.regs.pc);
                return Ok(());
            }
            cycles += elapsed;
        }
        carried = cycles - CYCLES_PER_FRAME;
    }

    log::info!(
        "ran {frames} frames: PC=0x{pc:04X} SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X}",
        pc = cpu.regs.pc,
        sp = cpu.regs.sp,
        af = cpu.regs.af,
        bc = cpu.regs.bc,
        de = cpu.regs.de,
        hl = cpu.regs.hl,
    );
    Ok(())
}
