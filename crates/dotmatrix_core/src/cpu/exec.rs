mod alu;
mod cb;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Cpu, InstructionFn};

/// Build the primary dispatch table.
///
/// One slot per opcode byte; `None` marks the undefined "opcode holes"
/// (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD). Slot 0xCB is also left
/// empty because the prefix byte is recognized in `step` before the table
/// is consulted.
pub(super) fn instruction_table() -> [Option<InstructionFn>; 256] {
    let mut table: [Option<InstructionFn>; 256] = [None; 256];

    table[0x00] = Some(Cpu::exec_nop);
    table[0x08] = Some(Cpu::exec_ld_a16_sp);
    table[0x10] = Some(Cpu::exec_stop);
    table[0x18] = Some(Cpu::exec_jr_d8);
    table[0x27] = Some(Cpu::exec_daa);
    table[0x2F] = Some(Cpu::exec_cpl);
    table[0x37] = Some(Cpu::exec_scf);
    table[0x3F] = Some(Cpu::exec_ccf);

    for opcode in [0x01, 0x11, 0x21, 0x31] {
        table[opcode] = Some(Cpu::exec_ld_rr_d16 as InstructionFn);
    }
    for opcode in [0x02, 0x12, 0x22, 0x32] {
        table[opcode] = Some(Cpu::exec_ld_indirect_a as InstructionFn);
    }
    for opcode in [0x03, 0x13, 0x23, 0x33] {
        table[opcode] = Some(Cpu::exec_inc16_rr as InstructionFn);
    }
    for opcode in [0x04, 0x0C, 0x14, 0x1C, 0x24, 0x2C, 0x34, 0x3C] {
        table[opcode] = Some(Cpu::exec_inc8 as InstructionFn);
    }
    for opcode in [0x05, 0x0D, 0x15, 0x1D, 0x25, 0x2D, 0x35, 0x3D] {
        table[opcode] = Some(Cpu::exec_dec8 as InstructionFn);
    }
    for opcode in [0x06, 0x0E, 0x16, 0x1E, 0x26, 0x2E, 0x36, 0x3E] {
        table[opcode] = Some(Cpu::exec_ld_r_d8 as InstructionFn);
    }
    for opcode in [0x07, 0x0F, 0x17, 0x1F] {
        table[opcode] = Some(Cpu::exec_rotate_a as InstructionFn);
    }
    for opcode in [0x09, 0x19, 0x29, 0x39] {
        table[opcode] = Some(Cpu::exec_add_hl_rr as InstructionFn);
    }
    for opcode in [0x0A, 0x1A, 0x2A, 0x3A] {
        table[opcode] = Some(Cpu::exec_ld_a_indirect as InstructionFn);
    }
    for opcode in [0x0B, 0x1B, 0x2B, 0x3B] {
        table[opcode] = Some(Cpu::exec_dec16_rr as InstructionFn);
    }
    for opcode in [0x20, 0x28, 0x30, 0x38] {
        table[opcode] = Some(Cpu::exec_jr_cc as InstructionFn);
    }

    // LD r1,r2 block; 0x76 in its middle is HALT.
    for opcode in 0x40..=0x7F {
        table[opcode] = Some(Cpu::exec_ld_r_r as InstructionFn);
    }
    table[0x76] = Some(Cpu::exec_halt);

    // ADD/ADC/SUB/SBC/AND/XOR/OR/CP on A against a register or (HL).
    for opcode in 0x80..=0xBF {
        table[opcode] = Some(Cpu::exec_alu_r as InstructionFn);
    }

    for opcode in [0xC0, 0xC8, 0xD0, 0xD8] {
        table[opcode] = Some(Cpu::exec_ret_cc as InstructionFn);
    }
    for opcode in [0xC1, 0xD1, 0xE1, 0xF1] {
        table[opcode] = Some(Cpu::exec_pop_rr as InstructionFn);
    }
    for opcode in [0xC2, 0xCA, 0xD2, 0xDA] {
        table[opcode] = Some(Cpu::exec_jp_cc as InstructionFn);
    }
    for opcode in [0xC4, 0xCC, 0xD4, 0xDC] {
        table[opcode] = Some(Cpu::exec_call_cc as InstructionFn);
    }
    for opcode in [0xC5, 0xD5, 0xE5, 0xF5] {
        table[opcode] = Some(Cpu::exec_push_rr as InstructionFn);
    }
    for opcode in [0xC6, 0xCE, 0xD6, 0xDE, 0xE6, 0xEE, 0xF6, 0xFE] {
        table[opcode] = Some(Cpu::exec_alu_d8 as InstructionFn);
    }
    for opcode in [0xC7, 0xCF, 0xD7, 0xDF, 0xE7, 0xEF, 0xF7, 0xFF] {
        table[opcode] = Some(Cpu::exec_rst as InstructionFn);
    }

    table[0xC3] = Some(Cpu::exec_jp_a16);
    table[0xC9] = Some(Cpu::exec_ret);
    table[0xCD] = Some(Cpu::exec_call_a16);
    table[0xD9] = Some(Cpu::exec_reti);
    table[0xE0] = Some(Cpu::exec_ldh_a8);
    table[0xF0] = Some(Cpu::exec_ldh_a8);
    table[0xE2] = Some(Cpu::exec_ldh_c);
    table[0xF2] = Some(Cpu::exec_ldh_c);
    table[0xE8] = Some(Cpu::exec_add_sp_d8);
    table[0xE9] = Some(Cpu::exec_jp_hl);
    table[0xEA] = Some(Cpu::exec_ld_a16_a);
    table[0xFA] = Some(Cpu::exec_ld_a16_a);
    table[0xF3] = Some(Cpu::exec_di);
    table[0xFB] = Some(Cpu::exec_ei);
    table[0xF8] = Some(Cpu::exec_ld_hl_sp_d8);
    table[0xF9] = Some(Cpu::exec_ld_sp_hl);

    table
}

/// Build the CB-prefixed dispatch table. Every slot is defined.
pub(super) fn instruction_table_cb() -> [Option<InstructionFn>; 256] {
    let mut table: [Option<InstructionFn>; 256] = [None; 256];

    // RLC/RRC/RL/RR/SLA/SRA/SWAP/SRL, selected by bits 3–5.
    for opcode in 0x00..=0x3F {
        table[opcode] = Some(Cpu::exec_cb_rotate_shift as InstructionFn);
    }
    for opcode in 0x40..=0x7F {
        table[opcode] = Some(Cpu::exec_cb_bit as InstructionFn);
    }
    for opcode in 0x80..=0xBF {
        table[opcode] = Some(Cpu::exec_cb_res as InstructionFn);
    }
    for opcode in 0xC0..=0xFF {
        table[opcode] = Some(Cpu::exec_cb_set as InstructionFn);
    }

    table
}
