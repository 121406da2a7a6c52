//! Opcode decoding.
//!
//! Every byte value maps to exactly one routine: a documented instruction,
//! a stable undocumented one, a JAM lock-up, or the unsupported marker for
//! the unstable opcodes whose results depend on analogue effects.

use crate::addressing::{Index, Mode};
use crate::flags::{C, N, V, Z};
use crate::instruction::{Instruction, Routine};
use crate::operations::{Condition, ImpliedOp, ModifyOp, ReadOp, WriteOp};

const IMM: Mode = Mode::Immediate;
const ZP: Mode = Mode::ZeroPage;
const ZPX: Mode = Mode::ZeroPageIndexed(Index::X);
const ZPY: Mode = Mode::ZeroPageIndexed(Index::Y);
const ABS: Mode = Mode::Absolute;
const ABX: Mode = Mode::AbsoluteIndexed(Index::X);
const ABY: Mode = Mode::AbsoluteIndexed(Index::Y);
const IZX: Mode = Mode::IndexedIndirect;
const IZY: Mode = Mode::IndirectIndexed;

/// Decode an opcode into a fresh instruction, ready for its first cycle
/// after the fetch.
#[must_use]
pub fn decode(opcode: u8) -> Instruction {
    Instruction::new(Some(opcode), routine(opcode))
}

fn routine(opcode: u8) -> Routine {
    match opcode {
        // BRK - 7 cycles
        0x00 => Routine::Brk,

        // ORA (zp,X) - 6 cycles
        0x01 => Routine::Read(IZX, ReadOp::Ora),

        // JAM
        0x02 => Routine::Jam,

        // SLO (zp,X) (undocumented) - 8 cycles
        0x03 => Routine::Modify(IZX, ModifyOp::Slo),

        // NOP zp (undocumented) - 3 cycles
        0x04 => Routine::Read(ZP, ReadOp::Nop),

        // ORA zp - 3 cycles
        0x05 => Routine::Read(ZP, ReadOp::Ora),

        // ASL zp - 5 cycles
        0x06 => Routine::Modify(ZP, ModifyOp::Asl),

        // SLO zp (undocumented) - 5 cycles
        0x07 => Routine::Modify(ZP, ModifyOp::Slo),

        // PHP - 3 cycles
        0x08 => Routine::Php,

        // ORA #imm - 2 cycles
        0x09 => Routine::Read(IMM, ReadOp::Ora),

        // ASL A - 2 cycles
        0x0A => Routine::Modify(Mode::Accumulator, ModifyOp::Asl),

        // ANC #imm (undocumented) - 2 cycles
        0x0B => Routine::Read(IMM, ReadOp::Anc),

        // NOP abs (undocumented) - 4 cycles
        0x0C => Routine::Read(ABS, ReadOp::Nop),

        // ORA abs - 4 cycles
        0x0D => Routine::Read(ABS, ReadOp::Ora),

        // ASL abs - 6 cycles
        0x0E => Routine::Modify(ABS, ModifyOp::Asl),

        // SLO abs (undocumented) - 6 cycles
        0x0F => Routine::Modify(ABS, ModifyOp::Slo),

        // BPL rel - 2/3/4 cycles
        0x10 => Routine::Branch(Condition::new(N, false)),

        // ORA (zp),Y - 5/6 cycles
        0x11 => Routine::Read(IZY, ReadOp::Ora),

        // JAM
        0x12 => Routine::Jam,

        // SLO (zp),Y (undocumented) - 8 cycles
        0x13 => Routine::Modify(IZY, ModifyOp::Slo),

        // NOP zp,X (undocumented) - 4 cycles
        0x14 => Routine::Read(ZPX, ReadOp::Nop),

        // ORA zp,X - 4 cycles
        0x15 => Routine::Read(ZPX, ReadOp::Ora),

        // ASL zp,X - 6 cycles
        0x16 => Routine::Modify(ZPX, ModifyOp::Asl),

        // SLO zp,X (undocumented) - 6 cycles
        0x17 => Routine::Modify(ZPX, ModifyOp::Slo),

        // CLC - 2 cycles
        0x18 => Routine::Implied(ImpliedOp::Clc),

        // ORA abs,Y - 4/5 cycles
        0x19 => Routine::Read(ABY, ReadOp::Ora),

        // NOP (undocumented) - 2 cycles
        0x1A => Routine::Implied(ImpliedOp::Nop),

        // SLO abs,Y (undocumented) - 7 cycles
        0x1B => Routine::Modify(ABY, ModifyOp::Slo),

        // NOP abs,X (undocumented) - 4/5 cycles
        0x1C => Routine::Read(ABX, ReadOp::Nop),

        // ORA abs,X - 4/5 cycles
        0x1D => Routine::Read(ABX, ReadOp::Ora),

        // ASL abs,X - 7 cycles
        0x1E => Routine::Modify(ABX, ModifyOp::Asl),

        // SLO abs,X (undocumented) - 7 cycles
        0x1F => Routine::Modify(ABX, ModifyOp::Slo),

        // JSR - 6 cycles
        0x20 => Routine::Jsr,

        // AND (zp,X) - 6 cycles
        0x21 => Routine::Read(IZX, ReadOp::And),

        // JAM
        0x22 => Routine::Jam,

        // RLA (zp,X) (undocumented) - 8 cycles
        0x23 => Routine::Modify(IZX, ModifyOp::Rla),

        // BIT zp - 3 cycles
        0x24 => Routine::Read(ZP, ReadOp::Bit),

        // AND zp - 3 cycles
        0x25 => Routine::Read(ZP, ReadOp::And),

        // ROL zp - 5 cycles
        0x26 => Routine::Modify(ZP, ModifyOp::Rol),

        // RLA zp (undocumented) - 5 cycles
        0x27 => Routine::Modify(ZP, ModifyOp::Rla),

        // PLP - 4 cycles
        0x28 => Routine::Plp,

        // AND #imm - 2 cycles
        0x29 => Routine::Read(IMM, ReadOp::And),

        // ROL A - 2 cycles
        0x2A => Routine::Modify(Mode::Accumulator, ModifyOp::Rol),

        // ANC #imm (undocumented) - 2 cycles
        0x2B => Routine::Read(IMM, ReadOp::Anc),

        // BIT abs - 4 cycles
        0x2C => Routine::Read(ABS, ReadOp::Bit),

        // AND abs - 4 cycles
        0x2D => Routine::Read(ABS, ReadOp::And),

        // ROL abs - 6 cycles
        0x2E => Routine::Modify(ABS, ModifyOp::Rol),

        // RLA abs (undocumented) - 6 cycles
        0x2F => Routine::Modify(ABS, ModifyOp::Rla),

        // BMI rel - 2/3/4 cycles
        0x30 => Routine::Branch(Condition::new(N, true)),

        // AND (zp),Y - 5/6 cycles
        0x31 => Routine::Read(IZY, ReadOp::And),

        // JAM
        0x32 => Routine::Jam,

        // RLA (zp),Y (undocumented) - 8 cycles
        0x33 => Routine::Modify(IZY, ModifyOp::Rla),

        // NOP zp,X (undocumented) - 4 cycles
        0x34 => Routine::Read(ZPX, ReadOp::Nop),

        // AND zp,X - 4 cycles
        0x35 => Routine::Read(ZPX, ReadOp::And),

        // ROL zp,X - 6 cycles
        0x36 => Routine::Modify(ZPX, ModifyOp::Rol),

        // RLA zp,X (undocumented) - 6 cycles
        0x37 => Routine::Modify(ZPX, ModifyOp::Rla),

        // SEC - 2 cycles
        0x38 => Routine::Implied(ImpliedOp::Sec),

        // AND abs,Y - 4/5 cycles
        0x39 => Routine::Read(ABY, ReadOp::And),

        // NOP (undocumented) - 2 cycles
        0x3A => Routine::Implied(ImpliedOp::Nop),

        // RLA abs,Y (undocumented) - 7 cycles
        0x3B => Routine::Modify(ABY, ModifyOp::Rla),

        // NOP abs,X (undocumented) - 4/5 cycles
        0x3C => Routine::Read(ABX, ReadOp::Nop),

        // AND abs,X - 4/5 cycles
        0x3D => Routine::Read(ABX, ReadOp::And),

        // ROL abs,X - 7 cycles
        0x3E => Routine::Modify(ABX, ModifyOp::Rol),

        // RLA abs,X (undocumented) - 7 cycles
        0x3F => Routine::Modify(ABX, ModifyOp::Rla),

        // RTI - 6 cycles
        0x40 => Routine::Rti,

        // EOR (zp,X) - 6 cycles
        0x41 => Routine::Read(IZX, ReadOp::Eor),

        // JAM
        0x42 => Routine::Jam,

        // SRE (zp,X) (undocumented) - 8 cycles
        0x43 => Routine::Modify(IZX, ModifyOp::Sre),

        // NOP zp (undocumented) - 3 cycles
        0x44 => Routine::Read(ZP, ReadOp::Nop),

        // EOR zp - 3 cycles
        0x45 => Routine::Read(ZP, ReadOp::Eor),

        // LSR zp - 5 cycles
        0x46 => Routine::Modify(ZP, ModifyOp::Lsr),

        // SRE zp (undocumented) - 5 cycles
        0x47 => Routine::Modify(ZP, ModifyOp::Sre),

        // PHA - 3 cycles
        0x48 => Routine::Pha,

        // EOR #imm - 2 cycles
        0x49 => Routine::Read(IMM, ReadOp::Eor),

        // LSR A - 2 cycles
        0x4A => Routine::Modify(Mode::Accumulator, ModifyOp::Lsr),

        // ALR #imm (undocumented) - 2 cycles
        0x4B => Routine::Read(IMM, ReadOp::Alr),

        // JMP abs - 3 cycles
        0x4C => Routine::JmpAbsolute,

        // EOR abs - 4 cycles
        0x4D => Routine::Read(ABS, ReadOp::Eor),

        // LSR abs - 6 cycles
        0x4E => Routine::Modify(ABS, ModifyOp::Lsr),

        // SRE abs (undocumented) - 6 cycles
        0x4F => Routine::Modify(ABS, ModifyOp::Sre),

        // BVC rel - 2/3/4 cycles
        0x50 => Routine::Branch(Condition::new(V, false)),

        // EOR (zp),Y - 5/6 cycles
        0x51 => Routine::Read(IZY, ReadOp::Eor),

        // JAM
        0x52 => Routine::Jam,

        // SRE (zp),Y (undocumented) - 8 cycles
        0x53 => Routine::Modify(IZY, ModifyOp::Sre),

        // NOP zp,X (undocumented) - 4 cycles
        0x54 => Routine::Read(ZPX, ReadOp::Nop),

        // EOR zp,X - 4 cycles
        0x55 => Routine::Read(ZPX, ReadOp::Eor),

        // LSR zp,X - 6 cycles
        0x56 => Routine::Modify(ZPX, ModifyOp::Lsr),

        // SRE zp,X (undocumented) - 6 cycles
        0x57 => Routine::Modify(ZPX, ModifyOp::Sre),

        // CLI - 2 cycles
        0x58 => Routine::Implied(ImpliedOp::Cli),

        // EOR abs,Y - 4/5 cycles
        0x59 => Routine::Read(ABY, ReadOp::Eor),

        // NOP (undocumented) - 2 cycles
        0x5A => Routine::Implied(ImpliedOp::Nop),

        // SRE abs,Y (undocumented) - 7 cycles
        0x5B => Routine::Modify(ABY, ModifyOp::Sre),

        // NOP abs,X (undocumented) - 4/5 cycles
        0x5C => Routine::Read(ABX, ReadOp::Nop),

        // EOR abs,X - 4/5 cycles
        0x5D => Routine::Read(ABX, ReadOp::Eor),

        // LSR abs,X - 7 cycles
        0x5E => Routine::Modify(ABX, ModifyOp::Lsr),

        // SRE abs,X (undocumented) - 7 cycles
        0x5F => Routine::Modify(ABX, ModifyOp::Sre),

        // RTS - 6 cycles
        0x60 => Routine::Rts,

        // ADC (zp,X) - 6 cycles
        0x61 => Routine::Read(IZX, ReadOp::Adc),

        // JAM
        0x62 => Routine::Jam,

        // RRA (zp,X) (undocumented) - 8 cycles
        0x63 => Routine::Modify(IZX, ModifyOp::Rra),

        // NOP zp (undocumented) - 3 cycles
        0x64 => Routine::Read(ZP, ReadOp::Nop),

        // ADC zp - 3 cycles
        0x65 => Routine::Read(ZP, ReadOp::Adc),

        // ROR zp - 5 cycles
        0x66 => Routine::Modify(ZP, ModifyOp::Ror),

        // RRA zp (undocumented) - 5 cycles
        0x67 => Routine::Modify(ZP, ModifyOp::Rra),

        // PLA - 4 cycles
        0x68 => Routine::Pla,

        // ADC #imm - 2 cycles
        0x69 => Routine::Read(IMM, ReadOp::Adc),

        // ROR A - 2 cycles
        0x6A => Routine::Modify(Mode::Accumulator, ModifyOp::Ror),

        // ARR #imm (undocumented) - 2 cycles
        0x6B => Routine::Read(IMM, ReadOp::Arr),

        // JMP (ind) - 5 cycles
        0x6C => Routine::JmpIndirect,

        // ADC abs - 4 cycles
        0x6D => Routine::Read(ABS, ReadOp::Adc),

        // ROR abs - 6 cycles
        0x6E => Routine::Modify(ABS, ModifyOp::Ror),

        // RRA abs (undocumented) - 6 cycles
        0x6F => Routine::Modify(ABS, ModifyOp::Rra),

        // BVS rel - 2/3/4 cycles
        0x70 => Routine::Branch(Condition::new(V, true)),

        // ADC (zp),Y - 5/6 cycles
        0x71 => Routine::Read(IZY, ReadOp::Adc),

        // JAM
        0x72 => Routine::Jam,

        // RRA (zp),Y (undocumented) - 8 cycles
        0x73 => Routine::Modify(IZY, ModifyOp::Rra),

        // NOP zp,X (undocumented) - 4 cycles
        0x74 => Routine::Read(ZPX, ReadOp::Nop),

        // ADC zp,X - 4 cycles
        0x75 => Routine::Read(ZPX, ReadOp::Adc),

        // ROR zp,X - 6 cycles
        0x76 => Routine::Modify(ZPX, ModifyOp::Ror),

        // RRA zp,X (undocumented) - 6 cycles
        0x77 => Routine::Modify(ZPX, ModifyOp::Rra),

        // SEI - 2 cycles
        0x78 => Routine::Implied(ImpliedOp::Sei),

        // ADC abs,Y - 4/5 cycles
        0x79 => Routine::Read(ABY, ReadOp::Adc),

        // NOP (undocumented) - 2 cycles
        0x7A => Routine::Implied(ImpliedOp::Nop),

        // RRA abs,Y (undocumented) - 7 cycles
        0x7B => Routine::Modify(ABY, ModifyOp::Rra),

        // NOP abs,X (undocumented) - 4/5 cycles
        0x7C => Routine::Read(ABX, ReadOp::Nop),

        // ADC abs,X - 4/5 cycles
        0x7D => Routine::Read(ABX, ReadOp::Adc),

        // ROR abs,X - 7 cycles
        0x7E => Routine::Modify(ABX, ModifyOp::Ror),

        // RRA abs,X (undocumented) - 7 cycles
        0x7F => Routine::Modify(ABX, ModifyOp::Rra),

        // NOP #imm (undocumented) - 2 cycles
        0x80 => Routine::Read(IMM, ReadOp::Nop),

        // STA (zp,X) - 6 cycles
        0x81 => Routine::Write(IZX, WriteOp::Sta),

        // NOP #imm (undocumented) - 2 cycles
        0x82 => Routine::Read(IMM, ReadOp::Nop),

        // SAX (zp,X) (undocumented) - 6 cycles
        0x83 => Routine::Write(IZX, WriteOp::Sax),

        // STY zp - 3 cycles
        0x84 => Routine::Write(ZP, WriteOp::Sty),

        // STA zp - 3 cycles
        0x85 => Routine::Write(ZP, WriteOp::Sta),

        // STX zp - 3 cycles
        0x86 => Routine::Write(ZP, WriteOp::Stx),

        // SAX zp (undocumented) - 3 cycles
        0x87 => Routine::Write(ZP, WriteOp::Sax),

        // DEY - 2 cycles
        0x88 => Routine::Implied(ImpliedOp::Dey),

        // NOP #imm (undocumented) - 2 cycles
        0x89 => Routine::Read(IMM, ReadOp::Nop),

        // TXA - 2 cycles
        0x8A => Routine::Implied(ImpliedOp::Txa),

        // ANE (unstable)
        0x8B => Routine::Unsupported,

        // STY abs - 4 cycles
        0x8C => Routine::Write(ABS, WriteOp::Sty),

        // STA abs - 4 cycles
        0x8D => Routine::Write(ABS, WriteOp::Sta),

        // STX abs - 4 cycles
        0x8E => Routine::Write(ABS, WriteOp::Stx),

        // SAX abs (undocumented) - 4 cycles
        0x8F => Routine::Write(ABS, WriteOp::Sax),

        // BCC rel - 2/3/4 cycles
        0x90 => Routine::Branch(Condition::new(C, false)),

        // STA (zp),Y - 6 cycles
        0x91 => Routine::Write(IZY, WriteOp::Sta),

        // JAM
        0x92 => Routine::Jam,

        // SHA (unstable)
        0x93 => Routine::Unsupported,

        // STY zp,X - 4 cycles
        0x94 => Routine::Write(ZPX, WriteOp::Sty),

        // STA zp,X - 4 cycles
        0x95 => Routine::Write(ZPX, WriteOp::Sta),

        // STX zp,Y - 4 cycles
        0x96 => Routine::Write(ZPY, WriteOp::Stx),

        // SAX zp,Y (undocumented) - 4 cycles
        0x97 => Routine::Write(ZPY, WriteOp::Sax),

        // TYA - 2 cycles
        0x98 => Routine::Implied(ImpliedOp::Tya),

        // STA abs,Y - 5 cycles
        0x99 => Routine::Write(ABY, WriteOp::Sta),

        // TXS - 2 cycles
        0x9A => Routine::Implied(ImpliedOp::Txs),

        // TAS (unstable)
        0x9B => Routine::Unsupported,

        // SHY (unstable)
        0x9C => Routine::Unsupported,

        // STA abs,X - 5 cycles
        0x9D => Routine::Write(ABX, WriteOp::Sta),

        // SHX (unstable)
        0x9E => Routine::Unsupported,

        // SHA (unstable)
        0x9F => Routine::Unsupported,

        // LDY #imm - 2 cycles
        0xA0 => Routine::Read(IMM, ReadOp::Ldy),

        // LDA (zp,X) - 6 cycles
        0xA1 => Routine::Read(IZX, ReadOp::Lda),

        // LDX #imm - 2 cycles
        0xA2 => Routine::Read(IMM, ReadOp::Ldx),

        // LAX (zp,X) (undocumented) - 6 cycles
        0xA3 => Routine::Read(IZX, ReadOp::Lax),

        // LDY zp - 3 cycles
        0xA4 => Routine::Read(ZP, ReadOp::Ldy),

        // LDA zp - 3 cycles
        0xA5 => Routine::Read(ZP, ReadOp::Lda),

        // LDX zp - 3 cycles
        0xA6 => Routine::Read(ZP, ReadOp::Ldx),

        // LAX zp (undocumented) - 3 cycles
        0xA7 => Routine::Read(ZP, ReadOp::Lax),

        // TAY - 2 cycles
        0xA8 => Routine::Implied(ImpliedOp::Tay),

        // LDA #imm - 2 cycles
        0xA9 => Routine::Read(IMM, ReadOp::Lda),

        // TAX - 2 cycles
        0xAA => Routine::Implied(ImpliedOp::Tax),

        // LXA (unstable)
        0xAB => Routine::Unsupported,

        // LDY abs - 4 cycles
        0xAC => Routine::Read(ABS, ReadOp::Ldy),

        // LDA abs - 4 cycles
        0xAD => Routine::Read(ABS, ReadOp::Lda),

        // LDX abs - 4 cycles
        0xAE => Routine::Read(ABS, ReadOp::Ldx),

        // LAX abs (undocumented) - 4 cycles
        0xAF => Routine::Read(ABS, ReadOp::Lax),

        // BCS rel - 2/3/4 cycles
        0xB0 => Routine::Branch(Condition::new(C, true)),

        // LDA (zp),Y - 5/6 cycles
        0xB1 => Routine::Read(IZY, ReadOp::Lda),

        // JAM
        0xB2 => Routine::Jam,

        // LAX (zp),Y (undocumented) - 5/6 cycles
        0xB3 => Routine::Read(IZY, ReadOp::Lax),

        // LDY zp,X - 4 cycles
        0xB4 => Routine::Read(ZPX, ReadOp::Ldy),

        // LDA zp,X - 4 cycles
        0xB5 => Routine::Read(ZPX, ReadOp::Lda),

        // LDX zp,Y - 4 cycles
        0xB6 => Routine::Read(ZPY, ReadOp::Ldx),

        // LAX zp,Y (undocumented) - 4 cycles
        0xB7 => Routine::Read(ZPY, ReadOp::Lax),

        // CLV - 2 cycles
        0xB8 => Routine::Implied(ImpliedOp::Clv),

        // LDA abs,Y - 4/5 cycles
        0xB9 => Routine::Read(ABY, ReadOp::Lda),

        // TSX - 2 cycles
        0xBA => Routine::Implied(ImpliedOp::Tsx),

        // LAS abs,Y (undocumented) - 4/5 cycles
        0xBB => Routine::Read(ABY, ReadOp::Las),

        // LDY abs,X - 4/5 cycles
        0xBC => Routine::Read(ABX, ReadOp::Ldy),

        // LDA abs,X - 4/5 cycles
        0xBD => Routine::Read(ABX, ReadOp::Lda),

        // LDX abs,Y - 4/5 cycles
        0xBE => Routine::Read(ABY, ReadOp::Ldx),

        // LAX abs,Y (undocumented) - 4/5 cycles
        0xBF => Routine::Read(ABY, ReadOp::Lax),

        // CPY #imm - 2 cycles
        0xC0 => Routine::Read(IMM, ReadOp::Cpy),

        // CMP (zp,X) - 6 cycles
        0xC1 => Routine::Read(IZX, ReadOp::Cmp),

        // NOP #imm (undocumented) - 2 cycles
        0xC2 => Routine::Read(IMM, ReadOp::Nop),

        // DCP (zp,X) (undocumented) - 8 cycles
        0xC3 => Routine::Modify(IZX, ModifyOp::Dcp),

        // CPY zp - 3 cycles
        0xC4 => Routine::Read(ZP, ReadOp::Cpy),

        // CMP zp - 3 cycles
        0xC5 => Routine::Read(ZP, ReadOp::Cmp),

        // DEC zp - 5 cycles
        0xC6 => Routine::Modify(ZP, ModifyOp::Dec),

        // DCP zp (undocumented) - 5 cycles
        0xC7 => Routine::Modify(ZP, ModifyOp::Dcp),

        // INY - 2 cycles
        0xC8 => Routine::Implied(ImpliedOp::Iny),

        // CMP #imm - 2 cycles
        0xC9 => Routine::Read(IMM, ReadOp::Cmp),

        // DEX - 2 cycles
        0xCA => Routine::Implied(ImpliedOp::Dex),

        // SBX #imm (undocumented) - 2 cycles
        0xCB => Routine::Read(IMM, ReadOp::Sbx),

        // CPY abs - 4 cycles
        0xCC => Routine::Read(ABS, ReadOp::Cpy),

        // CMP abs - 4 cycles
        0xCD => Routine::Read(ABS, ReadOp::Cmp),

        // DEC abs - 6 cycles
        0xCE => Routine::Modify(ABS, ModifyOp::Dec),

        // DCP abs (undocumented) - 6 cycles
        0xCF => Routine::Modify(ABS, ModifyOp::Dcp),

        // BNE rel - 2/3/4 cycles
        0xD0 => Routine::Branch(Condition::new(Z, false)),

        // CMP (zp),Y - 5/6 cycles
        0xD1 => Routine::Read(IZY, ReadOp::Cmp),

        // JAM
        0xD2 => Routine::Jam,

        // DCP (zp),Y (undocumented) - 8 cycles
        0xD3 => Routine::Modify(IZY, ModifyOp::Dcp),

        // NOP zp,X (undocumented) - 4 cycles
        0xD4 => Routine::Read(ZPX, ReadOp::Nop),

        // CMP zp,X - 4 cycles
        0xD5 => Routine::Read(ZPX, ReadOp::Cmp),

        // DEC zp,X - 6 cycles
        0xD6 => Routine::Modify(ZPX, ModifyOp::Dec),

        // DCP zp,X (undocumented) - 6 cycles
        0xD7 => Routine::Modify(ZPX, ModifyOp::Dcp),

        // CLD - 2 cycles
        0xD8 => Routine::Implied(ImpliedOp::Cld),

        // CMP abs,Y - 4/5 cycles
        0xD9 => Routine::Read(ABY, ReadOp::Cmp),

        // NOP (undocumented) - 2 cycles
        0xDA => Routine::Implied(ImpliedOp::Nop),

        // DCP abs,Y (undocumented) - 7 cycles
        0xDB => Routine::Modify(ABY, ModifyOp::Dcp),

        // NOP abs,X (undocumented) - 4/5 cycles
        0xDC => Routine::Read(ABX, ReadOp::Nop),

        // CMP abs,X - 4/5 cycles
        0xDD => Routine::Read(ABX, ReadOp::Cmp),

        // DEC abs,X - 7 cycles
        0xDE => Routine::Modify(ABX, ModifyOp::Dec),

        // DCP abs,X (undocumented) - 7 cycles
        0xDF => Routine::Modify(ABX, ModifyOp::Dcp),

        // CPX #imm - 2 cycles
        0xE0 => Routine::Read(IMM, ReadOp::Cpx),

        // SBC (zp,X) - 6 cycles
        0xE1 => Routine::Read(IZX, ReadOp::Sbc),

        // NOP #imm (undocumented) - 2 cycles
        0xE2 => Routine::Read(IMM, ReadOp::Nop),

        // ISC (zp,X) (undocumented) - 8 cycles
        0xE3 => Routine::Modify(IZX, ModifyOp::Isc),

        // CPX zp - 3 cycles
        0xE4 => Routine::Read(ZP, ReadOp::Cpx),

        // SBC zp - 3 cycles
        0xE5 => Routine::Read(ZP, ReadOp::Sbc),

        // INC zp - 5 cycles
        0xE6 => Routine::Modify(ZP, ModifyOp::Inc),

        // ISC zp (undocumented) - 5 cycles
        0xE7 => Routine::Modify(ZP, ModifyOp::Isc),

        // INX - 2 cycles
        0xE8 => Routine::Implied(ImpliedOp::Inx),

        // SBC #imm - 2 cycles
        0xE9 => Routine::Read(IMM, ReadOp::Sbc),

        // NOP - 2 cycles
        0xEA => Routine::Implied(ImpliedOp::Nop),

        // SBC #imm (undocumented) - 2 cycles
        0xEB => Routine::Read(IMM, ReadOp::Sbc),

        // CPX abs - 4 cycles
        0xEC => Routine::Read(ABS, ReadOp::Cpx),

        // SBC abs - 4 cycles
        0xED => Routine::Read(ABS, ReadOp::Sbc),

        // INC abs - 6 cycles
        0xEE => Routine::Modify(ABS, ModifyOp::Inc),

        // ISC abs (undocumented) - 6 cycles
        0xEF => Routine::Modify(ABS, ModifyOp::Isc),

        // BEQ rel - 2/3/4 cycles
        0xF0 => Routine::Branch(Condition::new(Z, true)),

        // SBC (zp),Y - 5/6 cycles
        0xF1 => Routine::Read(IZY, ReadOp::Sbc),

        // JAM
        0xF2 => Routine::Jam,

        // ISC (zp),Y (undocumented) - 8 cycles
        0xF3 => Routine::Modify(IZY, ModifyOp::Isc),

        // NOP zp,X (undocumented) - 4 cycles
        0xF4 => Routine::Read(ZPX, ReadOp::Nop),

        // SBC zp,X - 4 cycles
        0xF5 => Routine::Read(ZPX, ReadOp::Sbc),

        // INC zp,X - 6 cycles
        0xF6 => Routine::Modify(ZPX, ModifyOp::Inc),

        // ISC zp,X (undocumented) - 6 cycles
        0xF7 => Routine::Modify(ZPX, ModifyOp::Isc),

        // SED - 2 cycles
        0xF8 => Routine::Implied(ImpliedOp::Sed),

        // SBC abs,Y - 4/5 cycles
        0xF9 => Routine::Read(ABY, ReadOp::Sbc),

        // NOP (undocumented) - 2 cycles
        0xFA => Routine::Implied(ImpliedOp::Nop),

        // ISC abs,Y (undocumented) - 7 cycles
        0xFB => Routine::Modify(ABY, ModifyOp::Isc),

        // NOP abs,X (undocumented) - 4/5 cycles
        0xFC => Routine::Read(ABX, ReadOp::Nop),

        // SBC abs,X - 4/5 cycles
        0xFD => Routine::Read(ABX, ReadOp::Sbc),

        // INC abs,X - 7 cycles
        0xFE => Routine::Modify(ABX, ModifyOp::Inc),

        // ISC abs,X (undocumented) - 7 cycles
        0xFF => Routine::Modify(ABX, ModifyOp::Isc),
    }
}
