//! Operations carried out once an addressing mode has produced its operand.
//!
//! Each category is a closed enum. The addressing-mode routines in
//! [`crate::instruction`] own the bus timing; the functions here only touch
//! registers and flags.

use crate::flags::{C, D, I, N, V, Z};
use crate::{Registers, Status};

/// Operations that consume one byte read from memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReadOp {
    Lda,
    Ldx,
    Ldy,
    Ora,
    And,
    Eor,
    Adc,
    Sbc,
    Cmp,
    Cpx,
    Cpy,
    Bit,
    /// Read and discard. Multi-byte NOPs still perform the access.
    Nop,
    // Undocumented.
    Lax,
    Anc,
    Alr,
    Arr,
    Sbx,
    Las,
}

impl ReadOp {
    pub(crate) fn apply(self, regs: &mut Registers, value: u8) {
        match self {
            ReadOp::Lda => {
                regs.a = value;
                regs.p.update_zero_and_negative(value);
            }
            ReadOp::Ldx => {
                regs.x = value;
                regs.p.update_zero_and_negative(value);
            }
            ReadOp::Ldy => {
                regs.y = value;
                regs.p.update_zero_and_negative(value);
            }
            ReadOp::Ora => {
                regs.a |= value;
                regs.p.update_zero_and_negative(regs.a);
            }
            ReadOp::And => {
                regs.a &= value;
                regs.p.update_zero_and_negative(regs.a);
            }
            ReadOp::Eor => {
                regs.a ^= value;
                regs.p.update_zero_and_negative(regs.a);
            }
            ReadOp::Adc => adc(regs, value),
            ReadOp::Sbc => sbc(regs, value),
            ReadOp::Cmp => compare(&mut regs.p, regs.a, value),
            ReadOp::Cpx => compare(&mut regs.p, regs.x, value),
            ReadOp::Cpy => compare(&mut regs.p, regs.y, value),
            ReadOp::Bit => {
                regs.p.set_flag(Z, regs.a & value == 0);
                regs.p.set_flag(N, value & 0x80 != 0);
                regs.p.set_flag(V, value & 0x40 != 0);
            }
            ReadOp::Nop => {}
            ReadOp::Lax => {
                regs.a = value;
                regs.x = value;
                regs.p.update_zero_and_negative(value);
            }
            ReadOp::Anc => {
                regs.a &= value;
                regs.p.update_zero_and_negative(regs.a);
                regs.p.set_flag(C, regs.a & 0x80 != 0);
            }
            ReadOp::Alr => {
                regs.a = lsr(&mut regs.p, regs.a & value);
            }
            ReadOp::Arr => {
                let carry_in = if regs.p.flag(C) { 0x80 } else { 0 };
                let result = ((regs.a & value) >> 1) | carry_in;
                regs.a = result;
                regs.p.update_zero_and_negative(result);
                regs.p.set_flag(C, result & 0x40 != 0);
                regs.p.set_flag(V, ((result >> 6) ^ (result >> 5)) & 1 != 0);
            }
            ReadOp::Sbx => {
                let masked = regs.a & regs.x;
                regs.p.set_flag(C, masked >= value);
                regs.x = masked.wrapping_sub(value);
                regs.p.update_zero_and_negative(regs.x);
            }
            ReadOp::Las => {
                let result = value & regs.s;
                regs.a = result;
                regs.x = result;
                regs.s = result;
                regs.p.update_zero_and_negative(result);
            }
        }
    }
}

/// Read-modify-write operations. The returned byte is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModifyOp {
    Asl,
    Lsr,
    Rol,
    Ror,
    Inc,
    Dec,
    // Undocumented: a shift or step followed by an accumulator operation.
    Slo,
    Rla,
    Sre,
    Rra,
    Dcp,
    Isc,
}

impl ModifyOp {
    pub(crate) fn apply(self, regs: &mut Registers, value: u8) -> u8 {
        match self {
            ModifyOp::Asl => asl(&mut regs.p, value),
            ModifyOp::Lsr => lsr(&mut regs.p, value),
            ModifyOp::Rol => rol(&mut regs.p, value),
            ModifyOp::Ror => ror(&mut regs.p, value),
            ModifyOp::Inc => {
                let result = value.wrapping_add(1);
                regs.p.update_zero_and_negative(result);
                result
            }
            ModifyOp::Dec => {
                let result = value.wrapping_sub(1);
                regs.p.update_zero_and_negative(result);
                result
            }
            ModifyOp::Slo => {
                let result = asl(&mut regs.p, value);
                ReadOp::Ora.apply(regs, result);
                result
            }
            ModifyOp::Rla => {
                let result = rol(&mut regs.p, value);
                ReadOp::And.apply(regs, result);
                result
            }
            ModifyOp::Sre => {
                let result = lsr(&mut regs.p, value);
                ReadOp::Eor.apply(regs, result);
                result
            }
            ModifyOp::Rra => {
                let result = ror(&mut regs.p, value);
                adc(regs, result);
                result
            }
            ModifyOp::Dcp => {
                let result = value.wrapping_sub(1);
                compare(&mut regs.p, regs.a, result);
                result
            }
            ModifyOp::Isc => {
                let result = value.wrapping_add(1);
                sbc(regs, result);
                result
            }
        }
    }
}

/// Store operations. Produce the byte to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WriteOp {
    Sta,
    Stx,
    Sty,
    Sax,
}

impl WriteOp {
    pub(crate) fn value(self, regs: &Registers) -> u8 {
        match self {
            WriteOp::Sta => regs.a,
            WriteOp::Stx => regs.x,
            WriteOp::Sty => regs.y,
            WriteOp::Sax => regs.a & regs.x,
        }
    }
}

/// Single-byte operations on registers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ImpliedOp {
    Clc,
    Sec,
    Cli,
    Sei,
    Clv,
    Cld,
    Sed,
    Tax,
    Tay,
    Txa,
    Tya,
    Tsx,
    Txs,
    Inx,
    Iny,
    Dex,
    Dey,
    Nop,
}

impl ImpliedOp {
    pub(crate) fn apply(self, regs: &mut Registers) {
        match self {
            ImpliedOp::Clc => regs.p.set_flag(C, false),
            ImpliedOp::Sec => regs.p.set_flag(C, true),
            ImpliedOp::Cli => regs.p.set_flag(I, false),
            ImpliedOp::Sei => regs.p.set_flag(I, true),
            ImpliedOp::Clv => regs.p.set_flag(V, false),
            ImpliedOp::Cld => regs.p.set_flag(D, false),
            ImpliedOp::Sed => regs.p.set_flag(D, true),
            ImpliedOp::Tax => {
                regs.x = regs.a;
                regs.p.update_zero_and_negative(regs.x);
            }
            ImpliedOp::Tay => {
                regs.y = regs.a;
                regs.p.update_zero_and_negative(regs.y);
            }
            ImpliedOp::Txa => {
                regs.a = regs.x;
                regs.p.update_zero_and_negative(regs.a);
            }
            ImpliedOp::Tya => {
                regs.a = regs.y;
                regs.p.update_zero_and_negative(regs.a);
            }
            ImpliedOp::Tsx => {
                regs.x = regs.s;
                regs.p.update_zero_and_negative(regs.x);
            }
            // TXS leaves the flags alone.
            ImpliedOp::Txs => regs.s = regs.x,
            ImpliedOp::Inx => {
                regs.x = regs.x.wrapping_add(1);
                regs.p.update_zero_and_negative(regs.x);
            }
            ImpliedOp::Iny => {
                regs.y = regs.y.wrapping_add(1);
                regs.p.update_zero_and_negative(regs.y);
            }
            ImpliedOp::Dex => {
                regs.x = regs.x.wrapping_sub(1);
                regs.p.update_zero_and_negative(regs.x);
            }
            ImpliedOp::Dey => {
                regs.y = regs.y.wrapping_sub(1);
                regs.p.update_zero_and_negative(regs.y);
            }
            ImpliedOp::Nop => {}
        }
    }
}

/// Branch condition: taken when `flag` is in state `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Condition {
    pub(crate) flag: u8,
    pub(crate) set: bool,
}

impl Condition {
    pub(crate) const fn new(flag: u8, set: bool) -> Self {
        Self { flag, set }
    }

    pub(crate) const fn holds(self, p: Status) -> bool {
        p.flag(self.flag) == self.set
    }
}

/// Binary add with carry. D is ignored on the 2A03.
pub(crate) fn adc(regs: &mut Registers, operand: u8) {
    let carry = u16::from(regs.p.flag(C));
    let sum = u16::from(regs.a) + u16::from(operand) + carry;
    let result = sum as u8;

    regs.p.set_flag(C, sum > 0xFF);
    regs.p.set_flag(V, (regs.a ^ result) & (operand ^ result) & 0x80 != 0);
    regs.a = result;
    regs.p.update_zero_and_negative(result);
}

/// Binary subtract with borrow. C set means no borrow.
pub(crate) fn sbc(regs: &mut Registers, operand: u8) {
    let borrow = i16::from(!regs.p.flag(C));
    let difference = i16::from(regs.a) - i16::from(operand) - borrow;
    let result = difference as u8;

    regs.p.set_flag(C, difference >= 0);
    regs.p.set_flag(V, (regs.a ^ operand) & (regs.a ^ result) & 0x80 != 0);
    regs.a = result;
    regs.p.update_zero_and_negative(result);
}

/// CMP/CPX/CPY. The difference only sets flags.
pub(crate) fn compare(p: &mut Status, register: u8, operand: u8) {
    p.set_flag(C, register >= operand);
    p.update_zero_and_negative(register.wrapping_sub(operand));
}

fn asl(p: &mut Status, value: u8) -> u8 {
    let result = value << 1;
    p.set_flag(C, value & 0x80 != 0);
    p.update_zero_and_negative(result);
    result
}

fn lsr(p: &mut Status, value: u8) -> u8 {
    let result = value >> 1;
    p.set_flag(C, value & 0x01 != 0);
    p.update_zero_and_negative(result);
    result
}

fn rol(p: &mut Status, value: u8) -> u8 {
    let result = (value << 1) | u8::from(p.flag(C));
    p.set_flag(C, value & 0x80 != 0);
    p.update_zero_and_negative(result);
    result
}

fn ror(p: &mut Status, value: u8) -> u8 {
    let result = (value >> 1) | if p.flag(C) { 0x80 } else { 0 };
    p.set_flag(C, value & 0x01 != 0);
    p.update_zero_and_negative(result);
    result
}
