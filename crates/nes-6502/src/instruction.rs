//! One in-flight instruction, advanced a bus cycle at a time.
//!
//! An [`Instruction`] is created when its opcode is fetched (or by reset
//! and interrupt entry) and holds everything it needs between cycles. The
//! opcode fetch itself is accounted by the processor; cycle 1 here is the
//! first cycle after it.

use emu_core::Bus;

use crate::addressing::{Fixup, Mode, Operand};
use crate::flags::I;
use crate::operations::{Condition, ImpliedOp, ModifyOp, ReadOp, WriteOp};
use crate::{Registers, Status};

pub(crate) const NMI_VECTOR: u16 = 0xFFFA;
pub(crate) const RESET_VECTOR: u16 = 0xFFFC;
pub(crate) const IRQ_VECTOR: u16 = 0xFFFE;

/// What an instruction does on each of its cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Routine {
    Read(Mode, ReadOp),
    Modify(Mode, ModifyOp),
    Write(Mode, WriteOp),
    Implied(ImpliedOp),
    Branch(Condition),
    Brk,
    /// IRQ or NMI entry through the given vector.
    Interrupt(u16),
    Reset,
    Jsr,
    Rts,
    Rti,
    JmpAbsolute,
    JmpIndirect,
    Pha,
    Php,
    Pla,
    Plp,
    /// Processor lock-up. Never completes.
    Jam,
    /// Opcode with no implementation.
    Unsupported,
}

/// A suspended instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    opcode: Option<u8>,
    routine: Routine,
    /// Cycle about to run, counted from 1.
    cycle: u8,
    operand: Operand,
    /// Cycles spent after the operand address became ready.
    phase: u8,
    data: u8,
    /// Opcode already fetched by a branch on its final cycle.
    followup: Option<u8>,
}

impl Instruction {
    pub(crate) const fn new(opcode: Option<u8>, routine: Routine) -> Self {
        Self {
            opcode,
            routine,
            cycle: 1,
            operand: Operand::EMPTY,
            phase: 0,
            data: 0,
            followup: None,
        }
    }

    /// The reset sequence.
    pub(crate) const fn reset() -> Self {
        Self::new(None, Routine::Reset)
    }

    /// IRQ or NMI entry.
    pub(crate) const fn interrupt(vector: u16) -> Self {
        Self::new(None, Routine::Interrupt(vector))
    }

    /// The opcode this instruction was decoded from. `None` for the reset
    /// and interrupt sequences.
    #[must_use]
    pub const fn opcode(&self) -> Option<u8> {
        self.opcode
    }

    /// The cycle that the next call to [`Instruction::advance`] runs.
    #[must_use]
    pub const fn cycle(&self) -> u8 {
        self.cycle
    }

    /// True for the JAM opcodes, which lock the processor up.
    #[must_use]
    pub const fn is_jam(&self) -> bool {
        matches!(self.routine, Routine::Jam)
    }

    /// True for opcodes the processor refuses to execute.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self.routine, Routine::Unsupported)
    }

    /// Take the next instruction if this one already fetched its opcode.
    ///
    /// Only branches do this. Valid once, after completion.
    pub fn take_followup(&mut self) -> Option<Instruction> {
        self.followup.take().map(crate::opcodes::decode)
    }

    /// Run one bus cycle. Returns true once the instruction is complete.
    pub fn advance<B: Bus>(&mut self, regs: &mut Registers, bus: &mut B) -> bool {
        let done = match self.routine {
            Routine::Read(mode, op) => self.read(mode, op, regs, bus),
            Routine::Modify(Mode::Accumulator, op) => {
                let _ = bus.read(regs.pc);
                let value = regs.a;
                regs.a = op.apply(regs, value);
                true
            }
            Routine::Modify(mode, op) => self.modify(mode, op, regs, bus),
            Routine::Write(mode, op) => self.write(mode, op, regs, bus),
            Routine::Implied(op) => {
                let _ = bus.read(regs.pc);
                op.apply(regs);
                true
            }
            Routine::Branch(condition) => self.branch(condition, regs, bus),
            Routine::Brk => self.brk(regs, bus),
            Routine::Interrupt(vector) => self.interrupt_entry(vector, regs, bus),
            Routine::Reset => self.reset_sequence(regs, bus),
            Routine::Jsr => self.jsr(regs, bus),
            Routine::Rts => self.rts(regs, bus),
            Routine::Rti => self.rti(regs, bus),
            Routine::JmpAbsolute => self.jmp_absolute(regs, bus),
            Routine::JmpIndirect => self.jmp_indirect(regs, bus),
            Routine::Pha => self.push(regs.a, regs, bus),
            Routine::Php => self.push(regs.p.to_byte_brk(), regs, bus),
            Routine::Pla => match self.pull(regs, bus) {
                Some(value) => {
                    regs.a = value;
                    regs.p.update_zero_and_negative(value);
                    true
                }
                None => false,
            },
            Routine::Plp => match self.pull(regs, bus) {
                Some(value) => {
                    regs.p = Status::from_byte(value);
                    true
                }
                None => false,
            },
            Routine::Jam | Routine::Unsupported => {
                let _ = bus.read(regs.pc);
                false
            }
        };

        if !done {
            self.cycle = self.cycle.saturating_add(1);
        }
        done
    }

    fn read<B: Bus>(&mut self, mode: Mode, op: ReadOp, regs: &mut Registers, bus: &mut B) -> bool {
        if !self.operand.resolve(self.cycle, mode, Fixup::OnCarry, regs, bus) {
            return false;
        }
        let value = bus.read(self.operand.addr);
        op.apply(regs, value);
        true
    }

    fn write<B: Bus>(&mut self, mode: Mode, op: WriteOp, regs: &mut Registers, bus: &mut B) -> bool {
        if !self.operand.resolve(self.cycle, mode, Fixup::Always, regs, bus) {
            return false;
        }
        bus.write(self.operand.addr, op.value(regs));
        true
    }

    fn modify<B: Bus>(&mut self, mode: Mode, op: ModifyOp, regs: &mut Registers, bus: &mut B) -> bool {
        if !self.operand.resolve(self.cycle, mode, Fixup::Always, regs, bus) {
            return false;
        }
        let addr = self.operand.addr;
        self.phase += 1;
        match self.phase {
            1 => {
                self.data = bus.read(addr);
                false
            }
            2 => {
                // The unmodified value goes back out while the ALU works.
                bus.write(addr, self.data);
                self.data = op.apply(regs, self.data);
                false
            }
            _ => {
                bus.write(addr, self.data);
                true
            }
        }
    }

    /// Relative branch. Every path ends by fetching the next opcode, which
    /// becomes the followup instruction.
    fn branch<B: Bus>(&mut self, condition: Condition, regs: &mut Registers, bus: &mut B) -> bool {
        match self.cycle {
            1 => {
                self.data = bus.read(regs.next_pc());
                false
            }
            2 => {
                let opcode = bus.read(regs.pc);
                if !condition.holds(regs.p) {
                    return self.prefetched(opcode, regs);
                }
                // Only PCL moves on this cycle; the target is kept for the fix.
                let offset = self.data as i8;
                let [lo, hi] = regs.pc.to_le_bytes();
                self.operand.addr = regs.pc.wrapping_add_signed(i16::from(offset));
                regs.pc = u16::from_le_bytes([lo.wrapping_add_signed(offset), hi]);
                false
            }
            3 => {
                let opcode = bus.read(regs.pc);
                if regs.pc == self.operand.addr {
                    return self.prefetched(opcode, regs);
                }
                // Read at the unfixed PC, then correct PCH.
                regs.pc = self.operand.addr;
                false
            }
            _ => {
                let opcode = bus.read(regs.pc);
                self.prefetched(opcode, regs)
            }
        }
    }

    fn prefetched(&mut self, opcode: u8, regs: &mut Registers) -> bool {
        regs.pc = regs.pc.wrapping_add(1);
        self.followup = Some(opcode);
        true
    }

    // BRK - 7 cycles
    fn brk<B: Bus>(&mut self, regs: &mut Registers, bus: &mut B) -> bool {
        match self.cycle {
            1 => {
                // Padding byte, skipped on return.
                let _ = bus.read(regs.next_pc());
                false
            }
            2 => {
                bus.write(regs.push(), (regs.pc >> 8) as u8);
                false
            }
            3 => {
                bus.write(regs.push(), regs.pc as u8);
                false
            }
            4 => {
                bus.write(regs.push(), regs.p.to_byte_brk());
                false
            }
            5 => {
                self.operand.addr = u16::from(bus.read(IRQ_VECTOR));
                regs.p.set_flag(I, true);
                false
            }
            _ => {
                regs.pc = self.operand.addr | (u16::from(bus.read(IRQ_VECTOR + 1)) << 8);
                true
            }
        }
    }

    // IRQ/NMI - 7 cycles, the first spent by the processor on a discarded fetch
    fn interrupt_entry<B: Bus>(&mut self, vector: u16, regs: &mut Registers, bus: &mut B) -> bool {
        match self.cycle {
            1 => {
                let _ = bus.read(regs.pc);
                false
            }
            2 => {
                bus.write(regs.push(), (regs.pc >> 8) as u8);
                false
            }
            3 => {
                bus.write(regs.push(), regs.pc as u8);
                false
            }
            4 => {
                bus.write(regs.push(), regs.p.to_byte_irq());
                regs.p.set_flag(I, true);
                false
            }
            5 => {
                self.operand.addr = u16::from(bus.read(vector));
                false
            }
            _ => {
                regs.pc = self.operand.addr | (u16::from(bus.read(vector.wrapping_add(1))) << 8);
                true
            }
        }
    }

    // RESET - 7 cycles, no opcode fetch
    fn reset_sequence<B: Bus>(&mut self, regs: &mut Registers, bus: &mut B) -> bool {
        match self.cycle {
            1 | 2 => {
                let _ = bus.read(regs.pc);
                false
            }
            3..=5 => {
                // Stack accesses are forced to reads; S still moves.
                let _ = bus.read(regs.push());
                false
            }
            6 => {
                self.operand.addr = u16::from(bus.read(RESET_VECTOR));
                false
            }
            _ => {
                regs.pc = self.operand.addr | (u16::from(bus.read(RESET_VECTOR + 1)) << 8);
                regs.p.set_flag(I, true);
                true
            }
        }
    }

    // JSR abs - 6 cycles
    fn jsr<B: Bus>(&mut self, regs: &mut Registers, bus: &mut B) -> bool {
        match self.cycle {
            1 => {
                self.data = bus.read(regs.next_pc());
                false
            }
            2 => {
                let _ = bus.read(regs.stack_addr());
                false
            }
            3 => {
                bus.write(regs.push(), (regs.pc >> 8) as u8);
                false
            }
            4 => {
                bus.write(regs.push(), regs.pc as u8);
                false
            }
            _ => {
                let hi = bus.read(regs.pc);
                regs.pc = u16::from_le_bytes([self.data, hi]);
                true
            }
        }
    }

    // RTS - 6 cycles
    fn rts<B: Bus>(&mut self, regs: &mut Registers, bus: &mut B) -> bool {
        match self.cycle {
            1 => {
                let _ = bus.read(regs.pc);
                false
            }
            2 => {
                let _ = bus.read(regs.stack_addr());
                false
            }
            3 => {
                self.operand.addr = u16::from(bus.read(regs.pop()));
                false
            }
            4 => {
                self.operand.addr |= u16::from(bus.read(regs.pop())) << 8;
                regs.pc = self.operand.addr;
                false
            }
            _ => {
                let _ = bus.read(regs.pc);
                regs.pc = regs.pc.wrapping_add(1);
                true
            }
        }
    }

    // RTI - 6 cycles
    fn rti<B: Bus>(&mut self, regs: &mut Registers, bus: &mut B) -> bool {
        match self.cycle {
            1 => {
                let _ = bus.read(regs.pc);
                false
            }
            2 => {
                let _ = bus.read(regs.stack_addr());
                false
            }
            3 => {
                regs.p = Status::from_byte(bus.read(regs.pop()));
                false
            }
            4 => {
                self.operand.addr = u16::from(bus.read(regs.pop()));
                false
            }
            _ => {
                regs.pc = self.operand.addr | (u16::from(bus.read(regs.pop())) << 8);
                true
            }
        }
    }

    // JMP abs - 3 cycles
    fn jmp_absolute<B: Bus>(&mut self, regs: &mut Registers, bus: &mut B) -> bool {
        match self.cycle {
            1 => {
                self.data = bus.read(regs.next_pc());
                false
            }
            _ => {
                let hi = bus.read(regs.pc);
                regs.pc = u16::from_le_bytes([self.data, hi]);
                true
            }
        }
    }

    // JMP (ind) - 5 cycles
    fn jmp_indirect<B: Bus>(&mut self, regs: &mut Registers, bus: &mut B) -> bool {
        match self.cycle {
            1 => {
                self.operand.addr = u16::from(bus.read(regs.next_pc()));
                false
            }
            2 => {
                self.operand.addr |= u16::from(bus.read(regs.next_pc())) << 8;
                false
            }
            3 => {
                self.data = bus.read(self.operand.addr);
                false
            }
            _ => {
                // The pointer's high byte never carries: ($10FF) reads $10FF and $1000.
                let [lo, hi] = self.operand.addr.to_le_bytes();
                let target_hi = bus.read(u16::from_le_bytes([lo.wrapping_add(1), hi]));
                regs.pc = u16::from_le_bytes([self.data, target_hi]);
                true
            }
        }
    }

    // PHA/PHP - 3 cycles
    fn push<B: Bus>(&mut self, value: u8, regs: &mut Registers, bus: &mut B) -> bool {
        match self.cycle {
            1 => {
                let _ = bus.read(regs.pc);
                false
            }
            _ => {
                bus.write(regs.push(), value);
                true
            }
        }
    }

    // PLA/PLP - 4 cycles
    fn pull<B: Bus>(&mut self, regs: &mut Registers, bus: &mut B) -> Option<u8> {
        match self.cycle {
            1 => {
                let _ = bus.read(regs.pc);
                None
            }
            2 => {
                let _ = bus.read(regs.stack_addr());
                None
            }
            _ => Some(bus.read(regs.pop())),
        }
    }
}
