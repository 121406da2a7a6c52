//! Effective-address computation, one bus cycle at a time.
//!
//! [`Operand::resolve`] is called on every cycle of an instruction until it
//! reports the address ready. Each call that returns `false` has used that
//! cycle's bus access (operand fetch, pointer read or dummy read). The call
//! that returns `true` leaves the bus free, so the caller performs its data
//! access on the same cycle.

use emu_core::Bus;

use crate::Registers;

/// Index register selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Index {
    X,
    Y,
}

impl Index {
    fn value(self, regs: &Registers) -> u8 {
        match self {
            Index::X => regs.x,
            Index::Y => regs.y,
        }
    }
}

/// Addressing modes that produce a memory operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Immediate,
    ZeroPage,
    ZeroPageIndexed(Index),
    Absolute,
    AbsoluteIndexed(Index),
    /// `(zp,X)`
    IndexedIndirect,
    /// `(zp),Y`
    IndirectIndexed,
    /// Operates on A. Never resolves to an address.
    Accumulator,
}

/// When an indexed access pays for the high-byte fixup cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fixup {
    /// Reads only spend the extra cycle when the index carries.
    OnCarry,
    /// Writes and read-modify-writes always spend it.
    Always,
}

/// Address computation state carried between cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Operand {
    pub(crate) addr: u16,
    pointer: u8,
    page_crossed: bool,
    ready: bool,
}

impl Operand {
    pub(crate) const EMPTY: Operand = Operand {
        addr: 0,
        pointer: 0,
        page_crossed: false,
        ready: false,
    };

    /// Run this cycle's share of address computation.
    ///
    /// `cycle` counts from 1, the first cycle after the opcode fetch.
    pub(crate) fn resolve<B: Bus>(
        &mut self,
        cycle: u8,
        mode: Mode,
        fixup: Fixup,
        regs: &mut Registers,
        bus: &mut B,
    ) -> bool {
        if self.ready {
            return true;
        }

        self.ready = match mode {
            Mode::Immediate => {
                self.addr = regs.next_pc();
                true
            }
            Mode::ZeroPage => match cycle {
                1 => {
                    self.addr = u16::from(bus.read(regs.next_pc()));
                    false
                }
                _ => true,
            },
            Mode::ZeroPageIndexed(index) => match cycle {
                1 => {
                    self.pointer = bus.read(regs.next_pc());
                    false
                }
                2 => {
                    // Dummy read of the unindexed address; the sum stays in page zero.
                    let _ = bus.read(u16::from(self.pointer));
                    self.addr = u16::from(self.pointer.wrapping_add(index.value(regs)));
                    false
                }
                _ => true,
            },
            Mode::Absolute => match cycle {
                1 => {
                    self.addr = u16::from(bus.read(regs.next_pc()));
                    false
                }
                2 => {
                    self.addr |= u16::from(bus.read(regs.next_pc())) << 8;
                    false
                }
                _ => true,
            },
            Mode::AbsoluteIndexed(index) => match cycle {
                1 => {
                    self.addr = u16::from(bus.read(regs.next_pc()));
                    false
                }
                2 => {
                    let hi = bus.read(regs.next_pc());
                    self.add_index(hi, index.value(regs));
                    false
                }
                3 => self.fix_page(fixup, bus),
                _ => true,
            },
            Mode::IndexedIndirect => match cycle {
                1 => {
                    self.pointer = bus.read(regs.next_pc());
                    false
                }
                2 => {
                    let _ = bus.read(u16::from(self.pointer));
                    self.pointer = self.pointer.wrapping_add(regs.x);
                    false
                }
                3 => {
                    self.addr = u16::from(bus.read(u16::from(self.pointer)));
                    false
                }
                4 => {
                    let hi = bus.read(u16::from(self.pointer.wrapping_add(1)));
                    self.addr |= u16::from(hi) << 8;
                    false
                }
                _ => true,
            },
            Mode::IndirectIndexed => match cycle {
                1 => {
                    self.pointer = bus.read(regs.next_pc());
                    false
                }
                2 => {
                    self.addr = u16::from(bus.read(u16::from(self.pointer)));
                    false
                }
                3 => {
                    let hi = bus.read(u16::from(self.pointer.wrapping_add(1)));
                    self.add_index(hi, regs.y);
                    false
                }
                4 => self.fix_page(fixup, bus),
                _ => true,
            },
            Mode::Accumulator => true,
        };
        self.ready
    }

    /// Combine the fetched high byte with the low byte plus index, leaving
    /// the high byte unfixed.
    fn add_index(&mut self, hi: u8, index: u8) {
        let (lo, carry) = (self.addr as u8).overflowing_add(index);
        self.addr = u16::from_le_bytes([lo, hi]);
        self.page_crossed = carry;
    }

    /// The fixup cycle: a dummy read at the unfixed address, then carry
    /// into the high byte. Skipped for reads that did not cross a page.
    fn fix_page<B: Bus>(&mut self, fixup: Fixup, bus: &mut B) -> bool {
        if !self.page_crossed && fixup == Fixup::OnCarry {
            return true;
        }
        let _ = bus.read(self.addr);
        if self.page_crossed {
            self.addr = self.addr.wrapping_add(0x100);
        }
        false
    }
}
