//! 6502 processor status register (P).
//!
//! Only the six real flags are stored. Bits 4 (B) and 5 (unused) exist on
//! the stack copy alone: they are injected when the status is pushed and
//! dropped when it is pulled.

use std::fmt;

/// Carry flag - set if operation resulted in carry, clear on borrow.
pub const C: u8 = 0x01;

/// Zero flag - set if result is zero.
pub const Z: u8 = 0x02;

/// Interrupt disable - when set, IRQ requests are refused.
pub const I: u8 = 0x04;

/// Decimal mode - stored, but the 2A03 has no BCD arithmetic.
pub const D: u8 = 0x08;

/// Break flag - only appears when status is pushed.
/// Set when BRK/PHP push status, clear when IRQ/NMI push status.
pub const B: u8 = 0x10;

/// Unused bit - always pushed as 1.
pub const U: u8 = 0x20;

/// Overflow flag - set if signed arithmetic overflowed.
pub const V: u8 = 0x40;

/// Negative flag - set if result has bit 7 set.
pub const N: u8 = 0x80;

/// Processor status register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Status(u8);

impl Status {
    /// Create a status register with every flag clear.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create status from a raw byte. B and the unused bit are discarded.
    #[must_use]
    pub const fn from_byte(value: u8) -> Self {
        Self(value & !(B | U))
    }

    /// The live flags. B and the unused bit always read as clear.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Byte pushed by BRK and PHP (break and unused both set).
    #[must_use]
    pub const fn to_byte_brk(self) -> u8 {
        self.0 | U | B
    }

    /// Byte pushed by IRQ and NMI (unused set, break clear).
    #[must_use]
    pub const fn to_byte_irq(self) -> u8 {
        self.0 | U
    }

    /// Check if a flag is set.
    #[must_use]
    pub const fn flag(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// Set or clear a flag.
    pub fn set_flag(&mut self, flag: u8, on: bool) {
        if on {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
        self.0 &= !(B | U);
    }

    /// Update N and Z from a result.
    pub fn update_zero_and_negative(&mut self, value: u8) {
        self.set_flag(Z, value == 0);
        self.set_flag(N, value & 0x80 != 0);
    }
}

impl fmt::Display for Status {
    /// Renders as `NV-BDIZC`, upper case for set flags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(u8, char); 8] = [
            (N, 'n'),
            (V, 'v'),
            (U, '-'),
            (B, 'b'),
            (D, 'd'),
            (I, 'i'),
            (Z, 'z'),
            (C, 'c'),
        ];
        for (mask, name) in NAMES {
            let shown = if self.0 & mask != 0 {
                name.to_ascii_uppercase()
            } else {
                name
            };
            write!(f, "{shown}")?;
        }
        Ok(())
    }
}
