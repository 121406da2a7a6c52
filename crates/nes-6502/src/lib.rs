//! Cycle-accurate interpreter for the NES 6502.
//!
//! The Ricoh 2A03 is an NMOS 6502 with decimal mode removed. Every
//! `tick()` performs exactly one bus access, including the dummy reads and
//! writes real hardware makes on index carries, read-modify-write cycles
//! and branch prefetch. An instruction is a small state machine
//! ([`Instruction`]) resumed once per cycle; branches hand back the next
//! instruction already fetched.
//!
//! ```
//! use emu_core::Memory;
//! use nes_6502::Processor;
//!
//! let mut memory = Memory::new();
//! memory.load_bytes(0x8000, &[0xA9, 0x01, 0x69, 0x02]); // LDA #1; ADC #2
//! memory.load_bytes(0xFFFC, &[0x00, 0x80]);
//!
//! let mut cpu = Processor::new();
//! cpu.reset();
//! cpu.step(&mut memory)?; // reset sequence
//! cpu.step(&mut memory)?;
//! cpu.step(&mut memory)?;
//! assert_eq!(cpu.accumulator(), 3);
//! assert_eq!(cpu.cycles(), 11);
//! # Ok::<(), nes_6502::UnsupportedOpcode>(())
//! ```

mod addressing;
mod error;
pub mod flags;
mod instruction;
mod opcodes;
mod operations;
mod processor;
mod registers;

pub use error::UnsupportedOpcode;
pub use flags::Status;
pub use instruction::Instruction;
pub use opcodes::decode;
pub use processor::Processor;
pub use registers::Registers;
