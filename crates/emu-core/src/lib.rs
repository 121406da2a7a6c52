//! Core traits and types for cycle-accurate emulation.
//!
//! A CPU does exactly one bus access per tick. The bus is borrowed for the
//! duration of each call and never owned by the CPU, so the embedding
//! application decides what sits behind it.

mod bus;
mod cpu;
mod memory;
mod observable;

pub use bus::Bus;
pub use cpu::Cpu;
pub use memory::{Memory, MemoryError, ADDRESS_SPACE};
pub use observable::{Observable, Value};
