//! Headless application layer for the NES 6502 core.
//!
//! Owns the memory and the processor, loads a program image and decides
//! when to step, run continuously or reset. The core itself knows nothing
//! about any of this.

mod logger;
mod machine;

pub use logger::{LogLevel, init as init_logger};
pub use machine::{Machine, RunSummary, parse_address, run_continuous};
