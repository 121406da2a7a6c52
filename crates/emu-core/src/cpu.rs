//! CPU core trait.

use crate::Bus;

/// A CPU core.
///
/// CPUs execute instructions and access memory through a bus. The bus is
/// passed to every call rather than owned, so it can be shared with other
/// components or swapped for an instrumented one.
///
/// Implementations hold no locks. Callers that drive a CPU from one thread
/// and inspect it from another wrap the CPU and its bus in a single
/// `Mutex`.
pub trait Cpu {
    /// The type used for register inspection.
    type Registers;

    /// Error raised when the CPU cannot continue with the fetched opcode.
    type Error;

    /// Advance the CPU by one clock cycle.
    ///
    /// Returns `Ok(true)` when an instruction finished on this cycle.
    fn tick<B: Bus>(&mut self, bus: &mut B) -> Result<bool, Self::Error>;

    /// Run cycles until the current instruction finishes.
    ///
    /// Returns `Ok(false)` if the CPU is halted and the instruction will
    /// never finish.
    fn step<B: Bus>(&mut self, bus: &mut B) -> Result<bool, Self::Error>;

    /// Returns the current program counter.
    fn pc(&self) -> u16;

    /// Returns the number of cycles executed since the last reset.
    fn cycles(&self) -> u64;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;

    /// Returns true if the CPU is halted.
    fn is_halted(&self) -> bool;

    /// Request an interrupt. Returns true if accepted.
    fn interrupt(&mut self) -> bool;

    /// Request a non-maskable interrupt.
    fn nmi(&mut self);

    /// Start the reset sequence. It runs on the following ticks.
    fn reset(&mut self);
}
