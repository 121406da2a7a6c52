//! Execution errors.

/// The processor fetched an opcode it does not implement.
///
/// Raised for the unstable undocumented opcodes (ANE, LXA, SHA, SHX, SHY,
/// TAS). The program counter has already moved past the opcode byte, so
/// the caller can log the error and keep ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("encountered an unsupported ${opcode:02X} opcode at ${program_counter:04X}")]
pub struct UnsupportedOpcode {
    /// Address the opcode was fetched from.
    pub program_counter: u16,
    /// The opcode byte.
    pub opcode: u8,
}
