//! Flat 64 KiB memory.
//!
//! Every 16-bit address is backed by one byte of RAM. There is no mirroring
//! and no memory-mapped I/O; anything fancier implements [`Bus`] itself.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Bus;

/// Number of addressable bytes.
pub const ADDRESS_SPACE: usize = 0x1_0000;

/// Errors raised while loading a program image.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// The image file could not be read.
    #[error("failed to read program image {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Flat byte-addressable store covering the whole 16-bit address space.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8; ADDRESS_SPACE]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("size", &ADDRESS_SPACE)
            .finish_non_exhaustive()
    }
}

impl Memory {
    /// Create a zero-filled memory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; ADDRESS_SPACE]),
        }
    }

    /// Read the byte at `address`.
    #[must_use]
    pub fn read(&self, address: u16) -> u8 {
        self.bytes[usize::from(address)]
    }

    /// Write `value` at `address`.
    pub fn write(&mut self, address: u16, value: u8) {
        self.bytes[usize::from(address)] = value;
    }

    /// Copy `data` into memory starting at `offset`.
    ///
    /// Bytes that would land past $FFFF are dropped. Returns how many bytes
    /// were copied.
    pub fn load_bytes(&mut self, offset: u16, data: &[u8]) -> usize {
        let start = usize::from(offset);
        let count = data.len().min(ADDRESS_SPACE - start);
        self.bytes[start..start + count].copy_from_slice(&data[..count]);
        count
    }

    /// Load a raw program image from `path` starting at `offset`.
    ///
    /// Same clamping as [`Memory::load_bytes`]. Returns how many bytes were
    /// copied.
    pub fn load(&mut self, path: impl AsRef<Path>, offset: u16) -> Result<usize, MemoryError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| MemoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.load_bytes(offset, &data))
    }

    /// The whole address space as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..]
    }
}

impl Bus for Memory {
    fn read(&mut self, address: u16) -> u8 {
        Memory::read(self, address)
    }

    fn write(&mut self, address: u16, value: u8) {
        Memory::write(self, address, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_address_round_trips() {
        let mut memory = Memory::new();
        for address in 0..=u16::MAX {
            memory.write(address, (address as u8) ^ (address >> 8) as u8);
        }
        for address in 0..=u16::MAX {
            assert_eq!(memory.read(address), (address as u8) ^ (address >> 8) as u8);
        }
    }

    #[test]
    fn load_bytes_fills_range_only() {
        let mut memory = Memory::new();
        let copied = memory.load_bytes(0x8000, &[1, 2, 3]);
        assert_eq!(copied, 3);
        assert_eq!(memory.read(0x7FFF), 0);
        assert_eq!(memory.read(0x8000), 1);
        assert_eq!(memory.read(0x8002), 3);
        assert_eq!(memory.read(0x8003), 0);
    }

    #[test]
    fn load_bytes_clamps_at_top_of_memory() {
        let mut memory = Memory::new();
        let copied = memory.load_bytes(0xFFFE, &[0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(copied, 2);
        assert_eq!(memory.read(0xFFFE), 0xAA);
        assert_eq!(memory.read(0xFFFF), 0xBB);
        // Nothing wraps around to page zero.
        assert_eq!(memory.read(0x0000), 0);
        assert_eq!(memory.read(0x0001), 0);
    }

    #[test]
    fn bus_impl_matches_inherent_access() {
        let mut memory = Memory::new();
        Bus::write(&mut memory, 0x1234, 0x56);
        assert_eq!(Bus::read(&mut memory, 0x1234), 0x56);
        assert_eq!(memory.as_slice()[0x1234], 0x56);
    }
}
