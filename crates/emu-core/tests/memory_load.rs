//! Loading program images from disk.

use std::fs;
use std::path::PathBuf;

use emu_core::{Memory, MemoryError};
use proptest::prelude::*;

fn temp_image(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("emu-core-{}-{name}.bin", std::process::id()));
    fs::write(&path, bytes).expect("write temp image");
    path
}

#[test]
fn load_copies_file_at_offset() {
    let path = temp_image("offset", &[0xA9, 0x42, 0x00]);
    let mut memory = Memory::new();
    let copied = memory.load(&path, 0x0600).expect("load image");
    fs::remove_file(&path).ok();

    assert_eq!(copied, 3);
    assert_eq!(memory.read(0x05FF), 0x00);
    assert_eq!(memory.read(0x0600), 0xA9);
    assert_eq!(memory.read(0x0601), 0x42);
    assert_eq!(memory.read(0x0602), 0x00);
}

#[test]
fn load_clamps_oversized_image() {
    let image = vec![0xEA; 0x200];
    let path = temp_image("clamp", &image);
    let mut memory = Memory::new();
    let copied = memory.load(&path, 0xFF80).expect("load image");
    fs::remove_file(&path).ok();

    assert_eq!(copied, 0x80);
    assert_eq!(memory.read(0xFFFF), 0xEA);
    assert_eq!(memory.read(0x0000), 0x00);
}

#[test]
fn load_reports_missing_file() {
    let path = std::env::temp_dir().join("emu-core-does-not-exist.bin");
    let mut memory = Memory::new();
    let err = memory.load(&path, 0).expect_err("missing file must fail");
    let MemoryError::Io { path: reported, .. } = &err;
    assert_eq!(reported, &path);
    assert!(err.to_string().contains("emu-core-does-not-exist.bin"));
}

proptest! {
    #[test]
    fn load_bytes_never_touches_outside_range(offset in any::<u16>(), len in 0usize..512) {
        let mut memory = Memory::new();
        let data = vec![0xFF; len];
        let copied = memory.load_bytes(offset, &data);
        let end = usize::from(offset) + copied;

        prop_assert_eq!(copied, len.min(0x1_0000 - usize::from(offset)));
        for (address, &byte) in memory.as_slice().iter().enumerate() {
            let inside = address >= usize::from(offset) && address < end;
            prop_assert_eq!(byte == 0xFF, inside);
        }
    }
}
