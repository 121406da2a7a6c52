//! Integration tests using Tom Harte's `SingleStepTests` for the NES 6502.
//!
//! Runs 256 opcode files x 10,000 tests comparing register state, memory
//! and the exact bus activity of every cycle.
//!
//! Test data lives in `test-data/65x02/nes6502/v1/XX.json`.

use std::fs;
use std::path::Path;

use emu_core::{Bus, Memory};
use nes_6502::{Processor, Registers, Status, decode};
use serde::Deserialize;

/// Flat RAM that records every access.
struct TestBus {
    memory: Memory,
    accesses: Vec<(u16, u8, &'static str)>,
}

impl TestBus {
    fn new() -> Self {
        Self {
            memory: Memory::new(),
            accesses: Vec::new(),
        }
    }

    fn load_ram(&mut self, entries: &[(u16, u8)]) {
        for &(addr, value) in entries {
            self.memory.write(addr, value);
        }
    }
}

impl Bus for TestBus {
    fn read(&mut self, address: u16) -> u8 {
        let value = self.memory.read(address);
        self.accesses.push((address, value, "read"));
        value
    }

    fn write(&mut self, address: u16, value: u8) {
        self.memory.write(address, value);
        self.accesses.push((address, value, "write"));
    }
}

/// JSON test case format.
#[derive(Deserialize)]
struct TestCase {
    name: String,
    initial: CpuState,
    #[serde(rename = "final")]
    final_state: CpuState,
    cycles: Vec<(u16, u8, String)>,
}

/// JSON CPU state format.
#[derive(Deserialize)]
struct CpuState {
    pc: u16,
    s: u8,
    a: u8,
    x: u8,
    y: u8,
    p: u8,
    ram: Vec<(u16, u8)>,
}

fn setup(bus: &mut TestBus, state: &CpuState) -> Processor {
    bus.load_ram(&state.ram);
    Processor::with_registers(Registers {
        a: state.a,
        x: state.x,
        y: state.y,
        s: state.s,
        pc: state.pc,
        p: Status::from_byte(state.p),
    })
}

/// Compare the CPU/bus state against expected, returning a list of mismatches.
fn compare(cpu: &Processor, bus: &TestBus, test: &TestCase) -> Vec<String> {
    let expected = &test.final_state;
    let mut errors = Vec::new();

    let regs = cpu.registers();
    for (name, got, want) in [
        ("S", regs.s, expected.s),
        ("A", regs.a, expected.a),
        ("X", regs.x, expected.x),
        ("Y", regs.y, expected.y),
    ] {
        if got != want {
            errors.push(format!("{name}: got ${got:02X}, want ${want:02X}"));
        }
    }
    if regs.pc != expected.pc {
        errors.push(format!("PC: got ${:04X}, want ${:04X}", regs.pc, expected.pc));
    }

    // B and the unused bit only exist on the stack.
    let actual_p = regs.p.bits();
    let expected_p = expected.p & 0xCF;
    if actual_p != expected_p {
        errors.push(format!(
            "P: got ${actual_p:02X} ({actual_p:08b}), want ${expected_p:02X} ({expected_p:08b})"
        ));
    }

    for &(addr, expected_val) in &expected.ram {
        let actual_val = bus.memory.read(addr);
        if actual_val != expected_val {
            errors.push(format!(
                "RAM[${addr:04X}]: got ${actual_val:02X}, want ${expected_val:02X}"
            ));
        }
    }

    let expected_cycles: Vec<(u16, u8, &str)> = test
        .cycles
        .iter()
        .map(|(addr, value, kind)| (*addr, *value, kind.as_str()))
        .collect();
    if bus.accesses != expected_cycles {
        errors.push(format!(
            "bus: got {:X?}, want {:X?}",
            bus.accesses, expected_cycles
        ));
    }

    errors
}

#[test]
#[ignore = "requires test-data/65x02 - run with --ignored"]
fn run_all() {
    let test_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("parent of crate dir")
        .parent()
        .expect("workspace root")
        .join("test-data/65x02/nes6502/v1");

    if !test_dir.exists() {
        eprintln!("Test data not found at {}", test_dir.display());
        eprintln!("Skipping SingleStepTests.");
        return;
    }

    let mut total_pass = 0u64;
    let mut total_fail = 0u64;
    let mut total_files = 0u32;

    for opcode in 0..=0xFF_u8 {
        // JAM never completes and the unstable opcodes are refused.
        let instruction = decode(opcode);
        if instruction.is_jam() || instruction.is_unsupported() {
            continue;
        }

        let filename = format!("{opcode:02x}.json");
        let path = test_dir.join(&filename);
        if !path.exists() {
            continue;
        }

        let data = fs::read_to_string(&path).unwrap_or_else(|e| {
            panic!("Failed to read {}: {e}", path.display());
        });
        let tests: Vec<TestCase> = serde_json::from_str(&data).unwrap_or_else(|e| {
            panic!("Failed to parse {}: {e}", path.display());
        });

        let mut file_pass = 0u32;
        let mut file_fail = 0u32;
        let mut first_failures: Vec<String> = Vec::new();

        for test in &tests {
            let mut bus = TestBus::new();
            let mut cpu = setup(&mut bus, &test.initial);

            for _ in 0..test.cycles.len() {
                // Only the opcode under test is fetched within the listed cycles.
                let _ = cpu.tick(&mut bus);
            }

            let errors = compare(&cpu, &bus, test);
            if errors.is_empty() {
                file_pass += 1;
            } else {
                file_fail += 1;
                if first_failures.len() < 5 {
                    first_failures.push(format!("  FAIL [{}]: {}", test.name, errors.join(", ")));
                }
            }
        }

        let status = if file_fail == 0 { "PASS" } else { "FAIL" };
        println!(
            "Opcode ${opcode:02X} ({filename}): {status} - {file_pass}/{} passed",
            file_pass + file_fail
        );
        for msg in &first_failures {
            println!("{msg}");
        }

        total_pass += u64::from(file_pass);
        total_fail += u64::from(file_fail);
        total_files += 1;
    }

    println!();
    println!("=== SingleStepTests Summary ===");
    println!(
        "Files: {total_files}, Total: {}, Pass: {total_pass}, Fail: {total_fail}",
        total_pass + total_fail
    );

    assert_eq!(total_fail, 0, "{total_fail} tests failed");
}
