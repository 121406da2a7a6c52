//! The machine: a flat memory and the processor that runs on it.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use emu_core::{Memory, MemoryError, Observable, Value};
use log::{debug, info, warn};
use nes_6502::{Processor, UnsupportedOpcode};

/// Memory plus processor. Not synchronised; see [`run_continuous`] for
/// sharing across threads.
#[derive(Debug, Clone, Default)]
pub struct Machine {
    pub processor: Processor,
    pub memory: Memory,
}

/// Outcome of a stepping run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions that completed.
    pub instructions: u64,
    /// Unsupported opcodes logged and skipped.
    pub unsupported: u64,
    /// The processor hit a JAM and stopped.
    pub halted: bool,
}

impl Machine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a raw program image. Returns how many bytes landed in memory.
    pub fn load(&mut self, path: &Path, load_address: u16) -> Result<usize, MemoryError> {
        let copied = self.memory.load(path, load_address)?;
        info!(
            "loaded {copied} bytes from {} at ${load_address:04X}",
            path.display()
        );
        Ok(copied)
    }

    /// Start execution at `start`, or through the reset vector when none
    /// is given.
    pub fn boot(&mut self, start: Option<u16>) -> Result<(), UnsupportedOpcode> {
        match start {
            Some(pc) => {
                self.processor.set_program_counter(pc);
                info!("starting at ${pc:04X}");
            }
            None => {
                self.processor.reset();
                self.processor.step(&mut self.memory)?;
                info!(
                    "reset vector -> ${:04X}",
                    self.processor.program_counter()
                );
            }
        }
        Ok(())
    }

    /// Execute up to `count` instructions.
    ///
    /// Unsupported opcodes are logged and skipped; a JAM ends the run.
    pub fn run_steps(&mut self, count: u64) -> RunSummary {
        let mut summary = RunSummary::default();
        for _ in 0..count {
            match self.processor.step(&mut self.memory) {
                Ok(true) => summary.instructions += 1,
                Ok(false) => {
                    warn!(
                        "processor jammed at ${:04X}",
                        self.processor.program_counter()
                    );
                    summary.halted = true;
                    break;
                }
                Err(err) => {
                    warn!("{err}, skipping");
                    summary.unsupported += 1;
                }
            }
        }
        summary
    }

    /// Look up an observable processor value such as `pc` or `flags.c`.
    #[must_use]
    pub fn query(&self, path: &str) -> Option<Value> {
        self.processor.query(path)
    }

    #[must_use]
    pub fn query_paths(&self) -> &'static [&'static str] {
        self.processor.query_paths()
    }

    /// One-line register dump.
    #[must_use]
    pub fn report(&self) -> String {
        let cpu = &self.processor;
        format!(
            "PC=${:04X} A=${:02X} X=${:02X} Y=${:02X} S=${:02X} P={} CYC={}",
            cpu.program_counter(),
            cpu.accumulator(),
            cpu.x(),
            cpu.y(),
            cpu.stack_pointer(),
            cpu.processor_status(),
            cpu.cycles()
        )
    }
}

/// Parse an address such as `8000`, `$8000` or `0x8000`.
pub fn parse_address(text: &str) -> Result<u16, String> {
    let digits = text
        .strip_prefix('$')
        .or_else(|| text.strip_prefix("0x"))
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u16::from_str_radix(digits, 16).map_err(|err| format!("invalid address {text:?}: {err}"))
}

/// Run the machine on a worker thread for `duration`, ticking in batches
/// of `batch` cycles, while this thread samples and logs the registers.
///
/// The processor and memory sit behind one `Mutex`. The worker stops early
/// if the processor jams. Returns the machine once the worker has joined.
pub fn run_continuous(machine: Machine, duration: Duration, batch: u32) -> Machine {
    let shared = Arc::new(Mutex::new(machine));
    let stop = Arc::new(AtomicBool::new(false));

    let worker = {
        let shared = Arc::clone(&shared);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                let mut guard = shared.lock().unwrap_or_else(PoisonError::into_inner);
                let Machine { processor, memory } = &mut *guard;
                for _ in 0..batch {
                    if let Err(err) = processor.tick(memory) {
                        warn!("{err}, skipping");
                    }
                    if processor.is_halted() {
                        warn!("processor jammed at ${:04X}", processor.program_counter());
                        return;
                    }
                }
                drop(guard);
                thread::yield_now();
            }
        })
    };

    let started = Instant::now();
    let sample_every = (duration / 10).max(Duration::from_millis(1));
    while started.elapsed() < duration && !worker.is_finished() {
        thread::sleep(sample_every.min(duration.saturating_sub(started.elapsed())));
        let guard = shared.lock().unwrap_or_else(PoisonError::into_inner);
        debug!("{}", guard.report());
    }

    stop.store(true, Ordering::Relaxed);
    if worker.join().is_err() {
        warn!("worker thread panicked");
    }

    match Arc::try_unwrap(shared) {
        Ok(mutex) => mutex.into_inner().unwrap_or_else(PoisonError::into_inner),
        Err(shared) => shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone(),
    }
}
