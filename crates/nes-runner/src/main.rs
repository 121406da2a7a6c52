//! Headless NES 6502 runner.
//!
//! Usage: nes-runner <PROGRAM> [--load-address ADDR] [--start ADDR]
//!        [--steps N] [--continuous-ms MS] [--batch N] [--query PATH]...
//!        [--log-level LEVEL]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{error, info, warn};
use nes_runner::{LogLevel, Machine, init_logger, parse_address, run_continuous};

#[derive(Parser, Debug)]
#[command(name = "nes-runner")]
#[command(about = "Run a raw 6502 program image on the NES CPU core", long_about = None)]
struct Args {
    /// Raw program image
    program: PathBuf,

    /// Address the image is loaded at (hex)
    #[arg(long, default_value = "0000", value_parser = parse_address)]
    load_address: u16,

    /// Start here instead of running the reset sequence (hex)
    #[arg(long, value_parser = parse_address)]
    start: Option<u16>,

    /// Number of instructions to execute
    #[arg(long, default_value_t = 1_000)]
    steps: u64,

    /// Run continuously on a worker thread for this many milliseconds
    #[arg(long)]
    continuous_ms: Option<u64>,

    /// Cycles per lock acquisition in continuous mode
    #[arg(long, default_value_t = 1_024)]
    batch: u32,

    /// Print an observable value after the run, e.g. `pc` or `flags.c`
    #[arg(long = "query", value_name = "PATH")]
    queries: Vec<String>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level);

    let mut machine = Machine::new();
    if let Err(err) = machine.load(&args.program, args.load_address) {
        error!("{err}");
        return ExitCode::FAILURE;
    }
    if let Err(err) = machine.boot(args.start) {
        error!("{err}");
        return ExitCode::FAILURE;
    }

    if let Some(ms) = args.continuous_ms {
        machine = run_continuous(machine, Duration::from_millis(ms), args.batch);
    } else {
        let summary = machine.run_steps(args.steps);
        info!(
            "{} instructions, {} unsupported opcodes skipped{}",
            summary.instructions,
            summary.unsupported,
            if summary.halted { ", halted" } else { "" }
        );
    }

    println!("{}", machine.report());
    for path in &args.queries {
        match machine.query(path) {
            Some(value) => println!("{path} = {value}"),
            None => warn!(
                "unknown query path {path:?}; known paths: {}",
                machine.query_paths().join(", ")
            ),
        }
    }
    ExitCode::SUCCESS
}
