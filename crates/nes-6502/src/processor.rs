//! The execution driver.
//!
//! Each `tick()` performs exactly one bus access. With no instruction in
//! flight the tick fetches and decodes an opcode; otherwise it advances the
//! in-flight instruction by one cycle.

use emu_core::{Bus, Cpu, Observable, Value};
use log::{debug, trace, warn};

use crate::flags::{C, D, I, N, V, Z};
use crate::instruction::{IRQ_VECTOR, Instruction, NMI_VECTOR};
use crate::{Registers, Status, UnsupportedOpcode, opcodes};

/// The NES 6502.
///
/// The processor borrows its bus for the duration of each `tick`/`step`
/// call and holds no locks. To drive it from one thread and inspect it from
/// another, put the processor and its memory behind a single `Mutex`.
#[derive(Debug, Clone)]
pub struct Processor {
    regs: Registers,

    /// Instruction in flight, if any.
    current: Option<Instruction>,

    /// Most recently fetched opcode.
    opcode: u8,

    /// Cycles since the last reset.
    cycles: u64,

    /// NMI latched, taken at the next instruction boundary.
    nmi_pending: bool,

    /// IRQ requested while I was clear.
    irq_pending: bool,

    /// Unsupported opcode prefetched by a branch, reported on the next tick.
    deferred: Option<UnsupportedOpcode>,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor {
    /// Create a processor with post-reset register values and nothing in
    /// flight.
    ///
    /// The reset sequence is not run; call [`Processor::reset`] to start
    /// from the vector at $FFFC, or set the program counter directly.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registers(Registers::new())
    }

    /// Create a processor from an explicit register state.
    #[must_use]
    pub fn with_registers(regs: Registers) -> Self {
        Self {
            regs,
            current: None,
            opcode: 0,
            cycles: 0,
            nmi_pending: false,
            irq_pending: false,
            deferred: None,
        }
    }

    /// Cycles executed since the last reset.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Accumulator (A).
    #[must_use]
    pub fn accumulator(&self) -> u8 {
        self.regs.a
    }

    /// X index register.
    #[must_use]
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Y index register.
    #[must_use]
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Stack pointer (S), an offset into page $01.
    #[must_use]
    pub fn stack_pointer(&self) -> u8 {
        self.regs.s
    }

    /// Live status flags. B and the unused bit read as clear.
    #[must_use]
    pub fn processor_status(&self) -> Status {
        self.regs.p
    }

    /// Program counter (PC).
    #[must_use]
    pub fn program_counter(&self) -> u16 {
        self.regs.pc
    }

    /// Move the program counter. Takes effect at the next opcode fetch.
    pub fn set_program_counter(&mut self, pc: u16) {
        self.regs.pc = pc;
    }

    /// Most recently fetched opcode.
    #[must_use]
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// The instruction in flight, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Instruction> {
        self.current.as_ref()
    }

    /// Execute one cycle.
    ///
    /// Returns `Ok(true)` if an instruction finished on this cycle. An
    /// unsupported opcode is normally reported on the cycle that fetched
    /// it. When a branch fetched it on its final cycle, that tick still
    /// returns `Ok(true)` and the error comes from the following tick,
    /// which spends no cycle and touches no bus. Either way nothing is left
    /// in flight, so the next tick fetches the following byte.
    pub fn tick<B: Bus>(&mut self, bus: &mut B) -> Result<bool, UnsupportedOpcode> {
        if let Some(err) = self.deferred.take() {
            return Err(err);
        }
        self.cycles += 1;

        let Some(instruction) = self.current.as_mut() else {
            self.fetch(bus)?;
            return Ok(false);
        };

        if !instruction.advance(&mut self.regs, bus) {
            return Ok(false);
        }

        let followup = instruction.take_followup();
        self.current = None;
        if let Some(next) = followup {
            // A branch fetched this opcode on its last cycle and already
            // stepped PC past it.
            if let Err(err) = self.install(next, self.regs.pc.wrapping_sub(1)) {
                self.deferred = Some(err);
            }
        }
        Ok(true)
    }

    /// Tick until the current instruction finishes.
    ///
    /// Returns `Ok(false)` without finishing if the processor is jammed;
    /// each call then costs one cycle.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<bool, UnsupportedOpcode> {
        loop {
            if self.tick(bus)? {
                return Ok(true);
            }
            if self.is_halted() {
                return Ok(false);
            }
        }
    }

    /// Start the reset sequence.
    ///
    /// Clears the cycle counter and anything in flight. The next seven
    /// ticks run the sequence and load PC from $FFFC/$FFFD.
    pub fn reset(&mut self) {
        debug!("6502 reset from PC=${:04X}", self.regs.pc);
        self.cycles = 0;
        self.nmi_pending = false;
        self.irq_pending = false;
        self.deferred = None;
        self.current = Some(Instruction::reset());
    }

    /// True while a JAM opcode has the processor locked up.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.current.as_ref().is_some_and(Instruction::is_jam)
    }

    /// Request an IRQ. Refused while I is set.
    pub fn interrupt(&mut self) -> bool {
        if self.regs.p.flag(I) {
            return false;
        }
        self.irq_pending = true;
        true
    }

    /// Latch an NMI.
    pub fn nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Snapshot of all registers.
    #[must_use]
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Instruction-boundary work: take a pending interrupt or fetch and
    /// decode the next opcode.
    fn fetch<B: Bus>(&mut self, bus: &mut B) -> Result<(), UnsupportedOpcode> {
        if self.nmi_pending || (self.irq_pending && !self.regs.p.flag(I)) {
            let vector = if self.nmi_pending { NMI_VECTOR } else { IRQ_VECTOR };
            debug!("6502 interrupt via ${vector:04X} at PC=${:04X}", self.regs.pc);
            if vector == NMI_VECTOR {
                self.nmi_pending = false;
            } else {
                self.irq_pending = false;
            }
            // The opcode is read and thrown away; PC does not move.
            let _ = bus.read(self.regs.pc);
            self.current = Some(Instruction::interrupt(vector));
            return Ok(());
        }

        let address = self.regs.next_pc();
        let opcode = bus.read(address);
        self.install(opcodes::decode(opcode), address)
    }

    fn install(&mut self, instruction: Instruction, address: u16) -> Result<(), UnsupportedOpcode> {
        let opcode = instruction.opcode().unwrap_or_default();
        self.opcode = opcode;
        trace!(
            "{address:04X}  {opcode:02X}  A:{:02X} X:{:02X} Y:{:02X} P:{} SP:{:02X} CYC:{}",
            self.regs.a, self.regs.x, self.regs.y, self.regs.p, self.regs.s, self.cycles
        );

        if instruction.is_unsupported() {
            warn!("unsupported opcode ${opcode:02X} at ${address:04X}");
            return Err(UnsupportedOpcode {
                program_counter: address,
                opcode,
            });
        }
        if instruction.is_jam() {
            warn!("JAM ${opcode:02X} at ${address:04X}, processor halted");
        }
        self.current = Some(instruction);
        Ok(())
    }
}

impl Cpu for Processor {
    type Registers = Registers;
    type Error = UnsupportedOpcode;

    fn tick<B: Bus>(&mut self, bus: &mut B) -> Result<bool, Self::Error> {
        Processor::tick(self, bus)
    }

    fn step<B: Bus>(&mut self, bus: &mut B) -> Result<bool, Self::Error> {
        Processor::step(self, bus)
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }

    fn cycles(&self) -> u64 {
        self.cycles
    }

    fn registers(&self) -> Registers {
        self.regs
    }

    fn is_halted(&self) -> bool {
        Processor::is_halted(self)
    }

    fn interrupt(&mut self) -> bool {
        Processor::interrupt(self)
    }

    fn nmi(&mut self) {
        Processor::nmi(self);
    }

    fn reset(&mut self) {
        Processor::reset(self);
    }
}

impl Observable for Processor {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "pc" => Some(self.regs.pc.into()),
            "a" => Some(self.regs.a.into()),
            "x" => Some(self.regs.x.into()),
            "y" => Some(self.regs.y.into()),
            "s" => Some(self.regs.s.into()),
            "p" => Some(self.regs.p.bits().into()),
            "flags" => Some(self.regs.p.to_string().into()),
            "flags.c" => Some(self.regs.p.flag(C).into()),
            "flags.z" => Some(self.regs.p.flag(Z).into()),
            "flags.i" => Some(self.regs.p.flag(I).into()),
            "flags.d" => Some(self.regs.p.flag(D).into()),
            "flags.v" => Some(self.regs.p.flag(V).into()),
            "flags.n" => Some(self.regs.p.flag(N).into()),
            "opcode" => Some(self.opcode.into()),
            "cycle" => Some(self.cycles.into()),
            "halted" => Some(self.is_halted().into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "pc", "a", "x", "y", "s", "p", "flags", "flags.c", "flags.z", "flags.i", "flags.d",
            "flags.v", "flags.n", "opcode", "cycle", "halted",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emu_core::Memory;

    fn processor_at(memory: &mut Memory, program: &[u8]) -> Processor {
        memory.load_bytes(0x0200, program);
        let mut cpu = Processor::new();
        cpu.set_program_counter(0x0200);
        cpu
    }

    #[test]
    fn test_lda_immediate() {
        let mut memory = Memory::new();
        let mut cpu = processor_at(&mut memory, &[0xA9, 0x42]);

        assert_eq!(cpu.step(&mut memory), Ok(true));
        assert_eq!(cpu.accumulator(), 0x42);
        assert_eq!(cpu.program_counter(), 0x0202);
        assert_eq!(cpu.cycles(), 2);
    }

    #[test]
    fn test_sta_zeropage() {
        let mut memory = Memory::new();
        let mut cpu = processor_at(&mut memory, &[0xA9, 0x99, 0x85, 0x10]);

        cpu.step(&mut memory).expect("LDA");
        cpu.step(&mut memory).expect("STA");
        assert_eq!(memory.read(0x0010), 0x99);
        assert_eq!(cpu.cycles(), 5);
    }

    #[test]
    fn test_jmp_absolute() {
        let mut memory = Memory::new();
        let mut cpu = processor_at(&mut memory, &[0x4C, 0x00, 0x80]);

        cpu.step(&mut memory).expect("JMP");
        assert_eq!(cpu.program_counter(), 0x8000);
        assert_eq!(cpu.cycles(), 3);
    }

    #[test]
    fn fetch_only_reports_no_boundary() {
        let mut memory = Memory::new();
        let mut cpu = processor_at(&mut memory, &[0xEA]);

        assert_eq!(cpu.tick(&mut memory), Ok(false));
        assert_eq!(cpu.tick(&mut memory), Ok(true));
        assert!(cpu.current().is_none());
    }

    #[test]
    fn unsupported_opcode_is_reported_at_fetch() {
        let mut memory = Memory::new();
        let mut cpu = processor_at(&mut memory, &[0x8B, 0xEA]);

        let err = cpu.step(&mut memory).expect_err("ANE is unsupported");
        assert_eq!(
            err,
            UnsupportedOpcode {
                program_counter: 0x0200,
                opcode: 0x8B,
            }
        );
        assert_eq!(
            err.to_string(),
            "encountered an unsupported $8B opcode at $0200"
        );
        assert_eq!(cpu.program_counter(), 0x0201);
        assert!(cpu.current().is_none());

        assert_eq!(cpu.step(&mut memory), Ok(true));
        assert_eq!(cpu.program_counter(), 0x0202);
    }

    #[test]
    fn irq_refused_while_disabled() {
        let mut cpu = Processor::new();
        assert!(cpu.processor_status().flag(I));
        assert!(!cpu.interrupt());
    }

    fn run_until_halted<C: Cpu, B: Bus>(cpu: &mut C, bus: &mut B) -> u64 {
        let mut completed = 0;
        while !cpu.is_halted() {
            if let Ok(true) = cpu.step(bus) {
                completed += 1;
            }
        }
        completed
    }

    #[test]
    fn drives_through_cpu_trait() {
        let mut memory = Memory::new();
        memory.write(0xFFFC, 0x00);
        memory.write(0xFFFD, 0x02);
        // INX; INX; JAM
        let mut cpu = processor_at(&mut memory, &[0xE8, 0xE8, 0x02]);
        Cpu::reset(&mut cpu);

        // Reset sequence plus two INX.
        assert_eq!(run_until_halted(&mut cpu, &mut memory), 3);
        assert_eq!(Cpu::registers(&cpu).x, 2);
        assert_eq!(Cpu::pc(&cpu), 0x0203);
        assert_eq!(Cpu::cycles(&cpu), 7 + 2 + 2 + 1);
    }

    #[test]
    fn query_paths_all_resolve() {
        let cpu = Processor::new();
        for path in cpu.query_paths() {
            assert!(cpu.query(path).is_some(), "path {path} did not resolve");
        }
        assert_eq!(cpu.query("s"), Some(Value::U8(0xFD)));
        assert_eq!(cpu.query("flags.i"), Some(Value::Bool(true)));
        assert_eq!(cpu.query("nope"), None);
    }
}
