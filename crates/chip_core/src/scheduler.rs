use crate::{
    cpu::Cpu,
    errors::ChipError,
    globals::TIMER_FREQUENCY
};

/// What happened during a single `Scheduler::advance` call
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tick {
    pub instructions: u32,
    pub timer_ticks: u32,
    /// any executed instruction changed the framebuffer
    pub redraw: bool
}

/// Runs the cpu and the 60Hz timers off the same wall clock.
///
/// Both clocks are phase accumulators: elapsed time is added and whole periods
/// are subtracted, so the fractional remainder carries over to the next call.
pub struct Scheduler {
    cpu_period: f64,
    timer_period: f64,
    cpu_accum: f64,
    timer_accum: f64
}
impl Scheduler {
    pub fn new(cpu_frequency: f64) -> Result<Self, ChipError> {
        if !cpu_frequency.is_finite() || cpu_frequency <= 0.0 {
            return Err(ChipError::InvalidFrequency);
        }
        Ok(Scheduler {
            cpu_period: 1.0 / cpu_frequency,
            timer_period: 1.0 / TIMER_FREQUENCY,
            cpu_accum: 0.0,
            timer_accum: 0.0
        })
    }
    pub fn cpu_frequency(&self) -> f64 {
        1.0 / self.cpu_period
    }
    /// Feeds `elapsed` seconds of wall time into both clocks.
    /// Stops at the first failing instruction and returns its error.
    pub fn advance(&mut self, cpu: &mut Cpu, elapsed: f64) -> Result<Tick, ChipError> {
        let mut tick = Tick::default();

        self.timer_accum += elapsed;
        while self.timer_accum >= self.timer_period {
            self.timer_accum -= self.timer_period;
            cpu.tick_timers();
            tick.timer_ticks += 1;
        }

        self.cpu_accum += elapsed;
        while self.cpu_accum >= self.cpu_period {
            self.cpu_accum -= self.cpu_period;
            cpu.step()?;
            tick.instructions += 1;
            tick.redraw |= cpu.redraw();
        }
        Ok(tick)
    }
}
