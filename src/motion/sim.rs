//!
//! Host-side stand-ins for motors and time, used to run the drawer without hardware
//!

use std::cell::Cell;
use std::rc::Rc;

use super::{Clock, Direction, StepPrimitive};

///
/// A deterministic clock. Every reading advances time by a fixed tick before returning it, so
/// a busy-wait loop makes progress without any real time passing. Clones share the same time.
///
#[derive(Debug, Clone)]
pub struct SimulatedClock {
    now: Rc<Cell<u64>>,
    tick: u64,
}

impl SimulatedClock {
    ///
    /// # Parameters:
    /// - `tick`: Microseconds added on every reading, must be non-zero for loops to progress
    ///
    pub fn new(tick: u64) -> SimulatedClock {
        SimulatedClock { now: Rc::new(Cell::new(0)), tick: tick.max(1) }
    }

    /// The most recent reading, without advancing time.
    pub fn current(&self) -> u64 {
        self.now.get()
    }

    /// Moves time forward without a reading.
    pub fn advance(&self, micros: u64) {
        self.now.set(self.now.get() + micros);
    }
}

impl Clock for SimulatedClock {
    fn now_micros(&self) -> u64 {
        let next = self.now.get() + self.tick;
        self.now.set(next);
        next
    }
}

/// One recorded step pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub direction: Direction,
    pub at: Option<u64>,
}

///
/// A motor which records every pulse instead of driving pins.
///
/// # Fields:
/// - `pulses`: Every pulse issued, in order
/// - `clock`: An optional clock used to timestamp pulses
/// - `pulse_width`: Microseconds each pulse holds the simulated clock for
/// - `energised`: Whether the motor pins are currently driven
///
#[derive(Debug, Default)]
pub struct RecordingStepper {
    pulses: Vec<Pulse>,
    clock: Option<SimulatedClock>,
    pulse_width: u64,
    energised: bool,
}

impl RecordingStepper {
    pub fn new() -> RecordingStepper {
        RecordingStepper::default()
    }

    /// Creates a stepper which timestamps each pulse with the shared clock's current time.
    pub fn with_clock(clock: SimulatedClock) -> RecordingStepper {
        RecordingStepper { clock: Some(clock), ..RecordingStepper::default() }
    }

    /// Makes every pulse hold the shared clock for `micros`, like a real driver's pulse width.
    pub fn with_pulse_width(mut self, micros: u64) -> RecordingStepper {
        self.pulse_width = micros;
        self
    }

    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    pub fn step_count(&self) -> usize {
        self.pulses.len()
    }

    ///
    /// # Returns:
    /// - Payout pulses minus retract pulses
    ///
    pub fn net_steps(&self) -> i64 {
        self.pulses.iter().map(|pulse| match pulse.direction {
            Direction::Payout => 1,
            Direction::Retract => -1,
        }).sum()
    }

    pub fn is_energised(&self) -> bool {
        self.energised
    }
}

impl StepPrimitive for RecordingStepper {
    fn step(&mut self, direction: Direction) {
        self.energised = true;
        let at = self.clock.as_ref().map(|clock| clock.current());
        self.pulses.push(Pulse { direction, at });

        if let Some(clock) = &self.clock {
            clock.advance(self.pulse_width);
        }
    }

    fn low(&mut self) {
        self.energised = false;
    }
}
