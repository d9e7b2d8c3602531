//!
//! Stepper motor seams and the dual-axis step scheduler
//!

pub mod error;
pub mod scheduler;
pub mod sim;

use std::time::Instant;

use serde::{Deserialize, Serialize};

///
/// The rotational sense of a spool.
///
/// - `Payout`: Unwinds the spool, lengthening the cord
/// - `Retract`: Winds the spool, shortening the cord
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Payout,
    Retract,
}

impl Direction {
    ///
    /// # Returns:
    /// - `Payout` for a non-negative cord delta, `Retract` otherwise
    ///
    pub fn from_delta(delta: f64) -> Direction {
        if delta >= 0. { Direction::Payout } else { Direction::Retract }
    }
}

/// `true` is payout, `false` is retract.
impl From<bool> for Direction {
    fn from(payout: bool) -> Self {
        if payout { Direction::Payout } else { Direction::Retract }
    }
}

impl From<Direction> for bool {
    fn from(direction: Direction) -> Self {
        direction == Direction::Payout
    }
}

///
/// A single motor's pulse output. Implementations own the motor's pins; pulse width timing
/// happens inside `step` and is not the scheduler's concern.
///
/// # Functions:
/// - `step`: Sets the direction pins, pulses the step line once and returns
/// - `low`: Drives every control pin of the motor low, de-energising it
///
pub trait StepPrimitive {
    fn step(&mut self, direction: Direction);
    fn low(&mut self);
}

impl<S: StepPrimitive + ?Sized> StepPrimitive for &mut S {
    fn step(&mut self, direction: Direction) {
        (**self).step(direction)
    }

    fn low(&mut self) {
        (**self).low()
    }
}

///
/// A free-running monotonic time source, read in microseconds. Only differences between
/// readings are meaningful.
///
pub trait Clock {
    fn now_micros(&self) -> u64;
}

impl<F> Clock for F
where
    F: Fn() -> u64,
{
    fn now_micros(&self) -> u64 {
        self()
    }
}

///
/// A monotonic clock backed by the operating system, counting from its creation.
///
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    created_at: Instant,
}

impl MonotonicClock {
    pub fn new() -> MonotonicClock {
        MonotonicClock::default()
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        MonotonicClock { created_at: Instant::now() }
    }
}

impl Clock for MonotonicClock {
    fn now_micros(&self) -> u64 {
        self.created_at.elapsed().as_micros() as u64
    }
}
