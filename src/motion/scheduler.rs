//!
//! Time-driven, non-preemptive stepping of two independent axes
//!

use tracing::{debug, trace};

use super::{Clock, Direction, StepPrimitive};

///
/// The requested motion of one axis within a `turn`.
///
/// # Fields:
/// - `direction`: The direction every pulse of this axis is issued in
/// - `steps`: The exact number of pulses to issue
/// - `interval`: The minimum microseconds between two pulses of this axis
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMotion {
    pub direction: Direction,
    pub steps: u32,
    pub interval: u32,
}

impl AxisMotion {
    pub fn new(direction: Direction, steps: u32, interval: u32) -> AxisMotion {
        AxisMotion { direction, steps, interval }
    }
}

/// One of the two motors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Left,
    Right,
}

///
/// The progress of a single `turn` call.
///
/// - `Idle`: Nothing has been evaluated yet
/// - `Running`: Both axes still have steps remaining
/// - `OneDone`: The given axis has finished, the other continues
/// - `Done`: Both axes have issued all of their steps
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    Running,
    OneDone(Axis),
    Done,
}

impl TurnState {
    fn from_remaining(left: u32, right: u32) -> TurnState {
        match (left, right) {
            (0, 0) => TurnState::Done,
            (0, _) => TurnState::OneDone(Axis::Left),
            (_, 0) => TurnState::OneDone(Axis::Right),
            _ => TurnState::Running,
        }
    }
}

///
/// A summary of a completed `turn`. Times are clock readings in microseconds.
///
/// # Fields:
/// - `left_steps`/`right_steps`: The number of pulses issued per axis
/// - `started_at`: The clock reading when the turn began
/// - `left_finished_at`/`right_finished_at`: The reading at which each axis issued its last pulse,
///   or `started_at` for an axis with no steps
/// - `elapsed_micros`: Time between the start and the last reading of the turn
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub left_steps: u32,
    pub right_steps: u32,
    pub started_at: u64,
    pub left_finished_at: u64,
    pub right_finished_at: u64,
    pub elapsed_micros: u64,
}

/// Bookkeeping for one axis while a turn runs.
struct AxisRun {
    motion: AxisMotion,
    remaining: u32,
    next_eligible: u64,
    finished_at: u64,
}

impl AxisRun {
    fn new(motion: AxisMotion, now: u64) -> AxisRun {
        AxisRun { motion, remaining: motion.steps, next_eligible: now, finished_at: now }
    }

    /// Fires one pulse if the axis has work left and its interval has elapsed.
    fn service<S: StepPrimitive + ?Sized>(&mut self, now: u64, stepper: &mut S) {
        if self.remaining == 0 || now < self.next_eligible {
            return;
        }

        stepper.step(self.motion.direction);
        self.remaining -= 1;
        self.finished_at = now;
        // pulses of one axis are never closer together than its interval
        self.next_eligible = now.saturating_add(self.motion.interval as u64);
    }
}

///
/// Drives two stepper motors until both have issued exactly their requested number of steps.
/// Both axes are serviced from one busy-wait loop against the same clock, so they step over
/// the same stretch of time rather than one after the other. Each axis is paced purely by its
/// own interval; the axis with fewer steps idles once finished while the other continues.
/// Blocks until both axes are done. There is no cancellation.
///
/// # Parameters:
/// - `left`: The left motor's step output
/// - `right`: The right motor's step output
/// - `clock`: The time source the loop is paced against
/// - `left_motion`: Direction, step count and interval of the left axis
/// - `right_motion`: Direction, step count and interval of the right axis
///
/// # Returns:
/// - A `TurnReport` describing the completed motion
///
pub fn turn<L, R, C>(left: &mut L, right: &mut R, clock: &C, left_motion: AxisMotion, right_motion: AxisMotion) -> TurnReport
where
    L: StepPrimitive + ?Sized,
    R: StepPrimitive + ?Sized,
    C: Clock + ?Sized,
{
    let started_at = clock.now_micros();
    let mut left_run = AxisRun::new(left_motion, started_at);
    let mut right_run = AxisRun::new(right_motion, started_at);
    let mut last_reading = started_at;

    debug!(?left_motion, ?right_motion, "starting turn");

    let mut state = TurnState::Idle;
    loop {
        let next = TurnState::from_remaining(left_run.remaining, right_run.remaining);
        if next != state {
            trace!(from = ?state, to = ?next, at = last_reading, "turn state change");
            state = next;
        }
        if state == TurnState::Done {
            break;
        }

        let now = clock.now_micros();
        last_reading = now;
        left_run.service(now, left);
        right_run.service(now, right);
    }

    let report = TurnReport {
        left_steps: left_motion.steps,
        right_steps: right_motion.steps,
        started_at,
        left_finished_at: left_run.finished_at,
        right_finished_at: right_run.finished_at,
        elapsed_micros: last_reading - started_at,
    };
    debug!(elapsed_micros = report.elapsed_micros, "turn finished");

    report
}
