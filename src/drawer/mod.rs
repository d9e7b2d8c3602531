//!
//! The two-motor drawer: plane coordinates in, coordinated motor steps out
//!

pub mod state;

use tracing::{debug, info, warn};

use crate::hardware::MachineGeometry;
use crate::hardware::math::{delta_to_steps, point_to_cords};
use crate::motion::error::MotionError;
use crate::motion::scheduler::{self, AxisMotion, TurnReport};
use crate::motion::{Clock, Direction, StepPrimitive};
use crate::preview::cords::Cords;

use state::{DrawerState, MovePlan};

///
/// Drives a pen hung from two cords. The drawer owns both motors and the clock; every call is
/// blocking and runs to completion before returning.
///
/// # Fields:
/// - `left`/`right`: The motors winding the left and right cords
/// - `clock`: The time source the step scheduler is paced against
/// - `geometry`: The fixed machine layout
/// - `state`: The exact pen position and cord lengths after the last completed move
/// - `cords`: The cord lengths as accumulated from whole steps actually issued
///
pub struct Drawer<L, R, C> {
    left: L,
    right: R,
    clock: C,
    geometry: MachineGeometry,
    state: DrawerState,
    cords: Cords,
}

impl<L: StepPrimitive, R: StepPrimitive, C: Clock> Drawer<L, R, C> {
    ///
    /// Creates a new drawer with the pen at the drawing origin.
    ///
    /// # Parameters:
    /// - `left`: The left motor
    /// - `right`: The right motor
    /// - `clock`: A monotonic time source
    /// - `geometry`: A validated machine layout
    ///
    /// # Returns:
    /// - A new `Drawer` instance
    ///
    pub fn new(left: L, right: R, clock: C, geometry: MachineGeometry) -> Drawer<L, R, C> {
        let state = DrawerState::origin(&geometry);
        let (left_cord, right_cord) = state.cord_lengths();
        let cords = Cords::new_by_length(left_cord, right_cord, geometry);

        Drawer { left, right, clock, geometry, state, cords }
    }

    /// Creates a drawer with the default 520 x 510mm layout, 16 steps/mm and 3000µs interval.
    pub fn with_defaults(left: L, right: R, clock: C) -> Drawer<L, R, C> {
        Drawer::new(left, right, clock, MachineGeometry::default())
    }

    ///
    /// Works out the cord lengths, directions and step counts needed to bring the pen from its
    /// current position to a target. Nothing moves.
    ///
    /// # Parameters:
    /// - `x`: The target x coordinate
    /// - `y`: The target y coordinate
    ///
    /// # Returns:
    /// - The move plan
    /// - A `MotionError` if either axis needs a step count that cannot be issued
    ///
    pub fn plan(&self, x: f64, y: f64) -> Result<MovePlan, MotionError> {
        let (target_left, target_right) = point_to_cords(x, y, &self.geometry);
        let (current_left, current_right) = self.state.cord_lengths();

        let delta_left = target_left - current_left;
        let delta_right = target_right - current_right;

        let (left_direction, left_steps) = delta_to_steps(delta_left, self.geometry.scale())?;
        let (right_direction, right_steps) = delta_to_steps(delta_right, self.geometry.scale())?;
        let interval = self.geometry.interval();

        Ok(MovePlan {
            target: (x, y),
            target_cords: (target_left, target_right),
            deltas: (delta_left, delta_right),
            left: AxisMotion::new(left_direction, left_steps, interval),
            right: AxisMotion::new(right_direction, right_steps, interval),
        })
    }

    ///
    /// Moves the pen to a plane coordinate. Both motors step over the same stretch of time.
    /// On return the state holds the exact target and its exact cord lengths, not the
    /// step-rounded ones. No range check is made; unreachable targets are the caller's concern.
    ///
    /// # Parameters:
    /// - `x`: The target x coordinate
    /// - `y`: The target y coordinate
    ///
    /// # Returns:
    /// - The plan that was carried out
    /// - A `MotionError` if the move could not be converted into steps; no motor moves and
    ///   the state is left untouched in that case
    ///
    pub fn moveto(&mut self, x: f64, y: f64) -> Result<MovePlan, MotionError> {
        let plan = match self.plan(x, y) {
            Ok(plan) => plan,
            Err(err) => {
                warn!(x, y, %err, "rejected move");
                return Err(err);
            }
        };

        debug!(
            x, y,
            left_steps = plan.left.steps, right_steps = plan.right.steps,
            left_direction = ?plan.left.direction, right_direction = ?plan.right.direction,
            "moving pen"
        );

        self.run(plan.left, plan.right);
        self.state = DrawerState::at_point(x, y, &self.geometry);

        Ok(plan)
    }

    ///
    /// Turns the motors by raw step counts, with no geometry involved. The pen position held
    /// in the drawer's state is not updated.
    ///
    /// # Parameters:
    /// - `left_direction`/`right_direction`: `true` or `Direction::Payout` pays cord out
    /// - `left_steps`/`right_steps`: The number of steps each motor takes
    /// - `left_interval`/`right_interval`: Minimum microseconds between steps of each motor
    ///
    /// # Returns:
    /// - A report of the completed motion
    ///
    pub fn turn(
        &mut self,
        left_direction: impl Into<Direction>,
        right_direction: impl Into<Direction>,
        left_steps: u32,
        right_steps: u32,
        left_interval: u32,
        right_interval: u32,
    ) -> TurnReport {
        self.run(
            AxisMotion::new(left_direction.into(), left_steps, left_interval),
            AxisMotion::new(right_direction.into(), right_steps, right_interval),
        )
    }

    fn run(&mut self, left_motion: AxisMotion, right_motion: AxisMotion) -> TurnReport {
        let report = scheduler::turn(&mut self.left, &mut self.right, &self.clock, left_motion, right_motion);
        self.cords.move_by_steps((left_motion.direction, left_motion.steps), (right_motion.direction, right_motion.steps));
        report
    }

    /// De-energises both motors. No step is issued.
    pub fn low(&mut self) {
        self.left.low();
        self.right.low();
        info!("motors set low");
    }

    ///
    /// Replaces the pen state, e.g. with a snapshot from a previous session. Only the position
    /// is taken from the snapshot; cord lengths are recomputed from it. The step-accumulated
    /// cords are reset to match.
    ///
    pub fn restore(&mut self, snapshot: DrawerState) {
        self.state = DrawerState::at_point(snapshot.x(), snapshot.y(), &self.geometry);
        let (left_cord, right_cord) = self.state.cord_lengths();
        self.cords = Cords::new_by_length(left_cord, right_cord, self.geometry);
    }
}

impl<L, R, C> Drawer<L, R, C> {
    pub fn geometry(&self) -> &MachineGeometry {
        &self.geometry
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn position(&self) -> (f64, f64) {
        self.state.position()
    }

    pub fn cord_lengths(&self) -> (f64, f64) {
        self.state.cord_lengths()
    }

    /// The cord lengths accumulated from every whole step issued so far.
    pub fn quantized_cord_lengths(&self) -> (f64, f64) {
        self.cords.get_lengths()
    }

    /// Where the issued steps have actually put the pen, if the cords can meet.
    pub fn quantized_position(&self) -> Option<(f64, f64)> {
        self.cords.get_as_point()
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    /// Gives back the motors and clock.
    pub fn into_parts(self) -> (L, R, C) {
        (self.left, self.right, self.clock)
    }
}
