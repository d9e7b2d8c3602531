use getset::CopyGetters;
use serde::{Deserialize, Serialize};

use crate::hardware::MachineGeometry;
use crate::hardware::math::point_to_cords;
use crate::motion::scheduler::AxisMotion;

///
/// The drawer's persisted view of the pen. The cord lengths are always the exact distances
/// from each anchor to (`x`, `y`), never the step-rounded lengths.
///
/// # Fields:
/// - `x`/`y`: The current pen position in the drawing plane
/// - `left_cord`/`right_cord`: The current cord lengths, in millimetres
///
#[derive(CopyGetters, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[getset(get_copy = "pub")]
pub struct DrawerState {
    x: f64,
    y: f64,
    left_cord: f64,
    right_cord: f64,
}

impl DrawerState {
    ///
    /// Creates the state of a pen resting at a plane coordinate.
    ///
    pub fn at_point(x: f64, y: f64, geometry: &MachineGeometry) -> DrawerState {
        let (left_cord, right_cord) = point_to_cords(x, y, geometry);
        DrawerState { x, y, left_cord, right_cord }
    }

    /// The state of a freshly constructed drawer, pen at the origin.
    pub fn origin(geometry: &MachineGeometry) -> DrawerState {
        DrawerState::at_point(0., 0., geometry)
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn cord_lengths(&self) -> (f64, f64) {
        (self.left_cord, self.right_cord)
    }

    ///
    /// # Returns:
    /// - Whether both cord lengths equal the anchor distances of the position, within `tolerance`
    ///
    pub fn is_consistent(&self, geometry: &MachineGeometry, tolerance: f64) -> bool {
        let (left, right) = point_to_cords(self.x, self.y, geometry);
        (left - self.left_cord).abs() <= tolerance && (right - self.right_cord).abs() <= tolerance
    }
}

///
/// Everything `moveto` derives from a target before any motor moves.
///
/// # Fields:
/// - `target`: The requested (x, y) pen position
/// - `target_cords`: The exact (left, right) cord lengths at the target
/// - `deltas`: The signed (left, right) cord changes, in millimetres
/// - `left`/`right`: The motion handed to the scheduler for each axis
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovePlan {
    pub target: (f64, f64),
    pub target_cords: (f64, f64),
    pub deltas: (f64, f64),
    pub left: AxisMotion,
    pub right: AxisMotion,
}

impl MovePlan {
    /// Whether the plan issues no steps on either axis.
    pub fn is_stationary(&self) -> bool {
        self.left.steps == 0 && self.right.steps == 0
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_state_matches_default_geometry() {
        let state = DrawerState::origin(&MachineGeometry::default());
        assert_eq!(state.position(), (0., 0.));
        assert!((state.left_cord() - 533.034).abs() < 0.001);
        assert!((state.right_cord() - 627.156).abs() < 0.001);
    }

    #[test]
    fn state_is_consistent_with_its_own_point() {
        let geometry = MachineGeometry::default();
        assert!(DrawerState::at_point(33., -12., &geometry).is_consistent(&geometry, 1e-9));
    }

    #[test]
    fn state_deserialises_from_json() {
        let state: DrawerState = serde_json::from_str(r#"{"x": 1.0, "y": 2.0, "left_cord": 3.0, "right_cord": 4.0}"#).unwrap();
        assert_eq!(state.cord_lengths(), (3., 4.));
        assert!(!state.is_consistent(&MachineGeometry::default(), 1e-3));
    }
}
