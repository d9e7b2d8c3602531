use crate::hardware::MachineGeometry;
use crate::hardware::math::*;
use crate::motion::Direction;

///
/// A structure representing the real world cords, as moved by whole motor steps.
/// Unlike the drawer's exact state, these lengths only ever change by multiples of one step,
/// so they track where the pen physically is.
///
/// # Fields:
/// - `left_cord_length`: The distance between the left anchor and the pen, in millimetres
/// - `right_cord_length`: The distance between the right anchor and the pen, in millimetres
/// - `geometry`: The machine layout the cords hang in
///
#[derive(Debug, Clone, PartialEq)]
pub struct Cords {
    left_cord_length: f64,
    right_cord_length: f64,
    geometry: MachineGeometry,
}

impl Cords {
    ///
    /// Initialises a new cords object, by cord lengths.
    ///
    pub fn new_by_length(left_cord_length: f64, right_cord_length: f64, geometry: MachineGeometry) -> Cords {
        Cords { left_cord_length, right_cord_length, geometry }
    }

    ///
    /// Initialises a new cords object with the pen at a plane coordinate.
    ///
    /// # Parameters:
    /// - `x`: The initial x coordinate of the pen
    /// - `y`: The initial y coordinate of the pen
    /// - `geometry`: The machine layout
    ///
    pub fn new_by_point(x: f64, y: f64, geometry: MachineGeometry) -> Cords {
        let (left_cord_length, right_cord_length) = point_to_cords(x, y, &geometry);
        Cords { left_cord_length, right_cord_length, geometry }
    }

    fn signed_mm(&self, direction: Direction, steps: u32) -> f64 {
        let mm = steps_to_mm(steps, self.geometry.scale());
        match direction {
            Direction::Payout => mm,
            Direction::Retract => -mm,
        }
    }

    ///
    /// Performs a movement of both cords, given the direction and amount of steps of each.
    ///
    pub fn move_by_steps(&mut self, left: (Direction, u32), right: (Direction, u32)) {
        self.left_cord_length += self.signed_mm(left.0, left.1);
        self.right_cord_length += self.signed_mm(right.0, right.1);
    }

    ///
    /// # Returns:
    /// - The plane coordinates of the pen implied by the current cord lengths
    /// - `None` when the cords cannot meet, or the layout has coincident anchors
    ///
    pub fn get_as_point(&self) -> Option<(f64, f64)> {
        cords_to_point(self.left_cord_length, self.right_cord_length, &self.geometry)
    }

    ///
    /// # Returns:
    /// - The left and right cord lengths, respectively
    ///
    pub fn get_lengths(&self) -> (f64, f64) {
        (self.left_cord_length, self.right_cord_length)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_change_length_by_scale() {
        let geometry = MachineGeometry::default();
        let mut cords = Cords::new_by_length(500., 600., geometry);
        cords.move_by_steps((Direction::Payout, 32), (Direction::Retract, 16));
        assert_eq!(cords.get_lengths(), (502., 599.));
    }

    #[test]
    fn point_survives_a_round_trip() {
        let cords = Cords::new_by_point(120., 80., MachineGeometry::default());
        let (x, y) = cords.get_as_point().unwrap();
        assert!((x - 120.).abs() < 1e-6);
        assert!((y - 80.).abs() < 1e-6);
    }
}
