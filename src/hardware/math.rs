use super::MachineGeometry;
use crate::motion::Direction;
use crate::motion::error::MotionError;

///
/// Converts a plane coordinate into cord lengths. The left cord is measured from the point
/// (`offset`, `height`) and the right cord from (`width - offset`, `height`) in the drawing
/// plane. All values are in millimetres.
///
/// # Parameters:
/// - `x`: The x coordinate of the pen in the drawing plane
/// - `y`: The y coordinate of the pen in the drawing plane
/// - `geometry`: The machine layout
///
/// # Returns:
/// - A tuple containing the left and right cord lengths, respectively
///
pub fn point_to_cords(x: f64, y: f64, geometry: &MachineGeometry) -> (f64, f64) {
    let vertical = geometry.height() - y;
    let left_cord = f64::sqrt(f64::powi(geometry.offset() - x, 2) + f64::powi(vertical, 2));
    let right_cord = f64::sqrt(f64::powi(geometry.right_offset() - x, 2) + f64::powi(vertical, 2));

    (left_cord, right_cord)
}

///
/// Converts cord lengths back into a plane coordinate, assuming the pen hangs below the
/// anchors. This is the inverse of `point_to_cords`.
///
/// # Parameters:
/// - `left_length`: The length of the left cord
/// - `right_length`: The length of the right cord
/// - `geometry`: The machine layout
///
/// # Returns:
/// - The (x, y) coordinates of the pen
/// - `None` if the anchors coincide, or the two cords cannot meet
///
pub fn cords_to_point(left_length: f64, right_length: f64, geometry: &MachineGeometry) -> Option<(f64, f64)> {
    let left_anchor = geometry.offset();
    let span = geometry.right_offset() - left_anchor;
    if span.abs() < f64::EPSILON {
        return None;
    }

    // distance along the anchor line from the left anchor to the foot of the pen
    let along = (f64::powi(left_length, 2) - f64::powi(right_length, 2) + f64::powi(span, 2)) / (2. * span);
    let depth_squared = f64::powi(left_length, 2) - f64::powi(along, 2);
    if depth_squared < 0. || !depth_squared.is_finite() {
        return None;
    }

    Some((left_anchor + along, geometry.height() - depth_squared.sqrt()))
}

///
/// Converts a signed change in cord length into a motor direction and a whole number of
/// steps. A zero delta reports `Direction::Payout`; no step is issued for it either way.
///
/// # Parameters:
/// - `delta`: The change in cord length, in millimetres
/// - `scale`: The number of steps per millimetre
///
/// # Returns:
/// - The direction and the rounded step count
/// - A `MotionError` if the step count is not finite or does not fit in a `u32`
///
pub fn delta_to_steps(delta: f64, scale: f64) -> Result<(Direction, u32), MotionError> {
    let steps = (delta.abs() * scale).round();

    if !steps.is_finite() {
        return Err(MotionError::NotFinite { delta });
    }
    if steps > u32::MAX as f64 {
        return Err(MotionError::StepOverflow { delta, steps });
    }

    Ok((Direction::from_delta(delta), steps as u32))
}

///
/// Calculates the cord length moved by a given amount of steps.
///
/// # Parameters:
/// - `steps`: The number of steps
/// - `scale`: The number of steps per millimetre
///
/// # Returns:
/// - The number of millimetres of cord moved
///
pub fn steps_to_mm(steps: u32, scale: f64) -> f64 {
    steps as f64 / scale
}
