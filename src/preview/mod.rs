//!
//! Step-quantized tracking of where the pen really is
//!

pub mod cords;

use crate::hardware::MachineGeometry;
use crate::hardware::math::point_to_cords;
use crate::motion::scheduler::AxisMotion;

use cords::Cords;

///
/// Replays a sequence of per-axis motions onto cords hung at a starting point and reports the
/// pen position after each motion.
///
/// # Parameters:
/// - `start`: The starting (x, y) pen position
/// - `geometry`: The machine layout
/// - `motions`: The (left, right) motions, in order
///
/// # Returns:
/// - One entry per motion, `None` where the cords could not meet
///
pub fn replay(start: (f64, f64), geometry: MachineGeometry, motions: &[(AxisMotion, AxisMotion)]) -> Vec<Option<(f64, f64)>> {
    let mut cords = Cords::new_by_point(start.0, start.1, geometry);

    motions.iter().map(|(left, right)| {
        cords.move_by_steps((left.direction, left.steps), (right.direction, right.steps));
        cords.get_as_point()
    }).collect()
}

///
/// The largest gap, per cord, between step-accumulated lengths and the exact lengths at a
/// point. Used to measure how far a sequence of moves has drifted.
///
/// # Returns:
/// - The absolute (left, right) differences, in millimetres
///
pub fn cord_drift(cords: &Cords, x: f64, y: f64, geometry: &MachineGeometry) -> (f64, f64) {
    let (exact_left, exact_right) = point_to_cords(x, y, geometry);
    let (left, right) = cords.get_lengths();
    ((left - exact_left).abs(), (right - exact_right).abs())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Direction;

    #[test]
    fn replay_without_steps_stays_put() {
        let idle = AxisMotion::new(Direction::Payout, 0, 3000);
        let points = replay((10., 20.), MachineGeometry::default(), &[(idle, idle)]);
        let (x, y) = points[0].unwrap();
        assert!((x - 10.).abs() < 1e-6);
        assert!((y - 20.).abs() < 1e-6);
    }

    #[test]
    fn no_drift_at_start() {
        let geometry = MachineGeometry::default();
        let cords = Cords::new_by_point(0., 0., geometry);
        assert_eq!(cord_drift(&cords, 0., 0., &geometry), (0., 0.));
    }
}
