//!
//! Motion core for a two-cord plotter: cord kinematics and a dual-axis step scheduler
//!

pub mod drawer;
pub mod hardware;
pub mod motion;
pub mod preview;

pub use drawer::Drawer;
pub use drawer::state::{DrawerState, MovePlan};
pub use hardware::MachineGeometry;
pub use motion::{Clock, Direction, MonotonicClock, StepPrimitive};
