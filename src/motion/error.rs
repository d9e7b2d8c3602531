use thiserror::Error;

///
/// All errors emitted from the motion module.
/// The error messages can be displayed to users on the frontend.
///
/// - `StepOverflow`: When a cord delta needs more steps than the step counter can hold
///     Parameters:
///     - `delta`: The change in cord length, in millimetres
///     - `steps`: The rounded step count which did not fit
/// - `NotFinite`: When a cord delta is NaN or infinite, usually from a non-finite target
///
#[derive(Error, Debug, PartialEq)]
pub enum MotionError {
    #[error("A cord change of {}mm needs {} steps, more than a single move can issue.", .delta, .steps)]
    StepOverflow { delta: f64, steps: f64 },

    #[error("A cord change of {}mm cannot be converted into steps.", .delta)]
    NotFinite { delta: f64 },
}
