use thiserror::Error;

///
/// All errors emitted from the hardware module.
/// The error messages can be displayed to users on the frontend.
///
/// - `NonPositive`: When a dimension which must be strictly positive is zero or negative
///     Parameters:
///     - `field`: The name of the offending dimension
///     - `value`: The value it was given
/// - `OffsetOutOfRange`: When the origin offset does not lie between the two anchors
/// - `NotFinite`: When a dimension is NaN or infinite
/// - `InvalidConfig`: When a geometry configuration could not be parsed or written
///
#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("The machine {} must be greater than zero, got {}.", .field, .value)]
    NonPositive { field: &'static str, value: f64 },

    #[error("The origin offset {} must lie between 0 and the anchor width {}.", .offset, .width)]
    OffsetOutOfRange { offset: f64, width: f64 },

    #[error("The machine {} must be a finite number, got {}.", .field, .value)]
    NotFinite { field: &'static str, value: f64 },

    #[error("Invalid geometry configuration: {}", .0)]
    InvalidConfig(#[from] serde_json::Error),
}
