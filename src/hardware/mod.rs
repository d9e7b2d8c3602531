//!
//! Physical machine layout and cord geometry
//!

pub mod error;
pub mod math;

use error::GeometryError;
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// Default minimum microseconds between two steps of the same motor.
pub const DEFAULT_INTERVAL_US: u32 = 3000;
/// Default sum of the two anchors' plane x positions, in millimetres.
pub const DEFAULT_WIDTH: f64 = 520.;
/// Default vertical distance between the anchors and the drawing origin, in millimetres.
pub const DEFAULT_HEIGHT: f64 = 510.;
/// Default plane x position of the left anchor, in millimetres.
pub const DEFAULT_OFFSET: f64 = 155.;
/// Default number of motor steps per millimetre of cord.
pub const DEFAULT_SCALE: f64 = 16.;

///
/// A container for the physical layout of the plotter. Fixed for the lifetime of a drawer.
/// Lengths are measured in millimetres from where each cord leaves its spool, not from the
/// spool centre. In the drawing plane the left cord is measured from (`offset`, `height`) and
/// the right cord from (`width - offset`, `height`), so the origin (0, 0) sits `height` below
/// the anchors and `offset` to the left of the left anchor, and the anchors are
/// `width - 2 * offset` apart. With `offset = width / 2` both cords share one anchor point.
/// Plane y grows upwards towards the anchors.
/// All fields have an associated getter function.
///
/// # Fields:
/// - `width`: The sum of the plane x positions of the two anchors
/// - `height`: The vertical distance between the anchors and the drawing origin
/// - `offset`: The plane x position of the left anchor
/// - `scale`: The number of motor steps per millimetre of cord
/// - `interval`: The minimum number of microseconds between two steps of one motor
///
#[derive(CopyGetters, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[getset(get_copy = "pub")]
#[serde(default)]
pub struct MachineGeometry {
    width: f64,
    height: f64,
    offset: f64,
    scale: f64,
    interval: u32,
}

impl MachineGeometry {
    ///
    /// Creates a new, validated machine geometry.
    ///
    /// # Parameters:
    /// - `interval`: Minimum microseconds between steps, must be non-zero
    /// - `width`: Sum of the anchors' plane x positions, must be positive
    /// - `height`: Distance from the anchors down to the origin, must be positive
    /// - `offset`: Plane x position of the left anchor, within `0..=width`
    /// - `scale`: Steps per millimetre, must be positive
    ///
    /// # Returns:
    /// - A new `MachineGeometry` instance
    /// - A `GeometryError` naming the first dimension which was invalid
    ///
    pub fn new(interval: u32, width: f64, height: f64, offset: f64, scale: f64) -> Result<MachineGeometry, GeometryError> {
        let geometry = MachineGeometry { width, height, offset, scale, interval };
        geometry.validate()?;
        Ok(geometry)
    }

    ///
    /// Parses a geometry from a JSON document. Missing fields take their default values, and
    /// the result is validated exactly as `new` does.
    ///
    /// # Parameters:
    /// - `json`: The JSON text, e.g. `{"width": 600, "offset": 200}`
    ///
    pub fn from_json(json: &str) -> Result<MachineGeometry, GeometryError> {
        let geometry: MachineGeometry = serde_json::from_str(json)?;
        geometry.validate()?;
        Ok(geometry)
    }

    ///
    /// # Returns:
    /// - The geometry serialised as a JSON document
    ///
    pub fn to_json(&self) -> Result<String, GeometryError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Plane x position of the right anchor.
    pub fn right_offset(&self) -> f64 {
        self.width - self.offset
    }

    ///
    /// Checks every dimension against the physical constraints of the layout.
    ///
    /// # Returns:
    /// - Void if the geometry is usable
    /// - A `GeometryError` explaining the first violated constraint
    ///
    pub fn validate(&self) -> Result<(), GeometryError> {
        for (field, value) in [("width", self.width), ("height", self.height), ("offset", self.offset), ("scale", self.scale)] {
            if !value.is_finite() {
                return Err(GeometryError::NotFinite { field, value });
            }
        }

        for (field, value) in [("width", self.width), ("height", self.height), ("scale", self.scale), ("interval", self.interval as f64)] {
            if value <= 0. {
                return Err(GeometryError::NonPositive { field, value });
            }
        }

        if self.offset < 0. || self.offset > self.width {
            return Err(GeometryError::OffsetOutOfRange { offset: self.offset, width: self.width });
        }

        Ok(())
    }
}

impl Default for MachineGeometry {
    fn default() -> Self {
        MachineGeometry {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            offset: DEFAULT_OFFSET,
            scale: DEFAULT_SCALE,
            interval: DEFAULT_INTERVAL_US,
        }
    }
}
