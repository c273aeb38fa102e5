//! Point type for the routing space.

use serde::{Deserialize, Serialize};

/// A point in the host's local coordinate space.
///
/// Units and axis conventions belong to the caller; scenes are usually
/// authored in millimetres with Y pointing up.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    /// X coordinate (left/right)
    pub x: f64,
    /// Y coordinate (lower/upper)
    pub y: f64,
    /// Z coordinate (back/front)
    pub z: f64,
}

impl Point3 {
    /// Create a new point
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Origin
    pub const ZERO: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Point3) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Component-wise average of two points
    #[inline]
    pub fn midpoint(&self, other: &Point3) -> Point3 {
        Point3::new(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }

    /// Offset by per-axis deltas
    #[inline]
    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Point3 {
        Point3::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Coordinate equality with a tolerance.
    ///
    /// A tolerance of zero compares every component exactly.
    #[inline]
    pub fn coincides(&self, other: &Point3, tolerance: f64) -> bool {
        if tolerance <= 0.0 {
            self.x == other.x && self.y == other.y && self.z == other.z
        } else {
            self.distance(other) <= tolerance
        }
    }
}
