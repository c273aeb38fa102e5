//! Axis-aligned boxes and the conservative segment test used for pruning.
//!
//! [`Bounds3`] is the Cartesian product of three closed intervals. The
//! segment test checks each axis independently: a segment is reported as
//! hitting the box unless its projection onto some axis misses the box's
//! interval on that axis.
//!
//! This is an interval-overlap test, not an exact segment/box intersection.
//! It flags every segment whose own bounding box overlaps the box, which
//! includes some segments that pass beside a corner without touching it.
//! Route quality is tuned against that behaviour.
//!
//! # Usage
//!
//! ```rust
//! use marga::core::{BoxContact, Bounds3, Point3};
//!
//! let obstacle = Bounds3::from_corners(
//!     Point3::new(-1.0, 1.0, 1.0),
//!     Point3::new(1.0, -1.0, -1.0),
//! );
//!
//! // Passes straight through
//! assert!(obstacle.segment_intersects(
//!     Point3::new(-5.0, 0.0, 0.0),
//!     Point3::new(5.0, 0.0, 0.0),
//!     BoxContact::Closed,
//! ));
//!
//! // Entirely above
//! assert!(!obstacle.segment_intersects(
//!     Point3::new(-5.0, 3.0, 0.0),
//!     Point3::new(5.0, 3.0, 0.0),
//!     BoxContact::Closed,
//! ));
//! ```

use serde::{Deserialize, Serialize};

use super::point::Point3;

/// How intervals that only share an endpoint are classified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxContact {
    /// Closed intervals: touching counts as overlap.
    #[default]
    Closed,
    /// Open intervals: touching counts as disjoint.
    Open,
}

/// Check whether two intervals overlap.
///
/// Each pair may be given in either order; descending pairs are swapped
/// before comparison.
#[inline]
pub fn intervals_overlap(a: (f64, f64), b: (f64, f64), contact: BoxContact) -> bool {
    let (a0, a1) = if a.0 > a.1 { (a.1, a.0) } else { a };
    let (b0, b1) = if b.0 > b.1 { (b.1, b.0) } else { b };

    match contact {
        BoxContact::Closed => !(a1 < b0 || b1 < a0),
        BoxContact::Open => !(a1 <= b0 || b1 <= a0),
    }
}

/// Axis-aligned bounding box in three dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds3 {
    /// Minimum corner
    pub min: Point3,
    /// Maximum corner
    pub max: Point3,
}

impl Bounds3 {
    /// Create from any two opposite corners.
    pub fn from_corners(a: Point3, b: Point3) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Conservative segment/box test.
    ///
    /// Returns true unless the segment's projected interval on some axis is
    /// disjoint from the box interval on that axis.
    pub fn segment_intersects(&self, p1: Point3, p2: Point3, contact: BoxContact) -> bool {
        intervals_overlap((p1.x, p2.x), (self.min.x, self.max.x), contact)
            && intervals_overlap((p1.y, p2.y), (self.min.y, self.max.y), contact)
            && intervals_overlap((p1.z, p2.z), (self.min.z, self.max.z), contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Bounds3 {
        Bounds3::from_corners(Point3::new(-1.0, 1.0, 1.0), Point3::new(1.0, -1.0, -1.0))
    }

    #[test]
    fn test_intervals_overlap_cases() {
        let c = BoxContact::Closed;
        // Disjoint low / high
        assert!(!intervals_overlap((0.0, 1.0), (2.0, 3.0), c));
        assert!(!intervals_overlap((4.0, 5.0), (2.0, 3.0), c));
        // Partial overlaps on either side
        assert!(intervals_overlap((0.0, 2.5), (2.0, 3.0), c));
        assert!(intervals_overlap((2.5, 4.0), (2.0, 3.0), c));
        // Containment both ways
        assert!(intervals_overlap((2.2, 2.8), (2.0, 3.0), c));
        assert!(intervals_overlap((0.0, 9.0), (2.0, 3.0), c));
    }

    #[test]
    fn test_intervals_overlap_unordered_input() {
        let c = BoxContact::Closed;
        assert!(intervals_overlap((2.5, 0.0), (3.0, 2.0), c));
        assert!(!intervals_overlap((1.0, 0.0), (3.0, 2.0), c));
    }

    #[test]
    fn test_touching_depends_on_contact() {
        assert!(intervals_overlap((0.0, 2.0), (2.0, 3.0), BoxContact::Closed));
        assert!(!intervals_overlap((0.0, 2.0), (2.0, 3.0), BoxContact::Open));
    }

    #[test]
    fn test_from_corners_normalizes() {
        let b = unit_box();
        assert_eq!(b.min, Point3::new(-1.0, -1.0, -1.0));
        assert_eq!(b.max, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_segment_through_box() {
        let b = unit_box();
        assert!(b.segment_intersects(
            Point3::new(-5.0, 0.0, 0.0),
            Point3::new(5.0, 0.0, 0.0),
            BoxContact::Closed,
        ));
    }

    #[test]
    fn test_segment_clear_on_one_axis() {
        let b = unit_box();
        assert!(!b.segment_intersects(
            Point3::new(-5.0, 0.0, 3.0),
            Point3::new(5.0, 0.0, 3.0),
            BoxContact::Closed,
        ));
    }

    #[test]
    fn test_segment_near_corner_is_flagged() {
        // The segment passes outside the corner at (1, 1) in the XY plane,
        // but each axis projection overlaps, so it is reported as a hit.
        let b = unit_box();
        let p1 = Point3::new(0.5, 3.0, 0.0);
        let p2 = Point3::new(3.0, 0.5, 0.0);
        assert!(b.segment_intersects(p1, p2, BoxContact::Closed));
    }

    #[test]
    fn test_segment_ending_on_boundary() {
        let b = unit_box();
        let corner = Point3::new(1.0, 1.0, 1.0);
        let outside = Point3::new(5.0, 5.0, 5.0);
        assert!(b.segment_intersects(corner, outside, BoxContact::Closed));
        assert!(!b.segment_intersects(corner, outside, BoxContact::Open));
    }
}
