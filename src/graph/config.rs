//! Configuration for routing graph construction.

use serde::{Deserialize, Serialize};

use crate::core::BoxContact;

/// Configuration for the graph builder.
///
/// Distances are in the caller's units (millimetres in a typical scene).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Weight factor of midpoints synthesized between two points of interest.
    /// Default: 0.9
    pub poi_midpoint_weight_factor: f64,

    /// Weight factor of midpoints synthesized between two obstacles.
    /// Default: 1.0
    pub obstacle_midpoint_weight_factor: f64,

    /// Corner offset from the obstacle centre, as a multiple of its radius.
    /// Also the half-extent of the pruning box.
    /// Default: 2.0
    pub corner_offset_factor: f64,

    /// Average pairwise distance used when fewer than two nodes exist.
    /// Default: 1000.0
    pub default_average_distance: f64,

    /// Coordinate tolerance for midpoint deduplication.
    /// Zero compares coordinates exactly.
    /// Default: 0.0
    pub dedup_tolerance: f64,

    /// Whether segments that only touch a pruning box count as hits.
    /// Default: closed (touching is a hit)
    pub box_contact: BoxContact,

    /// Radius given to obstacles registered without one.
    /// Default: 50.0
    pub default_obstacle_radius: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            poi_midpoint_weight_factor: 0.9,
            obstacle_midpoint_weight_factor: 1.0,
            corner_offset_factor: 2.0,
            default_average_distance: 1000.0,
            dedup_tolerance: 0.0,
            box_contact: BoxContact::Closed,
            default_obstacle_radius: 50.0,
        }
    }
}

impl GraphConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the POI midpoint weight factor.
    pub fn with_poi_midpoint_weight_factor(mut self, factor: f64) -> Self {
        self.poi_midpoint_weight_factor = factor;
        self
    }

    /// Builder-style setter for the obstacle midpoint weight factor.
    pub fn with_obstacle_midpoint_weight_factor(mut self, factor: f64) -> Self {
        self.obstacle_midpoint_weight_factor = factor;
        self
    }

    /// Builder-style setter for the corner offset factor.
    pub fn with_corner_offset_factor(mut self, factor: f64) -> Self {
        self.corner_offset_factor = factor;
        self
    }

    /// Builder-style setter for the fallback average distance.
    pub fn with_default_average_distance(mut self, distance: f64) -> Self {
        self.default_average_distance = distance;
        self
    }

    /// Builder-style setter for the deduplication tolerance.
    pub fn with_dedup_tolerance(mut self, tolerance: f64) -> Self {
        self.dedup_tolerance = tolerance;
        self
    }

    /// Builder-style setter for box contact handling.
    pub fn with_box_contact(mut self, contact: BoxContact) -> Self {
        self.box_contact = contact;
        self
    }

    /// Builder-style setter for the default obstacle radius.
    pub fn with_default_obstacle_radius(mut self, radius: f64) -> Self {
        self.default_obstacle_radius = radius;
        self
    }

    /// Half-extent of the pruning box for an obstacle of the given radius.
    #[inline]
    pub fn corner_offset(&self, radius: f64) -> f64 {
        self.corner_offset_factor * radius
    }
}
