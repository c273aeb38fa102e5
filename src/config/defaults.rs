//! Default value functions for serde deserialization.
//!
//! Values come from `GraphConfig::default()` so YAML omissions and the
//! programmatic defaults agree.

use crate::core::BoxContact;
use crate::graph::GraphConfig;

pub fn poi_midpoint_weight_factor() -> f64 {
    GraphConfig::default().poi_midpoint_weight_factor
}

pub fn obstacle_midpoint_weight_factor() -> f64 {
    GraphConfig::default().obstacle_midpoint_weight_factor
}

pub fn corner_offset_factor() -> f64 {
    GraphConfig::default().corner_offset_factor
}

pub fn default_average_distance() -> f64 {
    GraphConfig::default().default_average_distance
}

pub fn dedup_tolerance() -> f64 {
    GraphConfig::default().dedup_tolerance
}

pub fn box_contact() -> BoxContact {
    GraphConfig::default().box_contact
}

pub fn default_obstacle_radius() -> f64 {
    GraphConfig::default().default_obstacle_radius
}
