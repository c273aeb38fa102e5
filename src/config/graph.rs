//! Graph configuration section.

use serde::{Deserialize, Serialize};

use crate::core::BoxContact;
use crate::graph::GraphConfig;

use super::defaults;

/// Graph construction settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphSection {
    /// Weight factor of midpoints between points of interest
    #[serde(default = "defaults::poi_midpoint_weight_factor")]
    pub poi_midpoint_weight_factor: f64,

    /// Weight factor of midpoints between obstacles
    #[serde(default = "defaults::obstacle_midpoint_weight_factor")]
    pub obstacle_midpoint_weight_factor: f64,

    /// Corner offset as a multiple of obstacle radius
    #[serde(default = "defaults::corner_offset_factor")]
    pub corner_offset_factor: f64,

    /// Average distance used for scenes with fewer than two nodes
    #[serde(default = "defaults::default_average_distance")]
    pub default_average_distance: f64,

    /// Midpoint deduplication tolerance (0 = exact)
    #[serde(default = "defaults::dedup_tolerance")]
    pub dedup_tolerance: f64,

    /// Whether touching a pruning box counts as a hit
    #[serde(default = "defaults::box_contact")]
    pub box_contact: BoxContact,

    /// Radius for obstacles registered without one
    #[serde(default = "defaults::default_obstacle_radius")]
    pub default_obstacle_radius: f64,
}

impl Default for GraphSection {
    fn default() -> Self {
        Self::from(&GraphConfig::default())
    }
}

impl From<&GraphConfig> for GraphSection {
    fn from(config: &GraphConfig) -> Self {
        Self {
            poi_midpoint_weight_factor: config.poi_midpoint_weight_factor,
            obstacle_midpoint_weight_factor: config.obstacle_midpoint_weight_factor,
            corner_offset_factor: config.corner_offset_factor,
            default_average_distance: config.default_average_distance,
            dedup_tolerance: config.dedup_tolerance,
            box_contact: config.box_contact,
            default_obstacle_radius: config.default_obstacle_radius,
        }
    }
}

impl GraphSection {
    /// Convert to GraphConfig
    pub fn to_graph_config(&self) -> GraphConfig {
        GraphConfig {
            poi_midpoint_weight_factor: self.poi_midpoint_weight_factor,
            obstacle_midpoint_weight_factor: self.obstacle_midpoint_weight_factor,
            corner_offset_factor: self.corner_offset_factor,
            default_average_distance: self.default_average_distance,
            dedup_tolerance: self.dedup_tolerance,
            box_contact: self.box_contact,
            default_obstacle_radius: self.default_obstacle_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_graph_config() {
        assert_eq!(
            GraphSection::default().to_graph_config(),
            GraphConfig::default()
        );
    }

    #[test]
    fn test_omitted_fields_match_graph_config() {
        let section: GraphSection = serde_yaml::from_str("{}").unwrap();
        assert_eq!(section, GraphSection::default());
    }

    #[test]
    fn test_from_graph_config_keeps_overrides() {
        let config = GraphConfig::new()
            .with_dedup_tolerance(0.5)
            .with_box_contact(BoxContact::Open);
        let section = GraphSection::from(&config);
        assert_eq!(section.dedup_tolerance, 0.5);
        assert_eq!(section.box_contact, BoxContact::Open);
        assert_eq!(section.to_graph_config(), config);
    }
}
