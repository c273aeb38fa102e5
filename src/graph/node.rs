//! Node types for the routing graph.

use serde::{Deserialize, Serialize};

use crate::core::Point3;

/// Origin of a routing node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// User-placed waypoint a path can start or end at.
    PointOfInterest,
    /// User-placed region to route around.
    Obstacle,
    /// Synthesized midpoint between two points of interest.
    PoiMidpoint,
    /// Synthesized midpoint between two obstacles.
    ObstacleMidpoint,
    /// Synthesized corner just outside an obstacle's inflated box.
    ObstacleCorner,
}

impl NodeKind {
    /// Whether nodes of this kind are regenerated on every rebuild.
    #[inline]
    pub fn is_synthesized(self) -> bool {
        matches!(
            self,
            NodeKind::PoiMidpoint | NodeKind::ObstacleMidpoint | NodeKind::ObstacleCorner
        )
    }

    /// Colour used by the SVG debug export.
    pub fn svg_color(self) -> &'static str {
        match self {
            NodeKind::PointOfInterest => "red",
            NodeKind::Obstacle => "black",
            NodeKind::PoiMidpoint => "blue",
            NodeKind::ObstacleMidpoint => "green",
            NodeKind::ObstacleCorner => "orange",
        }
    }
}

/// A routable point.
///
/// The `id` is fixed at creation. Position and radius change as the user
/// moves things around the scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within a graph build.
    pub id: String,

    /// Position in the caller's local space.
    pub position: Point3,

    /// Obstacle radius. Sizes the avoidance box; unused for other kinds.
    pub radius: f64,

    /// Edge weight multiplier. Below 1.0 makes edges through this node
    /// more attractive.
    pub weight_factor: f64,

    /// Where this node came from.
    pub kind: NodeKind,
}

impl Node {
    /// Create a node with a neutral weight factor.
    pub fn new(id: impl Into<String>, position: Point3, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            position,
            radius: 0.0,
            weight_factor: 1.0,
            kind,
        }
    }

    /// Create a point of interest.
    pub fn point_of_interest(id: impl Into<String>, position: Point3) -> Self {
        Self::new(id, position, NodeKind::PointOfInterest)
    }

    /// Create an obstacle.
    pub fn obstacle(id: impl Into<String>, position: Point3, radius: f64) -> Self {
        Self {
            radius,
            ..Self::new(id, position, NodeKind::Obstacle)
        }
    }

    /// Create a synthesized midpoint with the given weight factor.
    pub fn midpoint(
        id: impl Into<String>,
        position: Point3,
        kind: NodeKind,
        weight_factor: f64,
    ) -> Self {
        Self {
            weight_factor,
            ..Self::new(id, position, kind)
        }
    }

    /// Create a synthesized obstacle corner.
    pub fn corner(id: impl Into<String>, position: Point3) -> Self {
        Self::new(id, position, NodeKind::ObstacleCorner)
    }

    /// Whether this node is discarded at the next rebuild.
    #[inline]
    pub fn is_synthesized(&self) -> bool {
        self.kind.is_synthesized()
    }

    /// Distance to another node.
    #[inline]
    pub fn distance(&self, other: &Node) -> f64 {
        self.position.distance(&other.position)
    }
}
