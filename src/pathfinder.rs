//! Path facade: owns the scene's points of interest and obstacles and
//! answers shortest-path queries between them.
//!
//! Every query rebuilds the routing graph from scratch, so position and
//! radius updates take effect on the next call without any invalidation.
//! The graph is rebuilt in place inside the `Pathfinder`, which is why
//! queries take `&mut self`.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::MargaConfig;
use crate::core::Point3;
use crate::error::Result;
use crate::graph::{Edge, GraphBuilder, GraphConfig, Node, RoutingGraph, is_reserved_id};
use crate::io::svg::graph_to_svg;

/// Result of a shortest-path query.
///
/// Empty when no path exists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Nodes from start to end.
    pub nodes: Vec<Node>,
    /// Edges between consecutive nodes.
    pub edges: Vec<Edge>,
    /// Sum of edge weights.
    pub cost: f64,
    /// Geometric length (sum of segment lengths).
    pub length: f64,
}

impl PathResult {
    /// A result with no path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if no path was found.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids along the path.
    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    /// Node positions along the path.
    pub fn points(&self) -> Vec<Point3> {
        self.nodes.iter().map(|n| n.position).collect()
    }
}

/// Collision-aware path planner over user-placed points of interest and
/// obstacles.
///
/// # Example
///
/// ```rust
/// use marga::Pathfinder;
/// use marga::core::Point3;
///
/// let mut pathfinder = Pathfinder::default();
/// pathfinder.add_point_of_interest_at("P0", Point3::new(0.0, 0.0, 0.0));
/// pathfinder.add_point_of_interest_at("P1", Point3::new(1000.0, 0.0, 0.0));
///
/// let path = pathfinder.compute_shortest_path("P0", "P1").unwrap();
/// assert!((path.length - 1000.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Pathfinder {
    points_of_interest: Vec<Node>,
    obstacles: Vec<Node>,
    config: GraphConfig,
    graph: RoutingGraph,
}

impl Pathfinder {
    /// Create an empty pathfinder.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            points_of_interest: Vec::new(),
            obstacles: Vec::new(),
            config,
            graph: RoutingGraph::new(),
        }
    }

    /// Create from a loaded configuration file.
    pub fn from_config(config: &MargaConfig) -> Self {
        Self::new(config.to_graph_config())
    }

    /// Graph configuration.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Registered points of interest, in registration order.
    pub fn points_of_interest(&self) -> &[Node] {
        &self.points_of_interest
    }

    /// Registered obstacles, in registration order.
    pub fn obstacles(&self) -> &[Node] {
        &self.obstacles
    }

    /// Registered point of interest or obstacle with the given id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.points_of_interest
            .iter()
            .chain(self.obstacles.iter())
            .find(|n| n.id == id)
    }

    /// Check if an id is registered as either kind.
    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Register a point of interest at the origin.
    ///
    /// Returns false (and changes nothing) if the id is already registered
    /// or uses the synthesized-node naming scheme (`mid_*`, `omid_*`,
    /// `*_ULF` and the other corner suffixes).
    pub fn add_point_of_interest(&mut self, id: impl Into<String>) -> bool {
        self.add_point_of_interest_at(id, Point3::ZERO)
    }

    /// Register a point of interest at a position.
    pub fn add_point_of_interest_at(&mut self, id: impl Into<String>, position: Point3) -> bool {
        let id = id.into();
        if !self.can_register(&id) {
            return false;
        }
        self.points_of_interest.push(Node::point_of_interest(id, position));
        true
    }

    /// Register an obstacle at the origin with the default radius.
    ///
    /// Ids are checked as in [`add_point_of_interest`](Self::add_point_of_interest).
    pub fn add_obstacle(&mut self, id: impl Into<String>) -> bool {
        let radius = self.config.default_obstacle_radius;
        self.add_obstacle_at(id, Point3::ZERO, radius)
    }

    /// Register an obstacle at a position with a radius.
    pub fn add_obstacle_at(
        &mut self,
        id: impl Into<String>,
        position: Point3,
        radius: f64,
    ) -> bool {
        let id = id.into();
        if !self.can_register(&id) {
            return false;
        }
        self.obstacles.push(Node::obstacle(id, position, radius));
        true
    }

    fn can_register(&self, id: &str) -> bool {
        if is_reserved_id(id) {
            warn!("[Pathfinder] {id} is reserved for synthesized nodes");
            return false;
        }
        if self.contains(id) {
            debug!("[Pathfinder] {id} already registered");
            return false;
        }
        true
    }

    /// Remove a point of interest. No-op if absent.
    pub fn remove_point_of_interest(&mut self, id: &str) -> bool {
        let before = self.points_of_interest.len();
        self.points_of_interest.retain(|n| n.id != id);
        before != self.points_of_interest.len()
    }

    /// Remove an obstacle. No-op if absent.
    pub fn remove_obstacle(&mut self, id: &str) -> bool {
        let before = self.obstacles.len();
        self.obstacles.retain(|n| n.id != id);
        before != self.obstacles.len()
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.points_of_interest
            .iter_mut()
            .chain(self.obstacles.iter_mut())
            .find(|n| n.id == id)
    }

    /// Overwrite the given position components of a registered node.
    ///
    /// Unknown ids are ignored.
    pub fn update_node_position(
        &mut self,
        id: &str,
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
    ) -> bool {
        let Some(node) = self.node_mut(id) else {
            debug!("[Pathfinder] update_node_position: unknown id {id}");
            return false;
        };

        if let Some(x) = x {
            node.position.x = x;
        }
        if let Some(y) = y {
            node.position.y = y;
        }
        if let Some(z) = z {
            node.position.z = z;
        }
        true
    }

    /// Set the radius of a registered node.
    ///
    /// Unknown ids are ignored.
    pub fn update_node_radius(&mut self, id: &str, radius: f64) -> bool {
        let Some(node) = self.node_mut(id) else {
            debug!("[Pathfinder] update_node_radius: unknown id {id}");
            return false;
        };
        node.radius = radius;
        true
    }

    /// Rebuild the routing graph from the current scene.
    pub fn rebuild(&mut self) -> Result<&RoutingGraph> {
        GraphBuilder::new(&self.config).rebuild(
            &mut self.graph,
            &self.points_of_interest,
            &self.obstacles,
        )?;
        Ok(&self.graph)
    }

    /// Graph from the most recent rebuild.
    pub fn graph(&self) -> &RoutingGraph {
        &self.graph
    }

    /// Rebuild the graph and find the cheapest route between two nodes.
    ///
    /// Returns an empty result (after logging a warning) when the nodes are
    /// unknown, identical, or disconnected. Errors only on a broken graph
    /// invariant.
    pub fn compute_shortest_path(&mut self, start_id: &str, end_id: &str) -> Result<PathResult> {
        self.rebuild()?;

        let Some(result) = self.graph.shortest_path(start_id, end_id) else {
            warn!("[Pathfinder] no path found from {start_id} to {end_id}");
            return Ok(PathResult::empty());
        };

        let nodes = self.graph.registry().nodes();
        let path_nodes: Vec<Node> = result.path.iter().map(|&idx| nodes[idx].clone()).collect();

        let mut edges = Vec::with_capacity(path_nodes.len().saturating_sub(1));
        let mut length = 0.0;
        for pair in result.path.windows(2) {
            if let Some(edge) = self
                .graph
                .edge_table()
                .get_edge(pair[0], pair[1])
                .and_then(|entry| self.graph.to_edge(entry))
            {
                edges.push(edge);
            }
            length += nodes[pair[0]].distance(&nodes[pair[1]]);
        }

        debug!(
            "[Pathfinder] {} -> {}: {} nodes, cost={:.2}, length={:.2}",
            start_id,
            end_id,
            path_nodes.len(),
            result.cost,
            length
        );

        Ok(PathResult {
            nodes: path_nodes,
            edges,
            cost: result.cost,
            length,
        })
    }

    /// Points of interest reachable from `id` in the current scene.
    pub fn reachable_points_of_interest(&mut self, id: &str) -> Result<Vec<String>> {
        self.rebuild()?;
        let reachable = self.graph.reachable_from(id);
        Ok(self
            .points_of_interest
            .iter()
            .filter(|poi| reachable.contains(&poi.id.as_str()))
            .map(|poi| poi.id.clone())
            .collect())
    }

    /// SVG debug view of the last built graph, optionally with a path.
    pub fn to_svg(&self, path: Option<&PathResult>) -> String {
        graph_to_svg(&self.graph, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_pois() -> Pathfinder {
        let mut pathfinder = Pathfinder::default();
        pathfinder.add_point_of_interest_at("P0", Point3::new(0.0, 0.0, 0.0));
        pathfinder.add_point_of_interest_at("P1", Point3::new(1000.0, 0.0, 0.0));
        pathfinder
    }

    #[test]
    fn test_add_and_remove() {
        let mut pathfinder = Pathfinder::default();
        assert!(pathfinder.add_point_of_interest("A"));
        assert!(pathfinder.add_obstacle("rock"));
        assert!(!pathfinder.add_point_of_interest("rock"));
        assert!(!pathfinder.add_obstacle("A"));

        assert_eq!(pathfinder.points_of_interest().len(), 1);
        assert_eq!(pathfinder.obstacles().len(), 1);
        assert_eq!(pathfinder.node("rock").map(|n| n.radius), Some(50.0));

        assert!(pathfinder.remove_obstacle("rock"));
        assert!(!pathfinder.remove_obstacle("rock"));
        assert!(!pathfinder.remove_point_of_interest("missing"));
        assert!(pathfinder.obstacles().is_empty());
    }

    #[test]
    fn test_rejects_synthesized_ids() {
        let mut pathfinder = two_pois();
        pathfinder.add_obstacle_at("rock", Point3::new(500.0, 0.0, 3000.0), 10.0);

        let beside = Point3::new(0.0, 0.0, 3000.0);
        assert!(!pathfinder.add_point_of_interest_at("mid_P0_P1", beside));
        assert!(!pathfinder.add_point_of_interest("rock_ULF"));
        assert!(!pathfinder.add_obstacle("omid_a_b"));
        assert!(!pathfinder.add_obstacle_at("crate_LRB", Point3::ZERO, 5.0));
        assert_eq!(pathfinder.points_of_interest().len(), 2);
        assert_eq!(pathfinder.obstacles().len(), 1);

        // The id still resolves to the synthesized midpoint
        let path = pathfinder.compute_shortest_path("mid_P0_P1", "P0").unwrap();
        assert_eq!(path.nodes[0].position, Point3::new(500.0, 0.0, 0.0));
    }

    #[test]
    fn test_partial_position_update() {
        let mut pathfinder = Pathfinder::default();
        pathfinder.add_point_of_interest_at("A", Point3::new(1.0, 2.0, 3.0));

        assert!(pathfinder.update_node_position("A", Some(10.0), None, Some(30.0)));
        assert_eq!(
            pathfinder.node("A").map(|n| n.position),
            Some(Point3::new(10.0, 2.0, 30.0))
        );
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut pathfinder = two_pois();
        assert!(!pathfinder.update_node_position("ghost", Some(1.0), None, None));
        assert!(!pathfinder.update_node_radius("ghost", 3.0));
        assert_eq!(pathfinder.points_of_interest().len(), 2);
    }

    #[test]
    fn test_update_radius() {
        let mut pathfinder = Pathfinder::default();
        pathfinder.add_obstacle("rock");
        assert!(pathfinder.update_node_radius("rock", 12.5));
        assert_eq!(pathfinder.node("rock").map(|n| n.radius), Some(12.5));
    }

    #[test]
    fn test_direct_path() {
        let mut pathfinder = two_pois();
        let path = pathfinder.compute_shortest_path("P0", "P1").unwrap();

        assert_eq!(path.node_ids(), vec!["P0", "P1"]);
        assert_eq!(path.edges.len(), 1);
        assert_eq!(path.edges[0].id, "edge_P0_P1");
        assert_relative_eq!(path.edges[0].weight, 1000.0);
        assert_relative_eq!(path.length, 1000.0);
        assert_relative_eq!(path.cost, 1000.0);
    }

    #[test]
    fn test_same_start_and_end_is_empty() {
        let mut pathfinder = two_pois();
        let path = pathfinder.compute_shortest_path("P0", "P0").unwrap();
        assert!(path.is_empty());
        assert!(path.edges.is_empty());
    }

    #[test]
    fn test_unknown_ids_are_empty() {
        let mut pathfinder = two_pois();
        assert!(pathfinder.compute_shortest_path("P0", "nope").unwrap().is_empty());
    }

    #[test]
    fn test_graph_kept_after_query() {
        let mut pathfinder = two_pois();
        pathfinder.compute_shortest_path("P0", "P1").unwrap();
        assert_eq!(pathfinder.graph().node_count(), 3);
    }

    #[test]
    fn test_reachable_points_of_interest() {
        let mut pathfinder = two_pois();
        pathfinder.add_point_of_interest_at("trapped", Point3::new(0.0, 0.0, 5000.0));
        pathfinder.add_obstacle_at("cage", Point3::new(0.0, 0.0, 5000.0), 10.0);

        let reachable = pathfinder.reachable_points_of_interest("P0").unwrap();
        assert_eq!(reachable, vec!["P1".to_string()]);
    }

    #[test]
    fn test_from_config() {
        let mut config = MargaConfig::default();
        config.graph.default_obstacle_radius = 7.0;
        let mut pathfinder = Pathfinder::from_config(&config);
        pathfinder.add_obstacle("rock");
        assert_eq!(pathfinder.node("rock").map(|n| n.radius), Some(7.0));
    }
}
