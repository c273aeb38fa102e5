//! Graph rebuild: node synthesis, weighting and obstacle pruning.
//!
//! A rebuild runs these steps in order:
//!
//! 1. Clear the previous graph.
//! 2. Register every point of interest, plus one midpoint per unordered
//!    pair of them (weight factor 0.9 by default).
//! 3. Synthesize eight corners around each obstacle at `±2r` per axis, plus
//!    one midpoint per unordered pair of obstacles.
//! 4. Compute the mean pairwise node distance.
//! 5. Weight every ordered pair of nodes by distance, obstacle proximity
//!    and weight factor.
//! 6. Drop every edge whose segment hits an obstacle's box.
//! 7. Build the adjacency list from the survivors.
//!
//! Midpoints are skipped when a synthesized node already sits at the same
//! coordinates, or when their id is already taken. Edge generation is O(n²), which keeps practical scenes to
//! tens of points of interest and obstacles.

use log::{debug, warn};

use crate::core::{Bounds3, Point3};
use crate::error::{MargaError, Result};

use super::config::GraphConfig;
use super::edge::EdgeEntry;
use super::node::{Node, NodeKind};
use super::routing::RoutingGraph;

/// Corner suffixes with their (x, y, z) offset signs.
///
/// Upper/lower is ±Y, left/right is ∓X, front/back is ±Z.
const CORNERS: [(&str, f64, f64, f64); 8] = [
    ("ULF", -1.0, 1.0, 1.0),
    ("ULB", -1.0, 1.0, -1.0),
    ("URF", 1.0, 1.0, 1.0),
    ("URB", 1.0, 1.0, -1.0),
    ("LLF", -1.0, -1.0, 1.0),
    ("LLB", -1.0, -1.0, -1.0),
    ("LRF", 1.0, -1.0, 1.0),
    ("LRB", 1.0, -1.0, -1.0),
];

/// Corners that span an obstacle's pruning box.
const BOX_CORNERS: (&str, &str) = ("ULF", "LRB");

/// Id prefix of midpoints between points of interest.
const POI_MIDPOINT_PREFIX: &str = "mid_";

/// Id prefix of midpoints between obstacles.
const OBSTACLE_MIDPOINT_PREFIX: &str = "omid_";

/// Floor for the mean nearest-obstacle distance.
const MIN_CLEARANCE: f64 = 1e-9;

/// Id of an obstacle corner node.
#[inline]
pub fn corner_id(obstacle_id: &str, suffix: &str) -> String {
    format!("{obstacle_id}_{suffix}")
}

/// Whether `id` follows the naming scheme of synthesized nodes.
///
/// Matches midpoint prefixes (`mid_`, `omid_`) and corner suffixes
/// (`_ULF` .. `_LRB`).
pub fn is_reserved_id(id: &str) -> bool {
    id.starts_with(POI_MIDPOINT_PREFIX)
        || id.starts_with(OBSTACLE_MIDPOINT_PREFIX)
        || id
            .rsplit_once('_')
            .is_some_and(|(_, suffix)| CORNERS.iter().any(|&(s, ..)| s == suffix))
}

/// Builds a [`RoutingGraph`] from points of interest and obstacles.
#[derive(Clone, Copy, Debug)]
pub struct GraphBuilder<'a> {
    config: &'a GraphConfig,
}

impl<'a> GraphBuilder<'a> {
    /// Create a builder with the given configuration.
    pub fn new(config: &'a GraphConfig) -> Self {
        Self { config }
    }

    /// Build a fresh graph.
    pub fn build(&self, pois: &[Node], obstacles: &[Node]) -> Result<RoutingGraph> {
        let mut graph = RoutingGraph::new();
        self.rebuild(&mut graph, pois, obstacles)?;
        Ok(graph)
    }

    /// Clear `graph` and rebuild it in place.
    pub fn rebuild(
        &self,
        graph: &mut RoutingGraph,
        pois: &[Node],
        obstacles: &[Node],
    ) -> Result<()> {
        graph.clear();

        self.add_poi_nodes(graph, pois);
        self.add_obstacle_nodes(graph, obstacles)?;

        graph.average_distance = self.average_distance(graph.registry.nodes());
        self.add_weighted_edges(graph, obstacles);

        let before = graph.edges.len();
        self.prune_obstacle_edges(graph, obstacles)?;
        Self::build_adjacency(graph);

        debug!(
            "[Graph] rebuilt: {} nodes, {} edges ({} pruned), avg_distance={:.2}",
            graph.registry.len(),
            graph.edges.len(),
            before - graph.edges.len(),
            graph.average_distance
        );

        Ok(())
    }

    fn add_poi_nodes(&self, graph: &mut RoutingGraph, pois: &[Node]) {
        for poi in pois {
            graph.registry.add_node(poi.clone());
        }

        for (i, a) in pois.iter().enumerate() {
            for b in &pois[i + 1..] {
                self.add_midpoint(
                    graph,
                    format!("{POI_MIDPOINT_PREFIX}{}_{}", a.id, b.id),
                    a.position.midpoint(&b.position),
                    NodeKind::PoiMidpoint,
                    self.config.poi_midpoint_weight_factor,
                );
            }
        }
    }

    fn add_obstacle_nodes(&self, graph: &mut RoutingGraph, obstacles: &[Node]) -> Result<()> {
        for obstacle in obstacles {
            let offset = self.config.corner_offset(obstacle.radius);
            for &(suffix, sx, sy, sz) in &CORNERS {
                let id = corner_id(&obstacle.id, suffix);
                if graph.registry.index_of(&id).is_some() {
                    return Err(MargaError::IdConflict { id });
                }
                let position = obstacle
                    .position
                    .offset(sx * offset, sy * offset, sz * offset);
                graph.registry.add_node(Node::corner(id, position));
            }
        }

        for (i, a) in obstacles.iter().enumerate() {
            for b in &obstacles[i + 1..] {
                self.add_midpoint(
                    graph,
                    format!("{OBSTACLE_MIDPOINT_PREFIX}{}_{}", a.id, b.id),
                    a.position.midpoint(&b.position),
                    NodeKind::ObstacleMidpoint,
                    self.config.obstacle_midpoint_weight_factor,
                );
            }
        }

        Ok(())
    }

    fn add_midpoint(
        &self,
        graph: &mut RoutingGraph,
        id: String,
        position: Point3,
        kind: NodeKind,
        weight_factor: f64,
    ) {
        if graph.registry.index_of(&id).is_some() {
            warn!("[Graph] skipping {id}: id already registered");
            return;
        }
        if let Some(existing) = graph
            .registry
            .find_synthesized_at(position, self.config.dedup_tolerance)
        {
            debug!("[Graph] skipping {id}: position taken by node {existing}");
            return;
        }
        graph
            .registry
            .add_node(Node::midpoint(id, position, kind, weight_factor));
    }

    /// Mean distance over all unordered pairs of distinct nodes.
    fn average_distance(&self, nodes: &[Node]) -> f64 {
        if nodes.len() < 2 {
            return self.config.default_average_distance;
        }

        let mut total = 0.0;
        let mut pairs = 0usize;
        for (i, a) in nodes.iter().enumerate() {
            for b in &nodes[i + 1..] {
                total += a.distance(b);
                pairs += 1;
            }
        }
        total / pairs as f64
    }

    /// Distance from a point to the closest obstacle centre.
    ///
    /// Infinite when `obstacles` is empty; callers skip the proximity term
    /// in that case.
    fn nearest_obstacle_distance(point: &Point3, obstacles: &[Node]) -> f64 {
        obstacles
            .iter()
            .map(|o| point.distance(&o.position))
            .fold(f64::INFINITY, f64::min)
    }

    /// Weight every ordered pair of distinct nodes.
    ///
    /// `weight = distance * sqrt(avg_distance / mean_clearance) * preference`,
    /// where the square-root term is 1.0 without obstacles and `preference`
    /// is the larger of the two weight factors.
    fn add_weighted_edges(&self, graph: &mut RoutingGraph, obstacles: &[Node]) {
        let nodes = graph.registry.nodes();
        let clearance: Option<Vec<f64>> = (!obstacles.is_empty()).then(|| {
            nodes
                .iter()
                .map(|n| Self::nearest_obstacle_distance(&n.position, obstacles))
                .collect()
        });

        for (i, a) in nodes.iter().enumerate() {
            for (j, b) in nodes.iter().enumerate() {
                if i == j {
                    continue;
                }

                let proximity = match &clearance {
                    Some(clearance) => {
                        let mean_clearance =
                            ((clearance[i] + clearance[j]) / 2.0).max(MIN_CLEARANCE);
                        (graph.average_distance / mean_clearance).sqrt()
                    }
                    None => 1.0,
                };
                let preference = a.weight_factor.max(b.weight_factor);
                let weight = a.distance(b) * proximity * preference;

                graph.edges.add_edge(EdgeEntry::new(i, j, weight));
            }
        }
    }

    /// Drop every edge whose segment hits an obstacle's pruning box.
    fn prune_obstacle_edges(&self, graph: &mut RoutingGraph, obstacles: &[Node]) -> Result<()> {
        for obstacle in obstacles {
            let bounds = Self::obstacle_bounds(graph, &obstacle.id)?;
            graph.obstacle_boxes.push((obstacle.id.clone(), bounds));
        }

        let contact = self.config.box_contact;
        let nodes = graph.registry.nodes();
        let boxes = &graph.obstacle_boxes;
        graph.edges.retain(|edge| {
            let p1 = nodes[edge.source].position;
            let p2 = nodes[edge.dest].position;
            !boxes
                .iter()
                .any(|(_, bounds)| bounds.segment_intersects(p1, p2, contact))
        });

        Ok(())
    }

    /// Pruning box spanned by an obstacle's `_ULF` and `_LRB` corners.
    fn obstacle_bounds(graph: &RoutingGraph, obstacle_id: &str) -> Result<Bounds3> {
        let corner = |suffix: &str| {
            let id = corner_id(obstacle_id, suffix);
            graph
                .registry
                .by_id(&id)
                .map(|n| n.position)
                .ok_or_else(|| MargaError::MissingCorner {
                    obstacle: obstacle_id.to_string(),
                    corner: id,
                })
        };

        let (upper, lower) = BOX_CORNERS;
        Ok(Bounds3::from_corners(corner(upper)?, corner(lower)?))
    }

    fn build_adjacency(graph: &mut RoutingGraph) {
        let n = graph.registry.len();
        graph.adjacency.resize_with(n, Vec::new);

        for edge in graph.edges.iter() {
            graph.adjacency[edge.source].push((edge.dest, edge.weight));
        }
    }
}
