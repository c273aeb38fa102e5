//! The routing graph produced by a rebuild.

use crate::core::Bounds3;

use super::dijkstra::{Adjacency, DijkstraResult, dijkstra, dijkstra_distances};
use super::edge::{Edge, EdgeEntry, EdgeTable};
use super::node::Node;
use super::registry::NodeRegistry;

/// Nodes, surviving edges and adjacency of one rebuild.
///
/// Everything here is rebuild-scoped: [`GraphBuilder`](super::GraphBuilder)
/// clears and repopulates it in place, so allocations carry over between
/// rebuilds but no node or edge does.
#[derive(Clone, Debug, Default)]
pub struct RoutingGraph {
    pub(super) registry: NodeRegistry,
    pub(super) edges: EdgeTable,
    pub(super) adjacency: Adjacency,
    pub(super) obstacle_boxes: Vec<(String, Bounds3)>,
    pub(super) average_distance: f64,
}

impl RoutingGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all rebuild-scoped contents.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.edges.clear();
        self.adjacency.iter_mut().for_each(Vec::clear);
        self.obstacle_boxes.clear();
        self.average_distance = 0.0;
    }

    /// All nodes in registration order.
    pub fn nodes(&self) -> &[Node] {
        self.registry.nodes()
    }

    /// Node with the given id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.registry.by_id(id)
    }

    /// Node registry.
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// Edge table (surviving edges only).
    pub fn edge_table(&self) -> &EdgeTable {
        &self.edges
    }

    /// Adjacency list indexed like [`nodes`](Self::nodes).
    pub fn adjacency(&self) -> &[Vec<(usize, f64)>] {
        let n = self.registry.len().min(self.adjacency.len());
        &self.adjacency[..n]
    }

    /// Pruning boxes keyed by obstacle id.
    pub fn obstacle_boxes(&self) -> &[(String, Bounds3)] {
        &self.obstacle_boxes
    }

    /// Mean pairwise node distance used for the proximity penalty.
    pub fn average_distance(&self) -> f64 {
        self.average_distance
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Edge between two node ids, if it survived pruning.
    pub fn get_edge(&self, source_id: &str, dest_id: &str) -> Option<Edge> {
        let source = self.registry.index_of(source_id)?;
        let dest = self.registry.index_of(dest_id)?;
        self.edges
            .get_edge(source, dest)
            .and_then(|entry| self.to_edge(entry))
    }

    /// Resolve an index-based entry into an id-based edge.
    pub fn to_edge(&self, entry: &EdgeEntry) -> Option<Edge> {
        let source = self.registry.get(entry.source)?;
        let dest = self.registry.get(entry.dest)?;
        Some(Edge::new(&source.id, &dest.id, entry.weight))
    }

    /// All surviving edges in id form.
    pub fn edges(&self) -> Vec<Edge> {
        self.edges.iter().filter_map(|e| self.to_edge(e)).collect()
    }

    /// Cheapest path between two node ids.
    pub fn shortest_path(&self, start_id: &str, end_id: &str) -> Option<DijkstraResult> {
        let start = self.registry.index_of(start_id)?;
        let end = self.registry.index_of(end_id)?;
        dijkstra(self.adjacency(), start, end)
    }

    /// Ids of nodes reachable from `source_id`, in registration order.
    ///
    /// Excludes the source itself. Empty for unknown ids.
    pub fn reachable_from(&self, source_id: &str) -> Vec<&str> {
        let Some(source) = self.registry.index_of(source_id) else {
            return Vec::new();
        };

        dijkstra_distances(self.adjacency(), source)
            .iter()
            .enumerate()
            .filter(|&(idx, dist)| idx != source && dist.is_finite())
            .filter_map(|(idx, _)| self.registry.get(idx))
            .map(|node| node.id.as_str())
            .collect()
    }
}
