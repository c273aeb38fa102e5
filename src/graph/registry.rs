//! Dense node storage with an id index.

use std::collections::HashMap;

use crate::core::Point3;

use super::node::Node;

/// Every routable node of one graph build.
///
/// Nodes live in a dense vector; the id map resolves string ids to
/// indices so the edge table and search work on plain `usize`s.
#[derive(Clone, Debug, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl NodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node by id and return its index.
    ///
    /// Re-adding an existing id replaces the stored node and keeps its index.
    pub fn add_node(&mut self, node: Node) -> usize {
        if let Some(&idx) = self.index.get(&node.id) {
            self.nodes[idx] = node;
            return idx;
        }

        let idx = self.nodes.len();
        self.index.insert(node.id.clone(), idx);
        self.nodes.push(node);
        idx
    }

    /// Node at an index.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx)
    }

    /// Index of the node with the given id.
    #[inline]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Node with the given id.
    pub fn by_id(&self, id: &str) -> Option<&Node> {
        self.index_of(id).and_then(|idx| self.nodes.get(idx))
    }

    /// First synthesized node occupying `position`.
    pub fn find_synthesized_at(&self, position: Point3, tolerance: f64) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| n.is_synthesized() && n.position.coincides(&position, tolerance))
    }

    /// All nodes in insertion order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterate over nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every node, keeping allocations.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;

    #[test]
    fn test_add_and_lookup() {
        let mut registry = NodeRegistry::new();
        let a = registry.add_node(Node::point_of_interest("A", Point3::ZERO));
        let b = registry.add_node(Node::point_of_interest("B", Point3::new(1.0, 0.0, 0.0)));

        assert_eq!((a, b), (0, 1));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.index_of("B"), Some(1));
        assert_eq!(registry.by_id("A").map(|n| n.position), Some(Point3::ZERO));
        assert!(registry.by_id("C").is_none());
    }

    #[test]
    fn test_readd_overwrites_in_place() {
        let mut registry = NodeRegistry::new();
        registry.add_node(Node::point_of_interest("A", Point3::ZERO));
        registry.add_node(Node::point_of_interest("B", Point3::ZERO));

        let moved = Point3::new(5.0, 5.0, 5.0);
        let idx = registry.add_node(Node::point_of_interest("A", moved));

        assert_eq!(idx, 0);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.nodes()[0].position, moved);
    }

    #[test]
    fn test_find_synthesized_ignores_user_nodes() {
        let mut registry = NodeRegistry::new();
        let p = Point3::new(1.0, 2.0, 3.0);
        registry.add_node(Node::point_of_interest("A", p));
        assert!(registry.find_synthesized_at(p, 0.0).is_none());

        registry.add_node(Node::midpoint("m", p, NodeKind::PoiMidpoint, 0.9));
        assert_eq!(registry.find_synthesized_at(p, 0.0), Some(1));
    }

    #[test]
    fn test_clear() {
        let mut registry = NodeRegistry::new();
        registry.add_node(Node::point_of_interest("A", Point3::ZERO));
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.index_of("A").is_none());
    }
}
