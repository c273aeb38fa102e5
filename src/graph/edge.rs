//! Weighted directed edges and the table that stores them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A directed edge between two registry indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeEntry {
    /// Source node index.
    pub source: usize,
    /// Destination node index.
    pub dest: usize,
    /// Traversal cost (non-negative).
    pub weight: f64,
}

impl EdgeEntry {
    /// Create a new edge entry.
    #[inline]
    pub fn new(source: usize, dest: usize, weight: f64) -> Self {
        Self {
            source,
            dest,
            weight,
        }
    }
}

/// A directed edge as handed to callers, keyed by node ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// `"edge_" + source_id + "_" + dest_id`
    pub id: String,
    /// Source node id.
    pub source_id: String,
    /// Destination node id.
    pub dest_id: String,
    /// Traversal cost.
    pub weight: f64,
}

impl Edge {
    /// Create an edge, deriving its id from the endpoint ids.
    pub fn new(source_id: impl Into<String>, dest_id: impl Into<String>, weight: f64) -> Self {
        let source_id = source_id.into();
        let dest_id = dest_id.into();
        Self {
            id: edge_id(&source_id, &dest_id),
            source_id,
            dest_id,
            weight,
        }
    }
}

/// Deterministic edge id for an ordered pair of node ids.
#[inline]
pub fn edge_id(source_id: &str, dest_id: &str) -> String {
    format!("edge_{source_id}_{dest_id}")
}

/// Directed edges with O(1) lookup by ordered index pair.
///
/// Holds at most one entry per ordered pair. Iteration follows insertion
/// order, which keeps adjacency construction deterministic.
#[derive(Clone, Debug, Default)]
pub struct EdgeTable {
    edges: Vec<EdgeEntry>,
    index: HashMap<(usize, usize), usize>,
}

impl EdgeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an edge, replacing any existing entry for the same pair.
    pub fn add_edge(&mut self, entry: EdgeEntry) {
        let key = (entry.source, entry.dest);
        if let Some(&slot) = self.index.get(&key) {
            self.edges[slot] = entry;
        } else {
            self.index.insert(key, self.edges.len());
            self.edges.push(entry);
        }
    }

    /// Edge from `source` to `dest`, if present.
    #[inline]
    pub fn get_edge(&self, source: usize, dest: usize) -> Option<&EdgeEntry> {
        self.index.get(&(source, dest)).map(|&slot| &self.edges[slot])
    }

    /// Keep only the edges matching `keep`, preserving order.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&EdgeEntry) -> bool,
    {
        self.edges.retain(keep);
        self.index.clear();
        for (slot, edge) in self.edges.iter().enumerate() {
            self.index.insert((edge.source, edge.dest), slot);
        }
    }

    /// Iterate over edges in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &EdgeEntry> {
        self.edges.iter()
    }

    /// Number of directed edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Remove every edge, keeping allocations.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.index.clear();
    }
}
