//! Dijkstra's shortest path algorithm over the routing adjacency.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;

/// Adjacency list: `adjacency[i] = [(neighbor_idx, weight), ...]`
pub type Adjacency = Vec<Vec<(usize, f64)>>;

/// State for the priority queue.
#[derive(Clone, Copy, Debug)]
pub struct DijkstraState {
    /// Tentative path cost.
    pub cost: f64,
    /// Node index.
    pub node: usize,
}

impl PartialEq for DijkstraState {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraState {}

impl Ord for DijkstraState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap; equal costs pop the lower index first
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for DijkstraState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of a Dijkstra search.
#[derive(Clone, Debug, PartialEq)]
pub struct DijkstraResult {
    /// Node indices from start to goal.
    pub path: Vec<usize>,
    /// Sum of edge weights along the path.
    pub cost: f64,
}

/// Find the cheapest path from `start` to `goal`.
///
/// Weights must be non-negative. Predecessors only change on strict
/// improvement, so among equal-cost routes the first one discovered wins.
///
/// Returns `None` for an empty graph, out-of-range indices, unreachable
/// goals, and `start == goal` (the graph has no self-loops).
pub fn dijkstra(
    adjacency: &[Vec<(usize, f64)>],
    start: usize,
    goal: usize,
) -> Option<DijkstraResult> {
    let n = adjacency.len();

    if n == 0 || start >= n || goal >= n || start == goal {
        return None;
    }

    let mut dist: Vec<f64> = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    dist[start] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(DijkstraState {
        cost: 0.0,
        node: start,
    });

    let mut expanded = 0usize;
    while let Some(DijkstraState { cost, node }) = heap.pop() {
        // Stale entry
        if cost > dist[node] {
            continue;
        }

        if node == goal {
            break;
        }
        expanded += 1;

        for &(neighbor, weight) in &adjacency[node] {
            let new_dist = cost + weight;
            if new_dist < dist[neighbor] {
                dist[neighbor] = new_dist;
                prev[neighbor] = Some(node);
                heap.push(DijkstraState {
                    cost: new_dist,
                    node: neighbor,
                });
            }
        }
    }

    trace!(
        "[Dijkstra] start={} goal={} expanded={} cost={}",
        start, goal, expanded, dist[goal]
    );

    prev[goal]?;

    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = prev[current]?;
        path.push(current);
    }
    path.reverse();

    Some(DijkstraResult {
        path,
        cost: dist[goal],
    })
}

/// Distances from `source` to every node (`f64::INFINITY` if unreachable).
pub fn dijkstra_distances(adjacency: &[Vec<(usize, f64)>], source: usize) -> Vec<f64> {
    let n = adjacency.len();
    let mut dist: Vec<f64> = vec![f64::INFINITY; n];

    if source >= n {
        return dist;
    }
    dist[source] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(DijkstraState {
        cost: 0.0,
        node: source,
    });

    while let Some(DijkstraState { cost, node }) = heap.pop() {
        if cost > dist[node] {
            continue;
        }

        for &(neighbor, weight) in &adjacency[node] {
            let new_dist = cost + weight;
            if new_dist < dist[neighbor] {
                dist[neighbor] = new_dist;
                heap.push(DijkstraState {
                    cost: new_dist,
                    node: neighbor,
                });
            }
        }
    }

    dist
}
