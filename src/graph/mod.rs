//! Routing graph construction and search.
//!
//! Every query rebuilds the graph from the current points of interest and
//! obstacles:
//!
//! 1. **Node synthesis**: points of interest, midpoints between pairs of
//!    them, eight corners around each obstacle, midpoints between obstacles
//! 2. **Weighting**: every ordered node pair, scaled up near obstacles
//! 3. **Pruning**: edges whose segment hits an obstacle box are dropped
//! 4. **Search**: Dijkstra over the surviving adjacency
//!
//! # Example
//!
//! ```rust
//! use marga::core::Point3;
//! use marga::graph::{GraphBuilder, GraphConfig, Node};
//!
//! let config = GraphConfig::default();
//! let pois = [
//!     Node::point_of_interest("dock", Point3::new(0.0, 0.0, 0.0)),
//!     Node::point_of_interest("shelf", Point3::new(1000.0, 0.0, 0.0)),
//! ];
//!
//! let graph = GraphBuilder::new(&config).build(&pois, &[]).unwrap();
//! let result = graph.shortest_path("dock", "shelf").unwrap();
//! assert_eq!(result.cost, 1000.0);
//! ```

pub mod builder;
pub mod config;
pub mod dijkstra;
pub mod edge;
pub mod node;
pub mod registry;
pub mod routing;

pub use builder::{GraphBuilder, corner_id, is_reserved_id};
pub use config::GraphConfig;
pub use dijkstra::{Adjacency, DijkstraResult, DijkstraState, dijkstra, dijkstra_distances};
pub use edge::{Edge, EdgeEntry, EdgeTable, edge_id};
pub use node::{Node, NodeKind};
pub use registry::NodeRegistry;
pub use routing::RoutingGraph;
