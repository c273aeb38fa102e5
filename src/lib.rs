//! # Marga: Collision-Aware Routes Between Points of Interest
//!
//! Plans travel paths for a tracked agent (a robot or a camera rig) moving
//! between user-placed points of interest, steering clear of user-placed
//! obstacles. The host application owns rendering, input and persistence;
//! this crate only turns positions into routes.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::Pathfinder;
//! use marga::core::Point3;
//!
//! let mut pathfinder = Pathfinder::default();
//! pathfinder.add_point_of_interest_at("dock", Point3::new(0.0, 0.0, 0.0));
//! pathfinder.add_point_of_interest_at("shelf", Point3::new(2000.0, 0.0, 0.0));
//! pathfinder.add_point_of_interest_at("table", Point3::new(1000.0, 0.0, 1500.0));
//! pathfinder.add_obstacle_at("crate", Point3::new(1000.0, 0.0, 0.0), 100.0);
//!
//! let path = pathfinder.compute_shortest_path("dock", "shelf").unwrap();
//! for node in &path.nodes {
//!     println!("{} at ({:.0}, {:.0}, {:.0})", node.id, node.position.x, node.position.y, node.position.z);
//! }
//! ```
//!
//! ## Coordinate Frame
//!
//! Coordinates are in the host's local space, typically millimetres:
//! - **X**: left (-) / right (+)
//! - **Y**: lower (-) / upper (+)
//! - **Z**: back (-) / front (+)
//!
//! ## Architecture
//!
//! - [`core`]: geometry primitives (`Point3`, `Bounds3`, interval overlap)
//! - [`graph`]: node registry, edge table, graph builder, Dijkstra
//! - [`pathfinder`]: the [`Pathfinder`] facade
//! - [`config`]: YAML configuration
//! - [`io`]: SVG debug export
//!
//! ## Data Flow
//!
//! ```text
//!   add/remove/update POIs and obstacles
//!                  │
//!                  ▼
//!        ┌───────────────────┐
//!        │    Pathfinder     │  compute_shortest_path(start, end)
//!        └─────────┬─────────┘
//!                  │ rebuild
//!                  ▼
//!        ┌───────────────────┐
//!        │   GraphBuilder    │  midpoints, corners, weights, pruning
//!        └─────────┬─────────┘
//!                  │ adjacency
//!                  ▼
//!        ┌───────────────────┐
//!        │     Dijkstra      │
//!        └─────────┬─────────┘
//!                  │ node indices
//!                  ▼
//!        PathResult { nodes, edges, cost, length }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod graph;
pub mod io;
pub mod pathfinder;

pub use config::{ConfigLoadError, MargaConfig};
pub use error::{MargaError, Result};
pub use graph::{Edge, GraphConfig, Node, NodeKind, RoutingGraph};
pub use pathfinder::{PathResult, Pathfinder};
