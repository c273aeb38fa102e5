//! Export helpers.
//!
//! - [`svg`]: top-down SVG debug view of a routing graph and path

pub mod svg;

pub use svg::graph_to_svg;
