//! SVG debug export of a routing graph.
//!
//! Draws a top-down view (X right, Z down the page) of obstacle boxes,
//! surviving edges, nodes coloured by kind and an optional path.

use crate::graph::RoutingGraph;
use crate::pathfinder::PathResult;

/// Export a built graph to an SVG string.
pub fn graph_to_svg(graph: &RoutingGraph, path: Option<&PathResult>) -> String {
    let (min_x, min_z, max_x, max_z) = svg_bounds(graph);

    let width = max_x - min_x;
    let height = max_z - min_z;
    let margin = 0.05 * width.max(height).max(1.0);
    let stroke = 0.004 * width.max(height).max(1.0);

    let mut svg = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.3} {:.3} {:.3} {:.3}" width="800" height="600">
  <rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" fill="white"/>
"#,
        min_x - margin,
        min_z - margin,
        width + 2.0 * margin,
        height + 2.0 * margin,
        min_x - margin,
        min_z - margin,
        width + 2.0 * margin,
        height + 2.0 * margin,
    );

    svg.push_str("  <!-- Obstacles -->\n");
    for (id, bounds) in graph.obstacle_boxes() {
        svg.push_str(&format!(
            r##"  <rect id="{}" x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" fill="#f4cccc" stroke="black" stroke-width="{:.3}"/>
"##,
            id,
            bounds.min.x,
            bounds.min.z,
            bounds.max.x - bounds.min.x,
            bounds.max.z - bounds.min.z,
            stroke
        ));
    }

    // One line per undirected pair
    svg.push_str("  <!-- Graph Edges -->\n");
    let nodes = graph.nodes();
    for edge in graph.edge_table().iter() {
        if edge.source < edge.dest {
            let p1 = nodes[edge.source].position;
            let p2 = nodes[edge.dest].position;
            svg.push_str(&format!(
                r##"  <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="#cccccc" stroke-width="{:.3}"/>
"##,
                p1.x, p1.z, p2.x, p2.z, stroke
            ));
        }
    }

    if let Some(path) = path {
        svg.push_str("  <!-- Path -->\n");
        for pair in path.nodes.windows(2) {
            let (p1, p2) = (pair[0].position, pair[1].position);
            svg.push_str(&format!(
                r#"  <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="lime" stroke-width="{:.3}"/>
"#,
                p1.x,
                p1.z,
                p2.x,
                p2.z,
                stroke * 3.0
            ));
        }
    }

    svg.push_str("  <!-- Graph Nodes -->\n");
    for node in nodes {
        let radius = stroke * if node.is_synthesized() { 2.0 } else { 3.0 };
        svg.push_str(&format!(
            r#"  <circle cx="{:.3}" cy="{:.3}" r="{:.3}" fill="{}"><title>{}</title></circle>
"#,
            node.position.x,
            node.position.z,
            radius,
            node.kind.svg_color(),
            node.id
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// X/Z extent of all nodes and obstacle boxes.
fn svg_bounds(graph: &RoutingGraph) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_z = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_z = f64::NEG_INFINITY;

    for node in graph.nodes() {
        min_x = min_x.min(node.position.x);
        min_z = min_z.min(node.position.z);
        max_x = max_x.max(node.position.x);
        max_z = max_z.max(node.position.z);
    }

    for (_, bounds) in graph.obstacle_boxes() {
        min_x = min_x.min(bounds.min.x);
        min_z = min_z.min(bounds.min.z);
        max_x = max_x.max(bounds.max.x);
        max_z = max_z.max(bounds.max.z);
    }

    if min_x.is_infinite() {
        (0.0, 0.0, 1.0, 1.0)
    } else {
        (min_x, min_z, max_x, max_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pathfinder;
    use crate::core::Point3;

    #[test]
    fn test_svg_empty_graph() {
        let svg = graph_to_svg(&RoutingGraph::new(), None);
        assert!(svg.contains("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(!svg.contains("circle"));
    }

    #[test]
    fn test_svg_export() {
        let mut pathfinder = Pathfinder::default();
        pathfinder.add_point_of_interest_at("A", Point3::new(0.0, 0.0, 0.0));
        pathfinder.add_point_of_interest_at("B", Point3::new(1000.0, 0.0, 600.0));
        pathfinder.add_obstacle_at("rock", Point3::new(500.0, 0.0, -400.0), 40.0);

        let path = pathfinder.compute_shortest_path("A", "B").unwrap();
        let svg = pathfinder.to_svg(Some(&path));

        assert!(svg.contains(r#"id="rock""#));
        assert!(svg.contains("<title>A</title>"));
        assert!(svg.contains("<title>rock_ULF</title>"));
        assert!(svg.contains("lime"));
        assert!(svg.contains("#cccccc"));
    }

    #[test]
    fn test_svg_one_element_per_line() {
        let mut pathfinder = Pathfinder::default();
        pathfinder.add_point_of_interest_at("A", Point3::new(0.0, 0.0, 0.0));
        pathfinder.add_point_of_interest_at("B", Point3::new(400.0, 0.0, 300.0));
        pathfinder.add_obstacle_at("rock", Point3::new(200.0, 0.0, -500.0), 20.0);
        let graph = pathfinder.rebuild().unwrap();
        let svg = graph_to_svg(graph, None);

        let circles = svg
            .lines()
            .filter(|line| line.trim_start().starts_with("<circle"))
            .count();
        assert_eq!(circles, graph.node_count());

        let boxes = svg
            .lines()
            .filter(|line| line.trim_start().starts_with("<rect id="))
            .count();
        assert_eq!(boxes, 1);
    }
}
