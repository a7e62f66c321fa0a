pub mod axis;
pub mod placement;
pub mod routing;

use crate::config::LayoutConfig;
use crate::ir::Canvas;
use crate::theme::Theme;

pub use placement::{GridSpan, NodePlacement};
pub use routing::EdgeStub;

/// Grid-based description of one canvas: track counts per axis, every
/// node's resolved span, and every routed edge stub.
#[derive(Debug, Clone)]
pub struct Layout {
    pub columns: usize,
    pub rows: usize,
    pub nodes: Vec<NodePlacement>,
    pub stubs: Vec<EdgeStub>,
}

/// One full layout pass: build both axes, resolve every node span,
/// route every edge. Nothing is shared across passes; the occupancy
/// grid lives and dies inside `route_edges`.
pub fn compute_layout(canvas: &Canvas, theme: &Theme, config: &LayoutConfig) -> Layout {
    let x_lines =
        axis::expand_axis_values(&axis::unique_x_values(&canvas.nodes), config.cells_between);
    let y_lines =
        axis::expand_axis_values(&axis::unique_y_values(&canvas.nodes), config.cells_between);

    let nodes = canvas
        .nodes
        .iter()
        .map(|node| placement::place_node(node, &x_lines, &y_lines))
        .collect();
    let stubs = routing::route_edges(canvas, &x_lines, &y_lines, &theme.edge_color);

    Layout {
        columns: x_lines.len().saturating_sub(1),
        rows: y_lines.len().saturating_sub(1),
        nodes,
        stubs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{CanvasEdge, CanvasNode};

    fn node(id: &str, x: f64, y: f64, width: f64, height: f64) -> CanvasNode {
        CanvasNode {
            id: id.to_string(),
            kind: "text".to_string(),
            x,
            y,
            width,
            height,
            color: None,
            text: None,
            file: None,
        }
    }

    #[test]
    fn single_node_yields_minimal_grid() {
        let canvas = Canvas {
            nodes: vec![node("a", 0.0, 0.0, 100.0, 100.0)],
            edges: Vec::new(),
        };
        let layout = compute_layout(&canvas, &Theme::canvas_default(), &LayoutConfig::default());
        // Two boundary lines per axis, no midpoints to expand.
        assert_eq!(layout.columns, 1);
        assert_eq!(layout.rows, 1);
        assert_eq!(layout.nodes.len(), 1);
        let span = layout.nodes[0].span;
        assert_eq!((span.row, span.row_span, span.col, span.col_span), (1, 1, 1, 1));
        assert!(layout.stubs.is_empty());
    }

    #[test]
    fn empty_canvas_yields_empty_layout() {
        let canvas = Canvas::default();
        let layout = compute_layout(&canvas, &Theme::canvas_default(), &LayoutConfig::default());
        assert_eq!(layout.columns, 0);
        assert_eq!(layout.rows, 0);
        assert!(layout.nodes.is_empty());
        assert!(layout.stubs.is_empty());
    }

    #[test]
    fn track_counts_are_line_counts_minus_one() {
        let canvas = Canvas {
            nodes: vec![
                node("a", 0.0, 0.0, 100.0, 100.0),
                node("b", 300.0, 0.0, 100.0, 100.0),
            ],
            edges: vec![CanvasEdge {
                id: "e".to_string(),
                from_node: "a".to_string(),
                to_node: "b".to_string(),
                color: None,
            }],
        };
        let layout = compute_layout(&canvas, &Theme::canvas_default(), &LayoutConfig::default());
        // x boundaries 0/100/300/400 -> 4 + 3 gaps * 5 inserted = 19 lines.
        assert_eq!(layout.columns, 18);
        // y boundaries 0/100 -> 2 + 5 inserted = 7 lines.
        assert_eq!(layout.rows, 6);
        assert_eq!(layout.stubs.len(), 1);
    }
}
