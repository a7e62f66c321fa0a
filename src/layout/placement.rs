//! Maps a node's continuous rectangle onto the expanded grid axes and
//! resolves its display content.

use std::path::Path;

use crate::ir::CanvasNode;

use super::axis::line_index;

/// Grid-index rectangle for one node. `row` and `col` are 1-based grid
/// line numbers, ready for CSS `grid-row: r / span n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpan {
    pub row: usize,
    pub row_span: usize,
    pub col: usize,
    pub col_span: usize,
}

/// A node resolved into grid space: where it sits, how it is classed,
/// and what text it shows.
#[derive(Debug, Clone)]
pub struct NodePlacement {
    pub kind: String,
    pub content: String,
    pub span: GridSpan,
}

pub fn resolve_span(node: &CanvasNode, x_lines: &[f64], y_lines: &[f64]) -> GridSpan {
    let row_start = line_index(y_lines, node.y);
    let row_end = line_index(y_lines, node.y + node.height);
    let col_start = line_index(x_lines, node.x);
    let col_end = line_index(x_lines, node.x + node.width);
    GridSpan {
        row: row_start + 1,
        row_span: row_end.saturating_sub(row_start),
        col: col_start + 1,
        col_span: col_end.saturating_sub(col_start),
    }
}

/// Display text for a node: inline text for "text" nodes, the file's
/// base name for "file" nodes, a bracketed placeholder for anything
/// else.
pub fn node_content(node: &CanvasNode) -> String {
    match node.kind.as_str() {
        "text" => node.text.clone().unwrap_or_default(),
        "file" => node
            .file
            .as_deref()
            .map(file_base_name)
            .unwrap_or_default(),
        other => format!("[{other} node]"),
    }
}

fn file_base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

pub fn place_node(node: &CanvasNode, x_lines: &[f64], y_lines: &[f64]) -> NodePlacement {
    NodePlacement {
        kind: node.kind.clone(),
        content: node_content(node),
        span: resolve_span(node, x_lines, y_lines),
    }
}
