//! Grid axis construction.
//!
//! Each axis starts from the distinct node boundaries (left/right or
//! top/bottom edges), then gets subdivided so edges have free cells to
//! route through even when nodes touch.

use crate::ir::CanvasNode;

/// Sorted distinct x boundaries (left and right edge) of all nodes.
pub fn unique_x_values(nodes: &[CanvasNode]) -> Vec<f64> {
    unique_boundaries(nodes.iter().map(|node| (node.x, node.x + node.width)))
}

/// Sorted distinct y boundaries (top and bottom edge) of all nodes.
pub fn unique_y_values(nodes: &[CanvasNode]) -> Vec<f64> {
    unique_boundaries(nodes.iter().map(|node| (node.y, node.y + node.height)))
}

fn unique_boundaries(extents: impl Iterator<Item = (f64, f64)>) -> Vec<f64> {
    let mut values: Vec<f64> = Vec::new();
    for (start, end) in extents {
        values.push(start);
        values.push(end);
    }
    values.sort_by(f64::total_cmp);
    // Nodes sharing a boundary must land on the same grid line so they
    // render flush.
    values.dedup();
    values
}

/// Inserts `cells_between` evenly spaced values strictly between each
/// adjacent pair. Original boundaries pass through verbatim; the
/// placement resolver depends on finding them unchanged.
pub fn expand_axis_values(values: &[f64], cells_between: usize) -> Vec<f64> {
    let mut expanded =
        Vec::with_capacity(values.len() + values.len().saturating_sub(1) * cells_between);
    for (i, &current) in values.iter().enumerate() {
        expanded.push(current);
        if let Some(&next) = values.get(i + 1) {
            let step = (next - current) / (cells_between as f64 + 1.0);
            for j in 1..=cells_between {
                expanded.push(current + step * j as f64);
            }
        }
    }
    expanded
}

/// First grid line at or beyond `value`. Node boundaries are inserted
/// into the axis before expansion, so for any node boundary this lands
/// on its exact line (no floating-point nudging needed).
pub(crate) fn line_index(lines: &[f64], value: f64) -> usize {
    lines
        .iter()
        .position(|&line| line >= value)
        .unwrap_or(lines.len())
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn boundaries_are_sorted_and_distinct() {
        let nodes = vec![
            node("a", 100.0, 0.0, 50.0, 50.0),
            node("b", 0.0, 0.0, 100.0, 80.0),
        ];
        // b's right edge and a's left edge coincide at 100.
        assert_eq!(unique_x_values(&nodes), vec![0.0, 100.0, 150.0]);
        assert_eq!(unique_y_values(&nodes), vec![0.0, 50.0, 80.0]);
    }

    #[test]
    fn single_node_collapses_to_two_values() {
        let nodes = vec![node("a", 10.0, 20.0, 30.0, 40.0)];
        assert_eq!(unique_x_values(&nodes), vec![10.0, 40.0]);
        assert_eq!(unique_y_values(&nodes), vec![20.0, 60.0]);
    }

    #[test]
    fn expansion_inserts_exact_midpoints() {
        let expanded = expand_axis_values(&[0.0, 60.0], 5);
        assert_eq!(expanded, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
    }

    #[test]
    fn expansion_preserves_originals_and_is_monotonic() {
        let base = vec![0.0, 70.0, 100.0];
        let expanded = expand_axis_values(&base, 5);
        assert_eq!(expanded.len(), 3 + 2 * 5);
        assert_eq!(expanded[0], 0.0);
        assert_eq!(expanded[6], 70.0);
        assert_eq!(expanded[12], 100.0);
        for pair in expanded.windows(2) {
            assert!(pair[0] < pair[1], "not strictly increasing: {pair:?}");
        }
    }

    #[test]
    fn single_value_returns_unexpanded() {
        assert_eq!(expand_axis_values(&[42.0], 5), vec![42.0]);
        assert_eq!(expand_axis_values(&[], 5), Vec::<f64>::new());
    }

    #[test]
    fn boundaries_survive_expansion_verbatim() {
        let nodes = vec![
            node("a", 0.0, 0.0, 33.3, 10.0),
            node("b", 100.1, 0.0, 50.0, 10.0),
        ];
        let base = unique_x_values(&nodes);
        let expanded = expand_axis_values(&base, 5);
        for boundary in base {
            assert_eq!(expanded[line_index(&expanded, boundary)], boundary);
        }
    }
}
