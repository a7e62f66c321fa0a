//! Edge routing over the occupancy grid.
//!
//! Each edge becomes a single stub cell immediately outside its
//! *source* node; the target node's sides are never searched. That
//! asymmetry is deliberate (a one-ended stub representation of the
//! connection), not something to correct here.
//!
//! Every failure mode degrades to "this edge is not drawn": missing
//! endpoints and exhausted candidate cells drop the edge silently.

use crate::ir::{Canvas, CanvasNode, Direction};

use super::placement::{GridSpan, resolve_span};

/// Occupancy matrix for one layout pass. Built fresh per canvas,
/// mutated only by the router, discarded after assembly.
#[derive(Debug)]
pub struct OccupancyGrid {
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![false; cols * rows],
        }
    }

    fn in_bounds(&self, col: isize, row: isize) -> bool {
        col >= 0 && (col as usize) < self.cols && row >= 0 && (row as usize) < self.rows
    }

    fn is_free(&self, col: usize, row: usize) -> bool {
        !self.cells[row * self.cols + col]
    }

    fn reserve(&mut self, col: usize, row: usize) {
        self.cells[row * self.cols + col] = true;
    }
}

/// Routed placement for one edge: the reserved cell plus the connector
/// mark drawn inside it.
#[derive(Debug, Clone)]
pub struct EdgeStub {
    pub col: usize,
    pub row: usize,
    pub direction: Direction,
    pub color: String,
}

/// Side of `from` facing `to`, by dominant axis of the origin delta.
/// Strict `>` means a tie resolves to the vertical branch.
pub fn preferred_direction(from: &CanvasNode, to: &CanvasNode) -> Direction {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::East
        } else {
            Direction::West
        }
    } else if dy > 0.0 {
        Direction::South
    } else {
        Direction::North
    }
}

/// Candidate cells one step outside the span on the given side, middle
/// candidate first so stubs center on wide or tall nodes. Coordinates
/// may fall off the grid; the scan bounds-checks.
fn side_cells(span: &GridSpan, direction: Direction) -> Vec<(isize, isize)> {
    let col_start = span.col as isize - 1;
    let col_end = col_start + span.col_span as isize;
    let row_start = span.row as isize - 1;
    let row_end = row_start + span.row_span as isize;

    let cells: Vec<(isize, isize)> = match direction {
        Direction::North => (col_start..col_end).map(|col| (col, row_start - 1)).collect(),
        Direction::South => (col_start..col_end).map(|col| (col, row_end)).collect(),
        Direction::East => (row_start..row_end).map(|row| (col_end, row)).collect(),
        Direction::West => (row_start..row_end).map(|row| (col_start - 1, row)).collect(),
    };
    order_from_middle(cells)
}

fn order_from_middle(cells: Vec<(isize, isize)>) -> Vec<(isize, isize)> {
    if cells.len() <= 1 {
        return cells;
    }
    let mid = cells.len() / 2;
    let mut ordered = Vec::with_capacity(cells.len());
    ordered.push(cells[mid]);
    ordered.extend(cells[..mid].iter().rev().copied());
    ordered.extend(cells[mid + 1..].iter().copied());
    ordered
}

fn find_free_cell(
    grid: &OccupancyGrid,
    span: &GridSpan,
    direction: Direction,
) -> Option<(usize, usize)> {
    side_cells(span, direction).into_iter().find_map(|(col, row)| {
        if grid.in_bounds(col, row) && grid.is_free(col as usize, row as usize) {
            Some((col as usize, row as usize))
        } else {
            None
        }
    })
}

/// Routes every edge in input order. Earlier edges claim contested
/// cells; once a cell is reserved no later edge gets it.
pub fn route_edges(
    canvas: &Canvas,
    x_lines: &[f64],
    y_lines: &[f64],
    default_color: &str,
) -> Vec<EdgeStub> {
    let cols = x_lines.len().saturating_sub(1);
    let rows = y_lines.len().saturating_sub(1);
    let mut grid = OccupancyGrid::new(cols, rows);
    let mut stubs = Vec::new();

    for edge in &canvas.edges {
        let Some(from) = canvas.node(&edge.from_node) else {
            continue;
        };
        let Some(to) = canvas.node(&edge.to_node) else {
            continue;
        };

        let span = resolve_span(from, x_lines, y_lines);
        let mut direction = preferred_direction(from, to);
        let mut cell = find_free_cell(&grid, &span, direction);
        if cell.is_none() {
            for fallback in Direction::FALLBACK_ORDER {
                if fallback == direction {
                    continue;
                }
                if let Some(found) = find_free_cell(&grid, &span, fallback) {
                    direction = fallback;
                    cell = Some(found);
                    break;
                }
            }
        }

        let Some((col, row)) = cell else {
            continue;
        };
        grid.reserve(col, row);
        stubs.push(EdgeStub {
            col,
            row,
            direction,
            color: edge
                .color
                .clone()
                .unwrap_or_else(|| default_color.to_string()),
        });
    }

    stubs
}
