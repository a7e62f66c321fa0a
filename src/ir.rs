use serde::Deserialize;

/// One side of a node. Routing geometry and stub rendering match on
/// this exhaustively so every side gets identical treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Retry order when the preferred side has no free cell. The order
    /// is part of the observable routing outcome, so keep it fixed.
    pub const FALLBACK_ORDER: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];
}

/// One box on the canvas. Coordinates are absolute and continuous;
/// `kind` is free-form ("text" and "file" get special content handling,
/// everything else renders as a generic placeholder).
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
}

/// A directed connection between two nodes, by id. Endpoints that
/// resolve to no node are dropped during routing, never fabricated.
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasEdge {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "fromNode")]
    pub from_node: String,
    #[serde(rename = "toNode")]
    pub to_node: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// The decoded input diagram. Node and edge order is input order; the
/// canvas is read-only once layout starts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Canvas {
    pub nodes: Vec<CanvasNode>,
    #[serde(default)]
    pub edges: Vec<CanvasEdge>,
}

impl Canvas {
    pub fn node(&self, id: &str) -> Option<&CanvasNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}
