use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub grid_background: String,
    pub node_background: String,
    pub text_background: String,
    pub file_background: String,
    pub link_background: String,
    pub group_background: String,
    pub edge_cell_background: String,
    pub edge_color: String,
    pub edge_stroke_width: f32,
}

impl Theme {
    pub fn canvas_default() -> Self {
        Self {
            font_family: "system-ui, -apple-system, sans-serif".to_string(),
            grid_background: "#eee".to_string(),
            node_background: "#f5f5f5".to_string(),
            text_background: "#e3f2fd".to_string(),
            file_background: "#f3e5f5".to_string(),
            link_background: "#e8f5e9".to_string(),
            group_background: "#fff3e0".to_string(),
            edge_cell_background: "white".to_string(),
            edge_color: "#666".to_string(),
            edge_stroke_width: 2.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::canvas_default()
    }
}
