use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Grid lines inserted between each pair of adjacent node
    /// boundaries. This is the routing headroom: with zero, touching
    /// nodes leave no free cell for edge stubs.
    pub cells_between: usize,
    pub min_cell_px: f32,
    pub gap_px: f32,
    pub max_width_px: f32,
    pub node_padding_px: f32,
    pub node_radius_px: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cells_between: 5,
            min_cell_px: 8.0,
            gap_px: 2.0,
            max_width_px: 1200.0,
            node_padding_px: 15.0,
            node_radius_px: 8.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Canvas View".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<ThemeOverrides>,
    layout: Option<LayoutOverrides>,
    render: Option<RenderOverrides>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeOverrides {
    font_family: Option<String>,
    grid_background: Option<String>,
    node_background: Option<String>,
    text_background: Option<String>,
    file_background: Option<String>,
    link_background: Option<String>,
    group_background: Option<String>,
    edge_cell_background: Option<String>,
    edge_color: Option<String>,
    edge_stroke_width: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutOverrides {
    cells_between: Option<usize>,
    min_cell_px: Option<f32>,
    gap_px: Option<f32>,
    max_width_px: Option<f32>,
    node_padding_px: Option<f32>,
    node_radius_px: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderOverrides {
    title: Option<String>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = match serde_json::from_str(&contents) {
        Ok(parsed) => parsed,
        Err(strict) => match json5::from_str(&contents) {
            Ok(parsed) => parsed,
            Err(_) => return Err(strict.into()),
        },
    };

    if let Some(vars) = parsed.theme {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.grid_background {
            config.theme.grid_background = v;
        }
        if let Some(v) = vars.node_background {
            config.theme.node_background = v;
        }
        if let Some(v) = vars.text_background {
            config.theme.text_background = v;
        }
        if let Some(v) = vars.file_background {
            config.theme.file_background = v;
        }
        if let Some(v) = vars.link_background {
            config.theme.link_background = v;
        }
        if let Some(v) = vars.group_background {
            config.theme.group_background = v;
        }
        if let Some(v) = vars.edge_cell_background {
            config.theme.edge_cell_background = v;
        }
        if let Some(v) = vars.edge_color {
            config.theme.edge_color = v;
        }
        if let Some(v) = vars.edge_stroke_width {
            config.theme.edge_stroke_width = v;
        }
    }

    if let Some(vars) = parsed.layout {
        if let Some(v) = vars.cells_between {
            config.layout.cells_between = v;
        }
        if let Some(v) = vars.min_cell_px {
            config.layout.min_cell_px = v;
        }
        if let Some(v) = vars.gap_px {
            config.layout.gap_px = v;
        }
        if let Some(v) = vars.max_width_px {
            config.layout.max_width_px = v;
        }
        if let Some(v) = vars.node_padding_px {
            config.layout.node_padding_px = v;
        }
        if let Some(v) = vars.node_radius_px {
            config.layout.node_radius_px = v;
        }
    }

    if let Some(vars) = parsed.render {
        if let Some(v) = vars.title {
            config.render.title = v;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stylesheet_constants() {
        let config = Config::default();
        assert_eq!(config.layout.cells_between, 5);
        assert_eq!(config.layout.min_cell_px, 8.0);
        assert_eq!(config.layout.max_width_px, 1200.0);
        assert_eq!(config.theme.edge_color, "#666");
        assert_eq!(config.render.title, "Canvas View");
    }

    #[test]
    fn overrides_apply_field_by_field() {
        let dir = std::env::temp_dir().join("canvas2html-config-test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("config.json");
        std::fs::write(
            &path,
            r##"{"layout": {"cellsBetween": 3}, "theme": {"edgeColor": "#123456"}, "render": {"title": "My Board"}}"##,
        )
        .expect("write config");

        let config = load_config(Some(&path)).expect("load failed");
        assert_eq!(config.layout.cells_between, 3);
        assert_eq!(config.theme.edge_color, "#123456");
        assert_eq!(config.render.title, "My Board");
        // Untouched fields keep their defaults.
        assert_eq!(config.layout.min_cell_px, 8.0);
        assert_eq!(config.theme.node_background, "#f5f5f5");
    }

    #[test]
    fn missing_path_returns_defaults() {
        let config = load_config(None).expect("load failed");
        assert_eq!(config.layout.cells_between, 5);
    }
}
