use crate::config::{LayoutConfig, RenderConfig};
use crate::ir::Direction;
use crate::layout::{EdgeStub, Layout, NodePlacement};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

/// Assembles one self-contained HTML document from a computed layout.
/// Pure templating: every placement decision already happened in the
/// layout pass.
pub fn render_html(
    layout: &Layout,
    theme: &Theme,
    config: &LayoutConfig,
    render: &RenderConfig,
) -> String {
    let grid_template_rows = format!(
        "repeat({}, minmax({}px, auto))",
        layout.rows, config.min_cell_px
    );
    let grid_template_columns = format!(
        "repeat({}, minmax({}px, auto))",
        layout.columns, config.min_cell_px
    );

    let mut body = String::new();
    for stub in &layout.stubs {
        body.push_str(&edge_cell_html(stub, theme));
    }
    for node in &layout.nodes {
        body.push_str(&node_section_html(node));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            margin: 0;
            padding: 20px;
            font-family: {font_family};
        }}
        .canvas-grid {{
            display: grid;
            grid-template-rows: {grid_template_rows};
            grid-template-columns: {grid_template_columns};
            gap: {gap}px;
            width: 100%;
            max-width: {max_width}px;
            margin: 0 auto;
            background: {grid_background};
        }}
        .node {{
            padding: {node_padding}px;
            border-radius: {node_radius}px;
            background: {node_background};
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .edge-cell {{
            min-width: {min_cell}px;
            min-height: {min_cell}px;
            background: {edge_cell_background};
        }}
        .text {{
            background: {text_background};
        }}
        .file {{
            background: {file_background};
        }}
        .link {{
            background: {link_background};
        }}
        .group {{
            background: {group_background};
        }}
    </style>
</head>
<body>
    <div class="canvas-grid">
{body}    </div>
</body>
</html>
"#,
        title = escape_html(&render.title),
        font_family = theme.font_family,
        gap = config.gap_px,
        max_width = config.max_width_px,
        grid_background = theme.grid_background,
        node_padding = config.node_padding_px,
        node_radius = config.node_radius_px,
        node_background = theme.node_background,
        min_cell = config.min_cell_px,
        edge_cell_background = theme.edge_cell_background,
        text_background = theme.text_background,
        file_background = theme.file_background,
        link_background = theme.link_background,
        group_background = theme.group_background,
    )
}

fn node_section_html(node: &NodePlacement) -> String {
    let span = node.span;
    format!(
        "        <section class=\"node {}\" style=\"grid-row: {} / span {}; grid-column: {} / span {};\">{}</section>\n",
        escape_html(&node.kind),
        span.row,
        span.row_span,
        span.col,
        span.col_span,
        escape_html(&node.content),
    )
}

fn edge_cell_html(stub: &EdgeStub, theme: &Theme) -> String {
    format!(
        "        <div class=\"edge-cell\" style=\"grid-row: {row}; grid-column: {col};\"><svg viewBox=\"0 0 100 100\" style=\"width: 100%; height: 100%;\"><path d=\"{path}\" stroke=\"{color}\" stroke-width=\"{width}\" fill=\"none\"/></svg></div>\n",
        row = stub.row + 1,
        col = stub.col + 1,
        path = stub_path(stub.direction),
        color = escape_html(&stub.color),
        width = theme.edge_stroke_width,
    )
}

/// Connector mark for one stub, drawn in a 100x100 viewbox from the
/// cell's outer edge toward its center line.
fn stub_path(direction: Direction) -> &'static str {
    match direction {
        Direction::North => "M50 100 L50 0",
        Direction::South => "M50 0 L50 100",
        Direction::East => "M0 50 L100 50",
        Direction::West => "M100 50 L0 50",
    }
}

pub fn write_output(html: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, html)?;
        }
        None => {
            print!("{html}");
        }
    }
    Ok(())
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
