use crate::config::{Config, load_config};
use crate::layout::compute_layout;
use crate::parser::parse_canvas;
use crate::render::{render_html, write_output};
use anyhow::Result;
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "canvas2html",
    version,
    about = "Render JSON Canvas diagrams as static HTML grids"
)]
pub struct Args {
    /// Input .canvas file, a directory of .canvas files, or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file, or output directory when the input is a directory.
    /// Defaults to stdout for single inputs.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file (theme/layout overrides)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Grid lines inserted between adjacent node boundaries
    #[arg(long = "cellsBetween")]
    pub cells_between: Option<usize>,

    /// Document title
    #[arg(long = "title")]
    pub title: Option<String>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(count) = args.cells_between {
        config.layout.cells_between = count;
    }
    if let Some(title) = &args.title {
        config.render.title = title.clone();
    }

    if let Some(path) = args.input.as_deref() {
        if path != Path::new("-") && path.is_dir() {
            return convert_directory(path, args.output.as_deref(), &config);
        }
    }

    let input = read_input(args.input.as_deref())?;
    let html = convert_canvas(&input, &config)?;
    write_output(&html, args.output.as_deref())
}

pub fn convert_canvas(input: &str, config: &Config) -> Result<String> {
    let canvas = parse_canvas(input)?;
    let layout = compute_layout(&canvas, &config.theme, &config.layout);
    Ok(render_html(
        &layout,
        &config.theme,
        &config.layout,
        &config.render,
    ))
}

fn convert_directory(input_dir: &Path, output: Option<&Path>, config: &Config) -> Result<()> {
    let output_dir =
        output.ok_or_else(|| anyhow::anyhow!("Output directory required for directory input"))?;
    std::fs::create_dir_all(output_dir)?;

    let mut inputs: Vec<PathBuf> = std::fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_canvas_file(path))
        .collect();
    inputs.sort();

    for path in inputs {
        let contents = std::fs::read_to_string(&path)?;
        let html = convert_canvas(&contents, config)?;
        let out_path = output_dir.join(output_file_name(&path));
        std::fs::write(&out_path, html)?;
        eprintln!("Converted {} to {}", path.display(), out_path.display());
    }
    Ok(())
}

fn is_canvas_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == "canvas")
            .unwrap_or(false)
}

/// Output name for one canvas input: same stem, `.html` extension.
fn output_file_name(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("canvas");
    PathBuf::from(format!("{stem}.html"))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_replaces_canvas_extension() {
        assert_eq!(
            output_file_name(Path::new("data/in/board.canvas")),
            PathBuf::from("board.html")
        );
        assert_eq!(
            output_file_name(Path::new("weird.name.canvas")),
            PathBuf::from("weird.name.html")
        );
    }

    #[test]
    fn convert_canvas_end_to_end() {
        let input = r#"{
            "nodes": [
                {"id": "a", "type": "text", "x": 0, "y": 0, "width": 100, "height": 100, "text": "hi"},
                {"id": "b", "type": "text", "x": 300, "y": 0, "width": 100, "height": 100, "text": "there"}
            ],
            "edges": [{"id": "e", "fromNode": "a", "toNode": "b"}]
        }"#;
        let html = convert_canvas(input, &Config::default()).expect("convert failed");
        assert!(html.contains("canvas-grid"));
        assert!(html.contains("hi"));
        assert!(html.contains("there"));
        assert!(html.contains("edge-cell"));
    }
}
