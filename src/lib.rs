#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod parser;
pub mod render;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, RenderConfig, load_config};
pub use layout::{Layout, compute_layout};
pub use parser::{CanvasError, parse_canvas};
pub use render::{render_html, write_output};
pub use theme::Theme;
