use crate::ir::Canvas;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("invalid canvas JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("canvas has no `nodes` array")]
    MissingNodes,
}

/// Decodes a `.canvas` document. Strict JSON is tried first; canvases
/// that went through hand editing sometimes carry trailing commas or
/// comments, so json5 is the fallback before giving up.
pub fn parse_canvas(input: &str) -> Result<Canvas, CanvasError> {
    let value: serde_json::Value = match serde_json::from_str(input) {
        Ok(value) => value,
        Err(strict) => match json5::from_str(input) {
            Ok(value) => value,
            Err(_) => return Err(CanvasError::Json(strict)),
        },
    };
    if value.get("nodes").and_then(|nodes| nodes.as_array()).is_none() {
        return Err(CanvasError::MissingNodes);
    }
    Ok(serde_json::from_value(value)?)
}
