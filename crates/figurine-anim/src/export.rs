//! Deterministic JSON export of frame collections.
//!
//! Exports are meant to be diffed and checked into version control, so
//! the encoding is canonical: object keys sorted at every depth,
//! pretty-printed. Encoding the same frames always yields the same
//! bytes.

use std::thread;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::frame::Frame;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rebuilds a value with object keys in sorted order at every level.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut sorted = Map::new();
            for (key, inner) in entries {
                sorted.insert(key, sort_keys(inner));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Encodes frames as canonical pretty JSON.
pub fn export_frames(frames: &[Frame]) -> Result<String, ExportError> {
    let value = serde_json::to_value(frames)?;
    Ok(serde_json::to_string_pretty(&sort_keys(value))?)
}

/// Encodes frames to a file at `path`.
pub fn export_frames_to_file(
    frames: &[Frame],
    path: impl AsRef<std::path::Path>,
) -> Result<(), ExportError> {
    let json = export_frames(frames)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Runs the export off the calling thread and hands the outcome to
/// `on_complete`. The caller owns joining the handle; dropping it
/// leaves the export running detached.
pub fn export_frames_background<F>(frames: Vec<Frame>, on_complete: F) -> thread::JoinHandle<()>
where
    F: FnOnce(Result<String, ExportError>) + Send + 'static,
{
    thread::spawn(move || on_complete(export_frames(&frames)))
}
