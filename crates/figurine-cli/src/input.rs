//! Shared store loading for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use figurine_anim::{FileStore, FrameStore};

/// Opens the frame store a command operates on.
///
/// `frames_path` seeds the read-only authoritative tier; `data_dir`
/// holds the mutable overlay. Either may be absent: no frames file
/// means an empty authoritative tier, and the overlay directory is
/// created on first write.
pub fn open_store(
    frames_path: Option<&Path>,
    data_dir: &Path,
) -> Result<FrameStore<FileStore>> {
    let authoritative = match frames_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read frames file {}", path.display()))?,
        None => String::new(),
    };
    Ok(FrameStore::with_authoritative_json(
        FileStore::new(data_dir),
        &authoritative,
    ))
}

/// Parses a `1,2,3,2` style playback sequence. Whitespace around the
/// numbers is tolerated; anything non-numeric is rejected rather than
/// skipped.
pub fn parse_sequence(raw: &str) -> Result<Vec<i32>> {
    raw.split(',')
        .map(|part| {
            let trimmed = part.trim();
            trimmed
                .parse::<i32>()
                .with_context(|| format!("invalid frame number `{trimmed}` in sequence"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_sequence_with_spaces() {
        assert_eq!(parse_sequence("1, 2,3 , 2").unwrap(), vec![1, 2, 3, 2]);
    }

    #[test]
    fn rejects_non_numeric_entries() {
        assert!(parse_sequence("1,two,3").is_err());
        assert!(parse_sequence("").is_err());
    }
}
