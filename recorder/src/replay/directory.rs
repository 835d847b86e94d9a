use std::path::{Path, PathBuf};
use std::fs;
use anyhow::{bail, Result, Context};

pub const RECORD_EXTENSION: &str = "jsonl";

/// Default record directory when `GAME_RECORD_DIR` is not set
pub fn default_record_directory() -> PathBuf {
    PathBuf::from("/tmp/snake_records")
}

/// Path of the record file for a single game.
///
/// The game id must be a single plain file name component so the record
/// stays inside `dir`.
pub fn record_path(dir: &Path, game_id: &str) -> Result<PathBuf> {
    let is_plain = !game_id.is_empty()
        && game_id != "."
        && game_id != ".."
        && !game_id.contains(['/', '\\'])
        && !Path::new(game_id).is_absolute();
    if !is_plain {
        bail!("Invalid game id for record file: {:?}", game_id);
    }
    Ok(dir.join(format!("{}.{}", game_id, RECORD_EXTENSION)))
}

/// Ensure the record directory exists
pub fn ensure_record_directory(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create record directory: {:?}", dir))
}

/// List record files in `dir`, sorted by file name
pub fn list_records(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {:?}", dir))? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(RECORD_EXTENSION) {
            records.push(path);
        }
    }
    records.sort();

    Ok(records)
}
